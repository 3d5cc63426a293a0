//! Department view: employees grouped by department.
//!
//! Departments appear in the order they are first met in a pre-order walk.
//! Anyone with reports, or flagged `showAsManager`, is listed as a manager of
//! their own department together with the reports who share it; everyone
//! else is a member.

#[cfg(test)]
#[path = "department_test.rs"]
mod department_test;

use std::collections::HashMap;

use serde::Serialize;

use crate::node::{EmployeeNode, FlatEmployee};
use crate::tree::OrgTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentManager {
    #[serde(flatten)]
    pub employee: FlatEmployee,
    /// Direct reports in the same department.
    pub direct_reports: Vec<FlatEmployee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentGroup {
    pub name: String,
    pub managers: Vec<DepartmentManager>,
    pub members: Vec<FlatEmployee>,
}

#[must_use]
pub fn departments(tree: &OrgTree) -> Vec<DepartmentGroup> {
    let mut groups = Vec::new();
    let mut index = HashMap::new();
    collect(tree.root(), None, &mut groups, &mut index);
    groups
}

fn collect(
    node: &EmployeeNode,
    parent_id: Option<&str>,
    groups: &mut Vec<DepartmentGroup>,
    index: &mut HashMap<String, usize>,
) {
    let slot = *index.entry(node.department.clone()).or_insert_with(|| {
        groups.push(DepartmentGroup { name: node.department.clone(), managers: Vec::new(), members: Vec::new() });
        groups.len() - 1
    });
    let entry = FlatEmployee::from_node(node, parent_id);
    if node.children.is_empty() && !node.show_as_manager {
        groups[slot].members.push(entry);
    } else {
        let direct_reports = node
            .children
            .iter()
            .filter(|child| child.department == node.department)
            .map(|child| FlatEmployee::from_node(child, Some(&node.id)))
            .collect();
        groups[slot].managers.push(DepartmentManager { employee: entry, direct_reports });
    }
    for child in &node.children {
        collect(child, Some(&node.id), groups, index);
    }
}
