//! Employee records.
//!
//! Field names on the wire match the stored chart data
//! (`id,name,title,email,phone,department,avatar,children`, optional
//! `showAsManager`), so existing exports load unchanged.

use serde::{Deserialize, Serialize};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// One employee and, recursively, everyone reporting to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// List in the department view as a manager even without reports.
    #[serde(default, rename = "showAsManager", skip_serializing_if = "is_false")]
    pub show_as_manager: bool,
    /// Direct reports in display order.
    #[serde(default)]
    pub children: Vec<EmployeeNode>,
}

impl EmployeeNode {
    /// A leaf with only an id and name set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            avatar: None,
            show_as_manager: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<EmployeeNode>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn details(&self) -> EmployeeDetails {
        EmployeeDetails {
            name: self.name.clone(),
            title: self.title.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Replace the editable fields. Position and reports are untouched.
    pub fn apply_details(&mut self, details: EmployeeDetails) {
        self.name = details.name;
        self.title = details.title;
        self.email = details.email;
        self.phone = details.phone;
        self.department = details.department;
        self.avatar = details.avatar;
    }
}

/// The editable fields of an employee. No format checks are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// An employee without reports, plus their manager's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEmployee {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// `None` only for the root.
    pub parent_id: Option<String>,
}

impl FlatEmployee {
    #[must_use]
    pub fn from_node(node: &EmployeeNode, parent_id: Option<&str>) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            title: node.title.clone(),
            email: node.email.clone(),
            phone: node.phone.clone(),
            department: node.department.clone(),
            avatar: node.avatar.clone(),
            parent_id: parent_id.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
