//! The rooted employee tree.
//!
//! DESIGN
//! ======
//! All traversals are depth-first, children in stored order, so "first match"
//! and pre-order are well defined. Ids are unique across the tree; that is
//! checked once on construction and preserved by every mutation, because
//! mutations only move or edit existing nodes.
//!
//! ERROR HANDLING
//! ==============
//! `reparent` validates before touching anything, in a fixed order:
//! self-assignment, cycle, unknown employee, root, unknown manager. A refused
//! move leaves the tree exactly as it was.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::HashSet;

use crate::error::OrgError;
use crate::node::{EmployeeDetails, EmployeeNode, FlatEmployee};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgTree {
    root: EmployeeNode,
}

impl OrgTree {
    /// Wrap a root node, checking ids are unique.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::DuplicateId`] naming the first repeated id in pre-order.
    pub fn new(root: EmployeeNode) -> Result<Self, OrgError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = first_duplicate(&root, &mut seen) {
            return Err(OrgError::DuplicateId(duplicate.to_owned()));
        }
        Ok(Self { root })
    }

    /// Parse stored chart JSON.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::Malformed`] for invalid JSON or a shape that is not
    /// an employee tree, and [`OrgError::DuplicateId`] as in [`Self::new`].
    pub fn from_json(bytes: &[u8]) -> Result<Self, OrgError> {
        let root: EmployeeNode = serde_json::from_slice(bytes).map_err(|e| OrgError::Malformed(e.to_string()))?;
        Self::new(root)
    }

    /// # Errors
    ///
    /// Returns the serializer error (not expected for this type).
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.root)
    }

    #[must_use]
    pub fn root(&self) -> &EmployeeNode {
        &self.root
    }

    #[must_use]
    pub fn into_root(self) -> EmployeeNode {
        self.root
    }

    // --- Lookup ---

    /// # Errors
    ///
    /// Returns [`OrgError::NotFound`] if no node has `id`.
    pub fn find_node(&self, id: &str) -> Result<&EmployeeNode, OrgError> {
        find(&self.root, id).ok_or_else(|| OrgError::NotFound(id.to_owned()))
    }

    /// The direct manager of `id`; `None` for the root.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::NotFound`] if no node has `id`.
    pub fn find_parent(&self, id: &str) -> Result<Option<&EmployeeNode>, OrgError> {
        if self.root.id == id {
            return Ok(None);
        }
        parent_of(&self.root, id).map(Some).ok_or_else(|| OrgError::NotFound(id.to_owned()))
    }

    /// Ids of every ancestor of `id`, root first, direct manager last.
    /// Empty for the root.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::NotFound`] if no node has `id`.
    pub fn find_path(&self, id: &str) -> Result<Vec<String>, OrgError> {
        let mut path = Vec::new();
        if path_to(&self.root, id, &mut path) {
            Ok(path)
        } else {
            Err(OrgError::NotFound(id.to_owned()))
        }
    }

    /// Whether `candidate` is in the subtree rooted at `ancestor`. A node
    /// counts as its own descendant. `false` if `ancestor` does not exist.
    #[must_use]
    pub fn is_descendant(&self, ancestor: &str, candidate: &str) -> bool {
        find(&self.root, ancestor).is_some_and(|node| find(node, candidate).is_some())
    }

    /// Pre-order list of every employee with their manager's id.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatEmployee> {
        let mut out = Vec::new();
        flatten_into(&self.root, None, &mut out);
        out
    }

    // --- Mutation ---

    /// Check that `employee` could be moved under `new_manager`, without moving it.
    ///
    /// # Errors
    ///
    /// [`OrgError::SelfAssignment`], [`OrgError::CycleDetected`],
    /// [`OrgError::NotFound`] or [`OrgError::RootReassignment`], checked in that order.
    pub fn validate_reparent(&self, employee: &str, new_manager: &str) -> Result<(), OrgError> {
        if employee == new_manager {
            return Err(OrgError::SelfAssignment(employee.to_owned()));
        }
        if self.is_descendant(employee, new_manager) {
            return Err(OrgError::CycleDetected { employee: employee.to_owned(), manager: new_manager.to_owned() });
        }
        self.find_node(employee)?;
        if self.root.id == employee {
            return Err(OrgError::RootReassignment(employee.to_owned()));
        }
        self.find_node(new_manager)?;
        Ok(())
    }

    /// Move `employee` and their whole subtree to the end of `new_manager`'s
    /// reports.
    ///
    /// # Errors
    ///
    /// As [`Self::validate_reparent`]; the tree is unchanged on error.
    pub fn reparent(&mut self, employee: &str, new_manager: &str) -> Result<(), OrgError> {
        self.validate_reparent(employee, new_manager)?;
        let moved = detach(&mut self.root, employee).ok_or_else(|| OrgError::NotFound(employee.to_owned()))?;
        match find_mut(&mut self.root, new_manager) {
            Some(manager) => {
                manager.children.push(moved);
                Ok(())
            }
            // Validated managers lie outside the moved subtree.
            None => Err(OrgError::NotFound(new_manager.to_owned())),
        }
    }

    /// Replace the editable fields of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::NotFound`] if no node has `id`.
    pub fn update_fields(&mut self, id: &str, details: EmployeeDetails) -> Result<(), OrgError> {
        let node = find_mut(&mut self.root, id).ok_or_else(|| OrgError::NotFound(id.to_owned()))?;
        node.apply_details(details);
        Ok(())
    }
}

fn first_duplicate<'a>(node: &'a EmployeeNode, seen: &mut HashSet<&'a str>) -> Option<&'a str> {
    if !seen.insert(node.id.as_str()) {
        return Some(node.id.as_str());
    }
    node.children.iter().find_map(|child| first_duplicate(child, seen))
}

fn find<'a>(node: &'a EmployeeNode, id: &str) -> Option<&'a EmployeeNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find(child, id))
}

fn find_mut<'a>(node: &'a mut EmployeeNode, id: &str) -> Option<&'a mut EmployeeNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter_mut().find_map(|child| find_mut(child, id))
}

fn parent_of<'a>(node: &'a EmployeeNode, id: &str) -> Option<&'a EmployeeNode> {
    if node.children.iter().any(|child| child.id == id) {
        return Some(node);
    }
    node.children.iter().find_map(|child| parent_of(child, id))
}

/// Push ancestors of `id` onto `path`; returns whether `id` was found.
fn path_to(node: &EmployeeNode, id: &str, path: &mut Vec<String>) -> bool {
    if node.id == id {
        return true;
    }
    path.push(node.id.clone());
    if node.children.iter().any(|child| path_to(child, id, path)) {
        return true;
    }
    path.pop();
    false
}

fn detach(node: &mut EmployeeNode, id: &str) -> Option<EmployeeNode> {
    if let Some(index) = node.children.iter().position(|child| child.id == id) {
        return Some(node.children.remove(index));
    }
    node.children.iter_mut().find_map(|child| detach(child, id))
}

fn flatten_into(node: &EmployeeNode, parent_id: Option<&str>, out: &mut Vec<FlatEmployee>) {
    out.push(FlatEmployee::from_node(node, parent_id));
    for child in &node.children {
        flatten_into(child, Some(&node.id), out);
    }
}
