//! An org chart document: the tree plus its derived flat view.
//!
//! The flat view is rebuilt after every successful mutation and never edited
//! directly, so search always reflects the tree.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde::{Deserialize, Serialize};

use crate::department::{DepartmentGroup, departments};
use crate::error::OrgError;
use crate::node::{EmployeeDetails, EmployeeNode, FlatEmployee};
use crate::search::{search, search_candidates};
use crate::tree::OrgTree;

/// A combined admin edit: new details, a new manager, or both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeEdit {
    pub id: String,
    #[serde(default)]
    pub details: Option<EmployeeDetails>,
    #[serde(default)]
    pub new_manager: Option<String>,
}

/// What an edit actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EditOutcome {
    pub details_updated: bool,
    pub moved: bool,
}

impl EditOutcome {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.details_updated || self.moved
    }
}

/// Where an employee sits: the node, its manager and its ancestor path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeLocation<'a> {
    pub employee: &'a EmployeeNode,
    pub parent_id: Option<&'a str>,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgChart {
    tree: OrgTree,
    flat: Vec<FlatEmployee>,
}

impl OrgChart {
    #[must_use]
    pub fn new(tree: OrgTree) -> Self {
        let flat = tree.flatten();
        Self { tree, flat }
    }

    #[must_use]
    pub fn tree(&self) -> &OrgTree {
        &self.tree
    }

    #[must_use]
    pub fn flat(&self) -> &[FlatEmployee] {
        &self.flat
    }

    // --- Queries ---

    /// # Errors
    ///
    /// Returns [`OrgError::NotFound`] if no employee has `id`.
    pub fn locate(&self, id: &str) -> Result<EmployeeLocation<'_>, OrgError> {
        let employee = self.tree.find_node(id)?;
        let parent_id = self.tree.find_parent(id)?.map(|p| p.id.as_str());
        let path = self.tree.find_path(id)?;
        Ok(EmployeeLocation { employee, parent_id, path })
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&FlatEmployee> {
        search(&self.flat, query)
    }

    #[must_use]
    pub fn candidates<S: AsRef<str>>(&self, query: &str, exclude: &[S], exclude_root: bool) -> Vec<&FlatEmployee> {
        search_candidates(&self.flat, query, exclude, exclude_root)
    }

    #[must_use]
    pub fn departments(&self) -> Vec<DepartmentGroup> {
        departments(&self.tree)
    }

    // --- Mutation ---

    /// Move `employee` under `new_manager`. Returns `false`, changing nothing,
    /// if they already report there.
    ///
    /// # Errors
    ///
    /// As [`OrgTree::reparent`].
    pub fn reparent(&mut self, employee: &str, new_manager: &str) -> Result<bool, OrgError> {
        if self.reports_to(employee, new_manager) {
            return Ok(false);
        }
        self.tree.reparent(employee, new_manager)?;
        self.refresh();
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns [`OrgError::NotFound`] if no employee has `id`.
    pub fn update_fields(&mut self, id: &str, details: EmployeeDetails) -> Result<(), OrgError> {
        self.tree.update_fields(id, details)?;
        self.refresh();
        Ok(())
    }

    /// Apply details and manager change together. The move is validated
    /// first, so a refused edit changes nothing.
    ///
    /// # Errors
    ///
    /// [`OrgError::NotFound`] for an unknown employee, or any reparent refusal.
    pub fn apply_edit(&mut self, edit: EmployeeEdit) -> Result<EditOutcome, OrgError> {
        self.tree.find_node(&edit.id)?;
        let mut move_to = None;
        if let Some(manager) = edit.new_manager.as_deref() {
            if !self.reports_to(&edit.id, manager) {
                self.tree.validate_reparent(&edit.id, manager)?;
                move_to = Some(manager);
            }
        }

        let mut outcome = EditOutcome::default();
        if let Some(details) = edit.details {
            self.tree.update_fields(&edit.id, details)?;
            outcome.details_updated = true;
        }
        if let Some(manager) = move_to {
            self.tree.reparent(&edit.id, manager)?;
            outcome.moved = true;
        }
        if outcome.changed() {
            self.refresh();
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn into_tree(self) -> OrgTree {
        self.tree
    }

    fn reports_to(&self, employee: &str, manager: &str) -> bool {
        matches!(self.tree.find_parent(employee), Ok(Some(parent)) if parent.id == manager)
    }

    fn refresh(&mut self) {
        self.flat = self.tree.flatten();
    }
}
