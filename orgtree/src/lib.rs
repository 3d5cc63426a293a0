//! Org-tree engine: a rooted tree of employee records.
//!
//! The tree is the single source of truth. Lookups, path finding and
//! cycle-safe reparenting operate on it directly; a flat pre-order view with
//! parent ids is derived from it for search and pickers and rebuilt after
//! every mutation. Nothing here performs I/O: the host loads and persists the
//! JSON and serializes access to each chart.
//!
//! [`view::ZoomState`] is presentation state for a UI-side consumer; the tree
//! and chart never read it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`node`] | Employee records, editable details, flat entries |
//! | [`tree`] | [`OrgTree`]: lookup, path, descendant check, reparent, flatten |
//! | [`chart`] | [`OrgChart`]: tree plus its flat view, combined edits |
//! | [`search`] | Name/title search and the manager picker |
//! | [`department`] | Grouping by department |
//! | [`view`] | Zoom level state |
//! | [`error`] | [`OrgError`] |

pub mod chart;
pub mod department;
pub mod error;
pub mod node;
pub mod search;
pub mod tree;
pub mod view;

pub use chart::OrgChart;
pub use error::OrgError;
pub use tree::OrgTree;
