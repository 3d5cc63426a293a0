/// Error returned by org-tree lookups and mutations.
///
/// Each refusal reason is its own variant so callers can tell the user
/// exactly why a move was blocked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrgError {
    #[error("employee not found: {0}")]
    NotFound(String),
    #[error("{0} cannot report to themselves")]
    SelfAssignment(String),
    #[error("{manager} reports to {employee}; moving {employee} under them would create a cycle")]
    CycleDetected { employee: String, manager: String },
    #[error("{0} is the top of the chart and cannot be given a manager")]
    RootReassignment(String),
    #[error("duplicate employee id: {0}")]
    DuplicateId(String),
    #[error("malformed org data: {0}")]
    Malformed(String),
}
