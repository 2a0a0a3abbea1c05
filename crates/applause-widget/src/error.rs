use applause_motion::TargetId;

/// Convenience result type used across the widget.
pub type ClapResult<T> = Result<T, ClapError>;

/// Why a target handle could not be given a role.
///
/// Neither case is surfaced to users: the registry logs the handle and moves on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClapError {
    #[error("unknown role key '{0}'")]
    UnknownRole(String),

    #[error("target {0:?} carries no 'data-refkey' attribute")]
    MissingRoleAttribute(TargetId),
}
