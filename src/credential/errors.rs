use thiserror::Error;

/// Errors raised when mutating a user's credential set.
///
/// Conversion between the stored model and the ceremony shapes is total and
/// never fails; errors exist only at the mutation boundary, where the
/// uniqueness of credential IDs within one identity is enforced.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A credential with the same ID is already registered for this identity
    #[error("Duplicate credential: {0}")]
    Duplicate(String),

    /// No credential with the given ID is registered for this identity
    #[error("Credential not found: {0}")]
    NotFound(String),
}
