//! Errors from the identity and document-store collaborators.

/// Errors from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// Unknown email or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A required field was empty or malformed.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// The operation requires a signed-in user.
    #[error("not signed in")]
    NotSignedIn,
}

/// Errors from the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No document with this id in the collection.
    #[error("no document {id} in {collection}")]
    NotFound {
        collection: &'static str,
        id: String,
    },
}
