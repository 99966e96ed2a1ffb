use crate::api::ApiError;
use crate::entities::Role;
use crate::policy::Capability;
use crate::session::StorageError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PosError {
    /// Local check failed before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Api(ApiError),

    /// No session is held; the caller must go to the login view.
    #[error("session expired or missing, please log in")]
    Unauthenticated,

    #[error("role {role} may not {capability}")]
    Forbidden { role: Role, capability: Capability },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PosError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PosError::Validation(msg.into())
    }

    pub fn is_redirect_to_login(&self) -> bool {
        matches!(self, PosError::Unauthenticated)
    }
}

impl From<ApiError> for PosError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthenticated => PosError::Unauthenticated,
            other => PosError::Api(other),
        }
    }
}
