use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
///
/// Permission denials reuse the `*NotFound` variants so a caller cannot tell a
/// resource it may not see from one that does not exist.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("user not found")]
    UserNotFound,
    #[error("organization not found")]
    OrganizationNotFound,
    #[error("site not found")]
    SiteNotFound,
    #[error("survey not found")]
    SurveyNotFound,
    #[error("measurement not found")]
    MeasurementNotFound,
    #[error("note not found")]
    NoteNotFound,
    #[error("image not found")]
    ImageNotFound,
    #[error("{0} not found")]
    LookupNotFound(&'static str),
    #[error("precondition failed: {0}")]
    PreconditionFailed(&'static str),
    #[error("root user does not match configuration")]
    RootUserMismatch,
    #[error("invalid organization code")]
    InvalidOrganizationCode,
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("{0} still has dependents")]
    HasDependents(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::OrganizationNotFound => "ORGANIZATION_NOT_FOUND",
            Self::SiteNotFound => "SITE_NOT_FOUND",
            Self::SurveyNotFound => "SURVEY_NOT_FOUND",
            Self::MeasurementNotFound => "MEASUREMENT_NOT_FOUND",
            Self::NoteNotFound => "NOTE_NOT_FOUND",
            Self::ImageNotFound => "IMAGE_NOT_FOUND",
            Self::LookupNotFound(_) => "LOOKUP_NOT_FOUND",
            Self::PreconditionFailed(_) => "PRECONDITION_FAILED",
            Self::RootUserMismatch => "ROOT_USER_MISMATCH",
            Self::InvalidOrganizationCode => "INVALID_ORGANIZATION_CODE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::HasDependents(_) => "HAS_DEPENDENTS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::UserNotFound
            | Self::OrganizationNotFound
            | Self::SiteNotFound
            | Self::SurveyNotFound
            | Self::MeasurementNotFound
            | Self::NoteNotFound
            | Self::ImageNotFound
            | Self::LookupNotFound(_) => StatusCode::NOT_FOUND,
            Self::PreconditionFailed(_) => StatusCode::EXPECTATION_FAILED,
            Self::InvalidOrganizationCode | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::EmailAlreadyExists | Self::HasDependents(_) => StatusCode::CONFLICT,
            Self::RootUserMismatch | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::RootUserMismatch => {
                tracing::error!(kind = "ROOT_USER_MISMATCH", "root user integrity check failed")
            }
            Self::PreconditionFailed(reason) => {
                tracing::warn!(
                    reason = *reason,
                    kind = "PRECONDITION_FAILED",
                    "precondition failed"
                )
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
