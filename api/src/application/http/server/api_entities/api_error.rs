use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bmi_report_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const INVALID_JSON_DATA: &str = "Invalid JSON data";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::RecommendationNotFound(_) => ApiError::UnprocessableEntity(error.to_string()),
            CoreError::ReferenceLoad(_)
            | CoreError::TemplateRender(_)
            | CoreError::DocumentConversion(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| errors.to_string());

        ApiError::BadRequest(message)
    }
}

/// JSON body extractor that also runs `validator` rules.
///
/// A body that is missing, is not JSON, or is not a non-empty object is rejected
/// with `Invalid JSON data` before any field is looked at.
#[derive(Debug, Clone)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "failed to read request body");
            ApiError::BadRequest(INVALID_JSON_DATA.to_string())
        })?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "request body is not valid json");
            ApiError::BadRequest(INVALID_JSON_DATA.to_string())
        })?;

        match &value {
            Value::Object(fields) if !fields.is_empty() => {}
            _ => return Err(ApiError::BadRequest(INVALID_JSON_DATA.to_string())),
        }

        let payload: T = serde_json::from_value(value).map_err(|e| {
            debug!(error = %e, "request body does not match the payload shape");
            ApiError::BadRequest(INVALID_JSON_DATA.to_string())
        })?;
        payload.validate()?;

        Ok(ValidateJson(payload))
    }
}
