//! API error types and axum response conversion.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors surfaced to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be turned into a prediction request.
    #[error("{message}")]
    Validation {
        kind: &'static str,
        loc: &'static [&'static str],
        message: String,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: Vec<ErrorDetail>,
}

#[derive(Serialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: &'static str,
    loc: &'static [&'static str],
    msg: String,
}

const BODY: &[&str] = &["body"];
const AD_SPEND: &[&str] = &["body", "ad_spend"];

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let (kind, loc) = match &rejection {
            JsonRejection::JsonDataError(_) => classify_data_error(&message),
            JsonRejection::JsonSyntaxError(_) => ("json_invalid", BODY),
            JsonRejection::MissingJsonContentType(_) => ("missing_content_type", BODY),
            JsonRejection::BytesRejection(_) => ("body_unreadable", BODY),
            _ => ("invalid_body", BODY),
        };
        Self::Validation { kind, loc, message }
    }
}

/// Pin a well-formed but unusable body to the field at fault, when serde names it.
fn classify_data_error(message: &str) -> (&'static str, &'static [&'static str]) {
    if message.contains("missing field `ad_spend`") {
        ("missing", AD_SPEND)
    } else if message.contains("ad_spend") {
        ("float_parsing", AD_SPEND)
    } else {
        ("value_error", BODY)
    }
}

impl From<forecaster_core::Error> for ApiError {
    fn from(err: forecaster_core::Error) -> Self {
        match err {
            forecaster_core::Error::InvalidInput(message) => Self::Validation {
                kind: "value_error",
                loc: AD_SPEND,
                message,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { kind, loc, message } => {
                tracing::debug!(kind, %message, "rejected request");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        detail: vec![ErrorDetail {
                            kind,
                            loc,
                            msg: message,
                        }],
                    }),
                )
                    .into_response()
            }
        }
    }
}
