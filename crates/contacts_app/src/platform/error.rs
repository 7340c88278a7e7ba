use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contacts_engine::StoreError;
use contacts_logging::{contacts_error, contacts_warn};
use thiserror::Error;

use super::ui::render;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("contact {0} not found")]
    ContactNotFound(String),
    #[error("loading contacts failed: {0}")]
    Loader(String),
    #[error("creating contact failed: {0}")]
    Action(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ContactNotFound(_) | AppError::Store(StoreError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Loader(_) | AppError::Action(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error boundary: every failure becomes a standalone HTML error page.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            contacts_error!("{} {}", status, message);
        } else {
            contacts_warn!("{} {}", status, message);
        }
        (status, Html(render::error_page(status, &message))).into_response()
    }
}
