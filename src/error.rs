use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Trait for errors that can be converted to HTTP responses
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message shown to the client; the full error only goes to the log
    fn public_message(&self) -> &'static str;
}

/// Convert any HttpError into a plain-text Axum response
pub fn into_response<E: HttpError>(err: E) -> Response {
    let status = err.status_code();

    tracing::error!(
        error = %err,
        status = %status,
        "API error"
    );

    (status, err.public_message()).into_response()
}

/// Macro to implement IntoResponse for HttpError types
#[macro_export]
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                $crate::error::into_response(self)
            }
        }
    };
}
