mod account;
mod appointment;
mod chat;
mod contact;
mod inquiry;
mod pages;
mod properties;

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Response, Router};
use serde::Serialize;

use crate::middleware::auth::AuthMiddleware;
use realty_service::error::ServiceError;

// Re-export route constants from core
pub use realty_core::constants::{
    APPOINTMENT_SUBMIT_PATH, CHAT_API_PATH, CONTACT_INQUIRY_PATH, CONTACT_SUBMIT_PATH,
    PROPERTIES_PATH, PROPERTY_INQUIRY_SUBMIT_PATH,
};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Generic success payload for form submissions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// ## Summary
/// Maps a service error onto an HTTP status and a JSON error body.
pub fn render_service_error(res: &mut Response, err: &ServiceError) {
    let status = match err {
        ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = ?err, "Request failed");
        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: "Internal server error".to_owned(),
        }));
    } else {
        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: err.to_string(),
        }));
    }
}

/// ## Summary
/// Extracts the client address as an INET value for inquiry tracking.
#[must_use]
pub fn client_ip(req: &salvo::Request) -> Option<ipnetwork::IpNetwork> {
    let addr = req.remote_addr();
    let ip = addr
        .as_ipv4()
        .map(|a| std::net::IpAddr::V4(*a.ip()))
        .or_else(|| addr.as_ipv6().map(|a| std::net::IpAddr::V6(*a.ip())))?;
    Some(ipnetwork::IpNetwork::from(ip))
}

/// ## Summary
/// Constructs the site router: every path in the wire contract, with the
/// attribution middleware in front.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .hoop(AuthMiddleware)
        .get(pages::home)
        .push(account::routes())
        .push(contact::routes())
        .push(appointment::routes())
        .push(pages::routes())
        .push(chat::routes())
        .push(properties::routes())
}
