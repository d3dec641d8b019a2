//! General contact inquiry intake, with client IP capture.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};
use serde::Deserialize;
use tracing::error;

use super::{ErrorResponse, MessageResponse, client_ip, render_service_error};
use crate::db_handler::get_db_from_depot;
use crate::middleware::auth::account_id_from_depot;
use realty_service::submission::inquiry::{InquirySubmission, submit_inquiry};

/// ## Summary
/// Inquiry form payload
#[derive(Debug, Deserialize)]
pub struct InquiryFormRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub services_interested: Option<String>,
    #[serde(default)]
    pub consent_given: bool,
}

/// ## Summary
/// POST /contact/submitting/ - Stores a general inquiry
///
/// Records the client address alongside the submission when the transport
/// exposes one.
///
/// ## Errors
/// Returns HTTP 400 for missing or malformed fields
/// Returns HTTP 500 if database operations fail
#[handler]
pub async fn submit_inquiry_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let ip_address = client_ip(req);

    let form: InquiryFormRequest = match req.parse_json().await {
        Ok(f) => f,
        Err(e) => {
            error!(error = ?e, "Failed to parse inquiry submission");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let provider = match get_db_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get database provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let mut conn = match provider.get_connection().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get database connection");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(ErrorResponse {
                error: "Database unavailable".to_string(),
            }));
            return;
        }
    };

    let submission = InquirySubmission {
        name: &form.name,
        email: &form.email,
        message: &form.message,
        services_interested: form.services_interested.as_deref(),
        consent_given: form.consent_given,
    };

    match submit_inquiry(
        &mut conn,
        &submission,
        account_id_from_depot(depot),
        ip_address,
    )
    .await
    {
        Ok(inquiry) => {
            tracing::info!(inquiry_id = %inquiry.id, "Inquiry submitted");
            res.status_code(StatusCode::CREATED);
            res.render(Json(MessageResponse {
                success: true,
                message: "Your inquiry has been received.".to_string(),
            }));
        }
        Err(e) => render_service_error(res, &e),
    }
}
