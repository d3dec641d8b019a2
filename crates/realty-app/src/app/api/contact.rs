//! The two contact intake forms.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::error;

use super::{ErrorResponse, MessageResponse, render_service_error};
use crate::db_handler::get_db_from_depot;
use crate::middleware::auth::account_id_from_depot;
use realty_core::constants::{
    CONTACT_INQUIRY_COMPONENT, CONTACT_ROUTE_COMPONENT, CONTACT_SUBMIT_COMPONENT,
};
use realty_service::submission::contact::{ContactSubmission, submit_contact};

/// ## Summary
/// Contact form payload
#[derive(Debug, Deserialize)]
pub struct ContactFormRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub comments: Option<String>,
}

/// ## Summary
/// POST /contact/submit/ - Stores a contact form submission
///
/// A logged-in account (via Basic credentials) is linked to the submission;
/// anonymous submissions are accepted as-is.
///
/// ## Errors
/// Returns HTTP 400 for missing or malformed fields
/// Returns HTTP 500 if database operations fail
#[handler]
async fn submit_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let form: ContactFormRequest = match req.parse_json().await {
        Ok(f) => f,
        Err(e) => {
            error!(error = ?e, "Failed to parse contact submission");
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

    let submission = ContactSubmission {
        name: &form.name,
        email: &form.email,
        phone: form.phone.as_deref(),
        comments: form.comments.as_deref(),
    };

    match submit_contact(&mut conn, &submission, account_id_from_depot(depot)).await {
        Ok(contact) => {
            tracing::info!(contact_id = %contact.id, "Contact form submitted");
            res.status_code(StatusCode::CREATED);
            res.render(Json(MessageResponse {
                success: true,
                message: "Thank you for contacting us. We will get back to you shortly."
                    .to_string(),
            }));
        }
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACT_ROUTE_COMPONENT)
        .push(Router::with_path(CONTACT_SUBMIT_COMPONENT).post(submit_handler))
        .push(
            Router::with_path(CONTACT_INQUIRY_COMPONENT)
                .post(super::inquiry::submit_inquiry_handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::Service;
    use salvo::http::StatusCode;
    use salvo::test::TestClient;

    use super::*;

    // Only the two submit paths are published under /contact/; the prefix
    // itself is not a page.
    #[test_log::test(tokio::test)]
    async fn test_contact_prefix_is_not_routed() {
        let service = Service::new(routes());

        let response = TestClient::get("http://127.0.0.1:8680/contact")
            .send(&service)
            .await;

        assert_eq!(response.status_code, Some(StatusCode::NOT_FOUND));
    }
}
