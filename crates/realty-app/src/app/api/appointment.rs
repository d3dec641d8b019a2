//! Appointment booking intake.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::error;

use super::{ErrorResponse, MessageResponse, render_service_error};
use crate::db_handler::get_db_from_depot;
use crate::middleware::auth::account_id_from_depot;
use realty_core::constants::{APPOINTMENT_ROUTE_COMPONENT, CONTACT_SUBMIT_COMPONENT};
use realty_service::submission::appointment::{AppointmentRequest, book_appointment};

/// ## Summary
/// Appointment form payload. Date, time, and type arrive as form strings and
/// are validated downstream.
#[derive(Debug, Deserialize)]
pub struct AppointmentFormRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub appointment_type: String,
    pub message: Option<String>,
}

/// ## Summary
/// POST /appointment/submit/ - Books an appointment
///
/// New appointments always start out pending; status transitions happen
/// through administrative tooling.
///
/// ## Errors
/// Returns HTTP 400 for missing fields, an unknown appointment type, or an
/// unparseable date/time
/// Returns HTTP 500 if database operations fail
#[handler]
async fn submit_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let form: AppointmentFormRequest = match req.parse_json().await {
        Ok(f) => f,
        Err(e) => {
            error!(error = ?e, "Failed to parse appointment request");
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

    let request = AppointmentRequest {
        full_name: &form.full_name,
        email: &form.email,
        phone: &form.phone,
        appointment_date: &form.appointment_date,
        appointment_time: &form.appointment_time,
        appointment_type: &form.appointment_type,
        message: form.message.as_deref(),
    };

    match book_appointment(&mut conn, &request, account_id_from_depot(depot)).await {
        Ok(appointment) => {
            tracing::info!(appointment_id = %appointment.id, "Appointment booked");
            res.status_code(StatusCode::CREATED);
            res.render(Json(MessageResponse {
                success: true,
                message: "Your appointment request has been received. We will confirm shortly."
                    .to_string(),
            }));
        }
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(APPOINTMENT_ROUTE_COMPONENT)
        .push(Router::with_path(CONTACT_SUBMIT_COMPONENT).post(submit_handler))
}
