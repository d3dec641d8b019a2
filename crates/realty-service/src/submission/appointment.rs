//! Appointment booking intake and administrator status updates.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ServiceError, ServiceResult};
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::enums::{AppointmentStatus, AppointmentType};
use realty_db::db::query::appointment;
use realty_db::model::appointment::{Appointment, NewAppointment};

/// Appointment form fields as submitted. Date, time, and type arrive as raw
/// strings from the form and are parsed here.
#[derive(Debug, Clone)]
pub struct AppointmentRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub appointment_date: &'a str,
    pub appointment_time: &'a str,
    pub appointment_type: &'a str,
    pub message: Option<&'a str>,
}

/// ## Summary
/// Validates and stores an appointment request. New appointments always start
/// out pending.
///
/// ## Errors
/// - `ValidationError` for missing fields, an unknown appointment type, or an
///   unparseable date/time
/// - Database errors from the insert
#[tracing::instrument(skip(conn, request), fields(email = %request.email))]
pub async fn book_appointment(
    conn: &mut DbConnection<'_>,
    request: &AppointmentRequest<'_>,
    user_id: Option<uuid::Uuid>,
) -> ServiceResult<Appointment> {
    validate::require("full_name", request.full_name, 200)?;
    validate::require_email(request.email)?;
    validate::require("phone", request.phone, 20)?;

    let appointment_type = AppointmentType::from_str(request.appointment_type)?;

    let appointment_date = NaiveDate::parse_from_str(request.appointment_date, "%Y-%m-%d")
        .map_err(|e| ServiceError::ValidationError(format!("Invalid appointment date: {e}")))?;
    let appointment_time = parse_time(request.appointment_time)?;

    let new_appointment = NewAppointment {
        id: uuid::Uuid::now_v7(),
        user_id,
        full_name: request.full_name,
        email: request.email,
        phone: request.phone,
        appointment_date,
        appointment_time,
        appointment_type,
        message: request.message,
        status: AppointmentStatus::Pending,
    };

    let created = appointment::create_appointment(conn, &new_appointment).await?;

    tracing::info!(appointment_id = %created.id, "Appointment booked");
    Ok(created)
}

/// ## Summary
/// Administrator-driven status transition. Refreshes `updated_at`.
///
/// ## Errors
/// Returns `NotFound` when the appointment does not exist, or a database
/// error.
pub async fn update_status(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    status: AppointmentStatus,
) -> ServiceResult<Appointment> {
    match appointment::update_status(conn, id, status).await {
        Ok(updated) => Ok(updated),
        Err(realty_db::error::DbError::DatabaseError(diesel::result::Error::NotFound)) => Err(
            ServiceError::NotFound(format!("Appointment {id} not found")),
        ),
        Err(e) => Err(e.into()),
    }
}

// Forms post either HH:MM or HH:MM:SS.
fn parse_time(raw: &str) -> ServiceResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|e| ServiceError::ValidationError(format!("Invalid appointment time: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_accepts_both_forms() {
        assert_eq!(
            parse_time("14:30").ok(),
            NaiveTime::from_hms_opt(14, 30, 0)
        );
        assert_eq!(
            parse_time("14:30:15").ok(),
            NaiveTime::from_hms_opt(14, 30, 15)
        );
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(parse_time("half past two").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
