//! Query builders and write operations for appointments.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::enums::AppointmentStatus;
use crate::db::schema::appointment;
use crate::error::DbResult;
use crate::model::appointment::{Appointment, NewAppointment};

/// ## Summary
/// Returns a query to select all appointments.
#[must_use]
pub fn all() -> appointment::BoxedQuery<'static, diesel::pg::Pg> {
    appointment::table.into_boxed()
}

/// ## Summary
/// Returns a query to find an appointment by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> appointment::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(appointment::id.eq(id))
}

/// ## Summary
/// Returns the default listing order: appointment date, then time, both
/// descending.
#[must_use]
pub fn default_order() -> appointment::BoxedQuery<'static, diesel::pg::Pg> {
    all().order((
        appointment::appointment_date.desc(),
        appointment::appointment_time.desc(),
    ))
}

/// ## Summary
/// Returns a query for appointments with the given status, in default order.
#[must_use]
pub fn by_status(status: AppointmentStatus) -> appointment::BoxedQuery<'static, diesel::pg::Pg> {
    default_order().filter(appointment::status.eq(status))
}

/// ## Summary
/// Inserts an appointment and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn create_appointment(
    conn: &mut DbConnection<'_>,
    new_appointment: &NewAppointment<'_>,
) -> DbResult<Appointment> {
    Ok(diesel::insert_into(appointment::table)
        .values(new_appointment)
        .returning(Appointment::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Sets the appointment status and refreshes `updated_at`.
///
/// Status transitions are administrator-driven; nothing in the system moves
/// an appointment forward on its own.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn update_status(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    status: AppointmentStatus,
) -> DbResult<Appointment> {
    Ok(diesel::update(appointment::table.find(id))
        .set((
            appointment::status.eq(status),
            appointment::updated_at.eq(diesel::dsl::now),
        ))
        .returning(Appointment::as_returning())
        .get_result(conn)
        .await?)
}
