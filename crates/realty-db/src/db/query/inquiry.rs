//! Query builders and write operations for general contact inquiries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::contact_inquiry;
use crate::error::DbResult;
use crate::model::inquiry::{ContactInquiry, NewContactInquiry};

/// ## Summary
/// Returns a query to select all contact inquiries.
#[must_use]
pub fn all() -> contact_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    contact_inquiry::table.into_boxed()
}

/// ## Summary
/// Returns a query to find an inquiry by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> contact_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(contact_inquiry::id.eq(id))
}

/// ## Summary
/// Returns the default listing order: newest submission first.
#[must_use]
pub fn newest_first() -> contact_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    all().order(contact_inquiry::submitted_at.desc())
}

/// ## Summary
/// Inserts a contact inquiry and returns the stored row.
///
/// The services string is stored verbatim; no validation or de-duplication
/// happens on the way in.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn create_inquiry(
    conn: &mut DbConnection<'_>,
    new_inquiry: &NewContactInquiry<'_>,
) -> DbResult<ContactInquiry> {
    Ok(diesel::insert_into(contact_inquiry::table)
        .values(new_inquiry)
        .returning(ContactInquiry::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Flips the responded flag on an inquiry.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn mark_responded(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    Ok(diesel::update(contact_inquiry::table.find(id))
        .set(contact_inquiry::responded.eq(true))
        .execute(conn)
        .await?)
}
