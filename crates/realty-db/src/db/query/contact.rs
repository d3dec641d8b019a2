//! Query builders and write operations for contact submissions.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::contact;
use crate::error::DbResult;
use crate::model::contact::{Contact, NewContact};

/// ## Summary
/// Returns a query to select all contacts.
#[must_use]
pub fn all() -> contact::BoxedQuery<'static, diesel::pg::Pg> {
    contact::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a contact by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> contact::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(contact::id.eq(id))
}

/// ## Summary
/// Returns the default listing order: newest submission first.
#[must_use]
pub fn newest_first() -> contact::BoxedQuery<'static, diesel::pg::Pg> {
    all().order(contact::submitted_at.desc())
}

/// ## Summary
/// Returns a query for contacts awaiting a response, newest first.
#[must_use]
pub fn unresponded() -> contact::BoxedQuery<'static, diesel::pg::Pg> {
    newest_first().filter(contact::responded.eq(false))
}

/// ## Summary
/// Inserts a contact submission and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn create_contact(
    conn: &mut DbConnection<'_>,
    new_contact: &NewContact<'_>,
) -> DbResult<Contact> {
    Ok(diesel::insert_into(contact::table)
        .values(new_contact)
        .returning(Contact::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Flips the responded flag on a contact. The only mutation contacts ever
/// receive.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn mark_responded(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    Ok(diesel::update(contact::table.find(id))
        .set(contact::responded.eq(true))
        .execute(conn)
        .await?)
}
