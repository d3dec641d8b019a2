//! Query builders and write operations for property inquiries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{property, property_inquiry};
use crate::error::DbResult;
use crate::model::property::Property;
use crate::model::property_inquiry::{NewPropertyInquiry, PropertyInquiry};

/// ## Summary
/// Returns a query to select all property inquiries.
#[must_use]
pub fn all() -> property_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    property_inquiry::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a property inquiry by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> property_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(property_inquiry::id.eq(id))
}

/// ## Summary
/// Returns the default listing order: newest submission first.
#[must_use]
pub fn newest_first() -> property_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    all().order(property_inquiry::submitted_at.desc())
}

/// ## Summary
/// Returns a query for inquiries about a property, newest first.
#[must_use]
pub fn by_property(
    property_id: uuid::Uuid,
) -> property_inquiry::BoxedQuery<'static, diesel::pg::Pg> {
    newest_first().filter(property_inquiry::property_id.eq(property_id))
}

/// ## Summary
/// Loads inquiries joined with their property, newest first, for
/// administrative listings labeled with the property title.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_with_property(
    conn: &mut DbConnection<'_>,
) -> DbResult<Vec<(PropertyInquiry, Property)>> {
    Ok(property_inquiry::table
        .inner_join(property::table)
        .order(property_inquiry::submitted_at.desc())
        .select((PropertyInquiry::as_select(), Property::as_select()))
        .load::<(PropertyInquiry, Property)>(conn)
        .await?)
}

/// ## Summary
/// Inserts a property inquiry and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails (including an unknown property).
pub async fn create_property_inquiry(
    conn: &mut DbConnection<'_>,
    new_inquiry: &NewPropertyInquiry<'_>,
) -> DbResult<PropertyInquiry> {
    Ok(diesel::insert_into(property_inquiry::table)
        .values(new_inquiry)
        .returning(PropertyInquiry::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Flips the responded flag on a property inquiry.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn mark_responded(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    Ok(diesel::update(property_inquiry::table.find(id))
        .set(property_inquiry::responded.eq(true))
        .execute(conn)
        .await?)
}
