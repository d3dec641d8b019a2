//! Query builders and write operations for property listings.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{property, sector};
use crate::error::DbResult;
use crate::model::property::{NewProperty, Property, PropertyChangeset};
use crate::model::sector::Sector;

/// ## Summary
/// Returns a query to select all properties.
#[must_use]
pub fn all() -> property::BoxedQuery<'static, diesel::pg::Pg> {
    property::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a property by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> property::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(property::id.eq(id))
}

/// ## Summary
/// Returns the default listing order: newest created first.
#[must_use]
pub fn newest_first() -> property::BoxedQuery<'static, diesel::pg::Pg> {
    all().order(property::created_at.desc())
}

/// ## Summary
/// Returns a query for active listings, newest first.
#[must_use]
pub fn active() -> property::BoxedQuery<'static, diesel::pg::Pg> {
    newest_first().filter(property::is_active.eq(true))
}

/// ## Summary
/// Returns a query for properties in a sector, newest first.
#[must_use]
pub fn by_sector(sector_id: uuid::Uuid) -> property::BoxedQuery<'static, diesel::pg::Pg> {
    newest_first().filter(property::sector_id.eq(sector_id))
}

/// ## Summary
/// Loads active listings joined with their sector, newest first.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_active_with_sector(
    conn: &mut DbConnection<'_>,
) -> DbResult<Vec<(Property, Sector)>> {
    Ok(property::table
        .inner_join(sector::table)
        .filter(property::is_active.eq(true))
        .order(property::created_at.desc())
        .select((Property::as_select(), Sector::as_select()))
        .load::<(Property, Sector)>(conn)
        .await?)
}

/// ## Summary
/// Inserts a property and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails (including an unknown sector).
pub async fn create_property(
    conn: &mut DbConnection<'_>,
    new_property: &NewProperty<'_>,
) -> DbResult<Property> {
    Ok(diesel::insert_into(property::table)
        .values(new_property)
        .returning(Property::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Applies a partial update and refreshes `updated_at`.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn update_property(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &PropertyChangeset<'_>,
) -> DbResult<Property> {
    Ok(diesel::update(property::table.find(id))
        .set((changes, property::updated_at.eq(diesel::dsl::now)))
        .returning(Property::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Activates or deactivates a listing and refreshes `updated_at`.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn set_active(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    active: bool,
) -> DbResult<usize> {
    Ok(diesel::update(property::table.find(id))
        .set((
            property::is_active.eq(active),
            property::updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)
        .await?)
}

/// ## Summary
/// Deletes a property. The database cascades the delete to its inquiries.
///
/// ## Errors
/// Returns an error if the delete fails.
pub async fn delete_property(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    Ok(diesel::delete(property::table.find(id))
        .execute(conn)
        .await?)
}
