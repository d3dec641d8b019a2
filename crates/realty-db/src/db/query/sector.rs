//! Query builders and write operations for market sectors.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::sector;
use crate::error::DbResult;
use crate::model::sector::{NewSector, Sector, SectorRename};

/// ## Summary
/// Returns a query to select all sectors.
#[must_use]
pub fn all() -> sector::BoxedQuery<'static, diesel::pg::Pg> {
    sector::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a sector by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> sector::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(sector::id.eq(id))
}

/// ## Summary
/// Returns a query to find a sector by slug.
#[must_use]
pub fn by_slug(slug: &str) -> sector::BoxedQuery<'_, diesel::pg::Pg> {
    all().filter(sector::slug.eq(slug))
}

/// ## Summary
/// Returns a query to find a sector by name.
#[must_use]
pub fn by_name(name: &str) -> sector::BoxedQuery<'_, diesel::pg::Pg> {
    all().filter(sector::name.eq(name))
}

/// ## Summary
/// Inserts a sector and returns the stored row. Slug derivation happens in
/// `NewSector::new`, never here.
///
/// ## Errors
/// Returns an error if the insert fails (including unique name/slug
/// violations).
pub async fn create_sector(
    conn: &mut DbConnection<'_>,
    new_sector: &NewSector<'_>,
) -> DbResult<Sector> {
    Ok(diesel::insert_into(sector::table)
        .values(new_sector)
        .returning(Sector::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Renames a sector. The slug column is not part of the changeset, so the
/// existing slug survives the rename.
///
/// ## Errors
/// Returns an error if the update fails.
pub async fn rename_sector(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    new_name: &str,
) -> DbResult<Sector> {
    Ok(diesel::update(sector::table.find(id))
        .set(&SectorRename { name: new_name })
        .returning(Sector::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Deletes a sector. The database cascades the delete to its properties and
/// from there to their inquiries.
///
/// ## Errors
/// Returns an error if the delete fails.
pub async fn delete_sector(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    Ok(diesel::delete(sector::table.find(id)).execute(conn).await?)
}
