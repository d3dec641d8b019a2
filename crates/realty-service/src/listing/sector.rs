//! Sector management: creation, rename, and cascade-aware deletion.

use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::error::{ServiceError, ServiceResult};
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::query::sector;
use realty_db::db::schema::property as property_t;
use realty_db::error::DbError;
use realty_db::model::sector::{NewSector, Sector};

/// Outcome of a sector deletion, reported for administrative logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorDeletion {
    pub properties_removed: u64,
}

/// ## Summary
/// Creates a sector. When no slug is supplied one is derived from the name;
/// that derivation happens exactly once, here.
///
/// ## Errors
/// - `ValidationError` for a missing or over-length name
/// - `Conflict` when the name is already taken
/// - Database errors from the insert
#[tracing::instrument(skip(conn))]
pub async fn create_sector(
    conn: &mut DbConnection<'_>,
    name: &str,
    slug: Option<&str>,
) -> ServiceResult<Sector> {
    validate::require("name", name, 50)?;
    if let Some(slug) = slug {
        validate::max_length("slug", slug, 50)?;
    }

    let existing = sector::by_name(name)
        .select(Sector::as_select())
        .first::<Sector>(conn)
        .await
        .optional()
        .map_err(DbError::from)?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(format!(
            "Sector '{name}' already exists"
        )));
    }

    let new_sector = NewSector::new(name, slug);
    let created = sector::create_sector(conn, &new_sector).await?;

    tracing::info!(sector_id = %created.id, slug = %created.slug, "Sector created");
    Ok(created)
}

/// ## Summary
/// Renames a sector. The slug is never regenerated; a stale slug after a
/// rename is accepted behavior.
///
/// ## Errors
/// Returns `NotFound` when the sector does not exist, `ValidationError` for a
/// bad name, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn rename_sector(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    new_name: &str,
) -> ServiceResult<Sector> {
    validate::require("name", new_name, 50)?;

    match sector::rename_sector(conn, id, new_name).await {
        Ok(renamed) => Ok(renamed),
        Err(DbError::DatabaseError(diesel::result::Error::NotFound)) => {
            Err(ServiceError::NotFound(format!("Sector {id} not found")))
        }
        Err(e) => Err(e.into()),
    }
}

/// ## Summary
/// Deletes a sector and reports how many properties went with it. The
/// properties (and their inquiries) are removed by the database's cascade
/// rules; the count and the delete run in one transaction so the number is
/// accurate.
///
/// ## Errors
/// Returns `NotFound` when the sector does not exist, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn delete_sector(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> ServiceResult<SectorDeletion> {
    let deletion = conn
        .transaction::<_, ServiceError, _>(move |tx| {
            async move {
                let properties: i64 = property_t::table
                    .filter(property_t::sector_id.eq(id))
                    .count()
                    .get_result(tx)
                    .await?;

                let removed = sector::delete_sector(tx, id).await?;
                if removed == 0 {
                    return Err(ServiceError::NotFound(format!("Sector {id} not found")));
                }

                Ok(SectorDeletion {
                    properties_removed: u64::try_from(properties).unwrap_or_default(),
                })
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        sector_id = %id,
        properties_removed = deletion.properties_removed,
        "Sector deleted"
    );
    Ok(deletion)
}
