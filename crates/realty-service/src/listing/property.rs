//! Property listing management and the public listing view.

use bigdecimal::BigDecimal;

use crate::error::{ServiceError, ServiceResult};
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::enums::PropertyStatus;
use realty_db::db::query::property;
use realty_db::error::DbError;
use realty_db::model::property::{NewProperty, Property, PropertyChangeset};
use realty_db::model::sector::Sector;

/// Fields for a new listing.
#[derive(Debug, Clone)]
pub struct CreateListing<'a> {
    pub sector_id: uuid::Uuid,
    pub title: &'a str,
    pub location: &'a str,
    pub price: BigDecimal,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub status: PropertyStatus,
}

/// ## Summary
/// Loads the public listing: active properties joined with their sector,
/// newest first.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_active(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<(Property, Sector)>> {
    Ok(property::list_active_with_sector(conn).await?)
}

/// ## Summary
/// Creates a property listing.
///
/// ## Errors
/// - `ValidationError` for missing fields or a negative price
/// - Database errors from the insert (including an unknown sector)
#[tracing::instrument(skip(conn, listing), fields(sector_id = %listing.sector_id))]
pub async fn create_listing(
    conn: &mut DbConnection<'_>,
    listing: &CreateListing<'_>,
) -> ServiceResult<Property> {
    validate::require("title", listing.title, 200)?;
    validate::require("location", listing.location, 200)?;
    if listing.price < BigDecimal::from(0) {
        return Err(ServiceError::ValidationError(
            "price must not be negative".to_owned(),
        ));
    }

    let new_property = NewProperty {
        id: uuid::Uuid::now_v7(),
        sector_id: listing.sector_id,
        title: listing.title,
        location: listing.location,
        price: listing.price.clone(),
        description: listing.description,
        image: listing.image,
        status: listing.status,
    };

    let created = property::create_property(conn, &new_property).await?;

    tracing::info!(property_id = %created.id, "Listing created");
    Ok(created)
}

/// ## Summary
/// Applies a partial update to a listing. `updated_at` refreshes on every
/// apply.
///
/// ## Errors
/// Returns `NotFound` when the property does not exist, or a database error.
#[tracing::instrument(skip(conn, changes))]
pub async fn update_listing(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &PropertyChangeset<'_>,
) -> ServiceResult<Property> {
    match property::update_property(conn, id, changes).await {
        Ok(updated) => Ok(updated),
        Err(DbError::DatabaseError(diesel::result::Error::NotFound)) => {
            Err(ServiceError::NotFound(format!("Property {id} not found")))
        }
        Err(e) => Err(e.into()),
    }
}

/// ## Summary
/// Activates or deactivates a listing without deleting it.
///
/// ## Errors
/// Returns `NotFound` when the property does not exist, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn set_active(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    active: bool,
) -> ServiceResult<()> {
    let updated = property::set_active(conn, id, active).await?;
    if updated == 0 {
        return Err(ServiceError::NotFound(format!("Property {id} not found")));
    }
    Ok(())
}

/// ## Summary
/// Deletes a listing. Its inquiries are removed by the database's cascade
/// rule.
///
/// ## Errors
/// Returns `NotFound` when the property does not exist, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn delete_listing(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    let removed = property::delete_property(conn, id).await?;
    if removed == 0 {
        return Err(ServiceError::NotFound(format!("Property {id} not found")));
    }
    tracing::info!(property_id = %id, "Listing deleted");
    Ok(())
}
