//! Property-specific inquiry intake (the listing modal form).

use diesel::{OptionalExtension, SelectableHelper, query_dsl::methods::SelectDsl};
use diesel_async::RunQueryDsl;
use ipnetwork::IpNetwork;

use crate::error::{ServiceError, ServiceResult};
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::query::{property, property_inquiry};
use realty_db::error::DbError;
use realty_db::model::property::Property;
use realty_db::model::property_inquiry::{NewPropertyInquiry, PropertyInquiry};

/// Property inquiry form fields as submitted.
#[derive(Debug, Clone)]
pub struct PropertyInquirySubmission<'a> {
    pub property_id: uuid::Uuid,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

/// ## Summary
/// Validates and stores an inquiry about a specific property.
///
/// ## Errors
/// - `NotFound` when the property does not exist
/// - `ValidationError` for missing or over-length fields
/// - Database errors from the insert
#[tracing::instrument(skip(conn, submission), fields(property_id = %submission.property_id))]
pub async fn submit_property_inquiry(
    conn: &mut DbConnection<'_>,
    submission: &PropertyInquirySubmission<'_>,
    user_id: Option<uuid::Uuid>,
    ip_address: Option<IpNetwork>,
) -> ServiceResult<PropertyInquiry> {
    validate::require("full_name", submission.full_name, 200)?;
    validate::require_email(submission.email)?;
    validate::require("phone", submission.phone, 20)?;
    validate::require("message", submission.message, usize::MAX)?;

    let listing = property::by_id(submission.property_id)
        .select(Property::as_select())
        .first::<Property>(conn)
        .await
        .optional()
        .map_err(DbError::from)?;

    if listing.is_none() {
        return Err(ServiceError::NotFound(format!(
            "Property {} not found",
            submission.property_id
        )));
    }

    let new_inquiry = NewPropertyInquiry {
        id: uuid::Uuid::now_v7(),
        property_id: submission.property_id,
        user_id,
        full_name: submission.full_name,
        email: submission.email,
        phone: submission.phone,
        message: submission.message,
        ip_address,
    };

    let created = property_inquiry::create_property_inquiry(conn, &new_inquiry).await?;

    tracing::info!(inquiry_id = %created.id, "Property inquiry stored");
    Ok(created)
}

/// ## Summary
/// Marks a property inquiry as responded. Administrator-driven.
///
/// ## Errors
/// Returns `NotFound` if no row matched, or a database error.
pub async fn mark_responded(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    let updated = property_inquiry::mark_responded(conn, id).await?;
    if updated == 0 {
        return Err(ServiceError::NotFound(format!(
            "Property inquiry {id} not found"
        )));
    }
    Ok(())
}
