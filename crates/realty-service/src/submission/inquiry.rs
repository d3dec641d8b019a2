//! General contact inquiry intake (the "how can we help?" form).

use ipnetwork::IpNetwork;

use crate::error::ServiceResult;
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::query::inquiry;
use realty_db::model::inquiry::{ContactInquiry, NewContactInquiry};

/// Inquiry form fields as submitted. `services_interested` is free-form
/// comma-separated text and is stored verbatim.
#[derive(Debug, Clone)]
pub struct InquirySubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub services_interested: Option<&'a str>,
    pub consent_given: bool,
}

/// ## Summary
/// Validates and stores a contact inquiry, capturing the client IP when
/// known.
///
/// ## Errors
/// - `ValidationError` for missing or over-length fields
/// - Database errors from the insert
#[tracing::instrument(skip(conn, submission), fields(email = %submission.email))]
pub async fn submit_inquiry(
    conn: &mut DbConnection<'_>,
    submission: &InquirySubmission<'_>,
    user_id: Option<uuid::Uuid>,
    ip_address: Option<IpNetwork>,
) -> ServiceResult<ContactInquiry> {
    validate::require("name", submission.name, 200)?;
    validate::require_email(submission.email)?;
    validate::require("message", submission.message, usize::MAX)?;
    if let Some(services) = submission.services_interested {
        validate::max_length("services_interested", services, 100)?;
    }

    let new_inquiry = NewContactInquiry {
        id: uuid::Uuid::now_v7(),
        user_id,
        name: submission.name,
        email: submission.email,
        message: submission.message,
        services_interested: submission.services_interested,
        consent_given: submission.consent_given,
        ip_address,
    };

    let created = inquiry::create_inquiry(conn, &new_inquiry).await?;

    tracing::info!(inquiry_id = %created.id, "Contact inquiry stored");
    Ok(created)
}

/// ## Summary
/// Marks an inquiry as responded. Administrator-driven.
///
/// ## Errors
/// Returns `NotFound` if no row matched, or a database error.
pub async fn mark_responded(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    let updated = inquiry::mark_responded(conn, id).await?;
    if updated == 0 {
        return Err(crate::error::ServiceError::NotFound(format!(
            "Inquiry {id} not found"
        )));
    }
    Ok(())
}
