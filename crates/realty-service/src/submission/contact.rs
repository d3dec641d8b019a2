//! Contact form intake.

use crate::error::ServiceResult;
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::query::contact;
use realty_db::model::contact::{Contact, NewContact};

/// Contact form fields as submitted.
#[derive(Debug, Clone)]
pub struct ContactSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub comments: Option<&'a str>,
}

/// ## Summary
/// Validates and stores a contact submission, optionally attributed to a
/// logged-in account.
///
/// ## Errors
/// - `ValidationError` for missing or over-length fields
/// - Database errors from the insert
#[tracing::instrument(skip(conn, submission), fields(email = %submission.email))]
pub async fn submit_contact(
    conn: &mut DbConnection<'_>,
    submission: &ContactSubmission<'_>,
    user_id: Option<uuid::Uuid>,
) -> ServiceResult<Contact> {
    validate::require("name", submission.name, 200)?;
    validate::require_email(submission.email)?;
    if let Some(phone) = submission.phone {
        validate::max_length("phone", phone, 20)?;
    }

    let new_contact = NewContact {
        id: uuid::Uuid::now_v7(),
        user_id,
        name: submission.name,
        email: submission.email,
        phone: submission.phone,
        comments: submission.comments,
    };

    let created = contact::create_contact(conn, &new_contact).await?;

    tracing::info!(contact_id = %created.id, "Contact submission stored");
    Ok(created)
}

/// ## Summary
/// Marks a contact as responded. Administrator-driven; the only mutation a
/// contact ever receives.
///
/// ## Errors
/// Returns `NotFound` if no row matched, or a database error.
pub async fn mark_responded(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    let updated = contact::mark_responded(conn, id).await?;
    if updated == 0 {
        return Err(crate::error::ServiceError::NotFound(format!(
            "Contact {id} not found"
        )));
    }
    Ok(())
}
