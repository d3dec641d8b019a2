//! Account lifecycle: registration and credential checks.

use diesel::{OptionalExtension, SelectableHelper, query_dsl::methods::SelectDsl};
use diesel_async::RunQueryDsl;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{ServiceError, ServiceResult};
use crate::validate;
use realty_db::db::connection::DbConnection;
use realty_db::db::query::user;
use realty_db::error::DbError;
use realty_db::model::user::{NewUser, User};

/// Signup form fields.
#[derive(Debug, Clone)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// ## Summary
/// Registers a new account with a hashed password.
///
/// ## Side Effects
/// - Inserts an `app_user` row
///
/// ## Errors
/// - `ValidationError` for missing or malformed fields
/// - `Conflict` when the email is already registered
/// - Database errors from the lookup or insert
#[tracing::instrument(skip(conn, registration), fields(email = %registration.email))]
pub async fn register_user(
    conn: &mut DbConnection<'_>,
    registration: &Registration<'_>,
) -> ServiceResult<User> {
    validate::require("name", registration.name, 200)?;
    validate::require_email(registration.email)?;
    if registration.password.is_empty() {
        return Err(ServiceError::ValidationError(
            "password is required".to_owned(),
        ));
    }

    let existing = user::by_email(registration.email)
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()
        .map_err(DbError::from)?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "Email already registered".to_owned(),
        ));
    }

    let password_hash = hash_password(registration.password)?;

    let new_user = NewUser {
        id: uuid::Uuid::now_v7(),
        name: registration.name,
        email: registration.email,
        password_hash: &password_hash,
    };

    let created = user::create_user(conn, &new_user).await?;

    tracing::info!(user_id = %created.id, "User registered");
    Ok(created)
}

/// ## Summary
/// Verifies login credentials and returns the matching account.
///
/// ## Errors
/// Returns `NotAuthenticated` for an unknown email or wrong password.
#[tracing::instrument(skip(conn, password))]
pub async fn verify_login(
    conn: &mut DbConnection<'_>,
    email: &str,
    password: &str,
) -> ServiceResult<User> {
    let Some(account) = user::by_email(email)
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()
        .map_err(DbError::from)?
    else {
        return Err(ServiceError::NotAuthenticated);
    };

    verify_password(password, &account.password_hash)?;

    tracing::info!(user_id = %account.id, "User logged in");
    Ok(account)
}
