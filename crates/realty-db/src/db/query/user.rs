//! Query builders and write operations for site accounts.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::app_user;
use crate::error::DbResult;
use crate::model::user::{NewUser, User};

/// ## Summary
/// Returns a query to select all users.
#[must_use]
pub fn all() -> app_user::BoxedQuery<'static, diesel::pg::Pg> {
    app_user::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a user by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> app_user::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(app_user::id.eq(id))
}

/// ## Summary
/// Returns a query to find a user by email.
#[must_use]
pub fn by_email(email: &str) -> app_user::BoxedQuery<'_, diesel::pg::Pg> {
    all().filter(app_user::email.eq(email))
}

/// ## Summary
/// Inserts a user and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails (including a duplicate email).
pub async fn create_user(conn: &mut DbConnection<'_>, new_user: &NewUser<'_>) -> DbResult<User> {
    Ok(diesel::insert_into(app_user::table)
        .values(new_user)
        .returning(User::as_returning())
        .get_result(conn)
        .await?)
}

/// ## Summary
/// Deletes a user. Submission rows that reference it keep existing; the
/// database nulls out their user link.
///
/// ## Errors
/// Returns an error if the delete fails.
pub async fn delete_user(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<usize> {
    Ok(diesel::delete(app_user::table.find(id)).execute(conn).await?)
}
