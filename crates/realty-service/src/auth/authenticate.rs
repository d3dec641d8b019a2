//! Optional Basic-Auth attribution for form submissions.
//!
//! Submissions work anonymously; when a request carries valid credentials the
//! stored row is linked to the account. A bad or missing header therefore
//! degrades to anonymous instead of rejecting the request.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use diesel::{OptionalExtension, SelectableHelper, query_dsl::methods::SelectDsl};
use diesel_async::RunQueryDsl;

use crate::auth::password::verify_password;
use crate::error::{ServiceError, ServiceResult};
use realty_db::db::connection::DbConnection;
use realty_db::db::query::user;
use realty_db::model::user::User;

/// Credentials extracted from a Basic Authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

/// ## Summary
/// Parses an `Authorization: Basic <base64(email:password)>` header value.
///
/// ## Errors
/// Returns `NotAuthenticated` when the scheme, encoding, or shape is wrong.
pub fn parse_basic_header(header_value: &str) -> ServiceResult<BasicCredentials> {
    let encoded = header_value
        .strip_prefix("Basic ")
        .ok_or(ServiceError::NotAuthenticated)?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| ServiceError::NotAuthenticated)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ServiceError::NotAuthenticated)?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or(ServiceError::NotAuthenticated)?;

    if email.is_empty() {
        return Err(ServiceError::NotAuthenticated);
    }

    Ok(BasicCredentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// ## Summary
/// Authenticates Basic credentials against stored accounts.
///
/// ## Errors
/// Returns `NotAuthenticated` for an unknown email or a wrong password, and
/// a database error if the lookup fails.
#[tracing::instrument(skip(conn, credentials), fields(email = %credentials.email))]
pub async fn authenticate_basic(
    conn: &mut DbConnection<'_>,
    credentials: &BasicCredentials,
) -> ServiceResult<User> {
    let Some(account) = user::by_email(&credentials.email)
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()
        .map_err(realty_db::error::DbError::from)?
    else {
        return Err(ServiceError::NotAuthenticated);
    };

    verify_password(&credentials.password, &account.password_hash)?;

    tracing::debug!(user_id = %account.id, "Request attributed to account");
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_header() {
        // base64("ana@example.com:hunter2")
        let header = format!("Basic {}", BASE64.encode("ana@example.com:hunter2"));
        let creds = parse_basic_header(&header).expect("should parse");
        assert_eq!(creds.email, "ana@example.com");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(parse_basic_header("Bearer abc123").is_err());
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(parse_basic_header("Basic not-base64!!!").is_err());
    }

    #[test]
    fn test_rejects_missing_separator() {
        let header = format!("Basic {}", BASE64.encode("no-colon-here"));
        assert!(parse_basic_header(&header).is_err());
    }

    #[test]
    fn test_password_may_contain_colons() {
        let header = format!("Basic {}", BASE64.encode("ana@example.com:pa:ss"));
        let creds = parse_basic_header(&header).expect("should parse");
        assert_eq!(creds.password, "pa:ss");
    }
}
