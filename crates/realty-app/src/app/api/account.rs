//! Signup, login, and logout.
//!
//! Authentication is stateless: login verifies credentials and mutating
//! requests carry HTTP Basic credentials, so logout has nothing to tear down
//! server-side and exists for the navigation flow.

use salvo::http::StatusCode;
use salvo::writing::{Json, Text};
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{ErrorResponse, MessageResponse, render_service_error};
use crate::db_handler::get_db_from_depot;
use realty_core::constants::{
    LOGIN_ROUTE_COMPONENT, LOGOUT_ROUTE_COMPONENT, SIGNUP_ROUTE_COMPONENT,
};
use realty_service::account::{Registration, register_user, verify_login};

/// ## Summary
/// Signup request payload
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// ## Summary
/// Signup response payload
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

/// ## Summary
/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// ## Summary
/// Login response payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub message: String,
}

#[handler]
async fn signup_page(res: &mut Response) {
    res.render(Text::Html(super::pages::page_html("Sign Up")));
}

#[handler]
async fn login_page(res: &mut Response) {
    res.render(Text::Html(super::pages::page_html("Login")));
}

/// ## Summary
/// POST /signup/ - Register a new account with email and password
///
/// ## Side Effects
/// - Creates an `app_user` row with a hashed password
///
/// ## Errors
/// Returns HTTP 400 for missing or malformed fields
/// Returns HTTP 409 if the email is already registered
/// Returns HTTP 500 if database operations fail
#[handler]
async fn signup_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing signup request");

    let signup_req: SignupRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse signup request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let provider = match get_db_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get database provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let mut conn = match provider.get_connection().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get database connection");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(ErrorResponse {
                error: "Database unavailable".to_string(),
            }));
            return;
        }
    };

    let registration = Registration {
        name: &signup_req.name,
        email: &signup_req.email,
        password: &signup_req.password,
    };

    match register_user(&mut conn, &registration).await {
        Ok(user) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(SignupResponse {
                user_id: user.id.to_string(),
                email: user.email,
                name: user.name,
            }));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /login/ - Verifies email/password credentials
///
/// ## Errors
/// Returns HTTP 401 if credentials are invalid
/// Returns HTTP 500 if database operations fail
#[handler]
async fn login_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing login request");

    let login_req: LoginRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse login request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let provider = match get_db_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get database provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let mut conn = match provider.get_connection().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get database connection");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(ErrorResponse {
                error: "Database unavailable".to_string(),
            }));
            return;
        }
    };

    match verify_login(&mut conn, &login_req.email, &login_req.password).await {
        Ok(user) => {
            res.render(Json(LoginResponse {
                success: true,
                user_id: user.id.to_string(),
                email: user.email,
                name: user.name,
                message: "Login successful".to_string(),
            }));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /logout/ - Acknowledges logout
///
/// Nothing is stored server-side per session, so this only confirms the
/// client may drop its credentials.
#[handler]
async fn logout_handler(res: &mut Response) {
    res.render(Json(MessageResponse {
        success: true,
        message: "Logged out".to_string(),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(
            Router::with_path(SIGNUP_ROUTE_COMPONENT)
                .get(signup_page)
                .post(signup_handler),
        )
        .push(
            Router::with_path(LOGIN_ROUTE_COMPONENT)
                .get(login_page)
                .post(login_handler),
        )
        .push(Router::with_path(LOGOUT_ROUTE_COMPONENT).get(logout_handler))
}

#[cfg(test)]
mod tests {
    use salvo::Service;
    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};

    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_signup_and_login_pages_render() {
        let service = Service::new(routes());

        for page in ["signup", "login"] {
            let response = TestClient::get(format!("http://127.0.0.1:8680/{page}"))
                .send(&service)
                .await;
            assert_eq!(response.status_code, Some(StatusCode::OK));
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_logout_is_stateless_ack() {
        let service = Service::new(routes());

        let mut response = TestClient::get("http://127.0.0.1:8680/logout")
            .send(&service)
            .await;

        assert_eq!(response.status_code, Some(StatusCode::OK));
        let body: serde_json::Value = response.take_json().await.unwrap();
        assert_eq!(body["success"], true);
    }
}
