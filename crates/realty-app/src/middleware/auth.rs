use salvo::Depot;
use tracing::error;

use crate::db_handler::get_db_from_depot;
use realty_db::model::user::User;
use realty_service::auth::authenticate::{authenticate_basic, parse_basic_header};

/// Depot key for the request's resolved account.
pub const REQUEST_USER_KEY: &str = "request_user";

/// The account a request runs as. Form intake works anonymously, so a missing
/// or invalid Authorization header resolves to `Anonymous`, never a 401.
#[derive(Debug, Clone)]
pub enum RequestUser {
    Account(User),
    Anonymous,
}

impl RequestUser {
    /// Returns the account ID to attribute a submission to, if any.
    #[must_use]
    pub fn account_id(&self) -> Option<uuid::Uuid> {
        match self {
            Self::Account(user) => Some(user.id),
            Self::Anonymous => None,
        }
    }
}

/// ## Summary
/// Attribution middleware: resolves optional Basic credentials to an account
/// and stores the result in the depot.
///
/// ## Side Effects
/// Inserts a `RequestUser` into the depot under [`REQUEST_USER_KEY`].
pub struct AuthMiddleware;

#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, _res, _ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let Some(header_value) = req
            .headers()
            .get(salvo::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
        else {
            depot.insert(REQUEST_USER_KEY, RequestUser::Anonymous);
            return;
        };

        let Ok(credentials) = parse_basic_header(&header_value) else {
            depot.insert(REQUEST_USER_KEY, RequestUser::Anonymous);
            return;
        };

        let provider = match get_db_from_depot(depot) {
            Ok(p) => p,
            Err(e) => {
                error!(error = ?e, "Failed to get database provider from depot");
                depot.insert(REQUEST_USER_KEY, RequestUser::Anonymous);
                return;
            }
        };

        let mut conn = match provider.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!(error = ?e, "Failed to get database connection");
                depot.insert(REQUEST_USER_KEY, RequestUser::Anonymous);
                return;
            }
        };

        match authenticate_basic(&mut conn, &credentials).await {
            Ok(user) => {
                tracing::debug!(user_email = %user.email, "Request attributed to account");
                depot.insert(REQUEST_USER_KEY, RequestUser::Account(user));
            }
            Err(e) => {
                tracing::trace!(error = ?e, "Credentials did not resolve, continuing anonymously");
                depot.insert(REQUEST_USER_KEY, RequestUser::Anonymous);
            }
        }
    }
}

/// ## Summary
/// Returns the account ID the request resolved to, if any.
#[must_use]
pub fn account_id_from_depot(depot: &Depot) -> Option<uuid::Uuid> {
    depot
        .get::<RequestUser>(REQUEST_USER_KEY)
        .ok()
        .and_then(RequestUser::account_id)
}
