//! The public listing view and the per-property inquiry form.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{ErrorResponse, MessageResponse, client_ip, render_service_error};
use crate::db_handler::get_db_from_depot;
use crate::middleware::auth::account_id_from_depot;
use realty_core::constants::{
    CONTACT_SUBMIT_COMPONENT, PROPERTIES_ROUTE_COMPONENT, PROPERTY_INQUIRY_COMPONENT,
};
use realty_db::model::property::Property;
use realty_db::model::sector::Sector;
use realty_service::listing::property::list_active;
use realty_service::submission::property_inquiry::{
    PropertyInquirySubmission, submit_property_inquiry,
};

/// ## Summary
/// One listing as shown publicly. Prices go out pre-formatted so every
/// surface renders them the same way.
#[derive(Debug, Serialize)]
pub struct PropertyView {
    pub id: String,
    pub title: String,
    pub location: String,
    pub sector: String,
    pub sector_slug: String,
    pub price: String,
    pub status: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PropertyView {
    fn from_row((property, sector): (Property, Sector)) -> Self {
        let price = property.formatted_price();
        Self {
            id: property.id.to_string(),
            title: property.title,
            location: property.location,
            sector: sector.name,
            sector_slug: sector.slug,
            price,
            status: property.status.as_str().to_owned(),
            description: property.description,
            image: property.image,
            created_at: property.created_at,
        }
    }
}

/// ## Summary
/// Property inquiry form payload
#[derive(Debug, Deserialize)]
pub struct PropertyInquiryFormRequest {
    pub property_id: uuid::Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// ## Summary
/// GET /properties/ - Lists active properties, newest first
///
/// ## Errors
/// Returns HTTP 500 if database operations fail
#[handler]
async fn list_handler(depot: &mut Depot, res: &mut Response) {
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

    match list_active(&mut conn).await {
        Ok(rows) => {
            let listings: Vec<PropertyView> =
                rows.into_iter().map(PropertyView::from_row).collect();
            res.render(Json(listings));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /properties/inquiry/submit/ - Stores an inquiry about one listing
///
/// ## Errors
/// Returns HTTP 400 for missing or malformed fields
/// Returns HTTP 404 if the property does not exist
/// Returns HTTP 500 if database operations fail
#[handler]
async fn inquiry_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let ip_address = client_ip(req);

    let form: PropertyInquiryFormRequest = match req.parse_json().await {
        Ok(f) => f,
        Err(e) => {
            error!(error = ?e, "Failed to parse property inquiry");
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

    let submission = PropertyInquirySubmission {
        property_id: form.property_id,
        full_name: &form.full_name,
        email: &form.email,
        phone: &form.phone,
        message: &form.message,
    };

    match submit_property_inquiry(
        &mut conn,
        &submission,
        account_id_from_depot(depot),
        ip_address,
    )
    .await
    {
        Ok(inquiry) => {
            tracing::info!(inquiry_id = %inquiry.id, "Property inquiry submitted");
            res.status_code(StatusCode::CREATED);
            res.render(Json(MessageResponse {
                success: true,
                message: "Your inquiry about this property has been received.".to_string(),
            }));
        }
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PROPERTIES_ROUTE_COMPONENT)
        .get(list_handler)
        .push(
            Router::with_path(PROPERTY_INQUIRY_COMPONENT)
                .push(Router::with_path(CONTACT_SUBMIT_COMPONENT).post(inquiry_handler)),
        )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use realty_db::db::enums::PropertyStatus;

    fn row() -> (Property, Sector) {
        let sector = Sector {
            id: uuid::Uuid::now_v7(),
            name: "Downtown Homes".to_owned(),
            slug: "downtown-homes".to_owned(),
        };
        let property = Property {
            id: uuid::Uuid::now_v7(),
            sector_id: sector.id,
            title: "Hillside Villa".to_owned(),
            location: "North Ridge".to_owned(),
            price: BigDecimal::from_str("2500000.00").unwrap(),
            description: "Quiet street.".to_owned(),
            image: None,
            status: PropertyStatus::Trendy,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            is_active: true,
        };
        (property, sector)
    }

    #[test]
    fn test_view_carries_formatted_price_and_sector() {
        let view = PropertyView::from_row(row());

        assert_eq!(view.title, "Hillside Villa");
        assert_eq!(view.price, "$2.5M");
        assert_eq!(view.sector, "Downtown Homes");
        assert_eq!(view.sector_slug, "downtown-homes");
        assert_eq!(view.status, "trendy");
    }
}
