use std::fmt;

use bigdecimal::{BigDecimal, ToPrimitive};
use diesel::{pg::Pg, prelude::*};

use crate::db::enums::PropertyStatus;
use crate::db::schema;
use crate::model;
use realty_core::util::price::format_price;

/// Marketed property listing. Belongs to exactly one sector and is deleted
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::property)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::sector::Sector, foreign_key = sector_id))]
pub struct Property {
    pub id: uuid::Uuid,
    pub sector_id: uuid::Uuid,
    pub title: String,
    pub location: String,
    pub price: BigDecimal,
    pub description: String,
    pub image: Option<String>,
    pub status: PropertyStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

impl Property {
    /// Price rendered with the three-tier K/M suffix contract.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        // NUMERIC(12,2) always fits in an f64.
        format_price(self.price.to_f64().unwrap_or_default())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::property)]
pub struct NewProperty<'a> {
    pub id: uuid::Uuid,
    pub sector_id: uuid::Uuid,
    pub title: &'a str,
    pub location: &'a str,
    pub price: BigDecimal,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub status: PropertyStatus,
}

/// Partial update for a property listing. `None` fields are left unchanged;
/// `updated_at` is refreshed by the query layer on every apply.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::property)]
pub struct PropertyChangeset<'a> {
    pub title: Option<&'a str>,
    pub location: Option<&'a str>,
    pub price: Option<BigDecimal>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub status: Option<PropertyStatus>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn property(price: &str) -> Property {
        Property {
            id: uuid::Uuid::now_v7(),
            sector_id: uuid::Uuid::now_v7(),
            title: "Hillside Villa".to_owned(),
            location: "North Ridge".to_owned(),
            price: BigDecimal::from_str(price).unwrap(),
            description: String::new(),
            image: None,
            status: PropertyStatus::New,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            is_active: true,
        }
    }

    #[test]
    fn test_formatted_price_millions() {
        assert_eq!(property("2500000.00").formatted_price(), "$2.5M");
    }

    #[test]
    fn test_formatted_price_thousands() {
        assert_eq!(property("45000.00").formatted_price(), "$45K");
    }

    #[test]
    fn test_formatted_price_small() {
        assert_eq!(property("850.00").formatted_price(), "$850");
    }

    #[test]
    fn test_admin_label_is_title() {
        assert_eq!(property("850.00").to_string(), "Hillside Villa");
    }
}
