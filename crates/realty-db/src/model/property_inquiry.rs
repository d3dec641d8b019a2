use std::fmt;

use diesel::{pg::Pg, prelude::*};
use ipnetwork::IpNetwork;

use crate::db::schema;
use crate::model;

/// Inquiry about a specific property, deleted with it.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::property_inquiry)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::property::Property, foreign_key = property_id))]
#[diesel(belongs_to(model::user::User, foreign_key = user_id))]
pub struct PropertyInquiry {
    pub id: uuid::Uuid,
    pub property_id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub responded: bool,
    pub ip_address: Option<IpNetwork>,
}

/// Inquiry joined with its property, for administrative listings that label
/// rows with the property title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInquiryWithProperty {
    pub inquiry: PropertyInquiry,
    pub property: model::property::Property,
}

impl fmt::Display for PropertyInquiryWithProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.inquiry.full_name,
            self.property.title,
            self.inquiry.submitted_at.format("%Y-%m-%d %H:%M")
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::property_inquiry)]
pub struct NewPropertyInquiry<'a> {
    pub id: uuid::Uuid,
    pub property_id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    pub ip_address: Option<IpNetwork>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_admin_label_includes_property_title() {
        let property = model::property::Property {
            id: uuid::Uuid::now_v7(),
            sector_id: uuid::Uuid::now_v7(),
            title: "Hillside Villa".to_owned(),
            location: "North Ridge".to_owned(),
            price: BigDecimal::from_str("450000.00").unwrap(),
            description: String::new(),
            image: None,
            status: crate::db::enums::PropertyStatus::New,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            is_active: true,
        };

        let inquiry = PropertyInquiry {
            id: uuid::Uuid::now_v7(),
            property_id: property.id,
            user_id: None,
            full_name: "Mia Chen".to_owned(),
            email: "mia@example.com".to_owned(),
            phone: "555-0123".to_owned(),
            message: "Is it still available?".to_owned(),
            submitted_at: chrono::Utc.with_ymd_and_hms(2026, 5, 1, 16, 45, 0).unwrap(),
            responded: false,
            ip_address: None,
        };

        let joined = PropertyInquiryWithProperty { inquiry, property };
        assert_eq!(
            joined.to_string(),
            "Mia Chen - Hillside Villa - 2026-05-01 16:45"
        );
    }
}
