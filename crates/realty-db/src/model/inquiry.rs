use std::fmt;

use diesel::{pg::Pg, prelude::*};
use ipnetwork::IpNetwork;

use crate::db::schema;
use crate::model;
use realty_core::util::text::capitalize;

/// General contact inquiry with free-form service interests.
///
/// `services_interested` is raw comma-separated text. Tokens are never
/// validated or de-duplicated at the storage boundary; the accessors below
/// parse and format on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::contact_inquiry)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::user::User, foreign_key = user_id))]
pub struct ContactInquiry {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub services_interested: Option<String>,
    pub consent_given: bool,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub responded: bool,
    pub ip_address: Option<IpNetwork>,
}

impl ContactInquiry {
    /// Splits the stored services string into trimmed tokens, preserving
    /// duplicates and unrecognized values verbatim.
    #[must_use]
    pub fn services_list(&self) -> Vec<String> {
        match &self.services_interested {
            Some(raw) if !raw.is_empty() => {
                raw.split(',').map(|s| s.trim().to_owned()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Human-readable join of the service tokens, capitalized.
    #[must_use]
    pub fn services_display(&self) -> String {
        let services = self.services_list();
        if services.is_empty() {
            "None selected".to_owned()
        } else {
            services
                .iter()
                .map(|s| capitalize(s))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl fmt::Display for ContactInquiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.name,
            self.email,
            self.submitted_at.format("%Y-%m-%d %H:%M")
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::contact_inquiry)]
pub struct NewContactInquiry<'a> {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub services_interested: Option<&'a str>,
    pub consent_given: bool,
    pub ip_address: Option<IpNetwork>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(services: Option<&str>) -> ContactInquiry {
        ContactInquiry {
            id: uuid::Uuid::now_v7(),
            user_id: None,
            name: "Sam Ortiz".to_owned(),
            email: "sam@example.com".to_owned(),
            message: "How can we help?".to_owned(),
            services_interested: services.map(ToOwned::to_owned),
            consent_given: true,
            submitted_at: chrono::Utc::now(),
            responded: false,
            ip_address: None,
        }
    }

    #[test]
    fn test_services_list_trims_tokens() {
        let inquiry = inquiry(Some("selling, renting"));
        assert_eq!(inquiry.services_list(), vec!["selling", "renting"]);
    }

    #[test]
    fn test_services_display_capitalizes() {
        let inquiry = inquiry(Some("selling, renting"));
        assert_eq!(inquiry.services_display(), "Selling, Renting");
    }

    #[test]
    fn test_none_selected_on_missing() {
        assert_eq!(inquiry(None).services_display(), "None selected");
        assert_eq!(inquiry(Some("")).services_display(), "None selected");
    }

    #[test]
    fn test_unrecognized_and_duplicate_tokens_survive() {
        let inquiry = inquiry(Some("selling,selling, flipping"));
        assert_eq!(
            inquiry.services_list(),
            vec!["selling", "selling", "flipping"]
        );
        assert_eq!(inquiry.services_display(), "Selling, Selling, Flipping");
    }
}
