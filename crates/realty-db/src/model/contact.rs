use std::fmt;

use diesel::{pg::Pg, prelude::*};

use crate::db::schema;
use crate::model;

/// Contact form submission. Created on form submit; only `responded` is
/// mutated afterwards, and rows are never deleted by the system.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::contact)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::user::User, foreign_key = user_id))]
pub struct Contact {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub comments: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub responded: bool,
}

impl fmt::Display for Contact {
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
#[diesel(table_name = schema::contact)]
pub struct NewContact<'a> {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub comments: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_admin_label() {
        let contact = Contact {
            id: uuid::Uuid::now_v7(),
            user_id: None,
            name: "Ana Petrova".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: None,
            comments: None,
            submitted_at: chrono::Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            responded: false,
        };

        assert_eq!(
            contact.to_string(),
            "Ana Petrova - ana@example.com - 2026-03-14 09:30"
        );
    }
}
