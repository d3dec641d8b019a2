use std::fmt;

use diesel::{pg::Pg, prelude::*};

use crate::db::enums::{AppointmentStatus, AppointmentType};
use crate::db::schema;
use crate::model;

/// Booked consultation or viewing. Status transitions are administrator
/// driven; `updated_at` refreshes on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::appointment)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::user::User, foreign_key = user_id))]
pub struct Appointment {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub appointment_date: chrono::NaiveDate,
    pub appointment_time: chrono::NaiveTime,
    pub appointment_type: AppointmentType,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} at {} ({})",
            self.full_name,
            self.appointment_date,
            self.appointment_time,
            self.status.label()
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::appointment)]
pub struct NewAppointment<'a> {
    pub id: uuid::Uuid,
    pub user_id: Option<uuid::Uuid>,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub appointment_date: chrono::NaiveDate,
    pub appointment_time: chrono::NaiveTime,
    pub appointment_type: AppointmentType,
    pub message: Option<&'a str>,
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone};

    #[test]
    fn test_admin_label() {
        let appointment = Appointment {
            id: uuid::Uuid::now_v7(),
            user_id: None,
            full_name: "Jordan Lee".to_owned(),
            email: "jordan@example.com".to_owned(),
            phone: "555-0199".to_owned(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
            appointment_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            appointment_type: AppointmentType::PropertyViewing,
            message: None,
            status: AppointmentStatus::Pending,
            created_at: chrono::Utc.with_ymd_and_hms(2026, 8, 20, 8, 0, 0).unwrap(),
            updated_at: chrono::Utc.with_ymd_and_hms(2026, 8, 20, 8, 0, 0).unwrap(),
        };

        assert_eq!(
            appointment.to_string(),
            "Jordan Lee - 2026-09-02 at 14:00:00 (Pending)"
        );
    }
}
