//! Unit tests for the entity query builders.
//!
//! These run without a database: they assert that the builders produce valid
//! queries and that the generated SQL carries the contracts that matter
//! (ordering clauses, refreshed timestamps, untouched slug).

use diesel::prelude::*;
use diesel::query_builder::QueryFragment;

use super::*;
use crate::db::enums::AppointmentStatus;
use crate::db::schema::{appointment as appointment_t, property as property_t, sector as sector_t};
use crate::model::property::PropertyChangeset;
use crate::model::sector::SectorRename;

fn sql_of<Q>(query: &Q) -> String
where
    Q: QueryFragment<diesel::pg::Pg>,
{
    diesel::debug_query::<diesel::pg::Pg, _>(query).to_string()
}

#[test]
fn test_contact_builders_are_valid() {
    let _ = sql_of(&contact::all());
    let _ = sql_of(&contact::by_id(uuid::Uuid::new_v4()));
    let _ = sql_of(&contact::unresponded());
}

#[test]
fn test_contact_default_order_is_newest_first() {
    let sql = sql_of(&contact::newest_first());
    assert!(sql.contains("ORDER BY"), "missing order clause: {sql}");
    assert!(sql.contains("submitted_at"), "missing sort column: {sql}");
    assert!(sql.contains("DESC"), "order must be descending: {sql}");
}

#[test]
fn test_appointment_default_order_is_date_then_time_desc() {
    let sql = sql_of(&appointment::default_order());
    let date_pos = sql
        .find("appointment_date")
        .unwrap_or_else(|| panic!("missing date column: {sql}"));
    let time_pos = sql
        .find("appointment_time")
        .unwrap_or_else(|| panic!("missing time column: {sql}"));
    assert!(date_pos < time_pos, "date must sort before time: {sql}");
    assert_eq!(sql.matches("DESC").count(), 2, "both sorts descend: {sql}");
}

#[test]
fn test_appointment_by_status_builds() {
    let _ = sql_of(&appointment::by_status(AppointmentStatus::Confirmed));
}

#[test]
fn test_appointment_status_update_refreshes_updated_at() {
    let statement = diesel::update(appointment_t::table.find(uuid::Uuid::new_v4())).set((
        appointment_t::status.eq(AppointmentStatus::Confirmed),
        appointment_t::updated_at.eq(diesel::dsl::now),
    ));
    let sql = sql_of(&statement);
    assert!(sql.contains("updated_at"), "must refresh updated_at: {sql}");
}

#[test]
fn test_inquiry_default_order_is_newest_first() {
    let sql = sql_of(&inquiry::newest_first());
    assert!(sql.contains("submitted_at"), "missing sort column: {sql}");
    assert!(sql.contains("DESC"), "order must be descending: {sql}");
}

#[test]
fn test_sector_rename_never_touches_slug() {
    let statement = diesel::update(sector_t::table.find(uuid::Uuid::new_v4()))
        .set(&SectorRename { name: "Harborfront" });
    let sql = sql_of(&statement);
    assert!(sql.contains("name"), "rename must set the name: {sql}");
    assert!(!sql.contains("slug"), "rename must not touch the slug: {sql}");
}

#[test]
fn test_sector_lookup_builders_are_valid() {
    let _ = sql_of(&sector::by_slug("downtown-homes"));
    let _ = sql_of(&sector::by_name("Downtown Homes"));
}

#[test]
fn test_property_active_filters_and_orders() {
    let sql = sql_of(&property::active());
    assert!(sql.contains("is_active"), "missing active filter: {sql}");
    assert!(sql.contains("created_at"), "missing sort column: {sql}");
    assert!(sql.contains("DESC"), "order must be descending: {sql}");
}

#[test]
fn test_property_update_refreshes_updated_at() {
    let changes = PropertyChangeset {
        title: Some("Hillside Villa II"),
        ..PropertyChangeset::default()
    };
    let statement = diesel::update(property_t::table.find(uuid::Uuid::new_v4()))
        .set((&changes, property_t::updated_at.eq(diesel::dsl::now)));
    let sql = sql_of(&statement);
    assert!(sql.contains("updated_at"), "must refresh updated_at: {sql}");
    assert!(sql.contains("title"), "must carry the changed field: {sql}");
}

#[test]
fn test_property_inquiry_builders_are_valid() {
    let _ = sql_of(&property_inquiry::by_property(uuid::Uuid::new_v4()));
    let sql = sql_of(&property_inquiry::newest_first());
    assert!(sql.contains("DESC"), "order must be descending: {sql}");
}

#[test]
fn test_user_builders_are_valid() {
    let _ = sql_of(&user::by_id(uuid::Uuid::new_v4()));
    let _ = sql_of(&user::by_email("ana@example.com"));
}
