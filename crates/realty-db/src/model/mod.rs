pub mod appointment;
pub mod contact;
pub mod inquiry;
pub mod property;
pub mod property_inquiry;
pub mod sector;
pub mod user;
