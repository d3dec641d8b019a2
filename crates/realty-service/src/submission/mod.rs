pub mod appointment;
pub mod contact;
pub mod inquiry;
pub mod property_inquiry;
