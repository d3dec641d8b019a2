pub mod property;
pub mod sector;
