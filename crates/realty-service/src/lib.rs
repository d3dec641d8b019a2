pub mod account;
pub mod auth;
pub mod error;
pub mod listing;
pub mod submission;
pub mod validate;
