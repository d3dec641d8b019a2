//! Database enum types with Diesel serialization.
//!
//! This module provides type-safe enum wrappers for database CHECK constraints.
//! Each enum implements `ToSql` and `FromSql` for automatic conversion between
//! Rust and `PostgreSQL`, plus `FromStr` for form input and a human-readable
//! display label.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use realty_core::error::CoreError;

/// Appointment consultation type.
///
/// Maps to `appointment.appointment_type` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    HomeSelling,
    HomeBuying,
    PropertyViewing,
    GeneralInquiry,
}

impl ToSql<Text, Pg> for AppointmentType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for AppointmentType {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"home_selling" => Ok(Self::HomeSelling),
            b"home_buying" => Ok(Self::HomeBuying),
            b"property_viewing" => Ok(Self::PropertyViewing),
            b"general_inquiry" => Ok(Self::GeneralInquiry),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl AppointmentType {
    /// Returns the database string representation of this appointment type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HomeSelling => "home_selling",
            Self::HomeBuying => "home_buying",
            Self::PropertyViewing => "property_viewing",
            Self::GeneralInquiry => "general_inquiry",
        }
    }

    /// Returns the human-readable label shown in administrative listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeSelling => "Home Selling Consultation",
            Self::HomeBuying => "Home Buying Consultation",
            Self::PropertyViewing => "Property Viewing",
            Self::GeneralInquiry => "General Inquiry",
        }
    }
}

impl FromStr for AppointmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home_selling" => Ok(Self::HomeSelling),
            "home_buying" => Ok(Self::HomeBuying),
            "property_viewing" => Ok(Self::PropertyViewing),
            "general_inquiry" => Ok(Self::GeneralInquiry),
            other => Err(CoreError::ValidationError(format!(
                "Unknown appointment type: {other}"
            ))),
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment lifecycle status. Transitions are administrator-driven; the
/// entities themselves never advance it.
///
/// Maps to `appointment.status` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl ToSql<Text, Pg> for AppointmentStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for AppointmentStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(Self::Pending),
            b"confirmed" => Ok(Self::Confirmed),
            b"completed" => Ok(Self::Completed),
            b"cancelled" => Ok(Self::Cancelled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl AppointmentStatus {
    /// Returns the database string representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human-readable label shown in administrative listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(CoreError::ValidationError(format!(
                "Unknown appointment status: {other}"
            ))),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing badge for properties.
///
/// Maps to `property.status` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    New,
    Recent,
    Trendy,
}

impl ToSql<Text, Pg> for PropertyStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for PropertyStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"new" => Ok(Self::New),
            b"recent" => Ok(Self::Recent),
            b"trendy" => Ok(Self::Trendy),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl PropertyStatus {
    /// Returns the database string representation of this property status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Recent => "recent",
            Self::Trendy => "trendy",
        }
    }

    /// Returns the human-readable label shown in administrative listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Recent => "Recent",
            Self::Trendy => "Trendy",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "recent" => Ok(Self::Recent),
            "trendy" => Ok(Self::Trendy),
            other => Err(CoreError::ValidationError(format!(
                "Unknown property status: {other}"
            ))),
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_type_round_trip() {
        for ty in [
            AppointmentType::HomeSelling,
            AppointmentType::HomeBuying,
            AppointmentType::PropertyViewing,
            AppointmentType::GeneralInquiry,
        ] {
            assert_eq!(ty.as_str().parse::<AppointmentType>().ok(), Some(ty));
        }
    }

    #[test]
    fn test_appointment_type_labels() {
        assert_eq!(
            AppointmentType::HomeSelling.label(),
            "Home Selling Consultation"
        );
        assert_eq!(
            AppointmentType::HomeBuying.label(),
            "Home Buying Consultation"
        );
        assert_eq!(AppointmentType::PropertyViewing.label(), "Property Viewing");
        assert_eq!(AppointmentType::GeneralInquiry.label(), "General Inquiry");
    }

    #[test]
    fn test_appointment_status_round_trip() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(
                status.as_str().parse::<AppointmentStatus>().ok(),
                Some(status)
            );
        }
    }

    #[test]
    fn test_property_status_round_trip() {
        for status in [
            PropertyStatus::New,
            PropertyStatus::Recent,
            PropertyStatus::Trendy,
        ] {
            assert_eq!(status.as_str().parse::<PropertyStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!("walk_in".parse::<AppointmentType>().is_err());
        assert!("archived".parse::<AppointmentStatus>().is_err());
        assert!("stale".parse::<PropertyStatus>().is_err());
    }

    #[test]
    fn test_serde_matches_database_strings() {
        let json = serde_json::to_string(&AppointmentType::HomeSelling).unwrap();
        assert_eq!(json, "\"home_selling\"");
        let parsed: PropertyStatus = serde_json::from_str("\"trendy\"").unwrap();
        assert_eq!(parsed, PropertyStatus::Trendy);
    }
}
