//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero/negative or invalid.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Email syntax validation failed.
    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! positive_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_negative_f64_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Constructs a finite numeric value that is zero or greater.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if value.is_finite() && value >= 0.0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for f64 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(SpaceId, "Unique identifier for a bookable space.", "space_id");
id_newtype!(
    SpaceTypeId,
    "Unique identifier for a space type.",
    "space_type_id"
);
id_newtype!(
    LocationId,
    "Unique identifier for a location.",
    "location_id"
);
id_newtype!(BookingId, "Unique identifier for a booking.", "booking_id");

non_empty_string_newtype!(
    SpaceName,
    "Space display name enforcing non-empty values.",
    "space name"
);
non_empty_string_newtype!(
    CustomerName,
    "Customer name enforcing non-empty values.",
    "customer name"
);

positive_i32_newtype!(
    Capacity,
    "Maximum number of people a space accommodates.",
    "capacity"
);
positive_i32_newtype!(
    PeopleCount,
    "Number of people attending a booking.",
    "people"
);

non_negative_f64_newtype!(
    HourlyRate,
    "Non-negative hourly rate in standard currency units.",
    "hourly rate"
);

impl PeopleCount {
    /// Clamp to the minimum of one attendee, used by the filter path where
    /// a missing or zero value means "any single person".
    pub const fn floor_one(value: i32) -> Self {
        if value > 1 { Self(value) } else { Self(1) }
    }
}

/// Syntactically valid email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Constructs a trimmed email and validates its syntax.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "email")
            .map_err(|_| TypeConstraintError::InvalidEmail("email"))?;
        if !trimmed.validate_email() {
            return Err(TypeConstraintError::InvalidEmail("email"));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned email.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CustomerEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CustomerEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CustomerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CustomerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerEmail> for String {
    fn from(value: CustomerEmail) -> Self {
        value.0
    }
}

/// Closed set of space categories used for pricing.
///
/// Slugs not in this set are still accepted by the catalogue; they simply
/// price at the neutral 1.0 multiplier. Adding a category here is a
/// deliberate, reviewed step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceCategory {
    MeetingRoom,
    DayOffice,
    CoWorking,
    Private,
    Custom,
}

impl SpaceCategory {
    /// Parse a category slug. Returns `None` for unrecognised slugs.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim() {
            "meeting-room" => Some(Self::MeetingRoom),
            "day-office" => Some(Self::DayOffice),
            "co-working" => Some(Self::CoWorking),
            "private" => Some(Self::Private),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Slug used in persistence and over the wire.
    pub const fn as_slug(self) -> &'static str {
        match self {
            Self::MeetingRoom => "meeting-room",
            Self::DayOffice => "day-office",
            Self::CoWorking => "co-working",
            Self::Private => "private",
            Self::Custom => "custom",
        }
    }

    /// Pricing factor applied for this category.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::MeetingRoom => 1.0,
            Self::DayOffice => 1.05,
            Self::CoWorking => 0.9,
            Self::Private => 1.2,
            Self::Custom => 1.3,
        }
    }
}

impl Display for SpaceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_non_empty_strings() {
        let value = SpaceName::new("  Harbour Suite  ").unwrap();
        assert_eq!(value.as_str(), "Harbour Suite");
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = SpaceId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("space_id"));
    }

    #[test]
    fn validates_email_syntax() {
        assert!(CustomerEmail::new("booker@example.com").is_ok());
        let err = CustomerEmail::new("not-an-email").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidEmail("email"));
        assert!(CustomerEmail::new("   ").is_err());
    }

    #[test]
    fn hourly_rate_allows_zero() {
        assert_eq!(HourlyRate::new(0.0).unwrap().get(), 0.0);
    }

    #[test]
    fn hourly_rate_rejects_negative_numbers() {
        assert_eq!(
            HourlyRate::new(-0.01).unwrap_err(),
            TypeConstraintError::NegativeNumber("hourly rate")
        );
    }

    #[test]
    fn people_count_floors_at_one() {
        assert_eq!(PeopleCount::floor_one(0).get(), 1);
        assert_eq!(PeopleCount::floor_one(-3).get(), 1);
        assert_eq!(PeopleCount::floor_one(5).get(), 5);
    }

    #[test]
    fn parses_known_category_slugs() {
        assert_eq!(
            SpaceCategory::from_slug("co-working"),
            Some(SpaceCategory::CoWorking)
        );
        assert_eq!(SpaceCategory::from_slug("warehouse"), None);
    }
}
