//! Property record types
//!
//! The listing record owned by the record store, and the fixed-point price
//! type that keeps it lossless through the cache.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// == Price ==
/// Non-negative price with exactly two fractional digits, stored as cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

/// Reason a price string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("price is empty")]
    Empty,
    #[error("price must be a non-negative decimal with at most two fractional digits: {0:?}")]
    Malformed(String),
    #[error("price is too large: {0}")]
    Overflow(String),
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Renders the price the way listings display it, e.g. `$100,000.00`.
    pub fn formatted(&self) -> String {
        let whole = (self.cents / 100).to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("${}.{:02}", grouped, self.cents % 100)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) if !frac.is_empty() => (whole, frac),
            Some(_) => return Err(PriceParseError::Malformed(s.to_string())),
            None => (s, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || frac.len() > 2 || !all_digits(frac) {
            return Err(PriceParseError::Malformed(s.to_string()));
        }

        let overflow = || PriceParseError::Overflow(s.to_string());
        let whole: u64 = whole.parse().map_err(|_| overflow())?;
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => frac.parse::<u64>().map_err(|_| overflow())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac_cents))
            .map(Price::from_cents)
            .ok_or_else(overflow)
    }
}

// Decimal strings keep the cached JSON exact; floats would not.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// == Property ==
/// A real-estate listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
    /// Set once by the store on create
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Builds a record from its mutable fields.
    pub fn from_fields(id: u64, fields: PropertyFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            price: fields.price,
            location: fields.location,
            created_at,
        }
    }

    /// Replaces the mutable fields, keeping identity and creation time.
    pub fn apply(&mut self, fields: PropertyFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.price = fields.price;
        self.location = fields.location;
    }

    /// Case-insensitive substring match on title, description or location.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

// == Property Fields ==
/// The caller-supplied part of a property, used by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFields {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Property {
        Property {
            id: 1,
            title: "Seaside Villa".to_string(),
            description: "Four bedrooms, ocean view".to_string(),
            price: "1250000.50".parse().unwrap(),
            location: "Mombasa".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_price_parse() {
        assert_eq!("123".parse::<Price>().unwrap().cents(), 12_300);
        assert_eq!("123.4".parse::<Price>().unwrap().cents(), 12_340);
        assert_eq!("123.45".parse::<Price>().unwrap().cents(), 12_345);
        assert_eq!(" 0.05 ".parse::<Price>().unwrap().cents(), 5);
    }

    #[test]
    fn test_price_parse_rejects_bad_input() {
        assert_eq!("".parse::<Price>(), Err(PriceParseError::Empty));
        for bad in ["-1", "1.234", "abc", ".50", "1.", "1,000", "1e3", "1.2.3"] {
            assert!(bad.parse::<Price>().is_err(), "{bad:?} should be rejected");
        }
        assert!(matches!(
            "999999999999999999999".parse::<Price>(),
            Err(PriceParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_price_display_and_formatted() {
        let price = Price::from_cents(10_000_000);
        assert_eq!(price.to_string(), "100000.00");
        assert_eq!(price.formatted(), "$100,000.00");
        assert_eq!(Price::from_cents(5).formatted(), "$0.05");
        assert_eq!(Price::from_cents(99_999).formatted(), "$999.99");
        assert_eq!(Price::from_cents(123_456_789).formatted(), "$1,234,567.89");
    }

    #[test]
    fn test_price_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Price::from_cents(12_345)).unwrap();
        assert_eq!(json, r#""123.45""#);
    }

    #[test]
    fn test_property_json_is_lossless() {
        let property = sample();
        let json = serde_json::to_string(&property).unwrap();
        let back: Property = serde_json::from_str(&json).unwrap();

        assert_eq!(back, property);
        assert_eq!(back.price.cents(), 125_000_050);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut property = sample();
        let created_at = property.created_at;

        property.apply(PropertyFields {
            title: "Renovated Villa".to_string(),
            description: "Now with a pool".to_string(),
            price: Price::from_cents(1),
            location: "Malindi".to_string(),
        });

        assert_eq!(property.id, 1);
        assert_eq!(property.created_at, created_at);
        assert_eq!(property.title, "Renovated Villa");
    }

    #[test]
    fn test_matches_any_text_field() {
        let property = sample();
        assert!(property.matches("seaside"));
        assert!(property.matches("ocean"));
        assert!(property.matches("mombasa"));
        assert!(!property.matches("nairobi"));
    }
}
