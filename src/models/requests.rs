//! Request DTOs for the listings API
//!
//! Defines the structure of incoming query strings and JSON bodies.

use serde::Deserialize;

use crate::models::{Price, PropertyFields};

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum location length in characters
pub const MAX_LOCATION_LENGTH: usize = 100;

/// Query string of `GET /properties`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Kept as text so a malformed page falls back to page 1 instead of a 400
    #[serde(default)]
    pub page: Option<String>,
}

/// Price as sent by clients: `"1250.50"` or `1250.5`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Text(String),
    Number(serde_json::Number),
}

impl PriceInput {
    fn as_text(&self) -> String {
        match self {
            PriceInput::Text(text) => text.clone(),
            PriceInput::Number(number) => number.to_string(),
        }
    }
}

/// Body of `POST /properties` and `PUT /properties/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceInput,
    pub location: String,
}

impl PropertyPayload {
    /// Validates the payload and converts it into store fields.
    ///
    /// Returns a message describing the first problem found.
    pub fn into_fields(self) -> Result<PropertyFields, String> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }

        let location = self.location.trim().to_string();
        if location.is_empty() {
            return Err("Location cannot be empty".to_string());
        }
        if location.chars().count() > MAX_LOCATION_LENGTH {
            return Err(format!(
                "Location exceeds maximum length of {} characters",
                MAX_LOCATION_LENGTH
            ));
        }

        let price: Price = self
            .price
            .as_text()
            .parse()
            .map_err(|err| format!("Invalid price: {}", err))?;

        Ok(PropertyFields {
            title,
            description: self.description,
            price,
            location,
        })
    }
}
