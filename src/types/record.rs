//! Record types for the product catalog
//!
//! A [`Record`] holds the raw text fields of one catalog line. A
//! [`Product`] is the typed view of a record with a decimal price.

use super::error::CatalogError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw fields of one catalog line
///
/// Fields are kept exactly as they appear in the file, without coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub price: String,

    /// Fields after the third one
    ///
    /// Only present when a name or price contained a comma when it was
    /// written, which shifts the remaining text into extra fields.
    pub extra: Vec<String>,
}

impl Record {
    /// Create a record from its three fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            extra: Vec::new(),
        }
    }

    /// All fields in line order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str(), self.price.as_str()];
        fields.extend(self.extra.iter().map(String::as_str));
        fields
    }
}

/// Typed product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

impl TryFrom<Record> for Product {
    type Error = CatalogError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        if !record.extra.is_empty() {
            return Err(CatalogError::invalid_record(
                &record.id,
                format!("expected 3 fields, found {}", record.fields().len()),
            ));
        }

        let price = Decimal::from_str(record.price.trim()).map_err(|_| {
            CatalogError::invalid_record(
                &record.id,
                format!("price '{}' is not a number", record.price),
            )
        })?;

        Ok(Product {
            id: record.id,
            name: record.name,
            price,
        })
    }
}
