//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire (untrusted)               Validated (immutable)                   │
//! │  ┌──────────────────┐           ┌──────────────────┐                   │
//! │  │ ReceiptPayload   │  parse    │ Receipt          │                   │
//! │  │  retailer?       │ ───────►  │  retailer        │                   │
//! │  │  purchaseDate?   │           │  purchase_date   │ NaiveDate         │
//! │  │  purchaseTime?   │           │  purchase_time   │ NaiveTime         │
//! │  │  total?          │           │  total           │ Money             │
//! │  │  items?[]        │           │  items[]         │                   │
//! │  └──────────────────┘           └────────┬─────────┘                   │
//! │                                          │ calculate_points            │
//! │                                          ▼                              │
//! │                                 ┌──────────────────┐                   │
//! │                                 │ Points (u64)     │                   │
//! │                                 └──────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payload fields are all `Option` so that a missing field surfaces as an
//! invalid parameter naming that field, not as a generic body error.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{parse_amount, parse_date, parse_time, validate_retailer, ValidationResult};

// =============================================================================
// Wire Payloads
// =============================================================================

/// A receipt as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptPayload {
    pub retailer: Option<String>,

    /// `YYYY-MM-DD`
    pub purchase_date: Option<String>,

    /// `HH:MM`, 24-hour
    pub purchase_time: Option<String>,

    pub items: Option<Vec<ItemPayload>>,

    /// Decimal string such as `"35.35"`.
    pub total: Option<String>,
}

/// One purchased item as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemPayload {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

/// Response body for a processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response body for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: Points,
}

// =============================================================================
// Points
// =============================================================================

/// Reward points awarded for a receipt. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Points(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Validated Receipt
// =============================================================================

/// A purchased item after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// As submitted (untrimmed). May be blank.
    pub short_description: String,
    pub price: Money,
}

/// A receipt whose every field has been parsed and checked.
///
/// ## Invariants
/// - `retailer` is non-empty after trimming
/// - `items` has at least one entry, each with a non-negative price
/// - `total` is non-negative (not cross-checked against the item sum)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Money,
}

impl Receipt {
    /// Validates a payload into a `Receipt`.
    ///
    /// ## Order
    /// ```text
    /// purchaseDate → purchaseTime → retailer → total → items
    /// ```
    /// The first failing field is reported; nothing after it is inspected.
    pub fn parse(payload: &ReceiptPayload) -> ValidationResult<Self> {
        let purchase_date = parse_date(required("purchaseDate", &payload.purchase_date)?)?;
        let purchase_time = parse_time(required("purchaseTime", &payload.purchase_time)?)?;

        let retailer = required("retailer", &payload.retailer)?;
        validate_retailer(retailer)?;

        let total = parse_amount("total", required("total", &payload.total)?)?;

        let raw_items = payload
            .items
            .as_deref()
            .filter(|items| !items.is_empty())
            .ok_or_else(|| ValidationError::required("items"))?;

        let items = raw_items
            .iter()
            .enumerate()
            .map(|(i, item)| Item::parse(i, item))
            .collect::<ValidationResult<Vec<_>>>()?;

        Ok(Receipt {
            retailer: retailer.to_string(),
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }

    /// Day of month of the purchase (1-31).
    #[inline]
    pub fn purchase_day(&self) -> u32 {
        self.purchase_date.day()
    }
}

impl Item {
    fn parse(index: usize, payload: &ItemPayload) -> ValidationResult<Self> {
        let description_field = format!("items[{}].shortDescription", index);
        let price_field = format!("items[{}].price", index);

        let short_description = required(&description_field, &payload.short_description)?;

        let price = parse_amount(&price_field, required(&price_field, &payload.price)?)?;

        Ok(Item {
            short_description: short_description.to_string(),
            price,
        })
    }
}

fn required<'a>(field: &str, value: &'a Option<String>) -> ValidationResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| ValidationError::required(field))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ReceiptPayload {
        ReceiptPayload {
            retailer: Some("Target".to_string()),
            purchase_date: Some("2022-01-02".to_string()),
            purchase_time: Some("13:01".to_string()),
            items: Some(vec![ItemPayload {
                short_description: Some("Mountain Dew 12PK".to_string()),
                price: Some("5.05".to_string()),
            }]),
            total: Some("5.05".to_string()),
        }
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let payload: ReceiptPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.retailer.as_deref(), Some("Walgreens"));
        assert_eq!(payload.items.as_ref().map(Vec::len), Some(2));

        let receipt = Receipt::parse(&payload).unwrap();
        assert_eq!(receipt.total.cents(), 265);
        assert_eq!(receipt.items[1].price.cents(), 140);
        assert_eq!(receipt.purchase_day(), 2);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut p = payload();
        p.purchase_date = None;
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "purchaseDate");

        let mut p = payload();
        p.retailer = None;
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "retailer");

        let mut p = payload();
        p.items = Some(vec![]);
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "items");

        let mut p = payload();
        p.items = Some(vec![ItemPayload {
            short_description: Some("Gum".to_string()),
            price: None,
        }]);
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "items[0].price");
    }

    #[test]
    fn test_date_and_time_are_checked_first() {
        let mut p = payload();
        p.total = Some("not money".to_string());
        p.purchase_date = Some("05-02".to_string());
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "purchaseDate");

        p.purchase_date = Some("2022-05-02".to_string());
        p.purchase_time = Some("25:02".to_string());
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "purchaseTime");

        p.purchase_time = Some("12:00".to_string());
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "total");
    }

    #[test]
    fn test_bad_item_price_names_its_index() {
        let mut p = payload();
        p.items = Some(vec![
            ItemPayload {
                short_description: Some("Gum".to_string()),
                price: Some("1.00".to_string()),
            },
            ItemPayload {
                short_description: Some("Soda".to_string()),
                price: Some("-2.00".to_string()),
            },
        ]);
        assert_eq!(Receipt::parse(&p).unwrap_err().field(), "items[1].price");
    }

    #[test]
    fn test_blank_description_is_accepted() {
        let mut p = payload();
        p.items = Some(vec![ItemPayload {
            short_description: Some("   ".to_string()),
            price: Some("10.00".to_string()),
        }]);
        let receipt = Receipt::parse(&p).unwrap();
        assert_eq!(receipt.items[0].short_description, "   ");

        p.items = Some(vec![ItemPayload {
            short_description: None,
            price: Some("10.00".to_string()),
        }]);
        assert_eq!(
            Receipt::parse(&p).unwrap_err().field(),
            "items[0].shortDescription"
        );
    }

    #[test]
    fn test_points_response_body() {
        let body = PointsResponse {
            points: Points::new(16),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"points":16}"#);
    }
}
