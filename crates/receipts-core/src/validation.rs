//! # Validation Module
//!
//! Field parsers for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (axum Json extractor)                                   │
//! │  └── Body must be JSON shaped like ReceiptPayload                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Strict formats (YYYY-MM-DD, HH:MM, 12.34)                         │
//! │  ├── Calendar / clock ranges                                           │
//! │  └── Non-empty retailer                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Points engine (only ever sees valid Receipts)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipts_core::validation::{parse_date, parse_time};
//!
//! assert!(parse_date("2022-01-01").is_ok());
//! assert!(parse_date("05-02").is_err());
//! assert!(parse_time("25:02").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const PURCHASE_DATE_FIELD: &str = "purchaseDate";
pub const PURCHASE_TIME_FIELD: &str = "purchaseTime";
pub const RETAILER_FIELD: &str = "retailer";
pub const ID_FIELD: &str = "id";

// =============================================================================
// Date & Time
// =============================================================================

/// Parses a strict `YYYY-MM-DD` purchase date.
///
/// ## Rules
/// - Exactly 10 characters: 4-digit year, 2-digit month, 2-digit day
/// - Hyphen separators only
/// - Must be a real calendar date (`2022-02-30` is rejected)
pub fn parse_date(s: &str) -> ValidationResult<NaiveDate> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());

    if !shaped {
        return Err(ValidationError::invalid_format(
            PURCHASE_DATE_FIELD,
            "expected YYYY-MM-DD",
        ));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        ValidationError::invalid_format(PURCHASE_DATE_FIELD, "not a calendar date")
    })
}

/// Parses a strict 24-hour `HH:MM` purchase time.
///
/// ## Rules
/// - Exactly 5 characters with a colon in the middle
/// - Hour 00-23, minute 00-59
///
/// ```text
/// "13:01" → Ok(13:01)
/// "02"    → InvalidFormat
/// ":01"   → InvalidFormat
/// "25:02" → OutOfRange (0..=23)
/// "15:61" → OutOfRange (0..=59)
/// ```
pub fn parse_time(s: &str) -> ValidationResult<NaiveTime> {
    let (hour, minute) = s
        .split_once(':')
        .filter(|(h, m)| h.len() == 2 && m.len() == 2)
        .and_then(|(h, m)| Some((two_digits(h)?, two_digits(m)?)))
        .ok_or_else(|| ValidationError::invalid_format(PURCHASE_TIME_FIELD, "expected HH:MM"))?;

    if hour > 23 {
        return Err(ValidationError::out_of_range(PURCHASE_TIME_FIELD, 0, 23));
    }
    if minute > 59 {
        return Err(ValidationError::out_of_range(PURCHASE_TIME_FIELD, 0, 59));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ValidationError::invalid_format(PURCHASE_TIME_FIELD, "not a clock time"))
}

fn two_digits(s: &str) -> Option<u32> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

// =============================================================================
// Amounts
// =============================================================================

/// Parses a non-negative decimal amount for `field`.
///
/// ## Example
/// ```rust
/// use receipts_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("total", "35.35").unwrap().cents(), 3535);
///
/// let err = parse_amount("items[0].price", "1,25").unwrap_err();
/// assert_eq!(err.field(), "items[0].price");
/// ```
pub fn parse_amount(field: &str, s: &str) -> ValidationResult<Money> {
    s.parse::<Money>()
        .map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

// =============================================================================
// Text Fields
// =============================================================================

/// Validates the retailer name: must not be blank.
pub fn validate_retailer(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required(RETAILER_FIELD));
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a receipt identifier string.
///
/// ## Example
/// ```rust
/// use receipts_core::validation::validate_receipt_id;
///
/// assert!(validate_receipt_id("4a77ec9d-5334-43d0-a9e1-4fca8807bf8f").is_ok());
/// assert!(validate_receipt_id("1278").is_err());
/// ```
pub fn validate_receipt_id(id: &str) -> ValidationResult<Uuid> {
    if id.trim().is_empty() {
        return Err(ValidationError::required(ID_FIELD));
    }

    Uuid::parse_str(id)
        .map_err(|_| ValidationError::invalid_format(ID_FIELD, "must be a valid UUID"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2022-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 5, 1).unwrap());

        assert!(parse_date("2024-02-29").is_ok()); // leap day
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        for bad in [
            "05-02",
            "20-01-02",
            "",
            "2022/01/02",
            "2022-1-02",
            "2022-01-2",
            "2022-0a-02",
            "+022-01-02",
            "2022-01-02 ",
            "2022-13-01",
            "2022-02-30",
            "2023-02-29",
        ] {
            let err = parse_date(bad).unwrap_err();
            assert_eq!(err.field(), PURCHASE_DATE_FIELD, "input {:?}", bad);
        }
    }

    #[test]
    fn test_parse_time() {
        let time = parse_time("13:01").unwrap();
        assert_eq!((time.hour(), time.minute()), (13, 1));

        assert!(parse_time("00:00").is_ok());
        assert!(parse_time("23:59").is_ok());
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        assert_eq!(
            parse_time("25:02").unwrap_err(),
            ValidationError::out_of_range(PURCHASE_TIME_FIELD, 0, 23)
        );
        assert_eq!(
            parse_time("15:61").unwrap_err(),
            ValidationError::out_of_range(PURCHASE_TIME_FIELD, 0, 59)
        );

        for bad in ["02", ":01", "", "1:05", "12:5", "ab:cd", "12-30", "12:30:00", "+1:30"] {
            let err = parse_time(bad).unwrap_err();
            assert_eq!(err.field(), PURCHASE_TIME_FIELD, "input {:?}", bad);
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("total", "25.00").unwrap().cents(), 2500);
        assert_eq!(parse_amount("total", "0.01").unwrap().cents(), 1);

        let err = parse_amount("items[3].price", "-1.00").unwrap_err();
        assert_eq!(err.field(), "items[3].price");
        assert!(parse_amount("total", "1.234").is_err());
        assert!(parse_amount("total", "").is_err());
    }

    #[test]
    fn test_validate_retailer() {
        assert!(validate_retailer("M&M Corner Market").is_ok());
        assert_eq!(validate_retailer("   ").unwrap_err().field(), RETAILER_FIELD);
        assert!(validate_retailer("").is_err());
    }

    #[test]
    fn test_validate_receipt_id() {
        assert!(validate_receipt_id("4a77ec9d-5334-43d0-a9e1-4fca8807bf8f").is_ok());
        assert_eq!(validate_receipt_id("").unwrap_err().field(), ID_FIELD);
        assert_eq!(validate_receipt_id("1278").unwrap_err().field(), ID_FIELD);
    }
}
