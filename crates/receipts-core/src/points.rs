//! # Points Engine
//!
//! Awards reward points for a validated [`Receipt`].
//!
//! ## Rule Catalog
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                    Condition                        Points        │
//! │  ──────────────────────  ───────────────────────────────  ────────────  │
//! │  retailer_name           each ASCII letter/digit          +1 each       │
//! │  round_dollar_total      total is X.00                    +50           │
//! │  quarter_multiple_total  total % 0.25 == 0                +25           │
//! │  item_pairs              every two items                  +5 per pair   │
//! │  description_length      trimmed len % 3 == 0             ceil(p × 0.2) │
//! │  odd_purchase_day        day of month is odd              +6            │
//! │  afternoon_window        14:00 < time < 16:00             +10           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are independent and summed. Each one is a pure function of an
//! already-validated receipt. The only scoring failure is a sum that does
//! not fit in a `u64`, reported as [`ValidationError::Overflow`] on the
//! field that caused it.
//!
//! ## Example
//! ```rust
//! use receipts_core::points::score;
//! use receipts_core::{ItemPayload, ReceiptPayload};
//!
//! let payload = ReceiptPayload {
//!     retailer: Some("Target".into()),
//!     purchase_date: Some("2022-01-02".into()),
//!     purchase_time: Some("13:01".into()),
//!     total: Some("5.05".into()),
//!     items: Some(vec![ItemPayload {
//!         short_description: Some("Mountain Dew 12PK".into()),
//!         price: Some("5.05".into()),
//!     }]),
//! };
//!
//! let scored = score(&payload).unwrap();
//! assert_eq!(scored.points.value(), 6);
//! assert_eq!(scored.breakdown.retailer_name, 6);
//! ```

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Item, Points, Receipt, ReceiptPayload};
use crate::validation::ValidationResult;

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const QUARTER_CENTS: i64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
/// Description bonus is `ceil(price × NUMERATOR / DENOMINATOR)` (0.2).
pub const DESCRIPTION_PRICE_NUMERATOR: u32 = 1;
pub const DESCRIPTION_PRICE_DENOMINATOR: u32 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// Exclusive bounds of the afternoon window.
const AFTERNOON_START: (u32, u32) = (14, 0);
const AFTERNOON_END: (u32, u32) = (16, 0);

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub description_length: u64,
    pub odd_purchase_day: u64,
    pub afternoon_window: u64,
}

impl PointsBreakdown {
    /// Sum of every rule, or `None` if it does not fit in a `u64`.
    pub fn total(&self) -> Option<Points> {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.description_length,
            self.odd_purchase_day,
            self.afternoon_window,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
        .map(Points::new)
    }
}

/// A validated receipt together with how it scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub breakdown: PointsBreakdown,
    pub points: Points,
}

// =============================================================================
// Entry Points
// =============================================================================

/// Validates a payload and scores it.
///
/// ## Flow
/// ```text
/// ReceiptPayload ──► Receipt::parse ──► breakdown ──► total
///                         │                 │           │
///                         └─────────────────┴───────────┴── Err(Validation)
/// ```
pub fn score(payload: &ReceiptPayload) -> CoreResult<ScoredReceipt> {
    let receipt = Receipt::parse(payload)?;
    let breakdown = breakdown(&receipt)?;
    let points = checked_total(&breakdown)?;

    Ok(ScoredReceipt {
        receipt,
        breakdown,
        points,
    })
}

/// Total points for a validated receipt.
pub fn calculate_points(receipt: &Receipt) -> ValidationResult<Points> {
    checked_total(&breakdown(receipt)?)
}

/// Applies every rule and records what each contributed.
pub fn breakdown(receipt: &Receipt) -> ValidationResult<PointsBreakdown> {
    Ok(PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(receipt.total),
        quarter_multiple_total: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        description_length: description_points_sum(&receipt.items)?,
        odd_purchase_day: odd_day_points(receipt.purchase_day()),
        afternoon_window: afternoon_window_points(receipt.purchase_time),
    })
}

/// Description bonus summed over all items. Blames the item whose price
/// pushed the sum past `u64::MAX`.
fn description_points_sum(items: &[Item]) -> ValidationResult<u64> {
    items.iter().enumerate().try_fold(0u64, |sum, (i, item)| {
        sum.checked_add(description_length_points(item))
            .ok_or_else(|| ValidationError::overflow(format!("items[{}].price", i)))
    })
}

// The description bonus is the only rule that can approach `u64::MAX`.
fn checked_total(breakdown: &PointsBreakdown) -> ValidationResult<Points> {
    breakdown
        .total()
        .ok_or_else(|| ValidationError::overflow("items"))
}

// =============================================================================
// Rules
// =============================================================================

/// One point for every ASCII letter or digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points if the total has no cents.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER_CENTS) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// `ceil(price × 0.2)` if the trimmed description length is a multiple of 3.
///
/// Length counts characters, not bytes.
pub fn description_length_points(item: &Item) -> u64 {
    let len = item.short_description.trim().chars().count();
    if len % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    item.price
        .ceil_dollars_scaled(DESCRIPTION_PRICE_NUMERATOR, DESCRIPTION_PRICE_DENOMINATOR)
}

/// 6 points if the day of month is odd.
pub fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points if the purchase happened after 14:00 and before 16:00.
///
/// Both bounds are exclusive: 14:00 and 16:00 earn nothing.
pub fn afternoon_window_points(time: NaiveTime) -> u64 {
    let start = NaiveTime::from_hms_opt(AFTERNOON_START.0, AFTERNOON_START.1, 0);
    let end = NaiveTime::from_hms_opt(AFTERNOON_END.0, AFTERNOON_END.1, 0);

    match (start, end) {
        (Some(start), Some(end)) if time > start && time < end => AFTERNOON_WINDOW_POINTS,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::ItemPayload;
    use proptest::prelude::*;

    fn item(description: &str, price: &str) -> ItemPayload {
        ItemPayload {
            short_description: Some(description.to_string()),
            price: Some(price.to_string()),
        }
    }

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        total: &str,
        items: Vec<ItemPayload>,
    ) -> ReceiptPayload {
        ReceiptPayload {
            retailer: Some(retailer.to_string()),
            purchase_date: Some(date.to_string()),
            purchase_time: Some(time.to_string()),
            total: Some(total.to_string()),
            items: Some(items),
        }
    }

    fn field_of(result: CoreResult<ScoredReceipt>) -> String {
        match result {
            Err(CoreError::Validation(e)) => e.field().to_string(),
            Ok(_) => panic!("expected a validation error"),
        }
    }

    #[test]
    fn test_all_rules_covered() {
        let payload = receipt(
            "M&M Corner Market 45",
            "2022-01-01",
            "15:01",
            "25.00",
            vec![
                item("Mountain Dew 12PK", "5.00"),
                item("Emils Cheese Pizza", "10.00"),
                item("Doritos Nacho Cheese", "5.00"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "5.00"),
            ],
        );

        let scored = score(&payload).unwrap();
        assert_eq!(scored.points.value(), 120);
        assert_eq!(calculate_points(&scored.receipt).unwrap(), scored.points);

        assert_eq!(
            scored.breakdown,
            PointsBreakdown {
                retailer_name: 16,
                round_dollar_total: 50,
                quarter_multiple_total: 25,
                item_pairs: 10,
                description_length: 3,
                odd_purchase_day: 6,
                afternoon_window: 10,
            }
        );
    }

    #[test]
    fn test_letters_only_even_day_morning_with_cents() {
        let payload = receipt(
            "Target",
            "2022-01-02",
            "13:01",
            "5.05",
            vec![item("Mountain Dew 12PK", "5.05")],
        );

        assert_eq!(score(&payload).unwrap().points.value(), 6);
    }

    #[test]
    fn test_blank_description_earns_bonus() {
        let payload = receipt(
            "Target",
            "2022-01-02",
            "13:01",
            "10.00",
            vec![item("   ", "10.00")],
        );

        let scored = score(&payload).unwrap();
        assert_eq!(scored.breakdown.description_length, 2);
        // 6 + 50 + 25 + 2
        assert_eq!(scored.points.value(), 83);
    }

    #[test]
    fn test_description_sum_overflow_names_item() {
        let items = (0..1_100)
            .map(|_| item("abc", "92233720368547758.07"))
            .collect();
        let payload = receipt("Target", "2022-01-02", "13:01", "1.00", items);

        let field = field_of(score(&payload));
        assert!(field.starts_with("items["), "unexpected field {}", field);
        assert!(field.ends_with("].price"), "unexpected field {}", field);
    }

    #[test]
    fn test_breakdown_total_overflow() {
        let near_max = PointsBreakdown {
            description_length: u64::MAX - 5,
            ..PointsBreakdown::default()
        };
        assert_eq!(near_max.total(), Some(Points::new(u64::MAX - 5)));

        let over = PointsBreakdown {
            odd_purchase_day: ODD_DAY_POINTS,
            ..near_max
        };
        assert_eq!(over.total(), None);
    }

    #[test]
    fn test_target_reference_receipt() {
        let payload = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        );

        // 6 + 10 + 3 + 3 + 6
        assert_eq!(score(&payload).unwrap().points.value(), 28);
    }

    #[test]
    fn test_invalid_year_fails_on_purchase_date() {
        let payload = receipt(
            "Target",
            "20-01-02",
            "13:01",
            "5.05",
            vec![item("Mountain Dew 12PK", "5.05")],
        );
        assert_eq!(field_of(score(&payload)), "purchaseDate");
    }

    #[test]
    fn test_invalid_time_fails_on_purchase_time() {
        let payload = receipt(
            "Target",
            "2024-01-02",
            ":01",
            "5.05",
            vec![item("Mountain Dew 12PK", "5.05")],
        );
        assert_eq!(field_of(score(&payload)), "purchaseTime");
    }

    #[test]
    fn test_retailer_name_points() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market 45"), 16);
        assert_eq!(retailer_name_points("  -&- "), 0);
        assert_eq!(retailer_name_points("Café"), 3);
    }

    #[test]
    fn test_total_rules() {
        let whole = Money::from_cents(900);
        assert_eq!(round_dollar_points(whole), 50);
        assert_eq!(quarter_multiple_points(whole), 25);

        let quarter = Money::from_cents(925);
        assert_eq!(round_dollar_points(quarter), 0);
        assert_eq!(quarter_multiple_points(quarter), 25);

        let other = Money::from_cents(910);
        assert_eq!(round_dollar_points(other), 0);
        assert_eq!(quarter_multiple_points(other), 0);
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_length_points() {
        let pizza = Item {
            short_description: "Emils Cheese Pizza".to_string(),
            price: Money::from_cents(1225),
        };
        assert_eq!(description_length_points(&pizza), 3);

        let padded = Item {
            short_description: "   Klarbrunn 12-PK 12 FL OZ  ".to_string(),
            price: Money::from_cents(1200),
        };
        assert_eq!(description_length_points(&padded), 3);

        let dew = Item {
            short_description: "Mountain Dew 12PK".to_string(),
            price: Money::from_cents(649),
        };
        assert_eq!(description_length_points(&dew), 0);

        let free = Item {
            short_description: "Bag".to_string(),
            price: Money::zero(),
        };
        assert_eq!(description_length_points(&free), 0);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points(1), 6);
        assert_eq!(odd_day_points(31), 6);
        assert_eq!(odd_day_points(2), 0);
    }

    #[test]
    fn test_afternoon_window_bounds() {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

        assert_eq!(afternoon_window_points(at(13, 0)), 0);
        assert_eq!(afternoon_window_points(at(14, 0)), 0);
        assert_eq!(afternoon_window_points(at(14, 1)), 10);
        assert_eq!(afternoon_window_points(at(15, 0)), 10);
        assert_eq!(afternoon_window_points(at(15, 59)), 10);
        assert_eq!(afternoon_window_points(at(16, 0)), 0);
        assert_eq!(afternoon_window_points(at(17, 0)), 0);
    }

    fn description() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ]{1,24}".prop_filter("not blank", |s| !s.trim().is_empty())
    }

    fn price() -> impl Strategy<Value = String> {
        (0u32..10_000, 0u32..100).prop_map(|(d, c)| format!("{}.{:02}", d, c))
    }

    proptest! {
        #[test]
        fn test_scoring_is_deterministic(
            retailer in "[A-Za-z0-9&' ]{1,30}".prop_filter("not blank", |s| !s.trim().is_empty()),
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            items in prop::collection::vec((description(), price()), 1..8),
            total in price(),
        ) {
            let payload = receipt(
                &retailer,
                &format!("2023-03-{:02}", day),
                &format!("{:02}:{:02}", hour, minute),
                &total,
                items.iter().map(|(d, p)| item(d, p)).collect(),
            );

            let first = score(&payload).unwrap();
            let second = score(&payload).unwrap();
            prop_assert_eq!(first.points, second.points);
            prop_assert_eq!(first.breakdown.total(), Some(first.points));
        }

        #[test]
        fn test_description_toggle_only_changes_that_item(
            others in prop::collection::vec((description(), price()), 0..6),
            first_price in price(),
        ) {
            let build = |desc: &str| {
                let mut items = vec![item(desc, &first_price)];
                items.extend(others.iter().map(|(d, p)| item(d, p)));
                receipt("Shop", "2022-01-02", "10:00", "1.01", items)
            };

            // "abc" is a multiple of 3, "abcd" is not
            let with_bonus = score(&build("abc")).unwrap();
            let without_bonus = score(&build("abcd")).unwrap();
            let (a, b) = (with_bonus.points, without_bonus.points);
            let (with_bonus, without_bonus) = (with_bonus.receipt, without_bonus.receipt);

            let toggled = description_length_points(&with_bonus.items[0]);
            prop_assert_eq!(description_length_points(&without_bonus.items[0]), 0);
            prop_assert_eq!(a.value(), b.value() + toggled);

            for (x, y) in with_bonus.items[1..].iter().zip(&without_bonus.items[1..]) {
                prop_assert_eq!(description_length_points(x), description_length_points(y));
            }
        }
    }
}
