//! Field parsing
//!
//! Receipts carry dates, times and amounts as text. These helpers turn that
//! text into typed values and report failures as [`ParseError`] instead of
//! falling back to zero values.

use jiff::civil::{Date, Time};
use rust_decimal::Decimal;
use thiserror::Error;

/// Expected format of a purchase date.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Expected format of a purchase time (24-hour clock).
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Fixed-width layout of a purchase date; letters stand for digits.
pub const PURCHASE_DATE_LAYOUT: &str = "YYYY-MM-DD";

/// Fixed-width layout of a purchase time; letters stand for digits.
pub const PURCHASE_TIME_LAYOUT: &str = "HH:MM";

/// Errors raised while parsing a single amount.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmountError {
    /// The text is not plain digits with an optional decimal point.
    #[error("expected digits with an optional decimal point")]
    Malformed,

    /// The amount has more fractional digits than can be held exactly.
    #[error("amount cannot be represented exactly")]
    Imprecise,

    /// The amount is too large to represent.
    #[error("amount out of range: {0}")]
    OutOfRange(#[source] rust_decimal::Error),

    /// The amount is below zero.
    #[error("amount must not be negative")]
    Negative,
}

/// Errors raised while parsing a date or time of day.
#[derive(Debug, Error)]
pub enum TemporalError {
    /// The text does not have the fixed-width layout.
    #[error("does not match {0}")]
    Layout(&'static str),

    /// The text has the right layout but names no real date or time.
    #[error(transparent)]
    Invalid(#[from] jiff::Error),
}

/// Errors raised while parsing the fields of a receipt.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The purchase date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid purchaseDate {value:?}, expected YYYY-MM-DD")]
    PurchaseDate {
        /// Rejected text
        value: String,

        /// Why the date was rejected
        #[source]
        source: TemporalError,
    },

    /// The purchase time is not a 24-hour `HH:MM` time.
    #[error("invalid purchaseTime {value:?}, expected HH:MM")]
    PurchaseTime {
        /// Rejected text
        value: String,

        /// Why the time was rejected
        #[source]
        source: TemporalError,
    },

    /// The receipt total is not a valid amount.
    #[error("invalid total {value:?}: {source}")]
    Total {
        /// Rejected text
        value: String,

        /// Why the amount was rejected
        #[source]
        source: AmountError,
    },

    /// An item price is not a valid amount.
    #[error("invalid price {value:?} for item {index}: {source}")]
    ItemPrice {
        /// Position of the item on the receipt
        index: usize,

        /// Rejected text
        value: String,

        /// Why the amount was rejected
        #[source]
        source: AmountError,
    },
}

/// Parse a non-negative decimal amount such as `"35.35"`.
///
/// Only plain notation is accepted: an optional `-`, digits, then optionally
/// a `.` and more digits. The value is kept exactly; text that would need
/// rounding to fit a [`Decimal`] is rejected.
///
/// # Errors
///
/// - [`AmountError::Malformed`]: the text is not in plain notation.
/// - [`AmountError::Imprecise`]: the text has too many fractional digits.
/// - [`AmountError::OutOfRange`]: the amount is too large.
/// - [`AmountError::Negative`]: the amount is below zero.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    if !is_plain_decimal(value) {
        return Err(AmountError::Malformed);
    }

    let amount = Decimal::from_str_exact(value).map_err(|error| match error {
        rust_decimal::Error::Underflow => AmountError::Imprecise,
        other => AmountError::OutOfRange(other),
    })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative);
    }

    Ok(amount)
}

/// Parse a purchase date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`ParseError::PurchaseDate`] if the text is not a valid calendar date.
pub fn parse_purchase_date(value: &str) -> Result<Date, ParseError> {
    parse_fixed_width(value, PURCHASE_DATE_LAYOUT, |text| {
        Date::strptime(PURCHASE_DATE_FORMAT, text)
    })
    .map_err(|source| ParseError::PurchaseDate {
        value: value.to_owned(),
        source,
    })
}

/// Parse a purchase time in 24-hour `HH:MM` form.
///
/// # Errors
///
/// Returns [`ParseError::PurchaseTime`] if the text is not a valid time of day.
pub fn parse_purchase_time(value: &str) -> Result<Time, ParseError> {
    parse_fixed_width(value, PURCHASE_TIME_LAYOUT, |text| {
        Time::strptime(PURCHASE_TIME_FORMAT, text)
    })
    .map_err(|source| ParseError::PurchaseTime {
        value: value.to_owned(),
        source,
    })
}

// strptime accepts short fields and signs, so the layout is checked first.
fn parse_fixed_width<T>(
    value: &str,
    layout: &'static str,
    parse: impl FnOnce(&str) -> Result<T, jiff::Error>,
) -> Result<T, TemporalError> {
    if !matches_layout(value, layout) {
        return Err(TemporalError::Layout(layout));
    }

    Ok(parse(value)?)
}

fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() == layout.len()
        && value.bytes().zip(layout.bytes()).all(|(byte, slot)| {
            if slot.is_ascii_alphabetic() {
                byte.is_ascii_digit()
            } else {
                byte == slot
            }
        })
}

fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);

    match unsigned.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(unsigned),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
