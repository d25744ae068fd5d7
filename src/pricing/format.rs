//! Numeric formatting for form values.
//!
//! Amounts travel between the form and the pricing core as grouped digit
//! strings ("50,000"). Parsing never fails: anything unreadable is zero.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Currency suffix appended to formatted amounts.
pub const CURRENCY_SUFFIX: &str = "원";

/// Round to a whole currency unit, half away from zero.
///
/// Only used at presentation time; the pipeline itself never rounds.
pub fn round_won(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a user-entered amount such as `"1,234,000"` or `"50,000원"`.
///
/// Grouping commas and surrounding whitespace are stripped, then an optional
/// sign and the leading run of digits is read. Trailing text is ignored.
/// Returns `0` when there are no digits or the value does not fit in `i64`.
///
/// # Examples
/// ```
/// use space_fee_web::pricing::parse_amount;
///
/// assert_eq!(parse_amount("1,234,000"), 1_234_000);
/// assert_eq!(parse_amount("50,000원"), 50_000);
/// assert_eq!(parse_amount("abc"), 0);
/// assert_eq!(parse_amount(""), 0);
/// ```
pub fn parse_amount(text: &str) -> i64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    let (negative, rest) = match cleaned.as_bytes().first() {
        Some(b'-') => (true, &cleaned[1..]),
        Some(b'+') => (false, &cleaned[1..]),
        _ => (false, cleaned.as_str()),
    };

    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return 0;
    }

    match rest[..digit_len].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// Render an amount with thousands grouping after won rounding.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use space_fee_web::pricing::format_amount;
///
/// assert_eq!(format_amount(dec!(1234567)), "1,234,567");
/// assert_eq!(format_amount(dec!(999.5)), "1,000");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_won(value);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_digits(&digits);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render an integer amount with thousands grouping.
pub fn format_integer(value: i64) -> String {
    format_amount(Decimal::from(value))
}

/// `format_amount` followed by the currency suffix, e.g. `"50,000원"`.
pub fn format_currency(value: Decimal) -> String {
    format!("{}{}", format_amount(value), CURRENCY_SUFFIX)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
