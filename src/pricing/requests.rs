//! Request DTOs for pricing API endpoints.
//!
//! These mirror the booking form as typed: amounts may arrive as JSON numbers
//! or as grouped strings (`"50,000"`), and any field may be missing.
//! Conversion to [`BookingInput`] is where every value gets normalized.

use serde::Deserialize;

use super::calculators::MIN_HOURS;
use super::format::parse_amount;
use super::models::{BookingInput, CleaningFee, Discount, ExtraPerson, DEFAULT_BASE_PERSON_COUNT};
use super::options::OptionLedger;
use super::season::SeasonType;

/// A numeric form field: a JSON number, the raw input text, or `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(i64),
    /// Fractional or out-of-range numbers; truncated and saturated on read.
    Float(f64),
    Text(String),
    Null,
}

impl RawAmount {
    pub fn value(&self) -> i64 {
        match self {
            RawAmount::Number(n) => *n,
            // `as` truncates toward zero, saturates at the i64 bounds and maps NaN to 0
            RawAmount::Float(f) => *f as i64,
            RawAmount::Text(text) => parse_amount(text),
            RawAmount::Null => 0,
        }
    }

    /// Value clamped to `[0, u64::MAX]`.
    fn non_negative(&self) -> u64 {
        self.value().max(0) as u64
    }

    /// Value for a count field; zero/negative/unreadable falls back to `fallback`.
    fn count_or(&self, fallback: u32) -> u32 {
        match self.value() {
            n if n < 1 => fallback,
            n => u32::try_from(n).unwrap_or(u32::MAX),
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Text(String::new())
    }
}

/// Request to price a booking (also used for export).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub hourly_rate: RawAmount,
    pub hours: RawAmount,
    pub season_type: String,
    pub per_person_enabled: bool,
    pub person_count: RawAmount,
    pub extra_person: ExtraPersonRequest,
    pub cleaning_fee: CleaningFeeRequest,
    pub discount: DiscountRequest,
    pub vat_included: bool,
    pub options: Vec<OptionItemRequest>,
}

/// Extra-person section of the form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExtraPersonRequest {
    pub enabled: bool,
    pub base_count: RawAmount,
    pub extra_count: RawAmount,
    pub unit_price: RawAmount,
    pub billed_per_hour: bool,
}

/// Cleaning fee toggle and amount
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CleaningFeeRequest {
    pub enabled: bool,
    pub amount: RawAmount,
}

/// Discount toggle and percent
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DiscountRequest {
    pub enabled: bool,
    pub percent: RawAmount,
}

/// An option line item in the request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OptionItemRequest {
    pub name: String,
    pub unit_price: RawAmount,
    pub quantity: RawAmount,
}

impl QuoteRequest {
    /// Normalize the raw form values into pipeline inputs.
    pub fn into_parts(self) -> (BookingInput, OptionLedger) {
        let extra_count = self.extra_person.extra_count.value().max(0);

        let input = BookingInput {
            hourly_rate: self.hourly_rate.non_negative(),
            hours: self.hours.count_or(MIN_HOURS),
            season_type: SeasonType::from_key(&self.season_type),
            per_person_enabled: self.per_person_enabled,
            person_count: self.person_count.count_or(1),
            extra_person: ExtraPerson {
                enabled: self.extra_person.enabled,
                base_count: self.extra_person.base_count.count_or(DEFAULT_BASE_PERSON_COUNT),
                extra_count: u32::try_from(extra_count).unwrap_or(u32::MAX),
                unit_price: self.extra_person.unit_price.non_negative(),
                billed_per_hour: self.extra_person.billed_per_hour,
            },
            cleaning_fee: CleaningFee {
                enabled: self.cleaning_fee.enabled,
                amount: self.cleaning_fee.amount.non_negative(),
            },
            discount: Discount {
                enabled: self.discount.enabled,
                percent: self.discount.percent.value(),
            },
            vat_included: self.vat_included,
        };

        let mut ledger = OptionLedger::new();
        for item in self.options {
            ledger.add(item.name, item.unit_price.value(), item.quantity.value());
        }

        (input, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_body_is_reset_form() {
        let request: QuoteRequest = serde_json::from_str("{}").unwrap();
        let (input, ledger) = request.into_parts();

        assert_eq!(input, BookingInput::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_grouped_strings_and_numbers() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "hourly_rate": "50,000",
                "hours": 4,
                "season_type": "highPeak",
                "options": [{"name": "빔", "unit_price": "5,000", "quantity": "2"}]
            }"#,
        )
        .unwrap();
        let (input, ledger) = request.into_parts();

        assert_eq!(input.hourly_rate, 50_000);
        assert_eq!(input.hours, 4);
        assert_eq!(input.season_type, SeasonType::HighPeak);
        assert_eq!(ledger.total(), dec!(10000));
    }

    #[test]
    fn test_normalization_rules() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "hourly_rate": "-3,000",
                "hours": "0",
                "season_type": "monsoon",
                "person_count": "",
                "extra_person": {"enabled": true, "extra_count": -2, "unit_price": "abc"},
                "discount": {"enabled": true, "percent": 140},
                "options": [{"name": "x", "unit_price": 1000, "quantity": 0}]
            }"#,
        )
        .unwrap();
        let (input, ledger) = request.into_parts();

        assert_eq!(input.hourly_rate, 0);
        assert_eq!(input.hours, MIN_HOURS);
        assert_eq!(input.season_type, SeasonType::Standard);
        assert_eq!(input.person_count, 1);
        assert_eq!(input.extra_person.extra_count, 0);
        assert_eq!(input.extra_person.unit_price, 0);
        assert_eq!(input.extra_person.base_count, DEFAULT_BASE_PERSON_COUNT);
        // Clamped by the pipeline, not here
        assert_eq!(input.discount.effective_percent(), 100);
        assert_eq!(ledger.total(), dec!(1000));
    }

    #[test]
    fn test_raw_amount_value() {
        assert_eq!(RawAmount::Number(7).value(), 7);
        assert_eq!(RawAmount::Text("1,200원".to_string()).value(), 1_200);
        assert_eq!(RawAmount::default().value(), 0);
    }

    #[test]
    fn test_float_null_and_oversized_numbers_are_normalized() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "hourly_rate": 18446744073709551615,
                "hours": 2.5,
                "person_count": null,
                "cleaning_fee": {"enabled": true, "amount": null},
                "discount": {"enabled": true, "percent": 12.9},
                "options": [{"name": "x", "unit_price": 1500.7, "quantity": null}]
            }"#,
        )
        .unwrap();
        let (input, ledger) = request.into_parts();

        assert_eq!(input.hourly_rate, i64::MAX as u64);
        assert_eq!(input.hours, 2);
        assert_eq!(input.person_count, 1);
        assert_eq!(input.cleaning_fee.amount, 0);
        assert_eq!(input.discount.percent, 12);
        assert_eq!(ledger.total(), dec!(1500));

        let result = crate::pricing::calculators::compute(&input, ledger.total());
        assert!(result.guest_payment > rust_decimal::Decimal::ZERO);
    }

    #[test]
    fn test_null_rate_prices_as_zero() {
        let request: QuoteRequest = serde_json::from_str(r#"{"hourly_rate": null, "hours": 1}"#).unwrap();
        let (input, ledger) = request.into_parts();
        let result = crate::pricing::calculators::compute(&input, ledger.total());

        assert_eq!(input.hourly_rate, 0);
        assert_eq!(result.guest_payment, dec!(0));
    }

    #[test]
    fn test_raw_amount_float_edges() {
        assert_eq!(RawAmount::Float(-2.9).value(), -2);
        assert_eq!(RawAmount::Float(f64::NAN).value(), 0);
        assert_eq!(RawAmount::Float(1e300).value(), i64::MAX);
        assert_eq!(RawAmount::Null.value(), 0);
    }
}
