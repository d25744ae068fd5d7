//! Booking input models.
//!
//! A `BookingInput` is the normalized snapshot of the booking form. It is
//! rebuilt by the form layer on every edit and handed to the pipeline by
//! reference; the pipeline never mutates it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculators::{MAX_DISCOUNT_PERCENT, MIN_HOURS};
use super::season::SeasonType;

/// Base headcount shown when the extra-person section is first opened.
pub const DEFAULT_BASE_PERSON_COUNT: u32 = 2;

/// Normalized booking parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingInput {
    pub hourly_rate: u64,
    pub hours: u32,
    pub season_type: SeasonType,
    pub per_person_enabled: bool,
    pub person_count: u32,
    pub extra_person: ExtraPerson,
    pub cleaning_fee: CleaningFee,
    pub discount: Discount,
    pub vat_included: bool,
}

impl BookingInput {
    /// Hours actually billed (never below `MIN_HOURS`).
    pub fn billed_hours(&self) -> u32 {
        self.hours.max(MIN_HOURS)
    }

    /// Headcount multiplier for per-person pricing; 1 when disabled.
    pub fn person_multiplier(&self) -> u32 {
        if self.per_person_enabled {
            self.person_count.max(1)
        } else {
            1
        }
    }
}

/// Matches the booking form's reset state.
impl Default for BookingInput {
    fn default() -> Self {
        Self {
            hourly_rate: 0,
            hours: MIN_HOURS,
            season_type: SeasonType::Standard,
            per_person_enabled: false,
            person_count: 1,
            extra_person: ExtraPerson::default(),
            cleaning_fee: CleaningFee::default(),
            discount: Discount::default(),
            vat_included: false,
        }
    }
}

/// Charge for guests beyond the contracted base headcount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPerson {
    pub enabled: bool,
    /// Contracted headcount; informational, the form asks for the extra count directly.
    pub base_count: u32,
    pub extra_count: u32,
    pub unit_price: u64,
    pub billed_per_hour: bool,
}

impl ExtraPerson {
    /// `unit_price × extra_count`, times `hours` when billed hourly.
    pub fn cost(&self, hours: u32) -> Decimal {
        if !self.enabled || self.extra_count == 0 {
            return Decimal::ZERO;
        }

        let per_stay = Decimal::from(self.unit_price).saturating_mul(Decimal::from(self.extra_count));
        if self.billed_per_hour {
            per_stay.saturating_mul(Decimal::from(hours))
        } else {
            per_stay
        }
    }
}

impl Default for ExtraPerson {
    fn default() -> Self {
        Self {
            enabled: false,
            base_count: DEFAULT_BASE_PERSON_COUNT,
            extra_count: 0,
            unit_price: 0,
            billed_per_hour: false,
        }
    }
}

/// Flat cleaning fee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningFee {
    pub enabled: bool,
    pub amount: u64,
}

impl CleaningFee {
    pub fn charge(&self) -> Decimal {
        if self.enabled {
            Decimal::from(self.amount)
        } else {
            Decimal::ZERO
        }
    }
}

/// Percentage discount on the accumulated subtotal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub enabled: bool,
    pub percent: i64,
}

impl Discount {
    /// Percent actually applied: 0 when disabled, otherwise clamped to `[0, 100]`.
    pub fn effective_percent(&self) -> i64 {
        if self.enabled {
            self.percent.clamp(0, MAX_DISCOUNT_PERCENT)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_matches_reset_form() {
        let input = BookingInput::default();
        assert_eq!(input.hourly_rate, 0);
        assert_eq!(input.hours, 1);
        assert_eq!(input.season_type, SeasonType::Standard);
        assert!(!input.per_person_enabled);
        assert_eq!(input.person_count, 1);
        assert_eq!(input.extra_person.base_count, 2);
        assert_eq!(input.extra_person.extra_count, 0);
        assert!(!input.vat_included);
    }

    #[test]
    fn test_billed_hours_clamped() {
        let input = BookingInput {
            hours: 0,
            ..Default::default()
        };
        assert_eq!(input.billed_hours(), MIN_HOURS);
    }

    #[test]
    fn test_person_multiplier() {
        let mut input = BookingInput {
            person_count: 4,
            ..Default::default()
        };
        assert_eq!(input.person_multiplier(), 1);

        input.per_person_enabled = true;
        assert_eq!(input.person_multiplier(), 4);

        input.person_count = 0;
        assert_eq!(input.person_multiplier(), 1);
    }

    #[test]
    fn test_extra_person_cost() {
        let mut extra = ExtraPerson {
            enabled: true,
            extra_count: 2,
            unit_price: 10_000,
            ..Default::default()
        };
        assert_eq!(extra.cost(3), dec!(20000));

        extra.billed_per_hour = true;
        assert_eq!(extra.cost(3), dec!(60000));

        extra.extra_count = 0;
        assert_eq!(extra.cost(3), dec!(0));

        extra.extra_count = 2;
        extra.enabled = false;
        assert_eq!(extra.cost(3), dec!(0));
    }

    #[test]
    fn test_cleaning_fee_charge() {
        let fee = CleaningFee {
            enabled: true,
            amount: 15_000,
        };
        assert_eq!(fee.charge(), dec!(15000));
        assert_eq!(CleaningFee { enabled: false, ..fee }.charge(), dec!(0));
    }

    #[test]
    fn test_discount_effective_percent() {
        assert_eq!(Discount { enabled: true, percent: 10 }.effective_percent(), 10);
        assert_eq!(Discount { enabled: true, percent: 150 }.effective_percent(), 100);
        assert_eq!(Discount { enabled: true, percent: -5 }.effective_percent(), 0);
        assert_eq!(Discount { enabled: false, percent: 10 }.effective_percent(), 0);
    }
}
