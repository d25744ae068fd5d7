//! Season rate table.
//!
//! Demand-based surcharge tiers. Unknown keys resolve to `standard`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Season tier selected on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeasonType {
    #[default]
    Standard,
    Peak,
    HighPeak,
    HotTime,
    Holiday,
    HolidayEve,
}

impl SeasonType {
    /// Resolve a form key, falling back to `Standard` for anything unrecognized.
    pub fn from_key(key: &str) -> Self {
        match key {
            "peak" => SeasonType::Peak,
            "highPeak" => SeasonType::HighPeak,
            "hotTime" => SeasonType::HotTime,
            "holiday" => SeasonType::Holiday,
            "holidayEve" => SeasonType::HolidayEve,
            _ => SeasonType::Standard,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SeasonType::Standard => "standard",
            SeasonType::Peak => "peak",
            SeasonType::HighPeak => "highPeak",
            SeasonType::HotTime => "hotTime",
            SeasonType::Holiday => "holiday",
            SeasonType::HolidayEve => "holidayEve",
        }
    }

    pub fn rate(self) -> &'static SeasonRate {
        &SEASON_RATES[self as usize].1
    }
}

/// Multiplier and display label for one season tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRate {
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
    pub label: &'static str,
}

impl SeasonRate {
    /// Surcharge as a whole percentage, e.g. `20` for a 1.2 multiplier.
    pub fn surcharge_percent(&self) -> Decimal {
        ((self.multiplier - Decimal::ONE) * Decimal::ONE_HUNDRED).round()
    }

    pub fn has_surcharge(&self) -> bool {
        self.multiplier > Decimal::ONE
    }
}

// Indexed by `SeasonType as usize`; keep in declaration order.
static SEASON_RATES: [(SeasonType, SeasonRate); 6] = [
    (
        SeasonType::Standard,
        SeasonRate { multiplier: dec!(1.0), label: "기본" },
    ),
    (
        SeasonType::Peak,
        SeasonRate { multiplier: dec!(1.2), label: "성수기" },
    ),
    (
        SeasonType::HighPeak,
        SeasonRate { multiplier: dec!(1.5), label: "극성수기" },
    ),
    (
        SeasonType::HotTime,
        SeasonRate { multiplier: dec!(1.3), label: "핫타임" },
    ),
    (
        SeasonType::Holiday,
        SeasonRate { multiplier: dec!(1.2), label: "휴일" },
    ),
    (
        SeasonType::HolidayEve,
        SeasonRate { multiplier: dec!(1.1), label: "휴일전일" },
    ),
];

/// Look up a season by form key. Never fails.
pub fn lookup(key: &str) -> &'static SeasonRate {
    SeasonType::from_key(key).rate()
}

/// Every tier in table order.
pub fn all() -> impl Iterator<Item = (SeasonType, &'static SeasonRate)> {
    SEASON_RATES.iter().map(|(season, rate)| (*season, rate))
}
