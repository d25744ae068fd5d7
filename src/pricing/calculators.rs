//! Core fee calculation.
//!
//! Pure functions for pricing math - no I/O, no shared state.
//! The stage order inside [`compute`] is part of the settlement contract:
//! reordering stages changes what the host is paid.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::format::round_won;
use super::models::BookingInput;

/// Marketplace cut of the guest payment.
pub const PLATFORM_FEE_RATE: Decimal = dec!(0.10);

/// VAT applied on top of the discounted subtotal when enabled.
pub const VAT_RATE: Decimal = dec!(0.10);

pub const MIN_HOURS: u32 = 1;

pub const MAX_DISCOUNT_PERCENT: i64 = 100;

/// Itemized result of one pipeline run.
///
/// All amounts are exact; round only when presenting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_amount: Decimal,
    pub person_multiplier: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_person_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub season_rate: Decimal,
    pub season_label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub season_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_person_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub options_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal_before_discount: Decimal,
    pub discount_percent: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub vat_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub guest_payment: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub platform_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub host_revenue: Decimal,
}

/// Settlement figures in whole won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedSettlement {
    pub guest_payment: Decimal,
    pub platform_fee: Decimal,
    pub host_revenue: Decimal,
}

impl CalculationResult {
    /// Guest payment and platform fee rounded to whole won; host revenue is
    /// the difference so the three displayed figures always reconcile.
    pub fn rounded_settlement(&self) -> RoundedSettlement {
        let guest_payment = round_won(self.guest_payment);
        let platform_fee = round_won(self.platform_fee);
        RoundedSettlement {
            guest_payment,
            platform_fee,
            host_revenue: guest_payment - platform_fee,
        }
    }
}

/// Run the fee pipeline.
///
/// Stages, in order:
/// 1. base = hourly rate × hours
/// 2. per-person expansion (base × headcount)
/// 3. season surcharge on the expanded amount
/// 4. extra-person cost (added, not multiplied)
/// 5. option items + cleaning fee
/// 6. percentage discount on everything so far
/// 7. VAT on the discounted amount
/// 8. platform fee / host revenue split
///
/// `options_total` is normally [`OptionLedger::total`](super::options::OptionLedger::total);
/// a negative value is treated as zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use space_fee_web::pricing::{compute, BookingInput};
///
/// let input = BookingInput { hourly_rate: 50_000, hours: 4, ..Default::default() };
/// let result = compute(&input, dec!(0));
/// assert_eq!(result.guest_payment, dec!(200000));
/// assert_eq!(result.platform_fee, dec!(20000));
/// assert_eq!(result.host_revenue, dec!(180000));
/// ```
pub fn compute(input: &BookingInput, options_total: Decimal) -> CalculationResult {
    let hours = input.billed_hours();

    // 1. Base amount
    let base_amount = Decimal::from(input.hourly_rate).saturating_mul(Decimal::from(hours));

    // 2. Per-person expansion
    let person_multiplier = input.person_multiplier();
    let per_person_surcharge = base_amount.saturating_mul(Decimal::from(person_multiplier - 1));
    let mut running = base_amount.saturating_mul(Decimal::from(person_multiplier));

    // 3. Season surcharge, applied after expansion
    let season = input.season_type.rate();
    let season_surcharge = running.saturating_mul(season.multiplier - Decimal::ONE);
    running = running.saturating_add(season_surcharge);

    // 4. Extra-person cost
    let extra_person_cost = input.extra_person.cost(hours);
    running = running.saturating_add(extra_person_cost);

    // 5. Add-ons
    let options_total = options_total.max(Decimal::ZERO);
    let cleaning_fee = input.cleaning_fee.charge();
    running = running.saturating_add(options_total).saturating_add(cleaning_fee);
    let subtotal_before_discount = running;

    // 6. Discount (never touches VAT)
    let discount_percent = input.discount.effective_percent();
    let discount_amount = running * (Decimal::from(discount_percent) / Decimal::ONE_HUNDRED);
    running -= discount_amount;

    // 7. VAT
    let vat_amount = if input.vat_included {
        running * VAT_RATE
    } else {
        Decimal::ZERO
    };
    let guest_payment = running.saturating_add(vat_amount);

    // 8. Settlement split
    let platform_fee = guest_payment * PLATFORM_FEE_RATE;
    let host_revenue = guest_payment - platform_fee;

    tracing::debug!(
        base = %base_amount,
        season = input.season_type.key(),
        subtotal = %subtotal_before_discount,
        discount = %discount_amount,
        guest_payment = %guest_payment,
        platform_fee = %platform_fee,
        "Computed booking fees"
    );

    // Strip scale picked up from the multipliers so 245000.0 reads as 245000
    CalculationResult {
        base_amount: base_amount.normalize(),
        person_multiplier,
        per_person_surcharge: per_person_surcharge.normalize(),
        season_rate: season.multiplier.normalize(),
        season_label: season.label,
        season_surcharge: season_surcharge.normalize(),
        extra_person_cost: extra_person_cost.normalize(),
        options_total: options_total.normalize(),
        cleaning_fee: cleaning_fee.normalize(),
        subtotal_before_discount: subtotal_before_discount.normalize(),
        discount_percent,
        discount_amount: discount_amount.normalize(),
        vat_amount: vat_amount.normalize(),
        guest_payment: guest_payment.normalize(),
        platform_fee: platform_fee.normalize(),
        host_revenue: host_revenue.normalize(),
    }
}
