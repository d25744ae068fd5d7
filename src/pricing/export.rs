//! Plain-text rendering of a calculation.
//!
//! `render` builds the shareable summary the host copies into a chat;
//! `breakdown` lists the result rows the page shows, skipping empty ones.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{CalculationResult, VAT_RATE};
use super::format::format_currency;
use super::models::BookingInput;

const SUMMARY_TITLE: &str = "[공간 이용료 계산 결과]";
const SEPARATOR: &str = "────────────────";

/// One visible row of the price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub label: String,
    /// Formatted amount with sign, e.g. `"+48,000원"`.
    pub amount: String,
}

impl BreakdownLine {
    fn new(label: impl Into<String>, amount: String) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }

    fn surcharge(label: impl Into<String>, amount: Decimal) -> Self {
        Self::new(label, format!("+{}", format_currency(amount)))
    }
}

/// Render the copyable summary text.
///
/// Pure: no clipboard access here, the caller decides what to do with it.
pub fn render(input: &BookingInput, result: &CalculationResult, option_count: usize) -> String {
    let mut lines = vec![
        SUMMARY_TITLE.to_string(),
        format!("시간당 요금: {}", format_currency(Decimal::from(input.hourly_rate))),
        format!("이용 시간: {}시간", input.billed_hours()),
    ];

    if result.season_surcharge > Decimal::ZERO {
        lines.push(format!("시즌: {}", result.season_label));
    }

    if input.per_person_enabled {
        lines.push(format!("인원: {}명 (인당 가격)", input.person_multiplier()));
    }

    if input.extra_person.enabled && input.extra_person.extra_count > 0 {
        lines.push(format!("추가 인원: {}명", input.extra_person.extra_count));
    }

    if option_count > 0 {
        lines.push(format!("옵션 상품: {}개", option_count));
    }

    let settlement = result.rounded_settlement();
    lines.push(SEPARATOR.to_string());
    lines.push(format!("게스트 결제금액: {}", format_currency(settlement.guest_payment)));
    lines.push(format!("플랫폼 수수료: {}", format_currency(settlement.platform_fee)));
    lines.push(format!("호스트 정산액: {}", format_currency(settlement.host_revenue)));

    lines.join("\n")
}

/// Visible breakdown rows in display order.
pub fn breakdown(input: &BookingInput, result: &CalculationResult) -> Vec<BreakdownLine> {
    let mut rows = vec![BreakdownLine::new(
        "기본 요금",
        format_currency(result.base_amount),
    )];

    let season = input.season_type.rate();
    if season.has_surcharge() {
        rows.push(BreakdownLine::surcharge(
            format!("{} 할증 ({}%)", season.label, season.surcharge_percent()),
            result.season_surcharge,
        ));
    }

    if result.person_multiplier > 1 {
        rows.push(BreakdownLine::surcharge(
            format!("인원 요금 ({}명)", result.person_multiplier),
            result.per_person_surcharge,
        ));
    }

    if result.extra_person_cost > Decimal::ZERO {
        rows.push(BreakdownLine::surcharge(
            format!("추가 인원 ({}명)", input.extra_person.extra_count),
            result.extra_person_cost,
        ));
    }

    if result.options_total > Decimal::ZERO {
        rows.push(BreakdownLine::surcharge("옵션 상품", result.options_total));
    }

    if result.cleaning_fee > Decimal::ZERO {
        rows.push(BreakdownLine::surcharge("청소비", result.cleaning_fee));
    }

    if result.discount_amount > Decimal::ZERO {
        rows.push(BreakdownLine::new(
            format!("할인 ({}%)", result.discount_percent),
            format!("-{}", format_currency(result.discount_amount)),
        ));
    }

    if input.vat_included {
        rows.push(BreakdownLine::surcharge(
            format!("부가세 ({}%)", (VAT_RATE * Decimal::ONE_HUNDRED).normalize()),
            result.vat_amount,
        ));
    }

    rows
}
