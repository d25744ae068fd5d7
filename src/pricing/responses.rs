//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{CalculationResult, RoundedSettlement};
use super::export::BreakdownLine;
use super::format::format_currency;
use super::models::BookingInput;
use super::options::OptionLineItem;
use super::season::{SeasonRate, SeasonType};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub formatted: String,
}

impl From<Decimal> for MoneyResponse {
    fn from(amount: Decimal) -> Self {
        Self {
            formatted: format_currency(amount),
            amount,
        }
    }
}

/// Whole-won settlement as shown to the host
#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub guest_payment: MoneyResponse,
    pub platform_fee: MoneyResponse,
    pub host_revenue: MoneyResponse,
}

impl From<RoundedSettlement> for SettlementResponse {
    fn from(settlement: RoundedSettlement) -> Self {
        Self {
            guest_payment: settlement.guest_payment.into(),
            platform_fee: settlement.platform_fee.into(),
            host_revenue: settlement.host_revenue.into(),
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub input: BookingInput,
    pub options: Vec<OptionLineItem>,
    pub result: CalculationResult,
    pub breakdown: Vec<BreakdownLine>,
    pub settlement: SettlementResponse,
}

/// Response for the copyable summary
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub text: String,
}

/// One row of the season table
#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub key: SeasonType,
    #[serde(flatten)]
    pub rate: &'static SeasonRate,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
