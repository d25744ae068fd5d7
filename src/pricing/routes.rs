//! HTTP handlers for the pricing API.
//!
//! Stateless: every request carries the full form snapshot and gets a fresh
//! calculation back.

use axum::{extract::rejection::JsonRejection, routing::get, routing::post, Json, Router};

use crate::error::Result;

use super::calculators::compute;
use super::export::{breakdown, render};
use super::requests::QuoteRequest;
use super::responses::{ExportResponse, QuoteResponse, SeasonResponse};
use super::season;

/// Routes mounted under `/api/pricing`.
pub fn router() -> Router {
    Router::new()
        .route("/seasons", get(seasons))
        .route("/quote", post(quote))
        .route("/export", post(export))
}

/// List the season table
async fn seasons() -> Json<Vec<SeasonResponse>> {
    Json(
        season::all()
            .map(|(key, rate)| SeasonResponse { key, rate })
            .collect(),
    )
}

/// Price a booking
async fn quote(payload: std::result::Result<Json<QuoteRequest>, JsonRejection>) -> Result<Json<QuoteResponse>> {
    let Json(request) = payload?;
    let (input, ledger) = request.into_parts();
    let result = compute(&input, ledger.total());

    Ok(Json(QuoteResponse {
        breakdown: breakdown(&input, &result),
        settlement: result.rounded_settlement().into(),
        options: ledger.items().cloned().collect(),
        input,
        result,
    }))
}

/// Render the copyable summary
async fn export(payload: std::result::Result<Json<QuoteRequest>, JsonRejection>) -> Result<Json<ExportResponse>> {
    let Json(request) = payload?;
    let (input, ledger) = request.into_parts();
    let result = compute(&input, ledger.total());

    Ok(Json(ExportResponse {
        text: render(&input, &result, ledger.len()),
    }))
}
