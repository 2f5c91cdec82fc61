//! Offer API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shared::models::{OfferInput, OfferSnapshot, OfferTotals, Reconciliation};

use crate::core::ServerState;
use crate::pricing::{PricedOffer, price_input};
use crate::printing::QuoteDocument;
use crate::snapshot;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Normalize and price the request body, filling in the configured fee VAT
/// rate when the client sent none
fn price(state: &ServerState, mut input: OfferInput) -> PricedOffer {
    if input.fee_vat_rate.is_none() {
        input.fee_vat_rate = Some(json!(state.config.default_fee_vat_rate));
    }
    price_input(&input)
}

/// POST /api/offers/calculate - 计算报价合计
pub async fn calculate(
    State(state): State<ServerState>,
    Json(input): Json<OfferInput>,
) -> AppResult<Json<OfferTotals>> {
    let priced = price(&state, input);
    Ok(Json(priced.totals))
}

/// POST /api/offers/summary - 报价单 (表格/汇总行)
pub async fn summary(
    State(state): State<ServerState>,
    Json(input): Json<OfferInput>,
) -> AppResult<Json<QuoteDocument>> {
    let priced = price(&state, input);
    let document = QuoteDocument::build(&priced.offer, &priced.totals, &state.company);
    Ok(Json(document))
}

/// POST /api/offers/pdf - 导出 PDF
pub async fn pdf(
    State(state): State<ServerState>,
    Json(input): Json<OfferInput>,
) -> AppResult<Response> {
    let priced = price(&state, input);
    let document = QuoteDocument::build(&priced.offer, &priced.totals, &state.company);

    // genpdf is synchronous and CPU bound
    let renderer = state.pdf.clone();
    let bytes = tokio::task::spawn_blocking(move || renderer.render(&document))
        .await
        .map_err(|e| AppError::internal(format!("PDF task failed: {e}")))??;

    let filename = match priced.offer.number.as_deref().unwrap_or(&priced.offer.id) {
        "" => "angebot.pdf".to_string(),
        name => format!("angebot-{name}.pdf"),
    };
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// POST /api/offers/snapshot - 生成带缓存合计的快照
pub async fn snapshot(
    State(state): State<ServerState>,
    Json(mut input): Json<OfferInput>,
) -> AppResult<Json<OfferSnapshot>> {
    // a stored snapshot needs an identity even if the editor had none yet
    if input.id.as_deref().is_none_or(|id| id.trim().is_empty()) {
        input.id = Some(uuid::Uuid::new_v4().to_string());
    }
    let priced = price(&state, input);
    Ok(Json(snapshot::snapshot(&priced.offer, chrono::Utc::now())))
}

/// POST /api/offers/reconcile - 重新计算快照并比对缓存合计
pub async fn reconcile(
    payload: Result<Json<OfferSnapshot>, JsonRejection>,
) -> AppResult<Json<Reconciliation>> {
    let Json(snap) = payload.map_err(|rejection| {
        AppError::new(ErrorCode::SnapshotInvalid).with_detail("reason", rejection.body_text())
    })?;
    Ok(Json(snapshot::reconcile(&snap)))
}
