//! Catalog API Handlers

use axum::Json;
use rust_decimal::Decimal;
use shared::models::{LineItem, ProductTemplate};

use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /api/catalog/seed-item - 从商品模板生成新的报价行
pub async fn seed_item(Json(template): Json<ProductTemplate>) -> AppResult<Json<LineItem>> {
    if template.base_price < Decimal::ZERO {
        return Err(
            AppError::with_message(ErrorCode::ProductInvalidPrice, "Base price must not be negative")
                .with_detail("templateId", template.id.clone())
                .with_detail("basePrice", template.base_price.to_string()),
        );
    }

    let item = LineItem::from_template(&template, uuid::Uuid::new_v4().to_string());
    tracing::debug!(template_id = %template.id, item_id = %item.id, "Line item seeded from template");
    Ok(Json(item))
}
