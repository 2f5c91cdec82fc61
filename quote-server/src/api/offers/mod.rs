//! Offer API 模块
//!
//! 所有接口都是无状态计算: 请求体携带完整报价, 服务端不保存。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/offers", offer_routes())
}

fn offer_routes() -> Router<ServerState> {
    Router::new()
        .route("/calculate", post(handler::calculate))
        .route("/summary", post(handler::summary))
        .route("/pdf", post(handler::pdf))
        .route("/snapshot", post(handler::snapshot))
        .route("/reconcile", post(handler::reconcile))
}
