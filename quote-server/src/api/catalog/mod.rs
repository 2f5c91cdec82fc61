//! Catalog API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/catalog", catalog_routes())
}

fn catalog_routes() -> Router<ServerState> {
    Router::new().route("/seed-item", post(handler::seed_item))
}
