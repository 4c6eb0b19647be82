use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;

/// Marketplace contract the front end should talk to.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub contract_address: Option<String>,
    #[schema(example = 31337)]
    pub chain_id: u64,
}

#[utoipa::path(get, path = "/api/chain", tag = "Chain",
    responses((status = 200, body = ChainInfo)))]
pub async fn chain_info(State(ctx): State<AppContext>) -> Json<ChainInfo> {
    Json(ChainInfo {
        contract_address: ctx.cfg.contract_address.as_ref().map(|a| a.to_string()),
        chain_id: ctx.cfg.chain_id,
    })
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/chain", get(chain_info)).with_state(ctx)
}
