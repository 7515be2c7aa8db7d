//! 产品处理器

use axum::extract::{Query, State};

use super::model::AddProductParams;
use crate::app::AppState;
use crate::core::{CoreError, TextReply};
use crate::infrastructure::Connector;

/// `GET /add-product?name=..&price=..`
pub async fn add_product<C: Connector>(
    State(state): State<AppState<C>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<TextReply, CoreError> {
    let params = AddProductParams::from_pairs(pairs);
    let reply = state
        .product_service
        .add_product(params.name.as_deref(), params.price.as_deref())
        .await?;
    Ok(reply)
}
