//! 应用层

pub mod product;

use std::time::Duration;

use axum::{http::Uri, middleware, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::{middleware::request_logging_middleware, CoreError};
use crate::infrastructure::Connector;
use product::ProductService;

pub const ADD_PRODUCT_PATH: &str = "/add-product";

pub struct AppState<C> {
    pub product_service: ProductService<C>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            product_service: self.product_service.clone(),
        }
    }
}

impl<C: Connector> AppState<C> {
    pub fn new(connector: C) -> Self {
        Self {
            product_service: ProductService::new(connector),
        }
    }
}

/// 构建路由
pub fn router<C: Connector>(state: AppState<C>, request_timeout: Duration) -> Router {
    Router::new()
        .route(ADD_PRODUCT_PATH, get(product::handler::add_product::<C>))
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("未找到路径: {}", uri.path()))
}
