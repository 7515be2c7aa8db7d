//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::ProductError;
use super::model::Product;
use crate::core::TextReply;
use crate::infrastructure::{Connector, StatementConnection};

/// 成功写入后的应答正文
pub const ACK_BODY: &str = "OK\n";

pub struct ProductService<C> {
    connector: Arc<C>,
}

impl<C> Clone for ProductService<C> {
    fn clone(&self) -> Self {
        Self {
            connector: Arc::clone(&self.connector),
        }
    }
}

impl<C: Connector> ProductService<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(connector),
        }
    }

    /// 录入一个产品
    ///
    /// 先解析 `price`，解析失败时不会打开连接。成功时每次调用都会新开一个连接、
    /// 执行一条插入语句并关闭连接；相同参数重复调用会重复插入。
    /// 任何错误都原样返回，失败时不产生应答。
    pub async fn add_product(
        &self,
        name: Option<&str>,
        price: Option<&str>,
    ) -> Result<TextReply, ProductError> {
        let product = Product::parse(name, price)?;
        let sql = product.insert_statement();

        let mut connection = self.connector.connect().await?;
        debug!("执行语句: {}", sql);
        let affected = connection.execute_update(&sql).await?;

        if let Err(e) = connection.close().await {
            // 行已经写入，关闭失败只记录
            warn!("关闭数据库连接失败: {}", e);
        }

        info!(
            "产品已录入: name={}, price={}, rows={}",
            product.name, product.price, affected
        );

        Ok(TextReply::ok_html(ACK_BODY))
    }
}
