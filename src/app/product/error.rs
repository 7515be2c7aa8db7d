use std::num::ParseIntError;

use thiserror::Error;

use crate::core::CoreError;
use crate::infrastructure::DatabaseError;

/// 产品录入错误
///
/// 两类错误都原样向上传播，处理器不做恢复。
#[derive(Debug, Error)]
pub enum ProductError {
    /// `price` 缺失或不是十进制整数
    #[error("价格无效: {0}")]
    InvalidPrice(#[from] ParseIntError),

    /// 打开连接或执行语句失败
    #[error("数据库错误: {0}")]
    Database(#[from] DatabaseError),
}

impl From<ProductError> for CoreError {
    fn from(err: ProductError) -> Self {
        CoreError::InternalServerError(err.to_string())
    }
}
