//! 数据库基础设施
//!
//! 每次请求都通过 [`Connector`] 打开一个新的连接，不做连接池。
//! 连接在成功路径上显式关闭，失败路径上由 `Drop` 释放。

use std::future::Future;
use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection, Executor,
};
use tracing::debug;

/// 数据库错误直接沿用驱动错误，不做包装
pub type DatabaseError = sqlx::Error;

/// 连接获取器
pub trait Connector: Send + Sync + 'static {
    type Connection: StatementConnection;

    /// 打开一个新的连接
    fn connect(&self) -> impl Future<Output = Result<Self::Connection, DatabaseError>> + Send;
}

/// 单个数据库会话
pub trait StatementConnection: Send {
    /// 执行一条写语句，返回受影响的行数
    fn execute_update(
        &mut self,
        sql: &str,
    ) -> impl Future<Output = Result<u64, DatabaseError>> + Send;

    /// 关闭连接
    fn close(self) -> impl Future<Output = Result<(), DatabaseError>> + Send;
}

/// 基于 SQLite 的连接获取器
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    options: SqliteConnectOptions,
}

impl SqliteConnector {
    pub fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Ok(Self { options })
    }
}

impl Connector for SqliteConnector {
    type Connection = SqliteStatementConnection;

    async fn connect(&self) -> Result<Self::Connection, DatabaseError> {
        let inner = SqliteConnection::connect_with(&self.options).await?;
        debug!("数据库连接已打开");
        Ok(SqliteStatementConnection { inner })
    }
}

pub struct SqliteStatementConnection {
    inner: SqliteConnection,
}

impl StatementConnection for SqliteStatementConnection {
    async fn execute_update(&mut self, sql: &str) -> Result<u64, DatabaseError> {
        // 原样执行语句文本，不绑定参数
        let result = (&mut self.inner).execute(sql).await?;
        Ok(result.rows_affected())
    }

    async fn close(self) -> Result<(), DatabaseError> {
        self.inner.close().await
    }
}
