//! 基础设施层：数据库连接、日志

pub mod database;
pub mod logger;

pub use database::{Connector, DatabaseError, SqliteConnector, StatementConnection};
pub use logger::Logger;
