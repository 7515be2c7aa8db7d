//! # 产品录入服务
//!
//! 单个 HTTP 端点 `GET /add-product`：解析 `name` 与 `price`，
//! 拼接 `INSERT INTO PRODUCT` 语句，每次请求新开一个数据库连接执行，
//! 成功后返回 `text/html` 的 `OK\n`。
//!
//! 分层结构：
//! - `app`：路由、处理器、业务服务
//! - `core`：错误处理、中间件、应答
//! - `infrastructure`：数据库连接、日志
//! - `config`：配置加载与验证

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use config::AppConfig;
