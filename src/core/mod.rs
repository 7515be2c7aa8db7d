//! 核心层：错误处理、中间件、应答

pub mod error;
pub mod middleware;
pub mod response;

pub use error::CoreError;
pub use response::TextReply;
