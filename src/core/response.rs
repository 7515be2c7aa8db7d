//! 核心响应处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 纯文本应答
///
/// 只在业务处理成功后才会构造，失败路径上不存在任何应答内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl TextReply {
    pub const TEXT_HTML: &'static str = "text/html";

    /// `200 OK`，`text/html`
    pub fn ok_html(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Self::TEXT_HTML,
            body: body.into(),
        }
    }
}

impl IntoResponse for TextReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}
