use thiserror::Error;

/// 接口调用错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 网络层错误（连接失败、DNS、TLS 等）
    #[error("HTTP请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 后端返回了非 2xx 状态码
    #[error("接口返回错误状态 ({status}): {body}")]
    Status { status: u16, body: String },

    /// 响应信封或 `data` 的结构和约定不一致
    #[error("响应数据格式错误: {0}")]
    Decode(#[from] serde_json::Error),

    /// 请求参数校验失败，请求不会被发送
    #[error("请求参数无效: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    /// 创建状态码错误
    pub fn status<T: ToString>(status: u16, body: T) -> Self {
        Self::Status {
            status,
            body: body.to_string(),
        }
    }
}
