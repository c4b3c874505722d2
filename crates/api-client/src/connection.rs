use crate::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_lib::{ApiEnvelope, AppConfig};
use std::fmt::Debug;
use tracing::{debug, warn};

/// 后端接口客户端
///
/// 内部的 [`reqwest::Client`] 自带连接池，clone 后可以安全地在多个任务中使用。
/// 每次调用都是一次独立的请求，没有重试、缓存和自定义超时。
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// 创建新的客户端
    ///
    /// * `base_url` - 接口前缀，例如 `http://localhost:8080/api`
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// 复用已有的 [`reqwest::Client`] 创建客户端
    pub fn with_client<S: Into<String>>(client: reqwest::Client, base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// 根据程序配置创建客户端
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 发送 GET 请求并解析统一响应信封
    ///
    /// `query` 中为 `None` 的字段不会出现在查询字符串中。
    /// 非 2xx 状态码返回 [`ApiError::Status`]，响应体不是合法信封时返回 [`ApiError::Decode`]。
    pub async fn get_envelope<Q>(&self, path: &str, query: Option<&Q>) -> ApiResult<ApiEnvelope<Value>>
    where
        Q: Serialize + Debug + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("📤 API 请求开始: {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::status(status.as_u16(), body));
        }

        let body = response.bytes().await?;
        let envelope: ApiEnvelope<Value> = serde_json::from_slice(&body).inspect_err(|err| {
            debug!("📥 API 响应无法解析: {} {} body={}", url, err, String::from_utf8_lossy(&body));
        })?;
        debug!("📥 API 响应成功: {} {:?}", url, envelope);

        if !envelope.success {
            warn!("⚠️ 接口返回 success=false: {} error={}", url, envelope.error);
        }

        Ok(envelope)
    }
}

/// 把信封中的 `data` 转换为具体类型
pub(crate) fn decode_data<T: DeserializeOwned>(data: Value) -> ApiResult<T> {
    Ok(serde_json::from_value(data)?)
}
