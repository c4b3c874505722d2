//! 控制台服务模块
//!
//! 提供项目、成员、公共代码列表页面，以及页面路由

use api_client::{ApiClient, BackendApi};
use axum::Router;
use color_eyre::Result;
use shared_lib::AppConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub mod models;
pub mod routes;

/// 应用共享状态
///
/// 页面只通过 [`BackendApi`] 访问后端，所有请求处理器共享同一个实例。
pub struct AppState<A: BackendApi> {
    pub api: Arc<A>,
}

impl<A: BackendApi> AppState<A> {
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }
}

// 手动实现，避免要求 A: Clone
impl<A: BackendApi> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone() }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<ApiClient>;

/// 已经装配好路由的控制台应用
pub struct App {
    router: Router,
    listen_addr: SocketAddr,
}

impl App {
    pub fn new<A: BackendApi>(api: A, listen_addr: SocketAddr) -> Self {
        Self {
            router: routes::create_app_router(AppState::new(api)),
            listen_addr,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// 挂载应用：绑定监听地址并开始处理请求，直到进程退出
    pub async fn mount(self) -> Result<()> {
        info!("🚀 启动控制台 在 http://{}", self.listen_addr);

        let listener = tokio::net::TcpListener::bind(self.listen_addr).await?;
        axum::serve(listener, self.router.into_make_service()).await?;

        Ok(())
    }
}

/// 根据配置装配应用
///
/// 创建后端客户端 -> 共享状态 -> 路由，整个进程只调用一次。
pub fn bootstrap(config: &AppConfig) -> App {
    info!("🔗 后端接口地址: {}", config.api_base_url);
    App::new(ApiClient::from_config(config), config.listen_addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_bootstrap_wires_router() {
        let config = AppConfig::from_vars(Some("http://127.0.0.1:1/api".to_string()), Some("127.0.0.1:0".to_string())).unwrap();
        let app = bootstrap(&config);
        assert_eq!(app.listen_addr(), config.listen_addr);

        let response = app
            .router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], routes::DEFAULT_VIEW_PATH);
    }

    #[tokio::test]
    async fn test_bootstrap_propagates_backend_failure() {
        // 后端不可达：项目列表返回 502，公共代码页面返回空数据
        let config = AppConfig::from_vars(Some("http://127.0.0.1:1/api".to_string()), None).unwrap();
        let app = bootstrap(&config);

        let response = app
            .router()
            .oneshot(Request::builder().uri("/project/list").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = app
            .router()
            .oneshot(Request::builder().uri("/common/codes?grpCds=PRJ_GBN").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "codes": {} }));
    }
}
