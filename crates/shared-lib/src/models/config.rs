use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// 默认后端地址，本地开发时后端运行在 8080 端口
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// 默认挂载地址
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5173";

/// 程序配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端接口前缀，所有接口路径都拼接在它后面（不带结尾的 `/`）
    ///
    /// 可通过环境变量 `API_BASE_URL` 来调整
    pub api_base_url: String,

    /// 控制台挂载（监听）的地址
    ///
    /// 可通过环境变量 `LISTEN_ADDR` 来调整
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let config = Self::from_vars(std::env::var("API_BASE_URL").ok(), std::env::var("LISTEN_ADDR").ok())?;
        Ok(Arc::new(config))
    }

    /// 根据变量值构造配置，未设置的变量使用默认值
    pub fn from_vars(api_base_url: Option<String>, listen_addr: Option<String>) -> Result<AppConfig> {
        let api_base_url = api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            return Err::<AppConfig, _>(eyre!("API_BASE_URL is empty")).suggestion("设置 API_BASE_URL 环境变量，例如 http://localhost:8080/api");
        }

        let listen_addr = listen_addr
            .as_deref()
            .unwrap_or(DEFAULT_LISTEN_ADDR)
            .parse::<SocketAddr>()
            .context("Can not parse LISTEN_ADDR")
            .suggestion("LISTEN_ADDR 格式为 ip:port，例如 127.0.0.1:5173")?;

        Ok(AppConfig { api_base_url, listen_addr })
    }
}
