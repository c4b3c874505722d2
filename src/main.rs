use color_eyre::Result;
use shared_lib::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志，默认 info 级别，可通过 RUST_LOG 调整
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 启动 prj-console...");

    let config = AppConfig::load()?;

    // 组装应用：后端客户端 -> 共享状态 -> 路由
    let app = web_service::bootstrap(&config);

    app.mount().await
}
