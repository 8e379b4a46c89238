use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use agent_relay::{
    AppState, cache::DashboardStore, config::Config, directory::PhoneDirectory,
    middleware::log_errors, router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    // 设置应用状态
    let state = AppState {
        directory: Arc::new(PhoneDirectory::from_config(&config)),
        cache: Arc::new(DashboardStore::default()),
        config,
    };

    let router = router::create_router(state.clone());

    // 添加日志中间件
    let router = router.layer(axum::middleware::from_fn(log_errors));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        // 设置开发环境的CORS，允许所有来源
        let cors = tower_http::cors::CorsLayer::permissive();
        router.layer(cors)
    };

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
