use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, routes};

// 认证相关的路由
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(routes::auth::login))
}

// 聊天相关的路由
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/send", post(routes::chat::send_message))
        .route("/chat/LoadHomeDashboard", post(routes::chat::load_home_dashboard))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(chat_routes())
        .route("/health", get(routes::health::ping))
        .with_state(state)
}
