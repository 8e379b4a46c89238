use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{AppState, agent::AgentClient, error::AppError};

use super::model::LoginRequest;

/// 登录即在代理侧创建会话，回传下游对象并规范化 sessionid 字段
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError> {
    // 会话令牌取请求中的SessionId，缺省时生成
    let session_token = match req.session_id.filter(|v| !v.is_empty()) {
        Some(token) => token,
        None => Uuid::new_v4().to_string(),
    };

    let client = AgentClient::new(&state.config);
    let body = client
        .create_session(&state.config.app_name, &req.user_id, &session_token)
        .await
        .map_err(|e| {
            tracing::error!("Agent session creation failed: {}", e);
            AppError::Internal(e.to_string())
        })?;

    tracing::debug!("Agent session response: {}", body);

    let mut result: Map<String, Value> =
        serde_json::from_str(&body).map_err(|e| AppError::Internal(e.to_string()))?;

    // 下游字段名不统一，按优先级取会话ID
    let session_id = ["sessionid", "id", "sessionId"]
        .iter()
        .find_map(|key| result.get(*key).cloned());

    match session_id {
        Some(value) => {
            result.insert("sessionid".to_string(), value);
        }
        None => {
            result.insert(
                "error".to_string(),
                Value::String("sessionid not found in response".to_string()),
            );
        }
    }

    Ok(Json(Value::Object(result)).into_response())
}
