use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{
    AppState,
    agent::{
        AgentClient,
        extract::{build_dashboard, extract_dashboard},
        model::{AgentTurn, DashboardQuery, RunRequest},
    },
    cache::DashboardCacheOperations,
    error::AppError,
};

use super::model::{ChatMessageRequest, DashboardRequest, DashboardResponse};

/// 代理调用后的固定等待
const POST_CALL_DELAY: Duration = Duration::from_secs(1);

#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Response, AppError> {
    let user_id = req
        .user_id
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| state.config.default_user_id.clone());
    let session_id = req
        .session_id
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| state.config.default_session_id.clone());

    let request = RunRequest::new(&state.config, &user_id, &session_id, req.text);
    let client = AgentClient::new(&state.config);
    let body = client.run(&request).await.map_err(|e| {
        tracing::error!("Agent call failed: {}", e);
        AppError::Internal(e.to_string())
    })?;

    let reply: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => {
            // 非JSON响应原样回显
            return Ok(Json(json!({
                "error": "Invalid JSON response from external API",
                "response": body,
            }))
            .into_response());
        }
    };

    // 列表回复取第一轮，对象回复当作单轮处理
    let text = match &reply {
        Value::Array(_) => serde_json::from_value::<Vec<AgentTurn>>(reply.clone())
            .ok()
            .and_then(|turns| turns.into_iter().next())
            .and_then(first_turn_text),
        Value::Object(_) => serde_json::from_value::<AgentTurn>(reply.clone())
            .ok()
            .and_then(first_turn_text),
        _ => {
            return Ok(Json(json!({
                "error": "Unknown JSON structure",
                "response": body,
            }))
            .into_response());
        }
    };

    match text {
        Some(text) => Ok(Json(json!({ "text": text })).into_response()),
        None => Ok(Json(json!({
            "error": "Text not found in response",
            "response": body,
        }))
        .into_response()),
    }
}

#[axum::debug_handler]
pub async fn load_home_dashboard(
    State(state): State<AppState>,
    Json(req): Json<DashboardRequest>,
) -> Result<Response, AppError> {
    let user_id = req
        .user_id
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| state.config.default_user_id.clone());
    let session_id = req
        .session_id
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| state.config.default_session_id.clone());

    // 命中缓存直接返回，不做过期检查
    if !req.refresh {
        if let Some(entry) = DashboardCacheOperations::get_dashboard(&state.cache, &user_id).await {
            return Ok(dashboard_ok(
                entry.payload,
                "Dashboard loaded from cache",
                true,
                None,
            ));
        }
    }

    // 未映射的用户直接失败
    let phone_number = state
        .directory
        .lookup(&user_id)
        .ok_or(AppError::UserNotFound)?
        .to_string();

    let query = DashboardQuery {
        request: "LoadHomeDashboard".to_string(),
        phone_number: phone_number.clone(),
        user_id: user_id.clone(),
        session_id: session_id.clone(),
    };
    let query_text =
        serde_json::to_string(&query).map_err(|e| AppError::Internal(e.to_string()))?;
    let request = RunRequest::new(&state.config, &user_id, &session_id, query_text);

    let client = AgentClient::new(&state.config);
    let outcome = client.run(&request).await;

    let (dashboard, raw_reply) = match outcome {
        Ok(body) => {
            let dashboard = serde_json::from_str::<Vec<AgentTurn>>(&body)
                .ok()
                .and_then(|turns| extract_dashboard(&turns))
                .map(|extracted| build_dashboard(&extracted, &user_id, &phone_number));
            (dashboard, Some(body))
        }
        Err(e) => {
            tracing::error!("Agent dashboard call failed: {}", e);
            (None, None)
        }
    };

    // 固定等待1秒
    tokio::time::sleep(POST_CALL_DELAY).await;

    if let Some(dashboard) = dashboard {
        DashboardCacheOperations::cache_dashboard(&state.cache, &user_id, dashboard.clone()).await;
        return Ok(dashboard_ok(dashboard, "Dashboard loaded", false, None));
    }

    // 回退到上一次成功的缓存
    if let Some(entry) = DashboardCacheOperations::get_dashboard(&state.cache, &user_id).await {
        return Ok(dashboard_ok(
            entry.payload,
            "Dashboard restored from cache",
            true,
            Some(true),
        ));
    }

    // 软失败：保持200状态，回显原始响应
    Ok((
        StatusCode::OK,
        Json(json!({
            "success": false,
            "message": "Dashboard data not found in agent response",
            "response": raw_reply.unwrap_or_default(),
            "cached": false,
        })),
    )
        .into_response())
}

fn first_turn_text(turn: AgentTurn) -> Option<String> {
    let content = turn.content?;
    let part = content.parts.into_iter().next()?;
    part.text.filter(|text| !text.is_empty())
}

fn dashboard_ok(payload: Value, message: &str, cached: bool, fallback: Option<bool>) -> Response {
    (
        StatusCode::OK,
        Json(DashboardResponse {
            success: true,
            dashboard_config: payload,
            message: message.to_string(),
            cached,
            fallback,
        }),
    )
        .into_response()
}
