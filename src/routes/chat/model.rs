use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 聊天消息请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChatMessageRequest {
    pub text: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// 仪表盘加载请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    /// 为真时跳过缓存命中检查，强制请求代理
    #[serde(default)]
    pub refresh: bool,
}

/// 仪表盘加载响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub dashboard_config: Value,
    pub message: String,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}
