use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;

/// /run 请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
    pub new_message: NewMessage,
    pub streaming: bool,
    pub state_delta: Value,
}

#[derive(Debug, Serialize)]
pub struct NewMessage {
    pub parts: Vec<MessagePart>,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct MessagePart {
    pub text: String,
}

impl RunRequest {
    /// 以单条用户消息构造请求
    pub fn new(config: &Config, user_id: &str, session_id: &str, text: String) -> Self {
        Self {
            app_name: config.app_name.clone(),
            user_id: user_id.to_string(),
            session_id: session_id.to_string(),
            new_message: NewMessage {
                parts: vec![MessagePart { text }],
                role: "user".to_string(),
            },
            streaming: config.streaming,
            state_delta: serde_json::json!({ "additionalProp1": {} }),
        }
    }
}

/// 嵌入消息文本的仪表盘子请求
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub request: String,
    pub phone_number: String,
    pub user_id: String,
    pub session_id: String,
}

/// 回复列表中的一轮对话
/// 字段缺失或形状不符时按空内容处理，不使反序列化失败
#[derive(Debug, Deserialize)]
pub struct AgentTurn {
    #[serde(default)]
    pub content: Option<TurnContent>,
}

#[derive(Debug, Deserialize)]
pub struct TurnContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}
