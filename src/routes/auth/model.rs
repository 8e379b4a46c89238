use serde::Deserialize;

/// 登录请求
/// Password 仅为兼容保留，下游会话创建不校验口令
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub user_id: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub session_id: Option<String>,
}
