use crate::config::Config;

use super::model::RunRequest;

/// 代理服务客户端
/// 每次调用新建HTTP客户端，不做重试也不维护连接池
pub struct AgentClient {
    base_url: String,
}

impl AgentClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.agent_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 调用 /run 接口，返回原始响应文本
    pub async fn run(&self, request: &RunRequest) -> Result<String, reqwest::Error> {
        let url = format!("{}/run", self.base_url);

        let client = reqwest::Client::new();
        let response = client
            .post(&url)
            .header("accept", "application/json")
            .json(request)
            .send()
            .await?;

        response.text().await
    }

    /// 在代理侧创建会话，返回原始响应文本
    pub async fn create_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<String, reqwest::Error> {
        let url = format!(
            "{}/apps/{}/users/{}/sessions/{}",
            self.base_url, app_name, user_id, session_id
        );

        let client = reqwest::Client::new();
        let response = client
            .post(&url)
            .header("accept", "application/json")
            .json(&serde_json::json!({ "additionalProp1": {} }))
            .send()
            .await?;

        response.text().await
    }
}
