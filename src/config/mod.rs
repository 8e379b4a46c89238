use std::env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub agent_base_url: String,
    pub app_name: String,
    pub default_user_id: String,
    pub default_session_id: String,
    pub streaming: bool,
    pub server_host: String,
    pub server_port: u16,
    pub phone_directory: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            agent_base_url: env::var("AGENT_BASE_URL")?,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "finance-agent".into()),
            default_user_id: env::var("DEFAULT_USER_ID").unwrap_or_else(|_| "guest".into()),
            default_session_id: env::var("DEFAULT_SESSION_ID")
                .unwrap_or_else(|_| "session-0".into()),
            streaming: env::var("STREAMING")
                .map(|v| v.trim().parse().unwrap_or(false))
                .unwrap_or(false),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            phone_directory: env::var("PHONE_DIRECTORY").unwrap_or_default(),
        })
    }
}
