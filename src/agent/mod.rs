// 代理服务模块
// 出站调用、请求/回复模型与仪表盘数据提取

pub mod client;
pub mod extract;
pub mod model;

// 重新导出常用类型，方便其他模块使用
pub use client::AgentClient;
pub use model::{AgentTurn, DashboardQuery, RunRequest};
