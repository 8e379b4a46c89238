/// 缓存数据模型
/// 定义缓存数据的结构体
// 仪表盘缓存模型
pub mod dashboard;

// 重新导出常用类型
pub use dashboard::{CachedDashboard, DASHBOARD_CACHE_EXPIRE};
