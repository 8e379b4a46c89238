/// 缓存操作模块
// 仪表盘缓存操作
pub mod dashboard;

pub use dashboard::DashboardCacheOperations;
