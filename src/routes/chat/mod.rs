mod handler;
pub mod model;

pub use handler::{load_home_dashboard, send_message};
