pub mod app_config;
pub mod logging;
pub mod server;

pub use app_config::*;
pub use logging::*;
pub use server::*;
