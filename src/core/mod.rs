pub mod config;
pub mod error;

pub use config::{config, set_config, ServiceConfig};
pub use error::{GenquestError, Result};
