//! Client configuration, filesystem locations, and logging setup shared by the
//! datasite setup tools.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{ClientConfig, CLIENT_CONFIG_ENV};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, parse_level};
pub use paths::{Paths, KEY_FILE_NAME};
