pub mod config;
pub mod error;
pub mod lang;

pub use config::YatraConfig;
pub use error::{Result, YatraError};
pub use lang::{is_supported, language_code, language_name};
