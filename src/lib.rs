pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use app::App;
pub use config::{AppConfig, Backend, CliArgs};
pub use crate::core::{composer::PasswordComposer, generator::PasswordGenerator};
pub use domain::model::{Category, GeneratedPassword, Origin, WordEntry};
pub use utils::error::{PassError, Result};
