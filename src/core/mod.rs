pub mod cache;
pub mod composer;
pub mod entropy;
pub mod generator;
pub mod retry;

pub use crate::domain::model::{Category, GeneratedPassword, Origin, WordEntry};
pub use crate::domain::ports::{PoolLoader, Storage, WordSource};
pub use crate::utils::error::Result;
