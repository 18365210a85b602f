pub mod config;
pub mod debounce;
pub mod error;
pub mod results;
pub mod submit_guard;
pub mod suggest;

pub use config::ExplorerConfig;
pub use error::{ExplorerError, ExplorerResult};
