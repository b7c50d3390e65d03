pub mod config;
pub mod errors;
pub mod fixtures;
pub mod http;
pub mod logs;

pub use errors::PreviewError;
pub use http::{PreviewRouter, PreviewState};
