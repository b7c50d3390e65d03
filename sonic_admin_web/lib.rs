pub mod components;
mod document;
mod errors;
pub mod pages;
pub mod view_helpers;

pub use errors::RenderError;
pub use pages::*;
