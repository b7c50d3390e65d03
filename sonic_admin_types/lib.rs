pub mod collections;
pub mod content;
pub mod dashboard;
pub mod errors;
pub mod faq;
pub mod fields;
pub mod logs;
pub mod testimonial;
pub mod user;

pub use errors::SchemaError;
