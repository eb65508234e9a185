//! Metadata writers: turn publications into text for downstream consumers.

pub mod json;
pub mod text;

pub use json::JsonWriter;
pub use text::TextWriter;
