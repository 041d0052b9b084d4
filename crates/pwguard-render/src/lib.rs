//! Rendering utilities for form surfaces and reviews (field errors, Markdown).

#![forbid(unsafe_code)]

mod field_errors;
mod markdown;
mod model;

pub use field_errors::render_field_errors;
pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableFinding, RenderableReport, RenderableVerdict};
