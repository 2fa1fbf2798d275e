//! Report views and rendering.

pub mod generator;
pub mod view;

pub use generator::{generate_json_report, generate_markdown_report, RenderOptions};
pub use view::{cited_sources, ClaimEntry, ReportView, ViewOptions, ViewSession};
