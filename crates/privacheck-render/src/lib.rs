//! Rendering of compliance reports for humans (Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{
    RenderableCheck, RenderableCitation, RenderableCounts, RenderableReport, RenderableRisk,
    RenderableStatus, RenderableVerdict, RenderableViolation,
};
