//! boxchart-rs: layout engine for box-and-whisker charts.
//!
//! This crate computes the derived state a rendering backend needs from
//! pre-aggregated quartile data: fitted measure-axis bounds, responsive
//! category-label budgets, and a validated category series. Drawing and
//! pointer interaction stay behind the [`render::RenderDelegate`] seam so the
//! layout math remains pure and headless-testable.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpec, ChartSpecBuilder};
pub use error::{ChartError, ChartResult};
