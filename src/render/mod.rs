mod color;
mod null_delegate;

pub use color::Color;
pub use null_delegate::NullDelegate;

use crate::api::ChartSpec;
use crate::error::ChartResult;

/// Contract implemented by the host-side rendering backend.
///
/// Delegates receive a fully materialized [`ChartSpec`] so drawing and
/// tooltip assembly stay isolated from layout logic. Tooltips are built
/// delegate-side from the untruncated labels (by category index) and the
/// spec's value formatter.
pub trait RenderDelegate {
    fn present(&mut self, spec: &ChartSpec) -> ChartResult<()>;
}
