use crate::api::ChartSpec;
use crate::error::ChartResult;
use crate::render::RenderDelegate;

/// No-op delegate used by tests and headless layout runs.
///
/// It still validates the spec so tests can catch invalid style values
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullDelegate {
    pub last_category_count: usize,
    pub presented_count: usize,
}

impl RenderDelegate for NullDelegate {
    fn present(&mut self, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;
        self.last_category_count = spec.series.len();
        self.presented_count += 1;
        Ok(())
    }
}
