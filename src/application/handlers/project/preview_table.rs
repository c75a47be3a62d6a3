//! PreviewTableHandler - Shows the head of a table before import.

use crate::config::LimitsConfig;
use crate::domain::project::{TabularData, TabularPreview};

/// Returns the first `preview_rows` rows of a table.
pub struct PreviewTableHandler {
    limits: LimitsConfig,
}

impl PreviewTableHandler {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    pub fn handle(&self, data: &TabularData) -> TabularPreview {
        data.preview(self.limits.preview_rows)
    }
}
