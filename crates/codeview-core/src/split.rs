//! Split-pane layout state.

use serde::{Deserialize, Serialize};

use crate::error::{CodeviewError, Result};

/// Smallest share (in percent) a pane may take.
pub const MIN_PANE_SIZE: f32 = 20.0;

/// Allowed drift when pane sizes are checked against 100%.
const SIZE_TOLERANCE: f32 = 0.5;

/// Whether the viewer is split, and how the two panes share the width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLayout {
    pub is_split: bool,
    /// Left/right pane widths in percent.
    #[serde(default = "default_sizes")]
    pub sizes: [f32; 2],
}

fn default_sizes() -> [f32; 2] {
    [50.0, 50.0]
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self {
            is_split: false,
            sizes: default_sizes(),
        }
    }
}

impl SplitLayout {
    pub fn new(is_split: bool) -> Self {
        Self {
            is_split,
            ..Self::default()
        }
    }

    /// Flips split mode and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_split = !self.is_split;
        self.is_split
    }

    /// Validates and stores new pane sizes.
    pub fn set_sizes(&mut self, sizes: [f32; 2]) -> Result<()> {
        Self::validate_sizes(sizes)?;
        self.sizes = sizes;
        Ok(())
    }

    /// Checks that both panes meet the minimum and together fill the width.
    pub fn validate_sizes(sizes: [f32; 2]) -> Result<()> {
        if sizes.iter().any(|s| !s.is_finite() || *s < MIN_PANE_SIZE) {
            return Err(CodeviewError::validation(format!(
                "Pane sizes must be at least {}%, got {:?}",
                MIN_PANE_SIZE, sizes
            )));
        }
        let total = sizes[0] + sizes[1];
        if (total - 100.0).abs() > SIZE_TOLERANCE {
            return Err(CodeviewError::validation(format!(
                "Pane sizes must add up to 100%, got {}",
                total
            )));
        }
        Ok(())
    }
}
