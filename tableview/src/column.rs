//! Column sizing.
//!
//! A [`ColumnModel`] knows how many columns the table has and turns the
//! available container width into a pixel width per column. A model is
//! either weighted (every column gets a share of the width proportional to
//! its weight) or fixed-width (every column has an explicit width and the
//! container width is ignored).

use std::collections::HashMap;

use crate::error::{Result, SizingKind, TableError};

/// Weight of a column without an explicit weight.
pub const DEFAULT_COLUMN_WEIGHT: u32 = 1;

/// Default width of a fixed-width column given in pixels.
pub const DEFAULT_COLUMN_WIDTH_PX: u32 = 200;

/// Default width of a fixed-width column given in density-independent units.
pub const DEFAULT_COLUMN_WIDTH_DP: u32 = 100;

// =============================================================================
// Density / Dimension
// =============================================================================

/// Pixels per density-independent unit of the target display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Density {
    /// Create a density factor. Non-finite or negative factors fall back to 1.
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor >= 0.0 {
            Self(factor)
        } else {
            Self(1.0)
        }
    }

    /// The raw factor.
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Convert density-independent units to pixels, rounding to nearest.
    pub fn to_pixels(self, units: u32) -> u32 {
        (units as f32 * self.0).round() as u32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

/// A width in a specific unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Physical pixels.
    Px(u32),
    /// Density-independent units, converted with the model's [`Density`].
    Dp(u32),
}

impl Dimension {
    fn to_pixels(self, density: Density) -> u32 {
        match self {
            Dimension::Px(px) => px,
            Dimension::Dp(dp) => density.to_pixels(dp),
        }
    }
}

// =============================================================================
// ColumnSizing
// =============================================================================

/// Sizing strategy shared by all columns of a model.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSizing {
    /// Share the available width by weight.
    Weighted {
        /// Explicit weights; absent columns weigh [`DEFAULT_COLUMN_WEIGHT`].
        weights: HashMap<usize, u32>,
    },
    /// Explicit widths in pixels.
    Fixed {
        /// Explicit widths (already converted to pixels).
        widths: HashMap<usize, u32>,
        /// Width of columns without an explicit width, in pixels.
        default_width: u32,
        /// Density used to convert [`Dimension::Dp`] values.
        density: Density,
    },
}

impl ColumnSizing {
    fn kind(&self) -> SizingKind {
        match self {
            ColumnSizing::Weighted { .. } => SizingKind::Weighted,
            ColumnSizing::Fixed { .. } => SizingKind::Fixed,
        }
    }
}

// =============================================================================
// ColumnModel
// =============================================================================

/// Column count plus the sizing rule for every column.
///
/// # Example
///
/// ```
/// use tableview::ColumnModel;
///
/// let mut model = ColumnModel::weighted(4);
/// model.set_column_weight(0, 2).unwrap();
/// model.set_column_weight(1, 4).unwrap();
/// model.set_column_weight(2, 3).unwrap();
/// model.set_column_weight(3, 2).unwrap();
///
/// assert_eq!(model.column_widths(1100), vec![200, 400, 300, 200]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnModel {
    column_count: usize,
    sizing: ColumnSizing,
}

impl ColumnModel {
    /// A weighted model where every column starts with weight 1.
    pub fn weighted(column_count: usize) -> Self {
        Self {
            column_count,
            sizing: ColumnSizing::Weighted {
                weights: HashMap::new(),
            },
        }
    }

    /// A fixed-width model with a default width in pixels.
    pub fn fixed_px(column_count: usize, default_width_px: u32) -> Self {
        Self {
            column_count,
            sizing: ColumnSizing::Fixed {
                widths: HashMap::new(),
                default_width: default_width_px,
                density: Density::default(),
            },
        }
    }

    /// A fixed-width model with a default width in density-independent
    /// units. Later [`Dimension::Dp`] widths use the same density.
    pub fn fixed_dp(column_count: usize, default_width_dp: u32, density: Density) -> Self {
        Self {
            column_count,
            sizing: ColumnSizing::Fixed {
                widths: HashMap::new(),
                default_width: density.to_pixels(default_width_dp),
                density,
            },
        }
    }

    /// The sizing strategy.
    pub fn sizing(&self) -> &ColumnSizing {
        &self.sizing
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Set the number of columns. Explicit weights and widths are kept.
    pub fn set_column_count(&mut self, column_count: usize) {
        self.column_count = column_count;
    }

    // -------------------------------------------------------------------------
    // Weighted
    // -------------------------------------------------------------------------

    /// Set the weight of a column.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidWeight`] for a weight of 0 and
    /// [`TableError::SizingMismatch`] on a fixed-width model.
    pub fn set_column_weight(&mut self, column: usize, weight: u32) -> Result<()> {
        match &mut self.sizing {
            ColumnSizing::Weighted { weights } => {
                if weight == 0 {
                    return Err(TableError::InvalidWeight { column });
                }
                weights.insert(column, weight);
                Ok(())
            }
            other => Err(TableError::SizingMismatch {
                expected: SizingKind::Weighted,
                found: other.kind(),
            }),
        }
    }

    /// Weight of a column. Fixed-width models report the default weight.
    pub fn column_weight(&self, column: usize) -> u32 {
        match &self.sizing {
            ColumnSizing::Weighted { weights } => weights
                .get(&column)
                .copied()
                .unwrap_or(DEFAULT_COLUMN_WEIGHT),
            ColumnSizing::Fixed { .. } => DEFAULT_COLUMN_WEIGHT,
        }
    }

    /// Sum of the weights of columns `0..column_count`.
    ///
    /// Saturates at `u32::MAX`.
    pub fn column_weight_sum(&self) -> u32 {
        (0..self.column_count)
            .map(|c| self.column_weight(c))
            .fold(0, u32::saturating_add)
    }

    // -------------------------------------------------------------------------
    // Fixed width
    // -------------------------------------------------------------------------

    /// Set the explicit width of a column.
    ///
    /// # Errors
    ///
    /// [`TableError::SizingMismatch`] on a weighted model.
    pub fn set_column_width(&mut self, column: usize, width: Dimension) -> Result<()> {
        match &mut self.sizing {
            ColumnSizing::Fixed {
                widths, density, ..
            } => {
                widths.insert(column, width.to_pixels(*density));
                Ok(())
            }
            other => Err(TableError::SizingMismatch {
                expected: SizingKind::Fixed,
                found: other.kind(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Width queries
    // -------------------------------------------------------------------------

    /// Pixel width of a column given the available table width.
    ///
    /// Columns at or past [`column_count`](Self::column_count) have width 0.
    pub fn column_width(&self, column: usize, table_width: u32) -> u32 {
        if column >= self.column_count {
            return 0;
        }
        match &self.sizing {
            ColumnSizing::Weighted { .. } => {
                let weight_sum = self.column_weight_sum().max(1);
                let unit = table_width / weight_sum;
                unit.saturating_mul(self.column_weight(column))
            }
            ColumnSizing::Fixed {
                widths,
                default_width,
                ..
            } => widths.get(&column).copied().unwrap_or(*default_width),
        }
    }

    /// Widths of all columns.
    pub fn column_widths(&self, table_width: u32) -> Vec<u32> {
        (0..self.column_count)
            .map(|c| self.column_width(c, table_width))
            .collect()
    }

    /// X-offset where each column starts.
    pub fn column_offsets(&self, table_width: u32) -> Vec<u32> {
        let mut offsets = Vec::with_capacity(self.column_count);
        let mut x = 0u32;
        for width in self.column_widths(table_width) {
            offsets.push(x);
            x = x.saturating_add(width);
        }
        offsets
    }

    /// Sum of all column widths, saturating at `u32::MAX`.
    pub fn total_width(&self, table_width: u32) -> u32 {
        self.column_widths(table_width)
            .into_iter()
            .fold(0, u32::saturating_add)
    }
}

impl Default for ColumnModel {
    fn default() -> Self {
        Self::weighted(0)
    }
}
