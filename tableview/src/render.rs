//! Renderer capability and positioned render output.
//!
//! The core never draws. The host implements [`TableRenderer`] to produce
//! an opaque element per cell and header; the core combines those with the
//! column widths and sort indicators into [`RenderedRow`] and
//! [`RenderedHeader`] values the host lays out.

use crate::sort::{SortIconPosition, SortState};

// =============================================================================
// TableRenderer
// =============================================================================

/// Produces visual elements for cells and headers.
///
/// # Example
///
/// ```ignore
/// struct CarRenderer;
///
/// impl TableRenderer<Car> for CarRenderer {
///     type Element = String;
///
///     fn render_cell(&self, _row: usize, column: usize, car: &Car) -> Option<String> {
///         match column {
///             0 => Some(car.producer.clone()),
///             1 => Some(car.power.to_string()),
///             _ => None,
///         }
///     }
///
///     fn render_header(&self, column: usize) -> Option<String> {
///         ["Producer", "Power"].get(column).map(|s| s.to_string())
///     }
///
///     fn placeholder(&self) -> String {
///         String::new()
///     }
/// }
/// ```
pub trait TableRenderer<T> {
    /// Host-defined visual handle.
    type Element;

    /// Element for one cell. `None` falls back to [`placeholder`](Self::placeholder).
    fn render_cell(&self, row_index: usize, column_index: usize, row: &T) -> Option<Self::Element>;

    /// Element for a cell of the expanded (long-pressed) row. Defaults to
    /// [`render_cell`](Self::render_cell).
    fn render_long_press_cell(
        &self,
        row_index: usize,
        column_index: usize,
        row: &T,
    ) -> Option<Self::Element> {
        self.render_cell(row_index, column_index, row)
    }

    /// Element for one header cell. `None` falls back to the placeholder.
    fn render_header(&self, column_index: usize) -> Option<Self::Element>;

    /// Neutral element used for missing cells and out-of-range rows.
    fn placeholder(&self) -> Self::Element;
}

// =============================================================================
// Output
// =============================================================================

/// An element with its horizontal placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell<E> {
    pub column: usize,
    /// X-offset from the table's left edge in pixels.
    pub x: u32,
    pub width: u32,
    pub element: E,
}

/// A header cell with its sort indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell<E> {
    pub cell: PlacedCell<E>,
    pub sort_state: SortState,
    /// Resource key of the indicator, `None` when nothing is drawn.
    pub indicator: Option<String>,
}

/// All header cells of the table plus the header style values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader<E> {
    pub cells: Vec<HeaderCell<E>>,
    /// `false` while the header is collapsed.
    pub visible: bool,
    /// Opaque header background value.
    pub background: u32,
    pub elevation: u32,
    /// Side of each cell the indicator goes on.
    pub icon_position: SortIconPosition,
}

/// One data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow<E> {
    pub row_index: usize,
    /// Opaque background value from the row background provider.
    pub background: u32,
    pub cells: Vec<PlacedCell<E>>,
}

// =============================================================================
// Row backgrounds
// =============================================================================

/// Picks the background of a data row.
///
/// `row` is `None` when the row index is out of range.
pub trait RowBackgroundProvider<T> {
    fn row_background(&self, row_index: usize, row: Option<&T>) -> u32;
}

/// Same background for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarRowBackground(pub u32);

impl<T> RowBackgroundProvider<T> for SimilarRowBackground {
    fn row_background(&self, _row_index: usize, _row: Option<&T>) -> u32 {
        self.0
    }
}

/// Alternating backgrounds for even and odd rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternatingRowBackground {
    pub even: u32,
    pub odd: u32,
}

impl<T> RowBackgroundProvider<T> for AlternatingRowBackground {
    fn row_background(&self, row_index: usize, _row: Option<&T>) -> u32 {
        if row_index % 2 == 0 { self.even } else { self.odd }
    }
}

/// Same background for every row.
pub fn similar_row_color(color: u32) -> SimilarRowBackground {
    SimilarRowBackground(color)
}

/// Alternate two backgrounds, starting with `even` on row 0.
pub fn alternating_row_colors(even: u32, odd: u32) -> AlternatingRowBackground {
    AlternatingRowBackground { even, odd }
}
