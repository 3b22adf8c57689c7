//! Endless scrolling: ask the host for more rows near the end of the data.

/// Rows from the end at which more rows are requested.
pub const DEFAULT_ROW_THRESHOLD: usize = 5;

/// Emitted when the viewport approaches the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoreRowsRequest {
    pub first_visible: usize,
    pub visible_count: usize,
    pub total: usize,
}

/// Tracks scroll positions and requests more rows once per growth of the
/// row count.
///
/// After a request the tracker waits until the total row count grows
/// before it requests again.
#[derive(Debug, Clone)]
pub struct EndlessScroll {
    row_threshold: usize,
    previous_total: usize,
    loading: bool,
}

impl Default for EndlessScroll {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_THRESHOLD)
    }
}

impl EndlessScroll {
    pub fn new(row_threshold: usize) -> Self {
        Self {
            row_threshold,
            previous_total: 0,
            loading: true,
        }
    }

    pub fn row_threshold(&self) -> usize {
        self.row_threshold
    }

    /// Check if a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Feed a scroll position. Returns a request when more rows are needed.
    pub fn on_scroll(
        &mut self,
        first_visible: usize,
        visible_count: usize,
        total: usize,
    ) -> Option<MoreRowsRequest> {
        if self.loading && total > self.previous_total {
            self.loading = false;
            self.previous_total = total;
        }

        let remaining = total.saturating_sub(visible_count);
        if !self.loading && remaining <= first_visible + self.row_threshold {
            self.loading = true;
            log::debug!(
                "requesting more rows (first visible {}, visible {}, total {})",
                first_visible,
                visible_count,
                total
            );
            return Some(MoreRowsRequest {
                first_visible,
                visible_count,
                total,
            });
        }
        None
    }

    /// Forget the loaded row count, e.g. after the data was replaced.
    pub fn reset(&mut self) {
        self.previous_total = 0;
        self.loading = true;
    }
}

// =============================================================================
// HeaderCollapse
// =============================================================================

/// Rows the first visible row has to move before the header toggles.
pub const DEFAULT_HEADER_ROW_OFFSET: usize = 2;

/// Hides the header while scrolling down and shows it again while scrolling
/// up.
///
/// The header toggles once the first visible row moved at least
/// `row_offset` rows away from the position of the last toggle. Movement
/// in the direction the header already reflects keeps advancing that
/// position.
#[derive(Debug, Clone)]
pub struct HeaderCollapse {
    row_offset: usize,
    previous_first_visible: usize,
    header_visible: bool,
}

impl Default for HeaderCollapse {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_ROW_OFFSET)
    }
}

impl HeaderCollapse {
    pub fn new(row_offset: usize) -> Self {
        Self {
            row_offset,
            previous_first_visible: 0,
            header_visible: true,
        }
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Sync with a visibility the host set directly.
    pub fn set_header_visible(&mut self, visible: bool) {
        self.header_visible = visible;
    }

    /// Feed the first visible row. Returns the new visibility when it
    /// changed.
    pub fn on_scroll(&mut self, first_visible: usize) -> Option<bool> {
        let previous = self.previous_first_visible;
        let mut changed = None;

        if first_visible > previous
            && first_visible - previous >= self.row_offset
            && self.header_visible
        {
            self.header_visible = false;
            self.previous_first_visible = first_visible;
            changed = Some(false);
        } else if first_visible < previous
            && previous - first_visible >= self.row_offset
            && !self.header_visible
        {
            self.header_visible = true;
            self.previous_first_visible = first_visible;
            changed = Some(true);
        }

        let previous = self.previous_first_visible;
        if (first_visible > previous && !self.header_visible)
            || (first_visible < previous && self.header_visible)
        {
            self.previous_first_visible = first_visible;
        }

        if let Some(visible) = changed {
            log::debug!(
                "header {} at row {}",
                if visible { "shown" } else { "hidden" },
                first_visible
            );
        }
        changed
    }
}
