//! The sortable table: rows, columns, sorting and click handling wired
//! together behind one owner.

use std::cmp::Ordering;

use serde::Serialize;

use crate::column::{ColumnModel, Dimension};
use crate::config::TableConfig;
use crate::dispatch::{ClickDispatcher, HeaderClickListener, RowClickListener, RowLongClickListener};
use crate::error::{Result, TableError};
use crate::listeners::ListenerHandle;
use crate::persist::{PersistedSort, SavedState};
use crate::render::{
    HeaderCell, PlacedCell, RenderedHeader, RenderedRow, RowBackgroundProvider,
    SimilarRowBackground, TableRenderer,
};
use crate::rows::RowStore;
use crate::scroll::{EndlessScroll, HeaderCollapse, MoreRowsRequest};
use crate::sort::{
    Comparator, RecapGuard, SortController, SortIndicatorProvider, SortOrder, SortState,
    SortedColumn, SortingStatus, SortingStatusListener,
};

/// A table of rows of type `T` rendered by `R`.
///
/// All methods are expected to run on the host's UI thread; nothing here
/// blocks or locks.
///
/// # Example
///
/// ```ignore
/// let mut table = SortableTable::new(CarRenderer);
/// table.set_column_count(4);
/// table.set_column_comparator(2, Some(comparator(|a: &Car, b: &Car| a.power.cmp(&b.power))));
/// table.set_data(cars);
///
/// table.header_clicked(2); // ascending by power
/// table.header_clicked(2); // descending by power
/// ```
pub struct SortableTable<T, R> {
    config: TableConfig,
    columns: ColumnModel,
    rows: RowStore<T>,
    sorting: SortController<T>,
    clicks: ClickDispatcher<T>,
    recap_guard: RecapGuard,
    renderer: R,
    row_background: Box<dyn RowBackgroundProvider<T>>,
    sort_indicators: Box<dyn SortIndicatorProvider>,
    endless_scroll: EndlessScroll,
    header_visible: bool,
    header_collapse: Option<HeaderCollapse>,
    /// Row rendered with its long-press cells.
    expanded_row: Option<usize>,
}

impl<T: std::fmt::Debug, R> std::fmt::Debug for SortableTable<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableTable")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("sorting", &self.sorting)
            .field("clicks", &self.clicks)
            .field("recap_guard", &self.recap_guard)
            .field("endless_scroll", &self.endless_scroll)
            .field("header_visible", &self.header_visible)
            .field("header_collapse", &self.header_collapse)
            .field("expanded_row", &self.expanded_row)
            .finish_non_exhaustive()
    }
}

impl<T: 'static, R: TableRenderer<T>> SortableTable<T, R> {
    /// Create a table with the default configuration.
    pub fn new(renderer: R) -> Self {
        Self::with_config(TableConfig::default(), renderer)
    }

    /// Create a table from a configuration.
    pub fn with_config(config: TableConfig, renderer: R) -> Self {
        Self {
            columns: ColumnModel::weighted(config.column_count),
            rows: RowStore::default(),
            sorting: SortController::new(),
            clicks: ClickDispatcher::new(),
            recap_guard: RecapGuard::new(),
            renderer,
            row_background: Box::new(SimilarRowBackground(config.row_background)),
            sort_indicators: Box::new(config.sort_indicators),
            endless_scroll: EndlessScroll::new(config.endless_scroll_threshold),
            header_visible: true,
            header_collapse: config.header_collapse_row_offset.map(HeaderCollapse::new),
            expanded_row: None,
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    pub fn column_model(&self) -> &ColumnModel {
        &self.columns
    }

    /// Replace the column model, e.g. to switch to fixed widths.
    pub fn set_column_model(&mut self, model: ColumnModel) {
        self.columns = model;
    }

    pub fn column_count(&self) -> usize {
        self.columns.column_count()
    }

    pub fn set_column_count(&mut self, column_count: usize) {
        self.columns.set_column_count(column_count);
    }

    /// # Errors
    ///
    /// See [`ColumnModel::set_column_weight`].
    pub fn set_column_weight(&mut self, column: usize, weight: u32) -> Result<()> {
        self.columns.set_column_weight(column, weight)
    }

    pub fn column_weight(&self, column: usize) -> u32 {
        self.columns.column_weight(column)
    }

    /// # Errors
    ///
    /// See [`ColumnModel::set_column_width`].
    pub fn set_column_width(&mut self, column: usize, width: Dimension) -> Result<()> {
        self.columns.set_column_width(column, width)
    }

    /// Current pixel width of every column.
    pub fn column_widths(&self, table_width: u32) -> Vec<u32> {
        self.columns.column_widths(table_width)
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the rows. An active sort is re-applied to the new rows.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.rows.replace(rows);
        self.endless_scroll.reset();
        self.expanded_row = None;
        self.notify_data_changed();
    }

    /// Replace the rows with a private copy of `rows`.
    pub fn set_data_from(&mut self, rows: &[T])
    where
        T: Clone,
    {
        self.set_data(rows.to_vec());
    }

    pub fn data(&self) -> &[T] {
        self.rows.as_slice()
    }

    pub fn row(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Edit rows in place. Call [`notify_data_changed`](Self::notify_data_changed)
    /// afterwards.
    pub fn rows_mut(&mut self) -> &mut [T] {
        self.rows.as_mut_slice()
    }

    /// Signal that the row contents changed.
    ///
    /// Observers are notified and an active sort is re-applied. The
    /// notification raised by that re-sort is swallowed by the recap guard.
    pub fn notify_data_changed(&mut self) {
        self.rows.notify_changed();
        if self.recap_guard.swallow() {
            return;
        }
        if self.sorting.recap(&mut self.rows) {
            self.recap_guard.arm();
            self.notify_data_changed();
        }
    }

    pub fn add_data_changed_listener(&mut self, listener: Box<dyn FnMut()>) -> ListenerHandle {
        self.rows.add_observer(listener)
    }

    pub fn remove_data_changed_listener(&mut self, handle: ListenerHandle) -> bool {
        self.rows.remove_observer(handle)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Set or, with `None`, remove the comparator of a column.
    ///
    /// Removing the comparator of the sorted column leaves the table
    /// unsorted without reordering rows.
    pub fn set_column_comparator(&mut self, column: usize, comparator: Option<Comparator<T>>) {
        self.sorting.set_comparator(column, comparator);
    }

    /// The raw comparator of a column.
    pub fn column_comparator(&self, column: usize) -> Option<&Comparator<T>> {
        self.sorting.comparator(column)
    }

    /// Sort as if the header of `column` was clicked: ascending first,
    /// toggling on repeated calls.
    pub fn sort_by_column(&mut self, column: usize) -> Option<SortedColumn> {
        let sorted = self.sorting.activate(column, &mut self.rows)?;
        self.rows.notify_changed();
        Some(sorted)
    }

    /// Sort by `column` in the given order.
    pub fn sort(&mut self, column: usize, order: SortOrder) -> Option<SortedColumn> {
        let sorted = self.sorting.sort(column, order, &mut self.rows)?;
        self.rows.notify_changed();
        Some(sorted)
    }

    /// Sort by an ad hoc ordering not tied to a column. The sorting status
    /// and header indicators are left as they are.
    pub fn sort_with(&mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) {
        let comparator: Comparator<T> = std::rc::Rc::new(compare);
        self.sorting.sort_with(&comparator, &mut self.rows);
        self.rows.notify_changed();
    }

    pub fn sorting_status(&self) -> SortingStatus {
        self.sorting.status()
    }

    pub fn header_sort_state(&self, column: usize) -> SortState {
        self.sorting.header_state(column)
    }

    pub fn set_sort_indicator_provider(&mut self, provider: Box<dyn SortIndicatorProvider>) {
        self.sort_indicators = provider;
    }

    pub fn add_sorting_status_listener(
        &mut self,
        listener: Box<SortingStatusListener>,
    ) -> ListenerHandle {
        self.sorting.add_status_listener(listener)
    }

    pub fn remove_sorting_status_listener(&mut self, handle: ListenerHandle) -> bool {
        self.sorting.remove_status_listener(handle)
    }

    // -------------------------------------------------------------------------
    // Clicks
    // -------------------------------------------------------------------------

    /// Header click: sort by the column (if sortable), then notify header
    /// listeners.
    pub fn header_clicked(&mut self, column: usize) {
        self.sort_by_column(column);
        self.clicks.header_clicked(column);
    }

    /// Row click. Clicks outside the current rows are ignored.
    ///
    /// With long-press expansion enabled a click collapses the expanded row.
    pub fn row_clicked(&mut self, row_index: usize) {
        if let Err(error) = self.rows.try_get(row_index) {
            log::warn!("ignoring row click: {}", error);
            return;
        }
        if self.config.expand_on_long_press && self.expanded_row.take().is_some() {
            self.rows.notify_changed();
        }
        if let Some(row) = self.rows.get(row_index) {
            self.clicks.row_clicked(row_index, row);
        }
    }

    /// Row long-click. Returns whether the click was consumed, either by
    /// long-press expansion or by a listener.
    pub fn row_long_clicked(&mut self, row_index: usize) -> bool {
        if let Err(error) = self.rows.try_get(row_index) {
            log::warn!("ignoring row long-click: {}", error);
            return false;
        }
        let expanded = self.config.expand_on_long_press;
        if expanded {
            self.expanded_row = Some(row_index);
            self.rows.notify_changed();
        }
        let consumed = match self.rows.get(row_index) {
            Some(row) => self.clicks.row_long_clicked(row_index, row),
            None => false,
        };
        expanded || consumed
    }

    /// The row currently showing its long-press cells.
    pub fn expanded_row(&self) -> Option<usize> {
        self.expanded_row
    }

    pub fn add_header_click_listener(&mut self, listener: Box<HeaderClickListener>) -> ListenerHandle {
        self.clicks.add_header_listener(listener)
    }

    pub fn remove_header_click_listener(&mut self, handle: ListenerHandle) -> bool {
        self.clicks.remove_header_listener(handle)
    }

    pub fn add_row_click_listener(&mut self, listener: Box<RowClickListener<T>>) -> ListenerHandle {
        self.clicks.add_row_listener(listener)
    }

    pub fn remove_row_click_listener(&mut self, handle: ListenerHandle) -> bool {
        self.clicks.remove_row_listener(handle)
    }

    pub fn add_row_long_click_listener(
        &mut self,
        listener: Box<RowLongClickListener<T>>,
    ) -> ListenerHandle {
        self.clicks.add_row_long_listener(listener)
    }

    pub fn remove_row_long_click_listener(&mut self, handle: ListenerHandle) -> bool {
        self.clicks.remove_row_long_listener(handle)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn set_row_background_provider(&mut self, provider: Box<dyn RowBackgroundProvider<T>>) {
        self.row_background = provider;
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Show or hide the header.
    pub fn set_header_visible(&mut self, visible: bool) {
        self.header_visible = visible;
        if let Some(collapse) = &mut self.header_collapse {
            collapse.set_header_visible(visible);
        }
    }

    /// Header cells positioned for `table_width`, with sort indicators.
    pub fn render_header(&self, table_width: u32) -> RenderedHeader<R::Element> {
        let cells = self
            .place(table_width)
            .map(|(column, x, width)| {
                let element = self
                    .renderer
                    .render_header(column)
                    .unwrap_or_else(|| self.renderer.placeholder());
                let sort_state = self.sorting.header_state(column);
                HeaderCell {
                    cell: PlacedCell {
                        column,
                        x,
                        width,
                        element,
                    },
                    sort_state,
                    indicator: self.sort_indicators.indicator(sort_state).map(str::to_string),
                }
            })
            .collect();
        RenderedHeader {
            cells,
            visible: self.header_visible,
            background: self.config.header_color,
            elevation: self.config.header_elevation,
            icon_position: self.config.sort_icon_position,
        }
    }

    /// One data row positioned for `table_width`.
    ///
    /// An index outside the rows renders placeholders on the neutral
    /// background instead of failing.
    pub fn render_row(&self, row_index: usize, table_width: u32) -> RenderedRow<R::Element> {
        let row = match self.rows.try_get(row_index) {
            Ok(row) => Some(row),
            Err(error) => {
                log::warn!("rendering placeholder row: {}", error);
                None
            }
        };

        let expanded = row.is_some() && self.expanded_row == Some(row_index);
        let cells = self
            .place(table_width)
            .map(|(column, x, width)| {
                let element = row
                    .and_then(|row| {
                        if expanded {
                            self.renderer.render_long_press_cell(row_index, column, row)
                        } else {
                            self.renderer.render_cell(row_index, column, row)
                        }
                    })
                    .unwrap_or_else(|| self.renderer.placeholder());
                PlacedCell {
                    column,
                    x,
                    width,
                    element,
                }
            })
            .collect();

        RenderedRow {
            row_index,
            background: self.row_background.row_background(row_index, row),
            cells,
        }
    }

    /// Rows `first..first + count`, clamped to the data.
    pub fn render_rows(
        &self,
        first: usize,
        count: usize,
        table_width: u32,
    ) -> Vec<RenderedRow<R::Element>> {
        let end = first.saturating_add(count).min(self.rows.len());
        (first..end)
            .map(|index| self.render_row(index, table_width))
            .collect()
    }

    /// (column, x, width) for every column.
    fn place(&self, table_width: u32) -> impl Iterator<Item = (usize, u32, u32)> {
        let widths = self.columns.column_widths(table_width);
        let offsets = self.columns.column_offsets(table_width);
        offsets
            .into_iter()
            .zip(widths)
            .enumerate()
            .map(|(column, (x, width))| (column, x, width))
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Report the visible window. Collapses or shows the header when header
    /// collapsing is enabled. Returns a request when the host should append
    /// more rows.
    pub fn on_scroll(&mut self, first_visible: usize, visible_count: usize) -> Option<MoreRowsRequest> {
        if let Some(visible) = self
            .header_collapse
            .as_mut()
            .and_then(|collapse| collapse.on_scroll(first_visible))
        {
            self.header_visible = visible;
        }
        let total = self.rows.len();
        self.endless_scroll.on_scroll(first_visible, visible_count, total)
    }

    // -------------------------------------------------------------------------
    // Saved state
    // -------------------------------------------------------------------------

    /// The sort to persist.
    pub fn save_state(&self) -> PersistedSort {
        self.sorting.status().into()
    }

    /// Restore a persisted sort. `None` (first run) leaves the table as it is.
    pub fn restore_state(&mut self, state: Option<&PersistedSort>) {
        let Some((column, order)) = state.and_then(PersistedSort::target) else {
            return;
        };
        if self.sort(column, order).is_none() {
            log::info!(
                "saved sort not restored: {}",
                TableError::NotSortable { column }
            );
        }
    }

    /// Bundle host base state with the sort.
    pub fn save_with<S: Serialize>(&self, base: S) -> SavedState<S> {
        SavedState::new(base, self.save_state())
    }

    /// Restore the sort of a bundle and hand back the base state.
    pub fn restore_from<S>(&mut self, saved: SavedState<S>) -> S {
        self.restore_state(Some(&saved.sort));
        saved.base
    }
}
