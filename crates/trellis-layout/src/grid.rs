#![forbid(unsafe_code)]

//! Two-axis track layout.
//!
//! A [`GridLayout`] divides its content box into `columns x rows` cells.
//! Each axis is resolved on its own by [`resolve_tracks`]: gaps come off the
//! top, fixed tracks take their size (never more than what is left), and
//! flexible tracks split the remainder by weight. Leftover cells from integer
//! division go one at a time to flexible tracks in order, so with at least one
//! flexible track the tracks plus gaps always sum to the full extent.
//!
//! Cells are stored row-major and hold at most one element each.
//!
//! # Example
//!
//! ```
//! use trellis_layout::grid::{GridLayout, Track, resolve_tracks};
//!
//! assert_eq!(
//!     resolve_tracks(&[Track::Fixed(4), Track::Flex(1), Track::Flex(2)], 20, 1),
//!     vec![4, 5, 9]
//! );
//!
//! let grid = GridLayout::new(vec![Track::Flex(1); 3], vec![Track::Fixed(1)]);
//! assert_eq!(grid.column_count(), 3);
//! ```

use trellis_core::geometry::{Axis, Constraints, EdgeInsets, Rect, Size, saturate};
use trellis_core::sink::Sink;

use crate::LayoutError;
use crate::cache::{CacheSlot, LayoutCacheKey, LayoutCacheStats};
use crate::element::{Element, LayoutElement, combined_generation};

/// Sizing rule for one column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Exactly this many cells (less if the budget runs out).
    Fixed(u16),
    /// A weighted share of the space the fixed tracks leave over.
    Flex(u16),
}

impl Default for Track {
    fn default() -> Self {
        Track::Flex(1)
    }
}

#[inline]
fn gap_total(count: usize, gap: u16) -> u32 {
    let gaps = count.saturating_sub(1).min(u32::MAX as usize) as u32;
    gaps.saturating_mul(u32::from(gap))
}

/// Resolve track sizes for an axis of `extent` cells with `gap` between
/// adjacent tracks.
///
/// All-zero flex weights count as equal weights.
pub fn resolve_tracks(tracks: &[Track], extent: u16, gap: u16) -> Vec<u16> {
    let mut sizes = Vec::with_capacity(tracks.len());
    resolve_tracks_into(tracks, extent, gap, &mut sizes);
    sizes
}

fn resolve_tracks_into(tracks: &[Track], extent: u16, gap: u16, out: &mut Vec<u16>) {
    out.clear();
    if tracks.is_empty() {
        return;
    }

    let budget = u32::from(extent).saturating_sub(gap_total(tracks.len(), gap));
    let mut remaining = budget;
    for track in tracks {
        match *track {
            Track::Fixed(size) => {
                let take = u32::from(size).min(remaining);
                remaining -= take;
                out.push(take as u16);
            }
            Track::Flex(_) => out.push(0),
        }
    }

    let flex_weights = || {
        tracks.iter().enumerate().filter_map(|(i, t)| match *t {
            Track::Flex(w) => Some((i, u64::from(w))),
            Track::Fixed(_) => None,
        })
    };
    let flex_count = flex_weights().count() as u64;
    if flex_count == 0 {
        return;
    }
    let weight_sum: u64 = flex_weights().map(|(_, w)| w).sum();
    let equal = weight_sum == 0;
    let total = if equal { flex_count } else { weight_sum };

    let mut given = 0u32;
    for (i, weight) in flex_weights() {
        let weight = if equal { 1 } else { weight };
        let share = (u64::from(remaining) * weight / total) as u32;
        out[i] = share as u16;
        given += share;
    }

    // Rounding leftovers, one cell per weighted track in order.
    let mut leftover = remaining - given;
    while leftover > 0 {
        for (i, weight) in flex_weights() {
            if leftover == 0 {
                break;
            }
            if equal || weight > 0 {
                out[i] += 1;
                leftover -= 1;
            }
        }
    }
}

/// Track sizes for an axis with no maximum: fixed tracks keep their size,
/// flexible tracks take the largest natural extent among their children.
fn natural_tracks(tracks: &[Track], natural: &[u16], out: &mut Vec<u16>) {
    out.clear();
    out.extend(tracks.iter().zip(natural).map(|(track, &n)| match *track {
        Track::Fixed(size) => size,
        Track::Flex(_) => n,
    }));
}

/// Start offset of each track relative to the content origin.
fn track_offset(sizes: &[u16], gap: u16, index: usize) -> u32 {
    let before: u32 = sizes[..index].iter().map(|&s| u32::from(s)).sum();
    before + (index as u32).saturating_mul(u32::from(gap))
}

fn span(sizes: &[u16], gap: u16) -> u16 {
    let sum: u32 = sizes.iter().map(|&s| u32::from(s)).sum();
    saturate(sum + gap_total(sizes.len(), gap))
}

/// A grid of fixed and flexible tracks.
pub struct GridLayout<'a> {
    columns: Vec<Track>,
    rows: Vec<Track>,
    cells: Vec<Option<Element<'a>>>,
    padding: EdgeInsets,
    column_gap: u16,
    row_gap: u16,
    revision: u64,
    cache: CacheSlot,
    column_sizes: Vec<u16>,
    row_sizes: Vec<u16>,
    natural_scratch: Vec<u16>,
}

impl std::fmt::Debug for GridLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridLayout")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("occupied", &self.cells.iter().filter(|c| c.is_some()).count())
            .field("padding", &self.padding)
            .field("column_gap", &self.column_gap)
            .field("row_gap", &self.row_gap)
            .finish_non_exhaustive()
    }
}

impl<'a> GridLayout<'a> {
    /// Create an empty grid with the given tracks.
    pub fn new(columns: impl Into<Vec<Track>>, rows: impl Into<Vec<Track>>) -> Self {
        let columns = columns.into();
        let rows = rows.into();
        let mut cells = Vec::new();
        cells.resize_with(columns.len() * rows.len(), || None);
        Self {
            columns,
            rows,
            cells,
            padding: EdgeInsets::ZERO,
            column_gap: 0,
            row_gap: 0,
            revision: 0,
            cache: CacheSlot::default(),
            column_sizes: Vec::new(),
            row_sizes: Vec::new(),
            natural_scratch: Vec::new(),
        }
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<EdgeInsets>) -> Self {
        self.set_padding(padding.into());
        self
    }

    /// Same gap between columns and between rows.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.set_gap(gap);
        self
    }

    #[must_use]
    pub fn column_gap(mut self, gap: u16) -> Self {
        self.set_column_gap(gap);
        self
    }

    #[must_use]
    pub fn row_gap(mut self, gap: u16) -> Self {
        self.set_row_gap(gap);
        self
    }

    /// Builder form of [`GridLayout::place`].
    pub fn cell(
        mut self,
        column: usize,
        row: usize,
        element: impl LayoutElement + 'a,
    ) -> Result<Self, LayoutError> {
        self.place(column, row, element)?;
        Ok(self)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[Track] {
        &self.columns
    }

    pub fn rows(&self) -> &[Track] {
        &self.rows
    }

    pub fn cache_stats(&self) -> LayoutCacheStats {
        self.cache.stats()
    }

    fn index(&self, column: usize, row: usize) -> Result<usize, LayoutError> {
        if column < self.columns.len() && row < self.rows.len() {
            Ok(row * self.columns.len() + column)
        } else {
            Err(LayoutError::OutOfBounds {
                column,
                row,
                columns: self.columns.len(),
                rows: self.rows.len(),
            })
        }
    }

    /// Put `element` at `(column, row)`, returning whatever was there.
    pub fn place(
        &mut self,
        column: usize,
        row: usize,
        element: impl LayoutElement + 'a,
    ) -> Result<Option<Element<'a>>, LayoutError> {
        self.place_boxed(column, row, Box::new(element))
    }

    /// [`GridLayout::place`] for an already boxed element.
    pub fn place_boxed(
        &mut self,
        column: usize,
        row: usize,
        element: Element<'a>,
    ) -> Result<Option<Element<'a>>, LayoutError> {
        let i = self.index(column, row)?;
        let displaced = self.cells[i].replace(element);
        self.invalidate();
        Ok(displaced)
    }

    /// Empty the cell at `(column, row)`.
    pub fn remove(&mut self, column: usize, row: usize) -> Result<Option<Element<'a>>, LayoutError> {
        let i = self.index(column, row)?;
        let removed = self.cells[i].take();
        if removed.is_some() {
            self.invalidate();
        }
        Ok(removed)
    }

    pub fn get(&self, column: usize, row: usize) -> Result<Option<&dyn LayoutElement>, LayoutError> {
        let i = self.index(column, row)?;
        Ok(self.cells[i].as_deref().map(|e| e as &dyn LayoutElement))
    }

    /// Replace the column tracks. Elements in columns that no longer exist
    /// are dropped.
    pub fn set_columns(&mut self, columns: impl Into<Vec<Track>>) {
        let columns = columns.into();
        self.regrid(columns.len(), self.rows.len());
        self.columns = columns;
        self.invalidate();
    }

    /// Replace the row tracks. Elements in rows that no longer exist are
    /// dropped.
    pub fn set_rows(&mut self, rows: impl Into<Vec<Track>>) {
        let rows = rows.into();
        self.regrid(self.columns.len(), rows.len());
        self.rows = rows;
        self.invalidate();
    }

    fn regrid(&mut self, columns: usize, rows: usize) {
        let old_columns = self.columns.len();
        let mut cells: Vec<Option<Element<'a>>> = Vec::new();
        cells.resize_with(columns * rows, || None);
        for (i, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            let (column, row) = (i % old_columns.max(1), i / old_columns.max(1));
            if column < columns && row < rows {
                cells[row * columns + column] = cell;
            }
        }
        self.cells = cells;
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
        self.invalidate();
    }

    pub fn set_gap(&mut self, gap: u16) {
        self.column_gap = gap;
        self.row_gap = gap;
        self.invalidate();
    }

    pub fn set_column_gap(&mut self, gap: u16) {
        self.column_gap = gap;
        self.invalidate();
    }

    pub fn set_row_gap(&mut self, gap: u16) {
        self.row_gap = gap;
        self.invalidate();
    }

    /// Track sizes from the last pass.
    pub fn resolved_columns(&self) -> &[u16] {
        &self.column_sizes
    }

    pub fn resolved_rows(&self) -> &[u16] {
        &self.row_sizes
    }

    /// Rectangle of cell `(column, row)` when the grid is painted into `area`.
    pub fn cell_rect(&mut self, column: usize, row: usize, area: Rect) -> Result<Rect, LayoutError> {
        self.index(column, row)?;
        let content = area.shrink(self.padding);
        self.ensure_resolved(content.width, content.height);
        Ok(self.rect_of(column, row, content))
    }

    fn rect_of(&self, column: usize, row: usize, content: Rect) -> Rect {
        let x = track_offset(&self.column_sizes, self.column_gap, column);
        let y = track_offset(&self.row_sizes, self.row_gap, row);
        Rect::new(
            saturate(u32::from(content.x) + x),
            saturate(u32::from(content.y) + y),
            self.column_sizes[column],
            self.row_sizes[row],
        )
    }

    fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.cache.invalidate();
    }

    fn content_generation(&self) -> u64 {
        combined_generation(
            self.revision,
            self.cells
                .iter()
                .map(|c| c.as_ref().map_or(0, |e| e.generation())),
        )
    }

    fn ensure_resolved(&mut self, available_width: u16, available_height: u16) {
        let key = LayoutCacheKey {
            available_width,
            available_height,
            generation: self.content_generation(),
        };
        if self.cache.check(key) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                container = "GridLayout",
                available_width,
                available_height,
                "layout cache hit"
            );
            return;
        }
        self.resolve(available_width, available_height);
    }

    fn resolve(&mut self, width: u16, height: u16) {
        let probe = Constraints::bounded(width, height);
        let width_bounded = probe.is_bounded(Axis::Horizontal);
        let height_bounded = probe.is_bounded(Axis::Vertical);
        let mut column_sizes = std::mem::take(&mut self.column_sizes);
        let mut row_sizes = std::mem::take(&mut self.row_sizes);

        // Bounded axes first, so natural measures see their resolved tracks.
        if width_bounded {
            resolve_tracks_into(&self.columns, width, self.column_gap, &mut column_sizes);
        }
        if height_bounded {
            resolve_tracks_into(&self.rows, height, self.row_gap, &mut row_sizes);
        }
        if !width_bounded {
            let cross = height_bounded.then_some(row_sizes.as_slice());
            self.measure_natural(Axis::Horizontal, cross);
            natural_tracks(&self.columns, &self.natural_scratch, &mut column_sizes);
        }
        if !height_bounded {
            self.measure_natural(Axis::Vertical, Some(&column_sizes));
            natural_tracks(&self.rows, &self.natural_scratch, &mut row_sizes);
        }

        // Children see their final cell size before they are painted.
        let columns = self.columns.len();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if let Some(element) = cell {
                let (column, row) = (i % columns, i / columns);
                element.measure(Constraints::tight(column_sizes[column], row_sizes[row]));
            }
        }

        self.column_sizes = column_sizes;
        self.row_sizes = row_sizes;
    }

    /// Largest natural extent along `axis` per track, into `natural_scratch`.
    ///
    /// `cross` holds the resolved tracks of the other axis, if known; each
    /// child is then bounded by its own cell across `axis`.
    fn measure_natural(&mut self, axis: Axis, cross: Option<&[u16]>) {
        let columns = self.columns.len();
        let tracks = match axis {
            Axis::Horizontal => columns,
            Axis::Vertical => self.rows.len(),
        };
        self.natural_scratch.clear();
        self.natural_scratch.resize(tracks, 0);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if let Some(element) = cell {
                let (column, row) = (i % columns, i / columns);
                let (track, cross_track) = match axis {
                    Axis::Horizontal => (column, row),
                    Axis::Vertical => (row, column),
                };
                let cross_limit = cross
                    .and_then(|sizes| sizes.get(cross_track).copied())
                    .unwrap_or(Constraints::UNBOUNDED);
                let probe = match axis {
                    Axis::Horizontal => Constraints::bounded(Constraints::UNBOUNDED, cross_limit),
                    Axis::Vertical => Constraints::bounded(cross_limit, Constraints::UNBOUNDED),
                };
                let extent = element.measure(probe).along(axis);
                let slot = &mut self.natural_scratch[track];
                *slot = (*slot).max(extent);
            }
        }
    }
}

impl LayoutElement for GridLayout<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_measure",
            container = "GridLayout",
            max_w = constraints.max_width(),
            max_h = constraints.max_height(),
            columns = self.columns.len(),
            rows = self.rows.len()
        )
        .entered();

        let inner = constraints.deflate(self.padding);
        self.ensure_resolved(inner.max_width(), inner.max_height());
        let content = Size::new(
            span(&self.column_sizes, self.column_gap),
            span(&self.row_sizes, self.row_gap),
        );
        constraints.constrain_size(content.inflate(self.padding))
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_paint",
            container = "GridLayout",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let content = area.shrink(self.padding);
        if content.is_empty() || self.columns.is_empty() {
            return;
        }
        self.ensure_resolved(content.width, content.height);

        let columns = self.columns.len();
        sink.push_clip(content);
        for i in 0..self.cells.len() {
            let rect = self.rect_of(i % columns, i / columns, content);
            if rect.is_empty() {
                continue;
            }
            if let Some(element) = self.cells[i].as_mut() {
                element.paint(sink, rect);
            }
        }
        sink.pop_clip();
    }

    fn generation(&self) -> u64 {
        self.content_generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::sink::CellBuffer;

    struct Fill {
        natural: Size,
        ch: char,
    }

    fn fill(ch: char) -> Fill {
        Fill {
            natural: Size::new(1, 1),
            ch,
        }
    }

    impl LayoutElement for Fill {
        fn measure(&mut self, constraints: Constraints) -> Size {
            constraints.constrain_size(self.natural)
        }

        fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
            sink.fill(area, self.ch);
        }
    }

    #[test]
    fn flex_tracks_absorb_rounding() {
        assert_eq!(resolve_tracks(&[Track::Flex(1); 3], 10, 0), vec![4, 3, 3]);
        assert_eq!(resolve_tracks(&[Track::Flex(1); 3], 11, 1), vec![3, 3, 3]);
        assert_eq!(resolve_tracks(&[Track::Flex(1); 3], 12, 1), vec![4, 3, 3]);
    }

    #[test]
    fn fixed_tracks_are_clamped_to_budget() {
        assert_eq!(resolve_tracks(&[Track::Fixed(8), Track::Fixed(8)], 10, 0), vec![8, 2]);
        assert_eq!(
            resolve_tracks(&[Track::Fixed(8), Track::Flex(1), Track::Fixed(8)], 10, 1),
            vec![8, 0, 0]
        );
    }

    #[test]
    fn fixed_then_flex() {
        assert_eq!(resolve_tracks(&[Track::Fixed(5), Track::Flex(1)], 20, 2), vec![5, 13]);
    }

    #[test]
    fn zero_weights_count_as_equal() {
        assert_eq!(resolve_tracks(&[Track::Flex(0), Track::Flex(0)], 7, 0), vec![4, 3]);
        assert_eq!(resolve_tracks(&[Track::Flex(0), Track::Flex(1)], 6, 0), vec![0, 6]);
    }

    #[test]
    fn gaps_wider_than_extent() {
        assert_eq!(resolve_tracks(&[Track::Flex(1); 4], 2, 1), vec![0, 0, 0, 0]);
        assert!(resolve_tracks(&[], 10, 1).is_empty());
    }

    #[test]
    fn place_out_of_bounds_is_an_error() {
        let mut grid = GridLayout::new(vec![Track::Flex(1); 2], vec![Track::Flex(1)]);
        let err = grid.place(2, 0, fill('x')).err().unwrap();
        assert_eq!(
            err,
            LayoutError::OutOfBounds {
                column: 2,
                row: 0,
                columns: 2,
                rows: 1
            }
        );
        assert!(grid.remove(0, 1).is_err());
        assert!(grid.get(1, 0).unwrap().is_none());
    }

    #[test]
    fn place_returns_displaced_element() {
        let mut grid = GridLayout::new(vec![Track::Flex(1)], vec![Track::Flex(1)]);
        assert!(grid.place(0, 0, fill('a')).unwrap().is_none());
        assert!(grid.place(0, 0, fill('b')).unwrap().is_some());
        assert!(grid.remove(0, 0).unwrap().is_some());
        assert!(grid.remove(0, 0).unwrap().is_none());
    }

    #[test]
    fn paints_cells_row_major() {
        let mut grid = GridLayout::new(vec![Track::Fixed(2), Track::Flex(1)], vec![Track::Flex(1); 2])
            .column_gap(1)
            .cell(0, 0, fill('a'))
            .unwrap()
            .cell(1, 0, fill('b'))
            .unwrap()
            .cell(1, 1, fill('d'))
            .unwrap();
        let mut buf = CellBuffer::new(6, 2);
        grid.paint(&mut buf, Rect::from_size(6, 2));
        assert_eq!(buf.to_lines(), vec!["aa bbb", "   ddd"]);
        assert_eq!(grid.cell_rect(1, 1, Rect::from_size(6, 2)).unwrap(), Rect::new(3, 1, 3, 1));
    }

    #[test]
    fn set_columns_keeps_in_range_cells() {
        let mut grid = GridLayout::new(vec![Track::Flex(1); 3], vec![Track::Flex(1); 2]);
        grid.place(0, 1, fill('a')).unwrap();
        grid.place(2, 0, fill('b')).unwrap();
        grid.set_columns(vec![Track::Flex(1); 2]);
        assert!(grid.get(0, 1).unwrap().is_some());
        assert!(grid.get(1, 0).unwrap().is_none());
        assert!(grid.get(2, 0).is_err());

        grid.set_rows(vec![Track::Flex(1)]);
        assert!(grid.get(0, 1).is_err());
        assert!(grid.get(0, 0).unwrap().is_none());
    }

    #[test]
    fn unbounded_axis_uses_natural_extent() {
        let mut grid = GridLayout::new(vec![Track::Flex(1), Track::Fixed(3)], vec![Track::Fixed(1)])
            .column_gap(1)
            .cell(
                0,
                0,
                Fill {
                    natural: Size::new(7, 1),
                    ch: 'x',
                },
            )
            .unwrap();
        let size = grid.measure(Constraints::UNCONSTRAINED);
        assert_eq!(size, Size::new(11, 1));
        assert_eq!(grid.resolved_columns(), &[7, 3]);
    }

    /// Text that wraps to the width it is given.
    struct Wrapped(&'static str);

    impl LayoutElement for Wrapped {
        fn measure(&mut self, constraints: Constraints) -> Size {
            let len = self.0.chars().count() as u16;
            let width = len.min(constraints.max_width()).max(1);
            constraints.constrain(width, len.div_ceil(width))
        }

        fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
            let chars: Vec<char> = self.0.chars().collect();
            for (dy, line) in chars.chunks(usize::from(area.width.max(1))).enumerate() {
                let line: String = line.iter().collect();
                sink.print(area.x, area.y.saturating_add(dy as u16), &line);
            }
        }
    }

    /// Column-major text: fills the height it is given, then adds columns.
    struct Stacked(u16);

    impl LayoutElement for Stacked {
        fn measure(&mut self, constraints: Constraints) -> Size {
            let height = self.0.min(constraints.max_height()).max(1);
            constraints.constrain(self.0.div_ceil(height), height)
        }

        fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
            sink.fill(area, '|');
        }
    }

    #[test]
    fn unbounded_rows_measure_children_at_their_column_width() {
        let mut grid = GridLayout::new(vec![Track::Fixed(4), Track::Flex(1)], vec![Track::Flex(1)])
            .cell(0, 0, Wrapped("abcdefghijkl"))
            .unwrap();
        let size = grid.measure(Constraints::bounded(20, Constraints::UNBOUNDED));
        assert_eq!(grid.resolved_columns(), &[4, 16]);
        assert_eq!(grid.resolved_rows(), &[3]);
        assert_eq!(size, Size::new(20, 3));

        let mut buf = CellBuffer::new(6, 3);
        grid.paint(&mut buf, Rect::from_size(6, 3));
        assert_eq!(buf.to_lines(), vec!["abcd  ", "efgh  ", "ijkl  "]);
    }

    #[test]
    fn unbounded_columns_measure_children_at_their_row_height() {
        let mut grid = GridLayout::new(vec![Track::Flex(1)], vec![Track::Fixed(2), Track::Flex(1)])
            .cell(0, 0, Stacked(6))
            .unwrap();
        let size = grid.measure(Constraints::bounded(Constraints::UNBOUNDED, 10));
        assert_eq!(grid.resolved_rows(), &[2, 8]);
        assert_eq!(grid.resolved_columns(), &[3]);
        assert_eq!(size, Size::new(3, 10));
    }

    #[test]
    fn measure_fills_bounded_axes_and_caches() {
        let mut grid = GridLayout::new(vec![Track::Flex(1); 2], vec![Track::Flex(1)])
            .padding(1)
            .gap(1);
        let c = Constraints::bounded(20, 5);
        assert_eq!(grid.measure(c), Size::new(20, 5));
        assert_eq!(grid.measure(c), Size::new(20, 5));
        assert_eq!(grid.cache_stats().hits, 1);
        assert_eq!(grid.resolved_columns(), &[9, 8]);
    }

    #[test]
    fn fixed_only_grid_shrink_wraps() {
        let mut grid = GridLayout::new(vec![Track::Fixed(3); 2], vec![Track::Fixed(2)]).gap(1);
        assert_eq!(grid.measure(Constraints::bounded(40, 40)), Size::new(7, 2));
        assert_eq!(grid.measure(Constraints::tight(10, 10)), Size::new(10, 10));
    }

    #[test]
    fn empty_grid_is_empty() {
        let mut grid = GridLayout::new(Vec::new(), Vec::new());
        assert_eq!(grid.measure(Constraints::bounded(10, 10)), Size::ZERO);
        let mut buf = CellBuffer::new(2, 2);
        grid.paint(&mut buf, Rect::from_size(2, 2));
        assert_eq!(buf.to_lines(), vec!["  ", "  "]);
    }
}
