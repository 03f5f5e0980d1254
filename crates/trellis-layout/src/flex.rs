#![forbid(unsafe_code)]

//! Single-axis flexible layout.
//!
//! A [`FlexLayout`] lines its children up along a main axis (a row or a
//! column) and negotiates their main-axis sizes in three phases:
//!
//! 1. **Measure**: every child is measured against the space left after its
//!    margin, within its own `[min, max]` hints (or pinned to its preferred
//!    size). This yields a natural size and a `[min_main, max_main]` envelope.
//! 2. **Distribute**: spare space is handed to children in proportion to
//!    `flex_grow`, or an overflow is taken back in proportion to
//!    `flex_shrink`. Children that hit their envelope drop out and the pass
//!    repeats until the space is gone or nobody can move. Children whose
//!    main size changed are measured again so their cross size follows.
//! 3. **Position** (at paint time): main alignment turns the leftover space
//!    into a leading offset plus extra gap; cross alignment is resolved per
//!    child; right-to-left rows mirror the main-axis origin.
//!
//! Results are memoized on the available size and the children's content
//! generation, so a repeated measure with the same inputs does no work.
//!
//! # Example
//!
//! ```
//! use trellis_core::geometry::{Constraints, Rect, Size};
//! use trellis_layout::flex::{FlexChild, FlexLayout};
//! use trellis_layout::SizedBox;
//!
//! let mut row = FlexLayout::row()
//!     .gap(1)
//!     .child(FlexChild::new(SizedBox::new(4, 1)))
//!     .child(FlexChild::new(SizedBox::height(1)).grow(1));
//!
//! assert_eq!(row.measure_size(Constraints::tight(20, 1)), Size::new(20, 1));
//! let rects = row.child_rects(Rect::new(0, 0, 20, 1));
//! assert_eq!(rects[1], Rect::new(5, 0, 15, 1));
//! ```

use trellis_core::geometry::{Axis, Constraints, EdgeInsets, Rect, Size, saturate};
use trellis_core::sink::Sink;

use crate::cache::{CacheSlot, LayoutCacheKey, LayoutCacheStats};
use crate::element::{Element, LayoutElement, combined_generation};

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left to right (or right to left, see [`LayoutDirection`]).
    #[default]
    Row,
    /// Top to bottom.
    Column,
}

impl Direction {
    #[inline]
    pub const fn main_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }

    #[inline]
    pub const fn cross_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Vertical,
            Direction::Column => Axis::Horizontal,
        }
    }
}

/// Reading direction. Only affects rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Distribution of leftover main-axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainAlignment {
    /// Pack at the start.
    #[default]
    Start,
    /// Pack at the end.
    End,
    /// Pack in the middle.
    Center,
    /// First and last child flush with the edges, equal space between.
    SpaceBetween,
    /// Equal space around each child (half-size at the edges).
    SpaceAround,
    /// Equal space between children and at both edges.
    SpaceEvenly,
}

/// Placement of a child across the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossAlignment {
    #[default]
    Start,
    Center,
    End,
}

/// One child of a [`FlexLayout`] plus its flex parameters.
///
/// Defaults: no growth, shrink weight 1, no margin, no size hints.
pub struct FlexChild<'a> {
    element: Element<'a>,
    flex_grow: u16,
    flex_shrink: u16,
    cross_alignment: Option<CrossAlignment>,
    margin: EdgeInsets,
    min_size: Option<Size>,
    max_size: Option<Size>,
    preferred_size: Option<Size>,
    cached_size: Size,
}

impl std::fmt::Debug for FlexChild<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexChild")
            .field("flex_grow", &self.flex_grow)
            .field("flex_shrink", &self.flex_shrink)
            .field("cross_alignment", &self.cross_alignment)
            .field("margin", &self.margin)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("preferred_size", &self.preferred_size)
            .field("cached_size", &self.cached_size)
            .finish_non_exhaustive()
    }
}

impl<'a> FlexChild<'a> {
    /// Wrap an element with default flex parameters.
    pub fn new(element: impl LayoutElement + 'a) -> Self {
        Self::boxed(Box::new(element))
    }

    /// Wrap an already boxed element.
    pub fn boxed(element: Element<'a>) -> Self {
        Self {
            element,
            flex_grow: 0,
            flex_shrink: 1,
            cross_alignment: None,
            margin: EdgeInsets::ZERO,
            min_size: None,
            max_size: None,
            preferred_size: None,
            cached_size: Size::ZERO,
        }
    }

    /// Share of spare main-axis space.
    #[must_use]
    pub fn grow(mut self, weight: u16) -> Self {
        self.flex_grow = weight;
        self
    }

    /// Share of main-axis overflow to give back.
    #[must_use]
    pub fn shrink(mut self, weight: u16) -> Self {
        self.flex_shrink = weight;
        self
    }

    /// Override the container's cross alignment for this child.
    #[must_use]
    pub fn align_self(mut self, alignment: CrossAlignment) -> Self {
        self.cross_alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: impl Into<EdgeInsets>) -> Self {
        self.margin = margin.into();
        self
    }

    #[must_use]
    pub fn min_size(mut self, size: Size) -> Self {
        self.min_size = Some(size);
        self
    }

    #[must_use]
    pub fn max_size(mut self, size: Size) -> Self {
        self.max_size = Some(size);
        self
    }

    /// Pin the natural size instead of asking the element.
    #[must_use]
    pub fn preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = Some(size);
        self
    }

    pub fn flex_grow(&self) -> u16 {
        self.flex_grow
    }

    pub fn flex_shrink(&self) -> u16 {
        self.flex_shrink
    }

    pub fn cross_alignment(&self) -> Option<CrossAlignment> {
        self.cross_alignment
    }

    pub fn margin_insets(&self) -> EdgeInsets {
        self.margin
    }

    /// Size resolved by the last layout pass (margin excluded).
    pub fn cached_size(&self) -> Size {
        self.cached_size
    }

    pub fn element(&self) -> &dyn LayoutElement {
        &*self.element
    }

    pub fn element_mut(&mut self) -> &mut dyn LayoutElement {
        &mut *self.element
    }

    /// `[min, max]` along `axis`, with `max` limited by `available`.
    ///
    /// A declared minimum wins over the available space.
    fn envelope(&self, axis: Axis, available: u16) -> (u16, u16) {
        let min = self.min_size.map_or(0, |s| s.along(axis));
        let max = self
            .max_size
            .map_or(Constraints::UNBOUNDED, |s| s.along(axis))
            .min(available)
            .max(min);
        (min, max)
    }

    /// Constraints for this child given a main-axis range and the cross space.
    fn constraints(&self, axis: Axis, main: (u16, u16), available_cross: u16) -> Constraints {
        let cross_axis = other(axis);
        let (min, max) = self.envelope(cross_axis, available_cross);
        let cross = match self.preferred_size {
            Some(preferred) => {
                let pinned = preferred.along(cross_axis).clamp(min, max);
                (pinned, pinned)
            }
            None => (min, max),
        };
        with_axes(Constraints::UNCONSTRAINED, axis, main, cross)
    }
}

#[inline]
const fn other(axis: Axis) -> Axis {
    match axis {
        Axis::Horizontal => Axis::Vertical,
        Axis::Vertical => Axis::Horizontal,
    }
}

#[inline]
fn with_axes(base: Constraints, axis: Axis, main: (u16, u16), cross: (u16, u16)) -> Constraints {
    base.with_axis(axis, main.0, main.1)
        .with_axis(other(axis), cross.0, cross.1)
}

#[inline]
fn size_from_axes(axis: Axis, main: u16, cross: u16) -> Size {
    match axis {
        Axis::Horizontal => Size::new(main, cross),
        Axis::Vertical => Size::new(cross, main),
    }
}

/// Growth or shrinkage pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Grow,
    Shrink,
}

/// Per-child scratch record for one layout pass.
#[derive(Debug, Clone, Copy)]
struct ChildMeasure {
    main: u32,
    natural: u32,
    min_main: u32,
    max_main: u32,
    grow: u16,
    shrink: u16,
    frozen: bool,
}

impl ChildMeasure {
    #[inline]
    fn weight(&self, flow: Flow) -> u64 {
        match flow {
            Flow::Grow => u64::from(self.grow),
            Flow::Shrink => u64::from(self.shrink),
        }
    }

    #[inline]
    fn room(&self, flow: Flow) -> u32 {
        match flow {
            Flow::Grow => self.max_main.saturating_sub(self.main),
            Flow::Shrink => self.main.saturating_sub(self.min_main),
        }
    }

    #[inline]
    fn apply(&mut self, step: u32, flow: Flow) {
        match flow {
            Flow::Grow => self.main += step,
            Flow::Shrink => self.main -= step,
        }
        if self.room(flow) == 0 {
            self.frozen = true;
        }
    }
}

/// Hand `amount` cells to (or take them from) the unfrozen children in
/// proportion to their weights, until the amount is used up or every child
/// is frozen.
fn distribute(items: &mut [ChildMeasure], amount: u32, flow: Flow) {
    for m in items.iter_mut() {
        m.frozen = m.weight(flow) == 0 || m.room(flow) == 0;
    }

    let mut remaining = amount;
    while remaining > 0 {
        let total: u64 = items
            .iter()
            .filter(|m| !m.frozen)
            .map(|m| m.weight(flow))
            .sum();
        if total == 0 {
            break;
        }

        let mut moved = 0u32;
        for m in items.iter_mut().filter(|m| !m.frozen) {
            let share = (u64::from(remaining) * m.weight(flow) / total) as u32;
            let step = share.min(m.room(flow));
            m.apply(step, flow);
            moved += step;
        }

        // Every share rounded down to zero: one cell each, in order.
        if moved == 0 {
            for m in items.iter_mut().filter(|m| !m.frozen) {
                if moved == remaining {
                    break;
                }
                m.apply(1, flow);
                moved += 1;
            }
        }

        remaining -= moved;
    }
}

/// Totals from the last resolved pass.
#[derive(Debug, Clone, Copy, Default)]
struct Resolved {
    /// Children + margins + gaps along the main axis.
    used_main: u32,
    /// Largest child cross size including its margin.
    max_cross: u16,
}

/// A row or column of flexible children.
pub struct FlexLayout<'a> {
    direction: Direction,
    layout_direction: LayoutDirection,
    main_alignment: MainAlignment,
    cross_alignment: CrossAlignment,
    children: Vec<FlexChild<'a>>,
    padding: EdgeInsets,
    gap: u16,
    revision: u64,
    cache: CacheSlot,
    resolved: Resolved,
    scratch: Vec<ChildMeasure>,
    rect_scratch: Vec<Rect>,
}

impl std::fmt::Debug for FlexLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexLayout")
            .field("direction", &self.direction)
            .field("layout_direction", &self.layout_direction)
            .field("main_alignment", &self.main_alignment)
            .field("cross_alignment", &self.cross_alignment)
            .field("children", &self.children)
            .field("padding", &self.padding)
            .field("gap", &self.gap)
            .finish_non_exhaustive()
    }
}

impl Default for FlexLayout<'_> {
    fn default() -> Self {
        Self::new(Direction::Row)
    }
}

impl<'a> FlexLayout<'a> {
    /// Create an empty container along `direction`.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            layout_direction: LayoutDirection::Ltr,
            main_alignment: MainAlignment::Start,
            cross_alignment: CrossAlignment::Start,
            children: Vec::new(),
            padding: EdgeInsets::ZERO,
            gap: 0,
            revision: 0,
            cache: CacheSlot::default(),
            resolved: Resolved::default(),
            scratch: Vec::new(),
            rect_scratch: Vec::new(),
        }
    }

    /// Create an empty horizontal container.
    pub fn row() -> Self {
        Self::new(Direction::Row)
    }

    /// Create an empty vertical container.
    pub fn column() -> Self {
        Self::new(Direction::Column)
    }

    #[must_use]
    pub fn child(mut self, child: FlexChild<'a>) -> Self {
        self.add_child(child);
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.set_gap(gap);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<EdgeInsets>) -> Self {
        self.set_padding(padding.into());
        self
    }

    #[must_use]
    pub fn main_alignment(mut self, alignment: MainAlignment) -> Self {
        self.set_main_alignment(alignment);
        self
    }

    #[must_use]
    pub fn cross_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.set_cross_alignment(alignment);
        self
    }

    #[must_use]
    pub fn layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.set_layout_direction(layout_direction);
        self
    }

    /// Append a child.
    pub fn add_child(&mut self, child: FlexChild<'a>) {
        self.children.push(child);
        self.invalidate();
    }

    /// Remove and return the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Option<FlexChild<'a>> {
        if index >= self.children.len() {
            return None;
        }
        let child = self.children.remove(index);
        self.invalidate();
        Some(child)
    }

    pub fn set_gap(&mut self, gap: u16) {
        self.gap = gap;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
        self.invalidate();
    }

    pub fn set_main_alignment(&mut self, alignment: MainAlignment) {
        self.main_alignment = alignment;
        self.invalidate();
    }

    pub fn set_cross_alignment(&mut self, alignment: CrossAlignment) {
        self.cross_alignment = alignment;
        self.invalidate();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.invalidate();
    }

    pub fn set_layout_direction(&mut self, layout_direction: LayoutDirection) {
        self.layout_direction = layout_direction;
        self.invalidate();
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[FlexChild<'a>] {
        &self.children
    }

    /// Mutable access to one child. Counts as a structural change.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut FlexChild<'a>> {
        if index >= self.children.len() {
            return None;
        }
        self.invalidate();
        self.children.get_mut(index)
    }

    pub fn cache_stats(&self) -> LayoutCacheStats {
        self.cache.stats()
    }

    /// Inherent form of [`LayoutElement::measure`].
    pub fn measure_size(&mut self, constraints: Constraints) -> Size {
        LayoutElement::measure(self, constraints)
    }

    /// The rectangles [`LayoutElement::paint`] would hand to each child when
    /// painting into `area`.
    pub fn child_rects(&mut self, area: Rect) -> Vec<Rect> {
        let content = area.shrink(self.padding);
        self.ensure_resolved(content.width, content.height);
        let mut rects = Vec::with_capacity(self.children.len());
        self.place(content, &mut rects);
        rects
    }

    fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.cache.invalidate();
    }

    fn content_generation(&self) -> u64 {
        combined_generation(
            self.revision,
            self.children.iter().map(|c| c.element.generation()),
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
                container = "FlexLayout",
                available_width,
                available_height,
                "layout cache hit"
            );
            return;
        }
        let size = Size::new(available_width, available_height);
        let axis = self.direction.main_axis();
        self.resolve(size.along(axis), size.along(other(axis)));
    }

    /// Phases 1 and 2.
    fn resolve(&mut self, main_limit: u16, cross_limit: u16) {
        let axis = self.direction.main_axis();
        let cross_axis = other(axis);
        let main_bounded = main_limit != Constraints::UNBOUNDED;
        let cross_bounded = cross_limit != Constraints::UNBOUNDED;

        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();

        let mut used_main = 0u32;
        for child in &mut self.children {
            let available_main = if main_bounded {
                main_limit.saturating_sub(child.margin.along(axis))
            } else {
                Constraints::UNBOUNDED
            };
            let available_cross = if cross_bounded {
                cross_limit.saturating_sub(child.margin.along(cross_axis))
            } else {
                Constraints::UNBOUNDED
            };

            let (min_main, max_main) = child.envelope(axis, available_main);
            let main_range = match child.preferred_size {
                Some(preferred) => {
                    let p = preferred.along(axis).clamp(min_main, max_main);
                    (p, p)
                }
                None => (min_main, max_main),
            };
            let constraints = child.constraints(axis, main_range, available_cross);
            let size = child.element.measure(constraints);
            child.cached_size = size;

            let natural = u32::from(size.along(axis).clamp(min_main, max_main));
            used_main += natural + u32::from(child.margin.along(axis));
            scratch.push(ChildMeasure {
                main: natural,
                natural,
                min_main: u32::from(min_main),
                max_main: u32::from(max_main),
                grow: child.flex_grow,
                shrink: child.flex_shrink,
                frozen: false,
            });
        }

        let gaps = gap_total(self.children.len(), self.gap);
        let base_used = used_main + gaps;
        if main_bounded {
            let limit = u32::from(main_limit);
            let total_grow: u32 = scratch.iter().map(|m| u32::from(m.grow)).sum();
            let total_shrink: u32 = scratch.iter().map(|m| u32::from(m.shrink)).sum();
            if base_used < limit && total_grow > 0 {
                distribute(&mut scratch, limit - base_used, Flow::Grow);
            } else if base_used > limit && total_shrink > 0 {
                distribute(&mut scratch, base_used - limit, Flow::Shrink);
            }
        }

        let mut used_main = 0u32;
        let mut max_cross = 0u16;
        for (child, m) in self.children.iter_mut().zip(scratch.iter()) {
            let main = saturate(m.main);
            if m.main != m.natural || child.cached_size.along(axis) != main {
                let available_cross = if cross_bounded {
                    cross_limit.saturating_sub(child.margin.along(cross_axis))
                } else {
                    Constraints::UNBOUNDED
                };
                let constraints = child.constraints(axis, (main, main), available_cross);
                let measured = child.element.measure(constraints);
                child.cached_size = size_from_axes(axis, main, measured.along(cross_axis));
            }
            used_main += m.main + u32::from(child.margin.along(axis));
            max_cross = max_cross.max(
                child
                    .cached_size
                    .along(cross_axis)
                    .saturating_add(child.margin.along(cross_axis)),
            );
        }

        self.resolved = Resolved {
            used_main: used_main + gaps,
            max_cross,
        };
        self.scratch = scratch;
    }

    /// Phase 3: child rectangles inside `content`.
    fn place(&self, content: Rect, out: &mut Vec<Rect>) {
        out.clear();
        let n = self.children.len();
        if n == 0 {
            return;
        }

        let axis = self.direction.main_axis();
        let cross_axis = other(axis);
        let extent = u32::from(content.size().along(axis));
        let cross_extent = content.size().along(cross_axis);
        let free = extent.saturating_sub(self.resolved.used_main);
        let (offset, extra_gap, remainder) =
            alignment_spacing(self.main_alignment, free, n, self.gap);
        let mirror = self.direction == Direction::Row && self.layout_direction == LayoutDirection::Rtl;

        let (origin_main, origin_cross) = match axis {
            Axis::Horizontal => (content.x, content.y),
            Axis::Vertical => (content.y, content.x),
        };

        let mut running = offset;
        for (i, child) in self.children.iter().enumerate() {
            let main_size = u32::from(child.cached_size.along(axis));
            let start = running + u32::from(child.margin.leading(axis));
            let main_pos = if mirror {
                extent.saturating_sub(start + main_size)
            } else {
                start
            };

            let lead = child.margin.leading(cross_axis);
            let room = cross_extent
                .saturating_sub(lead)
                .saturating_sub(child.margin.trailing(cross_axis));
            let cross_size = child.cached_size.along(cross_axis).min(room);
            let align = child.cross_alignment.unwrap_or(self.cross_alignment);
            let cross_pos = lead.saturating_add(match align {
                CrossAlignment::Start => 0,
                CrossAlignment::Center => (room - cross_size) / 2,
                CrossAlignment::End => room - cross_size,
            });

            let main_origin = saturate(u32::from(origin_main) + main_pos);
            let cross_origin = origin_cross.saturating_add(cross_pos);
            let main_len = saturate(main_size);
            out.push(match axis {
                Axis::Horizontal => Rect::new(main_origin, cross_origin, main_len, cross_size),
                Axis::Vertical => Rect::new(cross_origin, main_origin, cross_size, main_len),
            });

            running = start
                + main_size
                + u32::from(child.margin.trailing(axis))
                + u32::from(self.gap)
                + extra_gap
                + u32::from((i as u32) < remainder);
        }
    }
}

/// Total gap between `count` children.
#[inline]
fn gap_total(count: usize, gap: u16) -> u32 {
    let gaps = count.saturating_sub(1).min(u32::MAX as usize) as u32;
    gaps.saturating_mul(u32::from(gap))
}

/// `(leading_offset, extra_gap, remainder)` for a main alignment.
///
/// `remainder` gaps (counted from the first) get one more cell, so that
/// space-between hands out the free space exactly. Space-around and
/// space-evenly derive the leading offset from the full gap, `gap + extra`.
fn alignment_spacing(
    alignment: MainAlignment,
    free: u32,
    count: usize,
    gap: u16,
) -> (u32, u32, u32) {
    let n = count.min(u32::MAX as usize - 1) as u32;
    match alignment {
        MainAlignment::Start => (0, 0, 0),
        MainAlignment::End => (free, 0, 0),
        MainAlignment::Center => (free / 2, 0, 0),
        MainAlignment::SpaceBetween if n >= 2 => (0, free / (n - 1), free % (n - 1)),
        MainAlignment::SpaceBetween => (0, 0, 0),
        MainAlignment::SpaceAround if n >= 1 => {
            let extra = free / n;
            ((u32::from(gap) + extra) / 2, extra, 0)
        }
        MainAlignment::SpaceEvenly if n >= 1 => {
            let extra = free / (n + 1);
            (u32::from(gap) + extra, extra, 0)
        }
        MainAlignment::SpaceAround | MainAlignment::SpaceEvenly => (0, 0, 0),
    }
}

impl LayoutElement for FlexLayout<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_measure",
            container = "FlexLayout",
            max_w = constraints.max_width(),
            max_h = constraints.max_height(),
            children = self.children.len()
        )
        .entered();

        let inner = constraints.deflate(self.padding);
        self.ensure_resolved(inner.max_width(), inner.max_height());

        let axis = self.direction.main_axis();
        let content = size_from_axes(
            axis,
            saturate(self.resolved.used_main),
            self.resolved.max_cross,
        );
        constraints.constrain_size(content.inflate(self.padding))
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_paint",
            container = "FlexLayout",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let content = area.shrink(self.padding);
        if content.is_empty() {
            return;
        }
        self.ensure_resolved(content.width, content.height);

        let mut rects = std::mem::take(&mut self.rect_scratch);
        self.place(content, &mut rects);
        sink.push_clip(content);
        for (child, rect) in self.children.iter_mut().zip(rects.iter()) {
            if !rect.is_empty() {
                child.element.paint(sink, *rect);
            }
        }
        sink.pop_clip();
        self.rect_scratch = rects;
    }

    fn generation(&self) -> u64 {
        self.content_generation()
    }
}
