#![forbid(unsafe_code)]

//! Anchor-based absolute placement.
//!
//! Each child of a [`ConstraintLayout`] carries a [`ConstraintSpec`]. Per
//! axis, the size comes from (in order) an explicit size, the span between a
//! leading and a trailing anchor, or the child's natural measurement, and is
//! then clamped to the spec's `[min, max]` and to the available extent. The
//! position comes from centering, the leading anchor, the trailing anchor
//! (measured back from the far edge), or the content origin.
//!
//! On an axis with no maximum there is no far edge: centering and trailing
//! anchors fall back to the leading anchor (or zero), and an anchor pair
//! does not define a size.

use trellis_core::geometry::{Axis, Constraints, EdgeInsets, Rect, Size, saturate};
use trellis_core::sink::Sink;

use crate::cache::{CacheSlot, LayoutCacheKey, LayoutCacheStats};
use crate::element::{Element, LayoutElement, combined_generation};

/// Placement rules for one child.
///
/// ```
/// use trellis_layout::ConstraintSpec;
///
/// // Stretch between 2-cell anchors horizontally, 3 rows tall, pinned to the bottom.
/// let spec = ConstraintSpec::new().left(2).right(2).bottom(0).height(3);
/// assert_eq!(spec.left_anchor(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstraintSpec {
    left: Option<u16>,
    right: Option<u16>,
    top: Option<u16>,
    bottom: Option<u16>,
    center_x: bool,
    center_y: bool,
    width: Option<u16>,
    height: Option<u16>,
    min_width: Option<u16>,
    max_width: Option<u16>,
    min_height: Option<u16>,
    max_height: Option<u16>,
}

impl ConstraintSpec {
    /// No anchors: natural size at the content origin.
    pub const fn new() -> Self {
        Self {
            left: None,
            right: None,
            top: None,
            bottom: None,
            center_x: false,
            center_y: false,
            width: None,
            height: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }

    #[must_use]
    pub const fn left(mut self, offset: u16) -> Self {
        self.left = Some(offset);
        self
    }

    #[must_use]
    pub const fn right(mut self, offset: u16) -> Self {
        self.right = Some(offset);
        self
    }

    #[must_use]
    pub const fn top(mut self, offset: u16) -> Self {
        self.top = Some(offset);
        self
    }

    #[must_use]
    pub const fn bottom(mut self, offset: u16) -> Self {
        self.bottom = Some(offset);
        self
    }

    /// Center horizontally. Takes priority over the left/right anchors for
    /// position.
    #[must_use]
    pub const fn center_x(mut self) -> Self {
        self.center_x = true;
        self
    }

    /// Center vertically.
    #[must_use]
    pub const fn center_y(mut self) -> Self {
        self.center_y = true;
        self
    }

    /// Center on both axes.
    #[must_use]
    pub const fn centered(self) -> Self {
        self.center_x().center_y()
    }

    #[must_use]
    pub const fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub const fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    #[must_use]
    pub const fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    #[must_use]
    pub const fn min_height(mut self, height: u16) -> Self {
        self.min_height = Some(height);
        self
    }

    #[must_use]
    pub const fn max_height(mut self, height: u16) -> Self {
        self.max_height = Some(height);
        self
    }

    pub const fn left_anchor(&self) -> Option<u16> {
        self.left
    }

    pub const fn right_anchor(&self) -> Option<u16> {
        self.right
    }

    pub const fn top_anchor(&self) -> Option<u16> {
        self.top
    }

    pub const fn bottom_anchor(&self) -> Option<u16> {
        self.bottom
    }

    fn axis(&self, axis: Axis) -> AxisRule {
        match axis {
            Axis::Horizontal => AxisRule {
                lead: self.left,
                trail: self.right,
                center: self.center_x,
                size: self.width,
                min: self.min_width,
                max: self.max_width,
            },
            Axis::Vertical => AxisRule {
                lead: self.top,
                trail: self.bottom,
                center: self.center_y,
                size: self.height,
                min: self.min_height,
                max: self.max_height,
            },
        }
    }
}

/// One axis of a [`ConstraintSpec`].
#[derive(Debug, Clone, Copy)]
struct AxisRule {
    lead: Option<u16>,
    trail: Option<u16>,
    center: bool,
    size: Option<u16>,
    min: Option<u16>,
    max: Option<u16>,
}

impl AxisRule {
    /// `[min, max]` limited by `available`. The available extent wins over a
    /// declared minimum.
    fn envelope(&self, available: u16) -> (u16, u16) {
        let max = self.max.unwrap_or(Constraints::UNBOUNDED).min(available);
        let min = self.min.unwrap_or(0).min(max);
        (min, max)
    }

    /// A size fixed before measuring: explicit, or the span between anchors.
    fn forced(&self, available: u16, bounded: bool) -> Option<u16> {
        let (min, max) = self.envelope(available);
        let raw = match (self.size, self.lead, self.trail) {
            (Some(size), _, _) => size,
            (None, Some(lead), Some(trail)) if bounded => {
                available.saturating_sub(lead).saturating_sub(trail)
            }
            _ => return None,
        };
        Some(raw.clamp(min, max))
    }

    /// Measurement range for this axis.
    fn range(&self, available: u16, bounded: bool) -> (u16, u16) {
        match self.forced(available, bounded) {
            Some(size) => (size, size),
            None => self.envelope(available),
        }
    }

    /// Final `(offset, size)` for a measured extent.
    fn place(&self, measured: u16, available: u16, bounded: bool) -> (u16, u16) {
        let (min, max) = self.envelope(available);
        let size = self.forced(available, bounded).unwrap_or(measured.clamp(min, max));
        if !bounded {
            return (self.lead.unwrap_or(0), size);
        }
        let offset = if self.center {
            (available - size) / 2
        } else if let Some(lead) = self.lead {
            lead.min(available)
        } else if let Some(trail) = self.trail {
            available.saturating_sub(trail).saturating_sub(size)
        } else {
            0
        };
        (offset, size.min(available - offset))
    }
}

struct ConstraintChild<'a> {
    element: Element<'a>,
    spec: ConstraintSpec,
    /// Relative to the content origin.
    resolved: Rect,
}

/// Absolute placement of children by anchors and sizes.
pub struct ConstraintLayout<'a> {
    children: Vec<ConstraintChild<'a>>,
    padding: EdgeInsets,
    revision: u64,
    cache: CacheSlot,
    extent: Size,
}

impl std::fmt::Debug for ConstraintLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintLayout")
            .field(
                "children",
                &self.children.iter().map(|c| (c.spec, c.resolved)).collect::<Vec<_>>(),
            )
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

impl Default for ConstraintLayout<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConstraintLayout<'a> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            padding: EdgeInsets::ZERO,
            revision: 0,
            cache: CacheSlot::default(),
            extent: Size::ZERO,
        }
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<EdgeInsets>) -> Self {
        self.set_padding(padding.into());
        self
    }

    #[must_use]
    pub fn child(mut self, element: impl LayoutElement + 'a, spec: ConstraintSpec) -> Self {
        self.add_child(element, spec);
        self
    }

    pub fn add_child(&mut self, element: impl LayoutElement + 'a, spec: ConstraintSpec) {
        self.add_boxed(Box::new(element), spec);
    }

    pub fn add_boxed(&mut self, element: Element<'a>, spec: ConstraintSpec) {
        self.children.push(ConstraintChild {
            element,
            spec,
            resolved: Rect::default(),
        });
        self.invalidate();
    }

    /// Remove and return the element at `index` along with its spec.
    pub fn remove_child(&mut self, index: usize) -> Option<(Element<'a>, ConstraintSpec)> {
        if index >= self.children.len() {
            return None;
        }
        let child = self.children.remove(index);
        self.invalidate();
        Some((child.element, child.spec))
    }

    /// Replace the spec of the child at `index`. Returns `false` if there is
    /// no such child.
    pub fn set_spec(&mut self, index: usize, spec: ConstraintSpec) -> bool {
        match self.children.get_mut(index) {
            Some(child) => {
                child.spec = spec;
                self.invalidate();
                true
            }
            None => false,
        }
    }

    pub fn spec(&self, index: usize) -> Option<ConstraintSpec> {
        self.children.get(index).map(|c| c.spec)
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
        self.invalidate();
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Rectangle resolved for child `index` by the last pass, relative to the
    /// container's top-left corner.
    pub fn child_rect(&self, index: usize) -> Option<Rect> {
        self.children.get(index).map(|c| {
            Rect::new(
                c.resolved.x.saturating_add(self.padding.left),
                c.resolved.y.saturating_add(self.padding.top),
                c.resolved.width,
                c.resolved.height,
            )
        })
    }

    pub fn cache_stats(&self) -> LayoutCacheStats {
        self.cache.stats()
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
                container = "ConstraintLayout",
                available_width,
                available_height,
                "layout cache hit"
            );
            return;
        }
        self.resolve(available_width, available_height);
    }

    fn resolve(&mut self, width: u16, height: u16) {
        let bounded_x = width != Constraints::UNBOUNDED;
        let bounded_y = height != Constraints::UNBOUNDED;
        let (mut right, mut bottom) = (0u32, 0u32);

        for child in &mut self.children {
            let h = child.spec.axis(Axis::Horizontal);
            let v = child.spec.axis(Axis::Vertical);
            let (min_w, max_w) = h.range(width, bounded_x);
            let (min_h, max_h) = v.range(height, bounded_y);
            let measured = child
                .element
                .measure(Constraints::clamped(min_w, max_w, min_h, max_h));

            let (x, w) = h.place(measured.width, width, bounded_x);
            let (y, hgt) = v.place(measured.height, height, bounded_y);
            child.resolved = Rect::new(x, y, w, hgt);
            right = right.max(u32::from(x) + u32::from(w));
            bottom = bottom.max(u32::from(y) + u32::from(hgt));
        }

        self.extent = Size::new(
            if bounded_x { width } else { saturate(right) },
            if bounded_y { height } else { saturate(bottom) },
        );
    }
}

impl LayoutElement for ConstraintLayout<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_measure",
            container = "ConstraintLayout",
            max_w = constraints.max_width(),
            max_h = constraints.max_height(),
            children = self.children.len()
        )
        .entered();

        let inner = constraints.deflate(self.padding);
        self.ensure_resolved(inner.max_width(), inner.max_height());
        constraints.constrain_size(self.extent.inflate(self.padding))
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_paint",
            container = "ConstraintLayout",
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

        sink.push_clip(content);
        for child in &mut self.children {
            let r = child.resolved;
            if r.is_empty() {
                continue;
            }
            let rect = Rect::new(
                content.x.saturating_add(r.x),
                content.y.saturating_add(r.y),
                r.width,
                r.height,
            );
            child.element.paint(sink, rect);
        }
        sink.pop_clip();
    }

    fn generation(&self) -> u64 {
        self.content_generation()
    }
}
