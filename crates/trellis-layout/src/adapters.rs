#![forbid(unsafe_code)]

//! Single-child adapters.
//!
//! Small wrappers that compose trees without a bespoke container:
//!
//! - [`SizedBox`] forces a width and/or height (a spacer without a child)
//! - [`Padding`] insets its child and clips it to the inset area
//! - [`Center`] takes the available space and centers its child in it
//! - [`LayoutGuide`] records what its child was measured and painted at

use std::cell::Cell;
use std::rc::Rc;

use trellis_core::geometry::{Axis, Constraints, EdgeInsets, Rect, Size};
use trellis_core::sink::Sink;

use crate::element::{Element, LayoutElement, combined_generation};

/// Pops the clip it pushed when dropped.
struct ClipGuard<'s> {
    sink: &'s mut dyn Sink,
}

impl<'s> ClipGuard<'s> {
    fn new(sink: &'s mut dyn Sink, rect: Rect) -> Self {
        sink.push_clip(rect);
        Self { sink }
    }
}

impl Drop for ClipGuard<'_> {
    fn drop(&mut self) {
        self.sink.pop_clip();
    }
}

/// Fixed width and/or height, optionally around a child.
///
/// ```
/// use trellis_core::geometry::{Constraints, Size};
/// use trellis_layout::{LayoutElement, SizedBox};
///
/// let mut spacer = SizedBox::width(3);
/// assert_eq!(spacer.measure(Constraints::bounded(10, 10)), Size::new(3, 0));
/// ```
pub struct SizedBox<'a> {
    width: Option<u16>,
    height: Option<u16>,
    child: Option<Element<'a>>,
}

impl std::fmt::Debug for SizedBox<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizedBox")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_child", &self.child.is_some())
            .finish()
    }
}

impl<'a> SizedBox<'a> {
    /// Both dimensions fixed.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            child: None,
        }
    }

    /// Width fixed, height from the child (or the minimum without one).
    pub fn width(width: u16) -> Self {
        Self {
            width: Some(width),
            height: None,
            child: None,
        }
    }

    /// Height fixed, width from the child (or the minimum without one).
    pub fn height(height: u16) -> Self {
        Self {
            width: None,
            height: Some(height),
            child: None,
        }
    }

    #[must_use]
    pub fn child(mut self, child: impl LayoutElement + 'a) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    fn tighten(&self, constraints: Constraints) -> Constraints {
        let mut c = constraints;
        if let Some(w) = self.width {
            let w = w.clamp(constraints.min_width(), constraints.max_width());
            c = c.with_axis(Axis::Horizontal, w, w);
        }
        if let Some(h) = self.height {
            let h = h.clamp(constraints.min_height(), constraints.max_height());
            c = c.with_axis(Axis::Vertical, h, h);
        }
        c
    }
}

impl LayoutElement for SizedBox<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let inner = self.tighten(constraints);
        match self.child.as_mut() {
            Some(child) => inner.constrain_size(child.measure(inner)),
            None => inner.smallest(),
        }
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        if let Some(child) = self.child.as_mut() {
            child.paint(sink, area);
        }
    }

    fn generation(&self) -> u64 {
        self.child.as_ref().map_or(0, |c| c.generation())
    }
}

/// Insets a child by fixed amounts on each side.
pub struct Padding<'a> {
    insets: EdgeInsets,
    child: Element<'a>,
    revision: u64,
}

impl std::fmt::Debug for Padding<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Padding")
            .field("insets", &self.insets)
            .finish_non_exhaustive()
    }
}

impl<'a> Padding<'a> {
    pub fn new(insets: impl Into<EdgeInsets>, child: impl LayoutElement + 'a) -> Self {
        Self {
            insets: insets.into(),
            child: Box::new(child),
            revision: 0,
        }
    }

    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: EdgeInsets) {
        self.insets = insets;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Area the child paints into for an outer `area`.
    #[inline]
    pub fn inner_area(&self, area: Rect) -> Rect {
        area.shrink(self.insets)
    }
}

impl LayoutElement for Padding<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let child = self.child.measure(constraints.deflate(self.insets));
        constraints.constrain_size(child.inflate(self.insets))
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_paint",
            container = "Padding",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let inner = self.inner_area(area);
        if inner.is_empty() {
            return;
        }
        let mut guard = ClipGuard::new(sink, inner);
        self.child.paint(&mut *guard.sink, inner);
    }

    fn generation(&self) -> u64 {
        combined_generation(self.revision, [self.child.generation()])
    }
}

/// Fills the available space and centers its child in it.
///
/// Bounded axes are filled; on an unbounded axis the box shrink-wraps the
/// child.
pub struct Center<'a> {
    child: Element<'a>,
}

impl std::fmt::Debug for Center<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Center").finish_non_exhaustive()
    }
}

impl<'a> Center<'a> {
    pub fn new(child: impl LayoutElement + 'a) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    /// Where the child goes inside `area`.
    pub fn child_area(&mut self, area: Rect) -> Rect {
        let size = self
            .child
            .measure(Constraints::bounded(area.width, area.height));
        let width = size.width.min(area.width);
        let height = size.height.min(area.height);
        Rect::new(
            area.x.saturating_add((area.width - width) / 2),
            area.y.saturating_add((area.height - height) / 2),
            width,
            height,
        )
    }
}

impl LayoutElement for Center<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let child = self.child.measure(constraints.loosen());
        let width = if constraints.is_bounded(Axis::Horizontal) {
            constraints.max_width()
        } else {
            child.width
        };
        let height = if constraints.is_bounded(Axis::Vertical) {
            constraints.max_height()
        } else {
            child.height
        };
        constraints.constrain(width, height)
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rect = self.child_area(area);
        if !rect.is_empty() {
            self.child.paint(sink, rect);
        }
    }

    fn generation(&self) -> u64 {
        self.child.generation()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GuideRecord {
    measured: Option<Size>,
    painted: Option<Rect>,
}

/// Read side of a [`LayoutGuide`].
///
/// Cheap to clone; every clone sees the guide's latest record.
#[derive(Debug, Clone, Default)]
pub struct GuideHandle {
    record: Rc<Cell<GuideRecord>>,
}

impl GuideHandle {
    /// Size returned by the last measure pass.
    pub fn measured_size(&self) -> Option<Size> {
        self.record.get().measured
    }

    /// Rectangle given to the last paint.
    pub fn painted_rect(&self) -> Option<Rect> {
        self.record.get().painted
    }

    fn update(&self, f: impl FnOnce(&mut GuideRecord)) {
        let mut record = self.record.get();
        f(&mut record);
        self.record.set(record);
    }
}

/// Records where it lands so the owner can read the layout back.
///
/// ```
/// use trellis_core::geometry::{Constraints, Rect, Size};
/// use trellis_core::sink::CellBuffer;
/// use trellis_layout::{LayoutElement, LayoutGuide, SizedBox};
///
/// let mut guide = LayoutGuide::wrap(SizedBox::new(4, 1));
/// let handle = guide.handle();
/// guide.measure(Constraints::bounded(10, 10));
/// guide.paint(&mut CellBuffer::new(10, 10), Rect::new(2, 3, 4, 1));
/// assert_eq!(handle.measured_size(), Some(Size::new(4, 1)));
/// assert_eq!(handle.painted_rect(), Some(Rect::new(2, 3, 4, 1)));
/// ```
pub struct LayoutGuide<'a> {
    child: Option<Element<'a>>,
    handle: GuideHandle,
}

impl std::fmt::Debug for LayoutGuide<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutGuide")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl Default for LayoutGuide<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LayoutGuide<'a> {
    /// An empty guide: measures to the minimum size.
    pub fn new() -> Self {
        Self {
            child: None,
            handle: GuideHandle::default(),
        }
    }

    /// Guide around `child`.
    pub fn wrap(child: impl LayoutElement + 'a) -> Self {
        Self {
            child: Some(Box::new(child)),
            handle: GuideHandle::default(),
        }
    }

    pub fn handle(&self) -> GuideHandle {
        self.handle.clone()
    }
}

impl LayoutElement for LayoutGuide<'_> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let size = match self.child.as_mut() {
            Some(child) => constraints.constrain_size(child.measure(constraints)),
            None => constraints.smallest(),
        };
        self.handle.update(|r| r.measured = Some(size));
        size
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        self.handle.update(|r| r.painted = Some(area));
        if let Some(child) = self.child.as_mut() {
            child.paint(sink, area);
        }
    }

    fn generation(&self) -> u64 {
        self.child.as_ref().map_or(0, |c| c.generation())
    }
}
