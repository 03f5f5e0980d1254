#![forbid(unsafe_code)]

//! Top-level driver.
//!
//! [`ReflowManager`] owns the root element and the constraints from the last
//! terminal resize. A resize measures the whole tree against the new
//! full-screen size; a render paints it into the full-screen rectangle.

use trellis_core::geometry::{Constraints, Rect, Size};
use trellis_core::sink::Sink;

use crate::element::{Element, LayoutElement};

/// Resize-driven layout of a single root element.
pub struct ReflowManager<'a> {
    root: Option<Element<'a>>,
    last_constraints: Option<Constraints>,
    last_size: Option<Size>,
    /// Root generation at the last measure; `None` forces a re-measure.
    laid_out: Option<u64>,
}

impl std::fmt::Debug for ReflowManager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReflowManager")
            .field("has_root", &self.root.is_some())
            .field("last_constraints", &self.last_constraints)
            .field("last_size", &self.last_size)
            .finish()
    }
}

impl Default for ReflowManager<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ReflowManager<'a> {
    /// A manager with no root.
    pub fn new() -> Self {
        Self {
            root: None,
            last_constraints: None,
            last_size: None,
            laid_out: None,
        }
    }

    pub fn with_root(root: impl LayoutElement + 'a) -> Self {
        let mut manager = Self::new();
        manager.set_root(root);
        manager
    }

    /// Replace the root. The next render measures it first.
    pub fn set_root(&mut self, root: impl LayoutElement + 'a) {
        self.root = Some(Box::new(root));
        self.laid_out = None;
    }

    /// Detach and return the root.
    pub fn take_root(&mut self) -> Option<Element<'a>> {
        self.laid_out = None;
        self.last_size = None;
        self.root.take()
    }

    pub fn root(&self) -> Option<&dyn LayoutElement> {
        self.root.as_deref().map(|r| r as &dyn LayoutElement)
    }

    /// Constraints from the last resize.
    pub fn last_constraints(&self) -> Option<Constraints> {
        self.last_constraints
    }

    /// Root size from the last measure.
    pub fn last_size(&self) -> Option<Size> {
        self.last_size
    }

    /// Lay the tree out for a `width x height` terminal.
    pub fn handle_resize(&mut self, width: u16, height: u16) -> Size {
        trellis_core::debug!(width, height, "terminal resized, relayout");
        self.last_constraints = Some(Constraints::tight(width, height));
        self.relayout().unwrap_or(Size::ZERO)
    }

    /// Measure the root again with the last constraints.
    ///
    /// `None` before the first resize or without a root.
    pub fn relayout(&mut self) -> Option<Size> {
        let constraints = self.last_constraints?;
        let root = self.root.as_mut()?;
        let size = root.measure(constraints);
        self.laid_out = Some(root.generation());
        self.last_size = Some(size);
        Some(size)
    }

    /// Paint the tree into the full-screen rectangle.
    ///
    /// Content that changed since the last layout is measured again first.
    /// Does nothing before the first resize or without a root.
    pub fn render(&mut self, sink: &mut dyn Sink) {
        let Some(constraints) = self.last_constraints else {
            return;
        };
        let stale = match self.root.as_ref() {
            Some(root) => self.laid_out != Some(root.generation()),
            None => return,
        };
        if stale {
            trellis_core::trace!("root content changed, relayout before render");
            self.relayout();
        }
        let area = Rect::from_size(constraints.max_width(), constraints.max_height());
        if let Some(root) = self.root.as_mut() {
            root.paint(sink, area);
        }
    }
}
