#![forbid(unsafe_code)]

//! Layout containers and the element contract.
//!
//! This crate turns a tree of [`LayoutElement`]s and an available cell area
//! into exact rectangles:
//!
//! - [`FlexLayout`] - single-axis layout with grow/shrink negotiation
//! - [`GridLayout`] - fixed and flexible tracks on two axes
//! - [`ConstraintLayout`] - anchor and size based absolute placement
//! - [`SizedBox`], [`Padding`], [`Center`], [`LayoutGuide`] - single-child adapters
//! - [`ReflowManager`] - resize-driven top-level driver
//!
//! Every container memoizes its last pass on the available size plus the
//! [`LayoutElement::generation`] of its children, so an unchanged tree
//! measured twice with the same constraints does no work the second time.
//!
//! # Example
//!
//! ```
//! use trellis_core::geometry::Rect;
//! use trellis_core::sink::CellBuffer;
//! use trellis_layout::{FlexChild, FlexLayout, ReflowManager, SizedBox};
//!
//! let root = FlexLayout::column()
//!     .child(FlexChild::new(SizedBox::height(1)))
//!     .child(FlexChild::new(SizedBox::height(0)).grow(1));
//!
//! let mut reflow = ReflowManager::with_root(root);
//! let size = reflow.handle_resize(80, 24);
//! assert_eq!(size.width, 80);
//!
//! let mut buf = CellBuffer::new(80, 24);
//! reflow.render(&mut buf);
//! ```

use std::fmt;

use trellis_core::geometry::GeometryError;

pub mod adapters;
pub mod cache;
pub mod constraint;
pub mod element;
pub mod flex;
pub mod grid;
pub mod reflow;

pub use adapters::{Center, GuideHandle, LayoutGuide, Padding, SizedBox};
pub use cache::{LayoutCacheKey, LayoutCacheStats};
pub use constraint::{ConstraintLayout, ConstraintSpec};
pub use element::{Element, LayoutElement};
pub use flex::{
    CrossAlignment, Direction, FlexChild, FlexLayout, LayoutDirection, MainAlignment,
};
pub use grid::{GridLayout, Track, resolve_tracks};
pub use reflow::ReflowManager;
pub use trellis_core::geometry::{Constraints, EdgeInsets, Rect, Size};

/// Errors from configuring a layout.
///
/// Layout computation itself never fails; only addressing mistakes and
/// invalid geometry at construction time are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A grid cell address outside the configured tracks.
    OutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
    /// Invalid geometry.
    Geometry(GeometryError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                column,
                row,
                columns,
                rows,
            } => write!(
                f,
                "cell ({column}, {row}) is outside a {columns}x{rows} grid"
            ),
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::OutOfBounds { .. } => None,
        }
    }
}

impl From<GeometryError> for LayoutError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use trellis_core::geometry::Axis;

    #[test]
    fn out_of_bounds_message() {
        let err = LayoutError::OutOfBounds {
            column: 3,
            row: 0,
            columns: 2,
            rows: 2,
        };
        assert_eq!(err.to_string(), "cell (3, 0) is outside a 2x2 grid");
        assert!(err.source().is_none());
    }

    #[test]
    fn geometry_error_converts_and_chains() {
        fn build() -> Result<Constraints, LayoutError> {
            Ok(Constraints::new(5, 1, 0, 0)?)
        }
        let err = build().unwrap_err();
        assert_eq!(
            err,
            LayoutError::Geometry(GeometryError::InvalidConstraintRange {
                axis: Axis::Horizontal,
                min: 5,
                max: 1
            })
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("min 5 > max 1"));
    }
}
