#![forbid(unsafe_code)]

//! Trellis public facade crate.
//!
//! Re-exports the geometry, paint boundary, and layout containers from the
//! internal crates and offers a prelude for day-to-day use.
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut root = FlexLayout::row()
//!     .gap(1)
//!     .child(FlexChild::new(SizedBox::new(3, 1)))
//!     .child(FlexChild::new(SizedBox::height(1)).grow(1));
//!
//! let mut reflow = ReflowManager::with_root(&mut root);
//! reflow.handle_resize(10, 1);
//! let mut buf = CellBuffer::new(10, 1);
//! reflow.render(&mut buf);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use trellis_core::geometry::{Axis, Constraints, EdgeInsets, GeometryError, Rect, Size};
pub use trellis_core::sink::{CellBuffer, Sink};

#[cfg(feature = "tracing-json")]
pub use trellis_core::logging::init_json_subscriber;

// --- Layout re-exports -----------------------------------------------------

pub use trellis_layout::{
    Center, ConstraintLayout, ConstraintSpec, CrossAlignment, Direction, Element, FlexChild,
    FlexLayout, GridLayout, GuideHandle, LayoutCacheStats, LayoutDirection, LayoutElement,
    LayoutError, LayoutGuide, MainAlignment, Padding, ReflowManager, SizedBox, Track,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type.
pub type Error = LayoutError;

/// Standard result type for trellis APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellBuffer, Center, ConstraintLayout, ConstraintSpec, Constraints, CrossAlignment,
        Direction, EdgeInsets, Error, FlexChild, FlexLayout, GridLayout, LayoutElement,
        LayoutGuide, MainAlignment, Padding, Rect, ReflowManager, Result, SizedBox, Sink, Size,
        Track,
    };

    pub use crate::{core, layout};
}

pub use trellis_core as core;
pub use trellis_layout as layout;
