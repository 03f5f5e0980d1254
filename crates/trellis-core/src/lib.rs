#![forbid(unsafe_code)]

//! Core: cell geometry, size constraints, the paint boundary, and logging.

pub mod geometry;
pub mod logging;
pub mod sink;

pub use geometry::{Axis, Constraints, EdgeInsets, GeometryError, Rect, Size};
pub use sink::{CellBuffer, Sink};

#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
