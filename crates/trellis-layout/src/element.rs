#![forbid(unsafe_code)]

//! The contract every layoutable node implements.

use trellis_core::geometry::{Constraints, Rect, Size};
use trellis_core::sink::Sink;

/// A node that can be measured and painted.
///
/// Containers only ever talk to their children through this trait, which is
/// what lets flex, grid, and constraint containers nest in any order.
///
/// # Contract
///
/// - `measure` returns a size inside `constraints`. It may update the node's
///   own caches but must not depend on anything outside the node.
/// - `paint` draws into `sink` within `area`, the rectangle the parent
///   resolved for this node.
/// - `generation` changes whenever something that affects `measure` changes
///   without the parent being told (text edited in place, a hint updated).
///   Containers fold their children's generations into their cache keys.
pub trait LayoutElement {
    /// Compute the size this node wants within `constraints`.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// Draw the node into `area`.
    fn paint(&mut self, sink: &mut dyn Sink, area: Rect);

    /// Content revision counter. Leaves that never change keep the default.
    fn generation(&self) -> u64 {
        0
    }
}

impl<T: LayoutElement + ?Sized> LayoutElement for &mut T {
    fn measure(&mut self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        (**self).paint(sink, area)
    }

    fn generation(&self) -> u64 {
        (**self).generation()
    }
}

impl<T: LayoutElement + ?Sized> LayoutElement for Box<T> {
    fn measure(&mut self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        (**self).paint(sink, area)
    }

    fn generation(&self) -> u64 {
        (**self).generation()
    }
}

/// A boxed element, owned or borrowed for `'a`.
pub type Element<'a> = Box<dyn LayoutElement + 'a>;

/// Fold a container's own revision with its children's generations.
///
/// FNV-style mixing keeps the result order sensitive, so swapping or
/// replacing a child changes it even when the plain sum would not.
pub(crate) fn combined_generation(revision: u64, children: impl IntoIterator<Item = u64>) -> u64 {
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    children
        .into_iter()
        .fold(revision ^ 0xcbf2_9ce4_8422_2325, |acc, generation| {
            (acc ^ generation).wrapping_mul(PRIME)
        })
}
