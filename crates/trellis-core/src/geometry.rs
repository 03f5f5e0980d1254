#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Every coordinate is a terminal cell index stored as `u16`. Arithmetic on
//! these types saturates instead of wrapping: a shrink past zero yields an
//! empty rectangle, an expansion past `u16::MAX` pins to the edge.

use std::fmt;

/// Largest representable cell coordinate.
pub const MAX_CELL: u16 = u16::MAX;

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Construction failure for geometry values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A dimension does not fit the 16-bit cell coordinate space.
    DimensionOverflow { value: u64 },
    /// A constraint range with `min > max`.
    InvalidConstraintRange { axis: Axis, min: u16, max: u16 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionOverflow { value } => {
                write!(f, "dimension {value} exceeds the cell range 0..={MAX_CELL}")
            }
            Self::InvalidConstraintRange { axis, min, max } => {
                write!(f, "invalid {axis} constraint range: min {min} > max {max}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Range-check a wide integer into a cell dimension.
#[inline]
pub fn cell(value: u32) -> Result<u16, GeometryError> {
    u16::try_from(value).map_err(|_| GeometryError::DimensionOverflow {
        value: u64::from(value),
    })
}

/// Saturate a wide sum back into cell space.
#[inline]
pub fn saturate(value: u32) -> u16 {
    value.min(u32::from(MAX_CELL)) as u16
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a size from wide integers, failing if either does not fit.
    pub fn try_new(width: u32, height: u32) -> Result<Self, GeometryError> {
        Ok(Self::new(cell(width)?, cell(height)?))
    }

    /// Check if the size has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Extent along `axis`.
    #[inline]
    pub const fn along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Grow by the given insets, saturating.
    pub const fn inflate(&self, insets: EdgeInsets) -> Size {
        Size {
            width: self.width.saturating_add(insets.horizontal_sum()),
            height: self.height.saturating_add(insets.vertical_sum()),
        }
    }
}

/// A rectangle for layout bounds and paint regions.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from wide integers, failing on any out-of-range field.
    pub fn try_new(x: u32, y: u32, width: u32, height: u32) -> Result<Self, GeometryError> {
        Ok(Self::new(cell(x)?, cell(y)?, cell(width)?, cell(height)?))
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Move the origin inward by `insets` and reduce the size accordingly.
    ///
    /// The size clamps to zero when the insets exceed it.
    pub const fn shrink(&self, insets: EdgeInsets) -> Rect {
        Rect {
            x: self.x.saturating_add(insets.left),
            y: self.y.saturating_add(insets.top),
            width: self
                .width
                .saturating_sub(insets.left)
                .saturating_sub(insets.right),
            height: self
                .height
                .saturating_sub(insets.top)
                .saturating_sub(insets.bottom),
        }
    }

    /// Move the origin outward by `insets` and grow the size accordingly.
    ///
    /// The origin clamps at zero and the size at `u16::MAX`.
    pub const fn expand(&self, insets: EdgeInsets) -> Rect {
        Rect {
            x: self.x.saturating_sub(insets.left),
            y: self.y.saturating_sub(insets.top),
            width: self
                .width
                .saturating_add(insets.left)
                .saturating_add(insets.right),
            height: self
                .height
                .saturating_add(insets.top)
                .saturating_add(insets.bottom),
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

/// Insets for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeInsets {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::all(0);

    /// Equal insets on every side.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Left and right only.
    pub const fn horizontal(val: u16) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Top and bottom only.
    pub const fn vertical(val: u16) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Explicit insets, clockwise from the top.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    /// Sum of the two insets along `axis`.
    #[inline]
    pub const fn along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.horizontal_sum(),
            Axis::Vertical => self.vertical_sum(),
        }
    }

    /// Leading inset along `axis` (left or top).
    #[inline]
    pub const fn leading(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing inset along `axis` (right or bottom).
    #[inline]
    pub const fn trailing(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

impl From<u16> for EdgeInsets {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

impl From<(u16, u16)> for EdgeInsets {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(u16, u16, u16, u16)> for EdgeInsets {
    fn from((top, right, bottom, left): (u16, u16, u16, u16)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// An allowed size range handed down from a parent to a child.
///
/// Invariant: `min_* <= max_*` on both axes. The fallible constructors
/// enforce it; [`Constraints::clamped`] repairs an inverted range instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    min_width: u16,
    max_width: u16,
    min_height: u16,
    max_height: u16,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

impl Constraints {
    /// Sentinel maximum meaning "no limit".
    pub const UNBOUNDED: u16 = MAX_CELL;

    /// Anything from zero to unbounded on both axes.
    pub const UNCONSTRAINED: Self = Self::loose(0, 0);

    /// Create constraints, rejecting an inverted range on either axis.
    pub fn new(
        min_width: u16,
        max_width: u16,
        min_height: u16,
        max_height: u16,
    ) -> Result<Self, GeometryError> {
        if min_width > max_width {
            return Err(GeometryError::InvalidConstraintRange {
                axis: Axis::Horizontal,
                min: min_width,
                max: max_width,
            });
        }
        if min_height > max_height {
            return Err(GeometryError::InvalidConstraintRange {
                axis: Axis::Vertical,
                min: min_height,
                max: max_height,
            });
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// Create constraints, pulling an inverted minimum down to its maximum.
    pub const fn clamped(min_width: u16, max_width: u16, min_height: u16, max_height: u16) -> Self {
        Self {
            min_width: if min_width > max_width {
                max_width
            } else {
                min_width
            },
            max_width,
            min_height: if min_height > max_height {
                max_height
            } else {
                min_height
            },
            max_height,
        }
    }

    /// Exactly `width` x `height`.
    pub const fn tight(width: u16, height: u16) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// At least `min_width` x `min_height`, no maximum.
    pub const fn loose(min_width: u16, min_height: u16) -> Self {
        Self {
            min_width,
            max_width: Self::UNBOUNDED,
            min_height,
            max_height: Self::UNBOUNDED,
        }
    }

    /// Anything from zero up to `max_width` x `max_height`.
    pub const fn bounded(max_width: u16, max_height: u16) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// [`Constraints::tight`] from range-checked wide integers.
    pub fn try_tight(width: u32, height: u32) -> Result<Self, GeometryError> {
        Ok(Self::tight(cell(width)?, cell(height)?))
    }

    /// [`Constraints::loose`] from range-checked wide integers.
    pub fn try_loose(min_width: u32, min_height: u32) -> Result<Self, GeometryError> {
        Ok(Self::loose(cell(min_width)?, cell(min_height)?))
    }

    /// [`Constraints::bounded`] from range-checked wide integers.
    pub fn try_bounded(max_width: u32, max_height: u32) -> Result<Self, GeometryError> {
        Ok(Self::bounded(cell(max_width)?, cell(max_height)?))
    }

    #[inline]
    pub const fn min_width(&self) -> u16 {
        self.min_width
    }

    #[inline]
    pub const fn max_width(&self) -> u16 {
        self.max_width
    }

    #[inline]
    pub const fn min_height(&self) -> u16 {
        self.min_height
    }

    #[inline]
    pub const fn max_height(&self) -> u16 {
        self.max_height
    }

    /// Minimum along `axis`.
    #[inline]
    pub const fn min_along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }

    /// Maximum along `axis`.
    #[inline]
    pub const fn max_along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// Whether `axis` has a finite maximum.
    #[inline]
    pub const fn is_bounded(&self, axis: Axis) -> bool {
        self.max_along(axis) != Self::UNBOUNDED
    }

    /// Whether min equals max on both axes.
    #[inline]
    pub const fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Largest size allowed.
    #[inline]
    pub const fn biggest(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Smallest size allowed.
    #[inline]
    pub const fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Clamp a candidate size into the allowed range.
    #[inline]
    pub fn constrain(&self, width: u16, height: u16) -> Size {
        Size::new(
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }

    /// [`Constraints::constrain`] for a `Size`.
    #[inline]
    pub fn constrain_size(&self, size: Size) -> Size {
        self.constrain(size.width, size.height)
    }

    /// Remove `insets` from both bounds, keeping the range valid.
    ///
    /// Unbounded maxima stay unbounded.
    pub fn deflate(&self, insets: EdgeInsets) -> Self {
        let h = insets.horizontal_sum();
        let v = insets.vertical_sum();
        let max_width = if self.is_bounded(Axis::Horizontal) {
            self.max_width.saturating_sub(h)
        } else {
            Self::UNBOUNDED
        };
        let max_height = if self.is_bounded(Axis::Vertical) {
            self.max_height.saturating_sub(v)
        } else {
            Self::UNBOUNDED
        };
        Self::clamped(
            self.min_width.saturating_sub(h),
            max_width,
            self.min_height.saturating_sub(v),
            max_height,
        )
    }

    /// Drop the minimums, keeping the maximums.
    #[inline]
    pub const fn loosen(&self) -> Self {
        Self::bounded(self.max_width, self.max_height)
    }

    /// Replace the range along `axis` with `[min, max]`, repairing inversion.
    pub const fn with_axis(&self, axis: Axis, min: u16, max: u16) -> Self {
        match axis {
            Axis::Horizontal => Self::clamped(min, max, self.min_height, self.max_height),
            Axis::Vertical => Self::clamped(self.min_width, self.max_width, min, max),
        }
    }
}
