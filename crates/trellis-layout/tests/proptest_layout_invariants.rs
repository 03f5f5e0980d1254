//! Property-based invariant tests for the layout containers.
//!
//! 1. Every container's measured size lies inside the incoming constraints.
//! 2. Measuring twice with the same constraints returns the same size.
//! 3. Flex shrink never takes a child below its declared minimum.
//! 4. Flex grow never pushes a child past its declared maximum.
//! 5. All-flexible grid tracks plus gaps sum exactly to the extent.
//! 6. A right-to-left row mirrors the left-to-right row.
//! 7. Space-between gaps sum to the free space.

use proptest::prelude::*;
use trellis_core::geometry::{Constraints, EdgeInsets, Rect, Size};
use trellis_core::sink::Sink;
use trellis_layout::{
    ConstraintLayout, ConstraintSpec, Direction, FlexChild, FlexLayout, GridLayout,
    LayoutDirection, LayoutElement, MainAlignment, Track, resolve_tracks,
};

/// Leaf with a fixed natural size.
#[derive(Debug, Clone, Copy)]
struct Leaf(Size);

impl LayoutElement for Leaf {
    fn measure(&mut self, constraints: Constraints) -> Size {
        constraints.constrain_size(self.0)
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        sink.fill(area, '#');
    }
}

#[derive(Debug, Clone)]
struct ChildSpec {
    natural: (u16, u16),
    grow: u16,
    shrink: u16,
    min_main: Option<u16>,
    max_main: Option<u16>,
    margin: u16,
}

fn child_spec() -> impl Strategy<Value = ChildSpec> {
    (
        (0u16..=60, 0u16..=20),
        0u16..=4,
        0u16..=4,
        proptest::option::of(0u16..=30),
        proptest::option::of(0u16..=40),
        0u16..=2,
    )
        .prop_map(|(natural, grow, shrink, min_main, max_main, margin)| ChildSpec {
            natural,
            grow,
            shrink,
            min_main,
            max_main,
            margin,
        })
}

fn constraints_strategy() -> impl Strategy<Value = Constraints> {
    (0u16..=200, 0u16..=200, 0u16..=100, 0u16..=100, any::<bool>()).prop_map(
        |(a, b, c, d, unbounded)| {
            let (min_w, max_w) = (a.min(b), a.max(b));
            let (min_h, max_h) = (c.min(d), c.max(d));
            let max_w = if unbounded { Constraints::UNBOUNDED } else { max_w };
            Constraints::new(min_w, max_w, min_h, max_h).unwrap_or_default()
        },
    )
}

fn build_flex(direction: Direction, specs: &[ChildSpec], gap: u16, padding: u16) -> FlexLayout<'static> {
    let main = |v: u16| match direction {
        Direction::Row => Size::new(v, 0),
        Direction::Column => Size::new(0, v),
    };
    let mut flex = FlexLayout::new(direction).gap(gap).padding(padding);
    for spec in specs {
        let mut child = FlexChild::new(Leaf(Size::new(spec.natural.0, spec.natural.1)))
            .grow(spec.grow)
            .shrink(spec.shrink)
            .margin(EdgeInsets::all(spec.margin));
        if let Some(min) = spec.min_main {
            child = child.min_size(main(min));
        }
        if let Some(max) = spec.max_main {
            let cap = match direction {
                Direction::Row => Size::new(max, u16::MAX),
                Direction::Column => Size::new(u16::MAX, max),
            };
            child = child.max_size(cap);
        }
        flex.add_child(child);
    }
    flex
}

fn within(c: Constraints, s: Size) -> bool {
    c.min_width() <= s.width
        && s.width <= c.max_width()
        && c.min_height() <= s.height
        && s.height <= c.max_height()
}

proptest! {
    #[test]
    fn flex_measure_within_constraints(
        specs in proptest::collection::vec(child_spec(), 0..8),
        column in any::<bool>(),
        gap in 0u16..=3,
        padding in 0u16..=3,
        c in constraints_strategy(),
    ) {
        let direction = if column { Direction::Column } else { Direction::Row };
        let mut flex = build_flex(direction, &specs, gap, padding);
        let first = flex.measure(c);
        prop_assert!(within(c, first), "{first:?} outside {c:?}");
        prop_assert_eq!(flex.measure(c), first);
    }

    #[test]
    fn flex_shrink_respects_min_and_grow_respects_max(
        specs in proptest::collection::vec(child_spec(), 1..8),
        extent in 0u16..=120,
    ) {
        let mut flex = build_flex(Direction::Row, &specs, 1, 0);
        flex.measure(Constraints::tight(extent, 10));
        for (spec, child) in specs.iter().zip(flex.children()) {
            let width = child.cached_size().width;
            if let Some(min) = spec.min_main {
                prop_assert!(width >= min, "width {width} below min {min}");
            }
            if let (Some(max), Some(min)) = (spec.max_main, spec.min_main) {
                prop_assert!(width <= max.max(min), "width {width} above max {max}");
            } else if let Some(max) = spec.max_main {
                prop_assert!(width <= max, "width {width} above max {max}");
            }
        }
    }

    #[test]
    fn grid_measure_within_constraints(
        columns in proptest::collection::vec(prop_oneof![
            (0u16..=20).prop_map(Track::Fixed),
            (0u16..=5).prop_map(Track::Flex),
        ], 0..6),
        rows in proptest::collection::vec(prop_oneof![
            (0u16..=10).prop_map(Track::Fixed),
            (0u16..=5).prop_map(Track::Flex),
        ], 0..6),
        naturals in proptest::collection::vec((0u16..=30, 0u16..=10), 36),
        gap in 0u16..=2,
        c in constraints_strategy(),
    ) {
        let mut grid = GridLayout::new(columns.clone(), rows.clone()).gap(gap);
        for row in 0..rows.len() {
            for column in 0..columns.len() {
                let (w, h) = naturals[row * 6 + column];
                grid.place(column, row, Leaf(Size::new(w, h))).unwrap();
            }
        }
        let first = grid.measure(c);
        prop_assert!(within(c, first), "{first:?} outside {c:?}");
        prop_assert_eq!(grid.measure(c), first);
    }

    #[test]
    fn flex_tracks_fill_extent_exactly(
        weights in proptest::collection::vec(0u16..=9, 1..10),
        gap in 0u16..=3,
        extent in 0u16..=500,
    ) {
        let tracks: Vec<Track> = weights.iter().copied().map(Track::Flex).collect();
        let gaps = (tracks.len() as u32 - 1) * u32::from(gap);
        prop_assume!(u32::from(extent) >= gaps);
        let sizes = resolve_tracks(&tracks, extent, gap);
        let total: u32 = sizes.iter().map(|&s| u32::from(s)).sum::<u32>() + gaps;
        prop_assert_eq!(total, u32::from(extent));
    }

    #[test]
    fn constraint_layout_within_constraints(
        anchors in proptest::collection::vec(
            (
                proptest::option::of(0u16..=30),
                proptest::option::of(0u16..=30),
                proptest::option::of(0u16..=30),
                any::<bool>(),
                (0u16..=80, 0u16..=40),
            ),
            0..6,
        ),
        c in constraints_strategy(),
    ) {
        let mut layout = ConstraintLayout::new();
        for (left, right, width, centered, natural) in anchors {
            let mut spec = ConstraintSpec::new();
            if let Some(left) = left {
                spec = spec.left(left);
            }
            if let Some(right) = right {
                spec = spec.right(right);
            }
            if let Some(width) = width {
                spec = spec.width(width);
            }
            if centered {
                spec = spec.center_y();
            }
            layout.add_child(Leaf(Size::new(natural.0, natural.1)), spec);
        }
        let first = layout.measure(c);
        prop_assert!(within(c, first), "{first:?} outside {c:?}");
        prop_assert_eq!(layout.measure(c), first);

        // Children stay inside bounded content.
        if c.is_bounded(trellis_core::geometry::Axis::Horizontal) {
            for i in 0..layout.child_count() {
                let rect = layout.child_rect(i).unwrap();
                prop_assert!(rect.right() <= c.max_width());
            }
        }
    }

    #[test]
    fn rtl_row_mirrors_ltr(
        widths in proptest::collection::vec(0u16..=10, 1..6),
        margins in proptest::collection::vec(0u16..=2, 6),
        gap in 0u16..=2,
        extent in 0u16..=80,
    ) {
        let build = |dir| {
            let mut row = FlexLayout::row().gap(gap).layout_direction(dir);
            for (i, &w) in widths.iter().enumerate() {
                row.add_child(
                    FlexChild::new(Leaf(Size::new(w, 1)))
                        .shrink(0)
                        .margin(EdgeInsets::horizontal(margins[i])),
                );
            }
            row
        };
        let area = Rect::from_size(extent, 1);
        let ltr = build(LayoutDirection::Ltr).child_rects(area);
        let rtl = build(LayoutDirection::Rtl).child_rects(area);
        for (l, r) in ltr.iter().zip(&rtl) {
            prop_assert_eq!(r.width, l.width);
            let expected = u32::from(extent).saturating_sub(u32::from(l.x) + u32::from(l.width));
            prop_assert_eq!(u32::from(r.x), expected);
        }
    }

    #[test]
    fn space_between_gaps_sum_to_free_space(
        widths in proptest::collection::vec(0u16..=10, 2..7),
        extent in 0u16..=120,
    ) {
        let mut row = FlexLayout::row().main_alignment(MainAlignment::SpaceBetween);
        for &w in &widths {
            row.add_child(FlexChild::new(Leaf(Size::new(w, 1))).shrink(0));
        }
        let used: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        prop_assume!(used <= u32::from(extent));
        let rects = row.child_rects(Rect::from_size(extent, 1));
        prop_assert_eq!(rects[0].x, 0);
        let gaps: u32 = rects
            .windows(2)
            .map(|w| u32::from(w[1].x) - u32::from(w[0].right()))
            .sum();
        prop_assert_eq!(gaps, u32::from(extent) - used);
    }
}
