#![forbid(unsafe_code)]

//! End-to-end layout of nested containers painted into a `CellBuffer`.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_core::geometry::{Axis, Constraints, EdgeInsets, Rect, Size};
use trellis_core::sink::{CellBuffer, Sink};
use trellis_layout::{
    Center, ConstraintLayout, ConstraintSpec, CrossAlignment, FlexChild, FlexLayout, GridLayout,
    LayoutElement, LayoutGuide, MainAlignment, Padding, ReflowManager, SizedBox, Track,
};

/// Single-line label.
struct Label(String);

impl Label {
    fn new(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl LayoutElement for Label {
    fn measure(&mut self, constraints: Constraints) -> Size {
        constraints.constrain(self.0.chars().count() as u16, 1)
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        sink.print(area.x, area.y, &self.0);
    }
}

/// Label whose text the test edits while a tree holds it.
#[derive(Clone)]
struct SharedLabel(Rc<RefCell<(String, u64)>>);

impl SharedLabel {
    fn new(text: &str) -> Self {
        Self(Rc::new(RefCell::new((text.to_string(), 0))))
    }

    fn set(&self, text: &str) {
        let mut inner = self.0.borrow_mut();
        inner.0 = text.to_string();
        inner.1 += 1;
    }
}

impl LayoutElement for SharedLabel {
    fn measure(&mut self, constraints: Constraints) -> Size {
        constraints.constrain(self.0.borrow().0.chars().count() as u16, 1)
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        sink.print(area.x, area.y, &self.0.borrow().0);
    }

    fn generation(&self) -> u64 {
        self.0.borrow().1
    }
}

/// Takes all the space it is allowed on bounded axes and fills it.
struct Fill(char);

impl LayoutElement for Fill {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let pick = |axis| {
            if constraints.is_bounded(axis) {
                constraints.max_along(axis)
            } else {
                constraints.min_along(axis)
            }
        };
        Size::new(pick(Axis::Horizontal), pick(Axis::Vertical))
    }

    fn paint(&mut self, sink: &mut dyn Sink, area: Rect) {
        sink.fill(area, self.0);
    }
}

fn render(root: &mut dyn LayoutElement, width: u16, height: u16) -> Vec<String> {
    let mut buf = CellBuffer::new(width, height);
    root.measure(Constraints::tight(width, height));
    root.paint(&mut buf, Rect::from_size(width, height));
    buf.to_lines()
}

#[test]
fn header_body_footer() {
    let mut root = FlexLayout::column()
        .child(FlexChild::new(Label::new("title")))
        .child(FlexChild::new(SizedBox::height(0)).grow(1))
        .child(
            FlexChild::new(
                FlexLayout::row()
                    .main_alignment(MainAlignment::SpaceBetween)
                    .child(FlexChild::new(Label::new("ok")))
                    .child(FlexChild::new(Label::new("quit"))),
            )
            .margin(EdgeInsets::horizontal(1))
            .min_size(Size::new(10, 0)),
        );

    assert_eq!(
        render(&mut root, 12, 5),
        vec![
            "title       ",
            "            ",
            "            ",
            "            ",
            " ok    quit ",
        ]
    );
}

#[test]
fn sidebar_with_grid_content() {
    let mut grid = GridLayout::new(vec![Track::Flex(1); 2], vec![Track::Flex(1); 2]).gap(1);
    grid.place(0, 0, Fill('a')).unwrap();
    grid.place(1, 0, Fill('b')).unwrap();
    grid.place(0, 1, Fill('c')).unwrap();
    grid.place(1, 1, Fill('d')).unwrap();

    let mut root = FlexLayout::row()
        .gap(1)
        .child(FlexChild::new(SizedBox::new(3, 5).child(Fill('|'))).shrink(0))
        .child(FlexChild::new(grid).grow(1));

    assert_eq!(
        render(&mut root, 12, 5),
        vec![
            "||| aaaa bbb",
            "||| aaaa bbb",
            "|||         ",
            "||| cccc ddd",
            "||| cccc ddd",
        ]
    );
}

#[test]
fn overlay_dialog_in_constraint_layout() {
    let mut root = ConstraintLayout::new()
        .child(Fill('~'), ConstraintSpec::new().left(0).right(0).top(0).bottom(0))
        .child(
            Padding::new(1, Center::new(Label::new("hi"))),
            ConstraintSpec::new().centered().width(6).height(3),
        );

    // Nothing paints the dialog's padding ring, so the backdrop shows through.
    assert_eq!(
        render(&mut root, 10, 5),
        vec!["~~~~~~~~~~", "~~~~~~~~~~", "~~~~hi~~~~", "~~~~~~~~~~", "~~~~~~~~~~"]
    );
    assert_eq!(root.child_rect(1), Some(Rect::new(2, 1, 6, 3)));
}

#[test]
fn cross_alignment_in_nested_column() {
    let mut root = FlexLayout::row().cross_alignment(CrossAlignment::End).child(
        FlexChild::new(
            FlexLayout::column()
                .child(FlexChild::new(Label::new("a")))
                .child(FlexChild::new(Label::new("bb"))),
        ),
    );
    assert_eq!(render(&mut root, 3, 3), vec!["   ", "a  ", "bb "]);
}

#[test]
fn guides_read_back_rects() {
    let header = LayoutGuide::wrap(Label::new("head"));
    let body = LayoutGuide::wrap(Fill(' '));
    let (header_handle, body_handle) = (header.handle(), body.handle());

    let mut root = FlexLayout::column()
        .padding(1)
        .child(FlexChild::new(header).shrink(0))
        .child(FlexChild::new(body));
    render(&mut root, 10, 6);

    assert_eq!(header_handle.painted_rect(), Some(Rect::new(1, 1, 4, 1)));
    assert_eq!(body_handle.painted_rect(), Some(Rect::new(1, 2, 8, 3)));
    assert_eq!(body_handle.measured_size(), Some(Size::new(8, 3)));
}

#[test]
fn borrowed_elements_paint() {
    let mut label = Label::new("ab");
    {
        let mut root = FlexLayout::row()
            .child(FlexChild::new(&mut label))
            .child(FlexChild::new(Label::new("|")));
        assert_eq!(render(&mut root, 6, 1), vec!["ab|   "]);
    }
    label.0.push('c');
    assert_eq!(label.0, "abc");
}

#[test]
fn leaf_change_invalidates_ancestor_caches() {
    let label = SharedLabel::new("ab");
    let mut root = FlexLayout::column().child(FlexChild::new(
        FlexLayout::row()
            .child(FlexChild::new(label.clone()))
            .child(FlexChild::new(Label::new("|"))),
    ));
    assert_eq!(render(&mut root, 6, 1), vec!["ab|   "]);

    label.set("abcd");
    assert_eq!(render(&mut root, 6, 1), vec!["abcd| "]);
}

#[test]
fn reflow_tracks_resizes() {
    let mut status = Label::new("idle");
    let mut reflow = ReflowManager::with_root(
        FlexLayout::column()
            .child(FlexChild::new(Fill('-')))
            .child(FlexChild::new(&mut status).shrink(0)),
    );

    reflow.handle_resize(6, 3);
    let mut buf = CellBuffer::new(6, 3);
    reflow.render(&mut buf);
    assert_eq!(buf.to_lines(), vec!["------", "------", "idle  "]);

    reflow.handle_resize(4, 2);
    let mut buf = CellBuffer::new(4, 2);
    reflow.render(&mut buf);
    assert_eq!(buf.to_lines(), vec!["----", "idle"]);
    assert_eq!(reflow.last_size(), Some(Size::new(4, 2)));
}

#[test]
fn reflow_picks_up_content_changes_on_render() {
    let status = SharedLabel::new("ok");
    let mut reflow = ReflowManager::with_root(
        FlexLayout::row()
            .main_alignment(MainAlignment::End)
            .child(FlexChild::new(status.clone())),
    );
    reflow.handle_resize(8, 1);

    status.set("failed");
    let mut buf = CellBuffer::new(8, 1);
    reflow.render(&mut buf);
    assert_eq!(buf.to_lines(), vec!["  failed"]);
}

#[test]
fn zero_area_paints_nothing() {
    let mut root = FlexLayout::row()
        .child(FlexChild::new(Fill('x')).grow(1))
        .child(FlexChild::new(Label::new("text")));
    let mut buf = CellBuffer::new(4, 1);
    root.measure(Constraints::tight(0, 0));
    root.paint(&mut buf, Rect::new(0, 0, 0, 0));
    assert_eq!(buf.to_lines(), vec!["    "]);
}
