// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use joist_hit::{ElementKind, ElementLookup, ElementRef, MarkupTree, NodeId};
use joist_viewer2d::actions::{
    AreaActions, HolesActions, ItemsActions, LinesActions, ProjectActions, VerticesActions,
    Viewer2DActions, Viewer3DActions,
};
use joist_viewer2d::{
    DispatchContext, GestureDispatcher, InteractionMode, PointerEvent, SceneInfo, SnapMask,
    ViewTransform, Viewer2D, ViewerOptions, ViewerState,
};
use kurbo::{Point, Rect};

/// Store that only counts requests.
#[derive(Default)]
struct Counter(u64);

impl ProjectActions for Counter {
    fn update_mouse_coord(&mut self, _: Point) {
        self.0 += 1;
    }
    fn unselect_all(&mut self) {
        self.0 += 1;
    }
    fn update_zoom_scale(&mut self, _: f64) {
        self.0 += 1;
    }
    fn rollback(&mut self) {}
    fn undo(&mut self) {}
    fn select_tool_edit(&mut self) {}
    fn open_catalog(&mut self) {}
    fn open_project_configurator(&mut self) {}
}

impl Viewer2DActions for Counter {
    fn update_camera_view(&mut self, _: ViewTransform) {
        self.0 += 1;
    }
    fn select_tool_pan(&mut self) {}
    fn select_tool_zoom_in(&mut self) {}
    fn select_tool_zoom_out(&mut self) {}
}

impl Viewer3DActions for Counter {
    fn select_tool_3d_view(&mut self) {}
    fn select_tool_3d_first_person(&mut self) {}
}

impl LinesActions for Counter {
    fn begin_drawing_line(&mut self, _: &str, _: Point, _: SnapMask) {
        self.0 += 1;
    }
    fn update_drawing_line(&mut self, _: Point, _: SnapMask) {
        self.0 += 1;
    }
    fn end_drawing_line(&mut self, _: Point, _: SnapMask) {
        self.0 += 1;
    }
    fn begin_dragging_line(&mut self, _: &str, _: &str, _: Point, _: SnapMask) {
        self.0 += 1;
    }
    fn update_dragging_line(&mut self, _: Point, _: SnapMask) {
        self.0 += 1;
    }
    fn end_dragging_line(&mut self, _: Point, _: SnapMask) {
        self.0 += 1;
    }
    fn select_line(&mut self, _: &str, _: &str) {
        self.0 += 1;
    }
}

impl HolesActions for Counter {
    fn begin_drawing_hole(&mut self, _: &str, _: Point) {}
    fn update_drawing_hole(&mut self, _: &str, _: Point) {}
    fn end_drawing_hole(&mut self, _: &str, _: Point) {}
    fn begin_dragging_hole(&mut self, _: &str, _: &str, _: Point) {}
    fn update_dragging_hole(&mut self, _: Point) {}
    fn end_dragging_hole(&mut self, _: Point) {}
    fn select_hole(&mut self, _: &str, _: &str) {}
}

impl ItemsActions for Counter {
    fn begin_drawing_item(&mut self, _: &str, _: Point) {}
    fn update_drawing_item(&mut self, _: &str, _: Point) {}
    fn end_drawing_item(&mut self, _: &str, _: Point) {}
    fn begin_dragging_item(&mut self, _: &str, _: &str, _: Point) {}
    fn update_dragging_item(&mut self, _: Point) {}
    fn end_dragging_item(&mut self, _: Point) {}
    fn begin_rotating_item(&mut self, _: &str, _: &str, _: Point) {}
    fn update_rotating_item(&mut self, _: Point) {}
    fn end_rotating_item(&mut self, _: Point) {}
    fn select_item(&mut self, _: &str, _: &str) {}
}

impl VerticesActions for Counter {
    fn begin_dragging_vertex(&mut self, _: &str, _: &str, _: Point, _: SnapMask) {}
    fn update_dragging_vertex(&mut self, _: Point, _: SnapMask) {}
    fn end_dragging_vertex(&mut self, _: Point, _: SnapMask) {}
}

impl AreaActions for Counter {
    fn select_area(&mut self, _: &str, _: &str) {}
}

/// A selected wall whose drawing leaf sits `depth` groups below its root.
fn nested_wall(depth: usize) -> (MarkupTree, NodeId) {
    let mut tree = MarkupTree::new();
    let layer = tree.insert(Some(tree.root()), "g");
    let wall = tree.insert(Some(layer), "g");
    tree.mark_element(
        wall,
        &ElementRef::new(ElementKind::Lines, "layer-1", "wall").selected(true),
    );
    let mut leaf = wall;
    for _ in 0..depth {
        leaf = tree.insert(Some(leaf), "g");
    }
    (tree, leaf)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/resolve");
    for depth in [1usize, 8, 64] {
        let (tree, leaf) = nested_wall(depth);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &leaf, |b, &leaf| {
            b.iter(|| black_box(tree.resolve(black_box(leaf))));
        });
    }
    group.finish();
}

fn bench_dispatch_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/pointer_move");
    for mode in [
        InteractionMode::Idle,
        InteractionMode::DrawingLine,
        InteractionMode::DraggingLine,
    ] {
        let ctx = DispatchContext::new(mode, "layer-1");
        let mut dispatcher = GestureDispatcher::new(Counter::default());
        group.bench_function(mode.name(), |b| {
            b.iter(|| black_box(dispatcher.pointer_move(&ctx, black_box(Point::new(10.0, 20.0)))));
        });
    }
    group.finish();
}

fn bench_viewer_line_drag(c: &mut Criterion) {
    let (tree, leaf) = nested_wall(4);
    let idle = ViewerState::new(
        InteractionMode::Idle,
        SceneInfo::new(3000.0, 2000.0, "layer-1"),
    )
    .with_camera(ViewTransform::IDENTITY);
    let dragging = ViewerState {
        mode: InteractionMode::DraggingLine,
        ..idle.clone()
    };
    let mut viewer = Viewer2D::new(
        Counter::default(),
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        ViewerOptions::default(),
    );

    c.bench_function("viewer/line_drag_32_moves", |b| {
        b.iter(|| {
            let start = Point::new(400.0, 400.0);
            let _ = viewer.pointer_down(&idle, &tree, PointerEvent::new(start, leaf));
            for step in 1..=32 {
                let at = Point::new(400.0 + f64::from(step), 400.0);
                viewer.pointer_move(&dragging, at);
            }
            let end = Point::new(432.0, 400.0);
            let _ = viewer.pointer_up(&dragging, &tree, PointerEvent::new(end, leaf));
            black_box(viewer.actions().0)
        });
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_dispatch_move,
    bench_viewer_line_drag
);
criterion_main!(benches);
