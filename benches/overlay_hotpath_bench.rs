//! Benchmark für den Overlay-Hotpath.
//!
//! Misst die Kosten pro Kamera-Tick bzw. Pointer-Move:
//! - ScreenProjector: Welt → Pixel für alle Kontrollpunkte
//! - Kamera-Refresh: erzwungene Neuberechnung aller Anker eines Shapes
//! - Punkt-Drag: ein Move inklusive Geometrie-Neuaufbau

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use openplans_editor::{AnchorTag, AppController, AppIntent, AppState, Camera3D, ScreenProjector, ShapeKind};
use std::hint::black_box;

/// Regelmäßiges n-Eck mit Radius 5 in der Arbeitsebene.
fn ring(point_count: usize) -> Vec<Vec3> {
    (0..point_count)
        .map(|i| {
            let angle = i as f32 / point_count as f32 * std::f32::consts::TAU;
            Vec3::new(angle.cos() * 5.0, 0.0, angle.sin() * 5.0)
        })
        .collect()
}

fn selected_state(point_count: usize) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let shape_id = state.next_shape_id;
    let _ = controller.handle_intent(
        &mut state,
        AppIntent::CreateShapeRequested {
            kind: ShapeKind::Polygon,
            points: ring(point_count),
            label: "Bench".into(),
        },
    );
    let _ = controller.handle_intent(
        &mut state,
        AppIntent::ShapeSelectionRequested {
            shape_id,
            selected: true,
        },
    );
    (controller, state)
}

/// Misst: Projektion aller Kontrollpunkte (= Anker-Layout pro Frame)
fn bench_project_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("projector_to_screen");
    let camera = Camera3D::plan(75.0, 0.1, 1000.0);
    let projector = ScreenProjector::new(&camera, Vec2::new(1280.0, 720.0));

    for &point_count in &[4usize, 64, 1024] {
        let points = ring(point_count);
        group.bench_with_input(
            BenchmarkId::new("project", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut sum = Vec2::ZERO;
                    for p in black_box(points) {
                        sum += projector.to_screen(*p);
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

/// Misst: Kamera-Tick mit erzwungener Neuberechnung aller Anker
fn bench_camera_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_camera_refresh");

    for &point_count in &[4usize, 64, 512] {
        let (mut controller, mut state) = selected_state(point_count);
        group.bench_function(BenchmarkId::new("refresh", point_count), |b| {
            b.iter(|| {
                let _ = controller.handle_intent(&mut state, AppIntent::CameraUpdated);
                black_box(state.overlay.drain_changes().len())
            })
        });
    }

    group.finish();
}

/// Misst: Punkt-Drag-Move (Koordinate setzen, Geometrie neu, Anker nachziehen)
fn bench_node_drag_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_node_drag");

    for &point_count in &[4usize, 64, 512] {
        let (mut controller, mut state) = selected_state(point_count);
        let shape_id = 1;
        let _ = controller.handle_intent(
            &mut state,
            AppIntent::AnchorPointerDown {
                tag: AnchorTag::point(shape_id, 0),
                world_pos: Vec3::new(5.0, 0.0, 0.0),
            },
        );

        let mut step = 0u32;
        group.bench_function(BenchmarkId::new("move", point_count), |b| {
            b.iter(|| {
                step = step.wrapping_add(1);
                let offset = (step % 16) as f32 * 0.01;
                let _ = controller.handle_intent(
                    &mut state,
                    AppIntent::PointerMove {
                        world_pos: Vec3::new(5.0 + offset, 0.0, offset),
                    },
                );
                black_box(state.overlay.drain_changes().len())
            })
        });
    }

    group.finish();
}

criterion_group!(
    overlay_hotpath_benches,
    bench_project_points,
    bench_camera_refresh,
    bench_node_drag_move,
);
criterion_main!(overlay_hotpath_benches);
