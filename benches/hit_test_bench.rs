use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use route_network_map::app::use_cases::hit_test::pick_network_feature;
use route_network_map::surface::SceneFeature;
use route_network_map::{
    AppController, AppIntent, AppState, FeatureHandle, InMemorySurface, MapOptions, MapSurface,
    RenderedFeature, ScreenRect,
};
use std::hint::black_box;

fn build_synthetic_surface(feature_count: usize) -> InMemorySurface {
    let features = (0..feature_count)
        .map(|index| {
            let column = (index % 1000) as f32;
            let row = (index / 1000) as f32;
            let is_node = index % 3 == 0;
            SceneFeature {
                feature: RenderedFeature {
                    handle: FeatureHandle {
                        layer_id: if is_node { "nodes" } else { "segments" }.into(),
                        feature_id: index as u64,
                    },
                    object_type: if is_node { "route_node" } else { "route_segment" }.into(),
                    mrid: format!("F{index}"),
                    icon: is_node.then(|| "cabinet".to_string()),
                },
                anchor: [column * 4.0 + row * 0.01, row * 4.0 + column * 0.01],
            }
        })
        .collect();

    let mut surface = InMemorySurface::new();
    surface.set_rendered(features);
    surface
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f32 * 4.0 + 1.37;
            let y = ((i * 7) % 100) as f32 * 4.0 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let options = MapOptions::default();

    for &feature_count in &[10_000usize, 100_000usize] {
        let surface = build_synthetic_surface(feature_count);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("pick_batch", feature_count),
            &surface,
            |b, surface| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if let Ok(Some(_)) =
                            pick_network_feature(surface, black_box(*point), &options)
                        {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("window_query", feature_count),
            &surface,
            |b, surface| {
                b.iter(|| {
                    let features = surface.query_rendered_features(Some(ScreenRect {
                        min: black_box(Vec2::new(1000.0, 40.0)),
                        max: black_box(Vec2::new(3000.0, 360.0)),
                    }));
                    black_box(features.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_identify_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify_flow");

    for &feature_count in &[10_000usize, 100_000usize] {
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("click_batch", feature_count),
            &feature_count,
            |b, &count| {
                let mut surface = build_synthetic_surface(count);
                let mut state = AppState::new();
                let mut controller = AppController::new();
                controller
                    .handle_intent(
                        &mut state,
                        &mut surface,
                        AppIntent::MapLoaded {
                            initial_envelope: None,
                            initial_marker: None,
                        },
                    )
                    .expect("MapLoaded fehlgeschlagen");

                b.iter(|| {
                    for point in &query_points {
                        let _ = controller.handle_intent(
                            &mut state,
                            &mut surface,
                            AppIntent::MapClicked {
                                screen_pos: black_box(*point),
                            },
                        );
                    }
                    state.outbox.drain();
                    black_box(state.identification.current_id().map(str::len))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_identify_flow);
criterion_main!(benches);
