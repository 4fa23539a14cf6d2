use std::time::{Duration, Instant};

use glam::Vec2;
use route_network_map::app::{BackendRejection, RequestTicket, TraceTarget};
use route_network_map::core::{LineGeometry, TraceBounds};
use route_network_map::{
    AppController, AppIntent, AppState, Envelope, FeatureHandle, InMemorySurface,
    InteractionMode, MapOptions, MapSurface, NotificationLevel, RenderedFeature, TraceOutcome, TraceResponse,
};

const TRACE_SOURCE: &str = "route_segment_trace";

fn segment(id: u64, mrid: &str) -> RenderedFeature {
    RenderedFeature {
        handle: FeatureHandle {
            layer_id: "segments".into(),
            feature_id: id,
        },
        object_type: "route_segment".into(),
        mrid: mrid.into(),
        icon: None,
    }
}

fn node(id: u64, mrid: &str) -> RenderedFeature {
    RenderedFeature {
        handle: FeatureHandle {
            layer_id: "nodes".into(),
            feature_id: id,
        },
        object_type: "route_node".into(),
        mrid: mrid.into(),
        icon: Some("manhole".into()),
    }
}

struct Fixture {
    controller: AppController,
    state: AppState,
    surface: InMemorySurface,
}

impl Fixture {
    fn loaded(options: MapOptions) -> Self {
        let mut fixture = Self {
            controller: AppController::new(),
            state: AppState::with_options(options),
            surface: InMemorySurface::new()
                .with_feature(segment(1, "S1"), Vec2::new(100.0, 100.0))
                .with_feature(segment(2, "S2"), Vec2::new(200.0, 100.0))
                .with_feature(node(3, "N1"), Vec2::new(300.0, 100.0)),
        };
        fixture.run(AppIntent::MapLoaded {
            initial_envelope: None,
            initial_marker: None,
        });
        fixture
    }

    fn run(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, &mut self.surface, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn click(&mut self, x: f32) -> RequestTicket {
        self.run(AppIntent::MapClicked {
            screen_pos: Vec2::new(x, 100.0),
        });
        self.state
            .trace
            .pending()
            .map(|p| p.ticket)
            .unwrap_or(RequestTicket(0))
    }

    fn resolve(&mut self, ticket: RequestTicket, outcome: TraceOutcome) {
        self.run(AppIntent::TraceResolved { ticket, outcome });
    }

    fn displayed_lines(&self) -> Vec<LineGeometry> {
        self.surface
            .line_source(TRACE_SOURCE)
            .expect("Trace-Quelle sollte existieren")
            .to_vec()
    }
}

fn line(offset: f64) -> LineGeometry {
    LineGeometry(vec![[offset, offset], [offset + 1.0, offset + 1.0]])
}

fn found(lines: Vec<LineGeometry>, ids: &[&str], envelope: Option<Envelope>) -> TraceOutcome {
    TraceOutcome::Found(TraceResponse {
        segment_geometries: lines,
        segment_ids: ids.iter().map(|id| id.to_string()).collect(),
        bounds: envelope.map(TraceBounds::uniform),
    })
}

#[test]
fn test_late_response_for_previous_segment_is_discarded() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let first = fx.click(100.0);
    let second = fx.click(200.0);
    assert!(second > first);

    fx.resolve(second, found(vec![line(2.0)], &["S2"], None));
    fx.resolve(first, found(vec![line(1.0)], &["S1"], None));

    assert_eq!(fx.displayed_lines(), vec![line(2.0)]);
    assert_eq!(fx.state.trace.current_trace().segment_ids, vec!["S2"]);
}

#[test]
fn test_out_of_order_first_response_never_flashes() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let first = fx.click(100.0);
    let second = fx.click(200.0);

    fx.resolve(first, found(vec![line(1.0)], &["S1"], None));
    assert!(fx.displayed_lines().is_empty());
    assert!(fx.state.trace.is_loading());

    fx.resolve(second, found(vec![line(2.0)], &["S2"], None));
    assert_eq!(fx.displayed_lines(), vec![line(2.0)]);
    assert!(!fx.state.trace.is_loading());
}

#[test]
fn test_clearing_identification_orphans_pending_trace() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);

    fx.run(AppIntent::IdentificationCleared);
    fx.resolve(ticket, found(vec![line(1.0)], &["S1"], None));

    assert!(fx.state.identification.is_idle());
    assert!(fx.state.trace.current_trace().is_empty());
    assert!(fx.displayed_lines().is_empty());
    assert!(fx.surface.highlighted_features().is_empty());
}

#[test]
fn test_auto_fit_uses_trace_envelope_without_animation() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);
    let envelope = Envelope::new(0.0, 0.0, 10.0, 10.0);

    fx.resolve(
        ticket,
        found(vec![line(1.0), line(2.0)], &["S1", "S7"], Some(envelope)),
    );

    assert_eq!(fx.surface.fit_log(), &[(envelope, false)]);
    assert_eq!(fx.displayed_lines(), vec![line(1.0), line(2.0)]);
    approx::assert_relative_eq!(fx.surface.camera().longitude, 5.0);
    approx::assert_relative_eq!(fx.surface.camera().latitude, 5.0);
}

#[test]
fn test_disabled_auto_fit_leaves_camera_untouched() {
    let mut fx = Fixture::loaded(MapOptions::default());
    fx.run(AppIntent::AutoFitTraceToggled);
    assert!(!fx.state.options.auto_fit_trace);
    let ticket = fx.click(100.0);

    fx.resolve(
        ticket,
        found(
            vec![line(1.0)],
            &["S1"],
            Some(Envelope::new(0.0, 0.0, 10.0, 10.0)),
        ),
    );

    assert!(fx.surface.fit_log().is_empty());
    assert_eq!(fx.displayed_lines(), vec![line(1.0)]);
}

#[test]
fn test_backend_failure_shows_empty_trace_and_error() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let first = fx.click(100.0);
    fx.resolve(first, found(vec![line(1.0)], &["S1"], None));
    let second = fx.click(200.0);
    assert_eq!(fx.displayed_lines(), vec![line(1.0)]);

    fx.resolve(
        second,
        TraceOutcome::Failed(BackendRejection::with_code("TRACE_FAILED")),
    );

    assert!(fx.displayed_lines().is_empty());
    let notifications = fx.state.ui.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Error);
    assert_eq!(notifications[0].key, "TRACE_FAILED");
}

#[test]
fn test_failure_without_code_reports_generic_error() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);

    fx.resolve(ticket, TraceOutcome::Failed(BackendRejection::default()));

    assert_eq!(fx.state.ui.notifications[0].key, "ERROR");
}

#[test]
fn test_not_found_is_an_empty_trace() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);

    fx.resolve(ticket, TraceOutcome::NotFound);

    assert!(!fx.state.trace.is_loading());
    assert!(fx.state.trace.current_trace().is_empty());
    assert!(fx.state.ui.notifications.is_empty());
}

#[test]
fn test_identifying_node_clears_trace() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);
    fx.resolve(ticket, found(vec![line(1.0)], &["S1"], None));

    fx.click(300.0);

    assert_eq!(fx.state.identification.current_id(), Some("N1"));
    assert!(fx.displayed_lines().is_empty());
    assert!(!fx.state.trace.is_loading());
}

#[test]
fn test_trace_times_out_and_discards_late_response() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);

    fx.run(AppIntent::Tick {
        now: Instant::now() + Duration::from_secs(5),
    });
    assert!(fx.state.trace.is_loading());

    fx.run(AppIntent::Tick {
        now: Instant::now() + Duration::from_secs(31),
    });
    assert!(!fx.state.trace.is_loading());
    assert_eq!(fx.state.ui.notifications[0].level, NotificationLevel::Warning);
    assert_eq!(fx.state.ui.notifications[0].key, "TRACE_TIMEOUT");

    fx.resolve(ticket, found(vec![line(1.0)], &["S1"], None));
    assert!(fx.displayed_lines().is_empty());
}

#[test]
fn test_entering_measuring_invalidates_in_flight_trace() {
    let mut fx = Fixture::loaded(MapOptions::default());
    let ticket = fx.click(100.0);

    fx.run(AppIntent::ModeRequested {
        mode: InteractionMode::Measuring,
    });
    fx.resolve(ticket, found(vec![line(1.0)], &["S1"], None));
    assert!(fx.displayed_lines().is_empty());

    fx.run(AppIntent::ModeRequested {
        mode: InteractionMode::Normal,
    });
    let pending = fx
        .state
        .trace
        .pending()
        .expect("Trace sollte neu angefordert sein");
    assert_eq!(pending.target, TraceTarget::Segment("S1".into()));
    assert!(pending.ticket > ticket);
}

#[test]
fn test_selection_trace_covers_bulk_selection() {
    let mut fx = Fixture::loaded(MapOptions::default());
    fx.run(AppIntent::ModeRequested {
        mode: InteractionMode::BulkSelecting,
    });
    fx.click(100.0);
    fx.click(200.0);

    fx.run(AppIntent::SelectionTraceRequested);
    let ticket = fx
        .state
        .trace
        .pending()
        .map(|p| {
            assert_eq!(
                p.target,
                TraceTarget::Selection(vec!["S1".into(), "S2".into()])
            );
            p.ticket
        })
        .expect("Selektions-Trace sollte laufen");

    fx.resolve(ticket, found(vec![line(1.0), line(2.0)], &["S1", "S2"], None));
    assert_eq!(fx.displayed_lines().len(), 2);
}

#[test]
fn test_selection_change_makes_selection_trace_stale() {
    let mut fx = Fixture::loaded(MapOptions::default());
    fx.run(AppIntent::ModeRequested {
        mode: InteractionMode::BulkSelecting,
    });
    fx.click(100.0);
    fx.run(AppIntent::SelectionTraceRequested);
    let ticket = fx.state.trace.pending().map(|p| p.ticket).expect("Trace sollte laufen");

    fx.click(200.0);
    fx.resolve(ticket, found(vec![line(1.0)], &["S1"], None));

    assert!(fx.displayed_lines().is_empty());
}
