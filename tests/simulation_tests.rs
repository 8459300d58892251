// End-to-end frames through the driver: staged input, fade, exit and outputs.

use elastic_core::{
    CoreError, EventQueue, FadePhase, GrabOutcome, GrabSettings, HintStyle, HintView, InputEvent,
    PathCommand, PointerKind, PointerSample, Polyline, Rgb, Simulation, SimulationConfig,
};
use glam::Vec2;

const FRAME: f64 = 1.0 / 60.0;

fn logo() -> Vec<Polyline> {
    vec![
        Polyline::circle(Vec2::new(400.0, 400.0), 150.0, 360),
        Polyline::circle(Vec2::new(400.0, 400.0), 60.0, 360),
    ]
}

fn simulation(config: SimulationConfig) -> Simulation {
    Simulation::from_contours(config, &logo(), 0.0, HintStyle::Scroll).unwrap()
}

fn pointer(id: i32, kind: PointerKind, position: Vec2) -> PointerSample {
    PointerSample {
        pointer_id: id,
        kind,
        position,
    }
}

#[test]
fn invalid_config_is_rejected() {
    let config = SimulationConfig {
        fade_threshold: 0.0,
        ..Default::default()
    };
    let err = Simulation::from_contours(config, &logo(), 0.0, HintStyle::Scroll)
        .err()
        .unwrap();
    assert_eq!(
        err,
        CoreError::InvalidConfig {
            field: "fade_threshold",
            value: 0.0
        }
    );

    let config = SimulationConfig {
        points_per_contour: 0,
        ..Default::default()
    };
    assert!(Simulation::from_contours(config, &logo(), 0.0, HintStyle::Scroll).is_err());
}

#[test]
fn every_mesh_gets_a_closed_path_each_frame() {
    let mut sim = simulation(SimulationConfig::default());
    assert_eq!(sim.meshes().len(), 2);
    assert!(sim.meshes().iter().all(|m| m.len() == 100));

    let mut queue = EventQueue::default();
    let out = sim.frame(FRAME, &mut queue);
    assert_eq!(out.paths.len(), 2);
    for path in &out.paths {
        assert_eq!(path.len(), 101);
        assert!(matches!(path[0], PathCommand::MoveTo(_)));
        assert_eq!(path.last(), Some(&PathCommand::Close));
    }
    assert_eq!(out.navigate_to, None);
    assert_eq!(sim.state().frame, 1);
}

#[test]
fn shared_collapse_center_overrides_mesh_centroids() {
    let center = Vec2::new(10.0, 20.0);
    let sim = simulation(SimulationConfig {
        collapse_center: Some(center),
        ..Default::default()
    });
    assert!(sim.meshes().iter().all(|m| m.centroid() == center));
}

#[test]
fn degenerate_contour_stays_put() {
    let contours = vec![
        Polyline::new(vec![Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)]),
        Polyline::circle(Vec2::ZERO, 50.0, 90),
    ];
    let mut sim = Simulation::from_contours(
        SimulationConfig::default(),
        &contours,
        0.0,
        HintStyle::Scroll,
    )
    .unwrap();
    assert_eq!(sim.meshes()[0].len(), 1);

    let mut queue = EventQueue::default();
    queue.push(InputEvent::Pressure(0.7));
    let mut out = sim.frame(FRAME, &mut queue);
    for i in 2..200 {
        out = sim.frame(i as f64 * FRAME, &mut queue);
    }
    assert_eq!(sim.meshes()[0].points()[0].position, Vec2::new(5.0, 5.0));
    assert_eq!(
        out.paths[0],
        vec![PathCommand::MoveTo(Vec2::new(5.0, 5.0)), PathCommand::Close]
    );
}

#[test]
fn colors_follow_pressure() {
    let config = SimulationConfig::default();
    let mut sim = simulation(config.clone());
    let mut queue = EventQueue::default();

    let out = sim.frame(FRAME, &mut queue);
    assert_eq!(out.background, config.base_color);
    assert_eq!(out.fill, config.highlight_color);
    assert_eq!(out.progress_percent, 0.0);

    queue.push(InputEvent::Pressure(0.45));
    let out = sim.frame(2.0 * FRAME, &mut queue);
    assert_eq!(out.background, Rgb::new(255, 255, 255));
    assert_eq!(out.fill, config.highlight_color);

    queue.push(InputEvent::Pressure(0.89));
    let out = sim.frame(3.0 * FRAME, &mut queue);
    assert_ne!(out.fill, config.highlight_color);
}

#[test]
fn wheel_deltas_accumulate_into_pressure() {
    let mut sim = simulation(SimulationConfig::default());
    let mut queue = EventQueue::default();
    queue.push(InputEvent::WheelDelta(500.0));
    queue.push(InputEvent::WheelDelta(500.0));
    sim.frame(FRAME, &mut queue);
    assert!((sim.state().pressure.pressure() - 0.4).abs() < 1e-5);
    assert!(queue.is_empty());

    queue.push(InputEvent::WheelDelta(1e9));
    sim.frame(2.0 * FRAME, &mut queue);
    assert_eq!(sim.state().pressure.pressure(), 1.0);
}

#[test]
fn navigation_is_requested_exactly_once() {
    let config = SimulationConfig {
        exit_url: "https://example.com/next".to_string(),
        ..Default::default()
    };
    let mut sim = simulation(config);
    let mut queue = EventQueue::default();
    queue.push(InputEvent::Pressure(1.0));

    let mut requests = Vec::new();
    for i in 1..=10_000 {
        let out = sim.frame(i as f64 * FRAME, &mut queue);
        if let Some(url) = out.navigate_to {
            requests.push((i, url));
        }
    }
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1, "https://example.com/next");
    // three seconds at 60 fps
    assert!((180..=183).contains(&requests[0].0));
    assert!(sim.state().pressure.has_exited());
    assert_eq!(sim.state().pressure.phase(), FadePhase::Exited);
}

#[test]
fn fade_entry_drops_the_drag_and_refuses_new_grabs() {
    let mut sim = simulation(SimulationConfig::default());
    let grab_at = sim.meshes()[0].points()[0].rest();
    let mut queue = EventQueue::default();

    queue.push(InputEvent::PointerDown(pointer(1, PointerKind::Mouse, grab_at)));
    queue.push(InputEvent::PointerMove(pointer(
        1,
        PointerKind::Mouse,
        grab_at + Vec2::new(30.0, 0.0),
    )));
    sim.frame(FRAME, &mut queue);
    assert!(sim.state().interaction.is_dragging());

    queue.push(InputEvent::Pressure(1.0));
    sim.frame(2.0 * FRAME, &mut queue);
    let interaction = &sim.state().interaction;
    assert!(!interaction.is_dragging());
    assert!(interaction.is_latched());
    assert!(interaction.grab_strength() >= 1.0);
    assert_eq!(interaction.blend_weight(), 0.0);
    assert!(sim
        .meshes()
        .iter()
        .flat_map(|m| m.points())
        .all(|p| p.drag_target == p.rest()));

    queue.push(InputEvent::PointerDown(pointer(2, PointerKind::Mouse, grab_at)));
    sim.frame(3.0 * FRAME, &mut queue);
    assert!(!sim.state().interaction.is_dragging());

    // aborting the fade hands control back to normal grabbing
    queue.push(InputEvent::Pressure(0.1));
    sim.frame(4.0 * FRAME, &mut queue);
    assert!(!sim.state().interaction.is_latched());
    let mut state = sim.state().interaction.clone();
    let settings = GrabSettings {
        grab_radius: 100.0,
        capture_radius: 100.0,
        max_stretch: 20.0,
        ramp_per_frame: 0.08,
    };
    let probe = sim.meshes()[0].points()[0].position;
    assert!(matches!(
        state.on_pointer_down(
            sim.meshes(),
            &pointer(3, PointerKind::Mouse, probe),
            &settings,
            false
        ),
        GrabOutcome::Grabbed { .. }
    ));
}

#[test]
fn collapse_shrinks_the_ring_during_fade() {
    let config = SimulationConfig {
        breath_amplitude: 0.0,
        ..Default::default()
    };
    let mut sim = simulation(config);
    let mut queue = EventQueue::default();
    let mean_radius = |sim: &Simulation| {
        let mesh = &sim.meshes()[0];
        mesh.positions().map(|p| p.distance(mesh.centroid())).sum::<f32>() / mesh.len() as f32
    };
    let rest_radius = mean_radius(&sim);

    queue.push(InputEvent::Pressure(1.0));
    let mut t = 0.0;
    while !sim.state().pressure.has_exited() {
        t += FRAME;
        sim.frame(t, &mut queue);
    }
    for _ in 0..120 {
        t += FRAME;
        sim.frame(t, &mut queue);
    }
    assert!(mean_radius(&sim) < rest_radius * 0.9);
}

#[test]
fn hint_appears_after_delay_and_pen_switches_wording() {
    let mut sim = simulation(SimulationConfig::default());
    let mut queue = EventQueue::default();

    let out = sim.frame(1.0, &mut queue);
    assert_eq!(out.hint, None);
    let out = sim.frame(3.0, &mut queue);
    assert_eq!(out.hint, Some(HintView::Icon));

    queue.push(InputEvent::PointerDown(pointer(
        5,
        PointerKind::Pen,
        Vec2::new(-1000.0, -1000.0),
    )));
    let out = sim.frame(3.1, &mut queue);
    assert_eq!(out.hint_style, Some(HintStyle::Swipe));
    assert_eq!(sim.state().hint.style(), HintStyle::Swipe);

    queue.push(InputEvent::HintDismissed);
    let out = sim.frame(3.2, &mut queue);
    assert_eq!(out.hint, Some(HintView::Hidden));
}
