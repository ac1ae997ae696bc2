use springboard_wm::catalog::AppSpec;
use springboard_wm::viewport::{FixedViewport, Viewport};
use springboard_wm::window::{
    CatalogError, FloatRect, Gesture, Point, Size, WindowEntry, WindowId, WindowRegistry,
    WindowSurface,
};

fn abc() -> WindowRegistry {
    let catalog = vec![
        AppSpec::new("A", "Alpha", Size::new(400, 300)),
        AppSpec::new("B", "Beta", Size::new(500, 400)).with_jitter(40, 0),
        AppSpec::new("C", "Gamma", Size::new(600, 500)),
    ];
    WindowRegistry::from_catalog(&catalog, Viewport::FALLBACK).expect("valid catalog")
}

fn active(reg: &WindowRegistry) -> Option<&str> {
    reg.active_window_id().map(WindowId::as_str)
}

fn rendered(surface: &mut WindowSurface, reg: &WindowRegistry, id: &str) -> Option<FloatRect> {
    surface
        .layout(reg, Viewport::FALLBACK)
        .into_iter()
        .find(|frame| frame.id == id)
        .map(|frame| frame.rect)
}

#[test]
fn open_focus_minimize_close_reopen() {
    let mut reg = abc();
    reg.open("A");
    reg.open("B");
    reg.open("C");
    assert_eq!(active(&reg), Some("C"));

    reg.focus("A");
    assert_eq!(active(&reg), Some("A"));

    reg.minimize("A");
    assert_eq!(active(&reg), Some("C"));

    let vp = Viewport::FALLBACK;
    let mut surface = WindowSurface::default();
    let default_b = FloatRect::new(Point::new(510, 230 + 28), Size::new(500, 400));
    assert_eq!(rendered(&mut surface, &reg, "B"), Some(default_b));
    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::MoveCommitted {
            id: WindowId::new("B"),
            position: Point::new(200, 200),
        },
    );
    assert_eq!(
        rendered(&mut surface, &reg, "B").map(|rect| rect.position()),
        Some(Point::new(200, 200))
    );
    reg.close("B");
    reg.open("B");
    assert_eq!(rendered(&mut surface, &reg, "B"), Some(default_b));
    assert_eq!(active(&reg), Some("B"));
}

#[test]
fn close_all_on_mixed_states() {
    let mut reg = abc();
    reg.open("A");
    reg.open("B");
    reg.minimize("B");
    reg.close_all();
    for entry in reg.entries() {
        assert!(!entry.is_open(), "{} still open", entry.id());
        assert!(!entry.is_minimized(), "{} still minimized", entry.id());
    }
    assert_eq!(active(&reg), None);
}

#[test]
fn unknown_ids_change_nothing() {
    let mut reg = abc();
    reg.open("A");
    let before = reg.entries().to_vec();
    let top = reg.top_z();
    reg.open("zzz");
    reg.close("zzz");
    reg.minimize("zzz");
    reg.toggle_maximize("zzz");
    reg.focus("zzz");
    assert_eq!(reg.entries(), before.as_slice());
    assert_eq!(reg.top_z(), top);
}

#[test]
fn z_strictly_increases_across_focus_calls() {
    let mut reg = abc();
    let mut last = reg.top_z();
    for id in ["A", "B", "A", "C", "C", "B"] {
        reg.focus(id);
        let z = reg.get(id).map(WindowEntry::z_index).expect("registered");
        assert!(z > last, "{id} got z {z} after {last}");
        assert_eq!(z, reg.top_z());
        last = z;
    }
}

#[test]
fn minimize_is_idempotent_and_keeps_maximized() {
    let mut reg = abc();
    reg.open("A");
    reg.toggle_maximize("A");
    reg.minimize("A");
    let once = reg.entries().to_vec();
    reg.minimize("A");
    assert_eq!(reg.entries(), once.as_slice());
    let a = reg.get("A").expect("registered");
    assert!(a.is_open() && a.is_minimized() && a.is_maximized());

    // restoring through open keeps the maximized flag
    reg.open("A");
    assert!(reg.get("A").is_some_and(WindowEntry::is_maximized));
}

#[test]
fn close_resets_maximized() {
    let mut reg = abc();
    reg.open("C");
    reg.toggle_maximize("C");
    reg.close("C");
    reg.open("C");
    assert!(reg.get("C").is_some_and(|c| !c.is_maximized()));
}

#[test]
fn minimize_all_then_bring_all_to_front() {
    let mut reg = abc();
    reg.open("A");
    reg.open("B");
    reg.open("C");
    reg.focus("A");
    reg.minimize("B");
    reg.bring_all_to_front();
    // B stays minimized; A and C keep their relative order
    assert_eq!(active(&reg), Some("A"));
    let za = reg.get("A").map(WindowEntry::z_index);
    let zc = reg.get("C").map(WindowEntry::z_index);
    assert!(zc < za);
    assert!(reg.get("B").is_some_and(WindowEntry::is_minimized));

    reg.minimize_all();
    assert_eq!(active(&reg), None);
    assert!(reg.entries().iter().all(|e| !e.is_open() || e.is_minimized()));
}

#[test]
fn bring_all_to_front_with_nothing_visible_keeps_counter() {
    let mut reg = abc();
    let top = reg.top_z();
    reg.bring_all_to_front();
    assert_eq!(reg.top_z(), top);
}

#[test]
fn duplicate_ids_rejected() {
    let catalog = vec![
        AppSpec::new("A", "Alpha", Size::new(400, 300)),
        AppSpec::new("A", "Again", Size::new(400, 300)),
    ];
    let err = WindowRegistry::from_catalog(&catalog, Viewport::FALLBACK).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("A".into()));
}

#[test]
fn missing_viewport_centers_against_fallback() {
    let catalog = vec![AppSpec::new("A", "Alpha", Size::new(960, 600))];
    let reg = WindowRegistry::with_provider(&catalog, &FixedViewport::unavailable())
        .expect("valid catalog");
    let pos = reg.get("A").map(WindowEntry::default_position).expect("registered");
    assert_eq!((pos.x, pos.y), (240, 130));
}
