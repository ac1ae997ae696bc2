use springboard_wm::catalog::AppSpec;
use springboard_wm::layout::{desktop_area, maximized_rect};
use springboard_wm::viewport::Viewport;
use springboard_wm::window::{
    FloatRect, Gesture, Point, Size, SurfaceConfig, TrafficLight, WindowId, WindowRegistry,
    WindowSurface,
};

fn registry(viewport: Viewport) -> WindowRegistry {
    let catalog = vec![
        AppSpec::new("projects", "Projects", Size::new(960, 600)),
        AppSpec::new("chat", "Pai", Size::new(420, 580)).with_jitter(40, 0),
    ];
    WindowRegistry::from_catalog(&catalog, viewport).expect("valid catalog")
}

fn rect_of(surface: &mut WindowSurface, reg: &WindowRegistry, vp: Viewport, id: &str) -> FloatRect {
    surface
        .layout(reg, vp)
        .into_iter()
        .find(|frame| frame.id == id)
        .map(|frame| frame.rect)
        .expect("window is visible")
}

#[test]
fn unmaximize_returns_to_default_geometry() {
    let vp = Viewport::FALLBACK;
    let mut reg = registry(vp);
    let mut surface = WindowSurface::default();
    reg.open("projects");
    let free = rect_of(&mut surface, &reg, vp, "projects");
    assert_eq!(free, FloatRect::new(Point::new(240, 130 + 28), Size::new(960, 600)));

    let id = WindowId::new("projects");
    surface.handle_gesture(&mut reg, vp, Gesture::TrafficLight(id.clone(), TrafficLight::Maximize));
    let max = rect_of(&mut surface, &reg, vp, "projects");
    assert_eq!(max, maximized_rect(vp, surface.config()));
    assert_eq!(max, FloatRect::new(Point::new(0, 28), Size::new(1440, 900 - 28 - 80)));

    surface.handle_gesture(&mut reg, vp, Gesture::TrafficLight(id, TrafficLight::Maximize));
    assert_eq!(rect_of(&mut surface, &reg, vp, "projects"), free);
}

#[test]
fn maximized_geometry_tracks_current_viewport() {
    let mut reg = registry(Viewport::FALLBACK);
    let mut surface = WindowSurface::default();
    reg.open("chat");
    reg.toggle_maximize("chat");
    let small = Viewport::new(1024, 700);
    assert_eq!(
        rect_of(&mut surface, &reg, small, "chat").size(),
        Size::new(1024, 700 - 28 - 80)
    );
}

#[test]
fn drag_is_kept_inside_desktop() {
    let vp = Viewport::FALLBACK;
    let mut reg = registry(vp);
    let mut surface = WindowSurface::default();
    reg.open("chat");
    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::MoveCommitted {
            id: WindowId::new("chat"),
            position: Point::new(-500, -500),
        },
    );
    let rect = rect_of(&mut surface, &reg, vp, "chat");
    let desk = desktop_area(vp, surface.config());
    assert!(rect.x >= desk.x);
    assert!(rect.y >= desk.y);
    assert_eq!(rect.size(), Size::new(420, 580));
}

#[test]
fn resize_clamped_to_minimum_and_desktop() {
    let vp = Viewport::FALLBACK;
    let mut reg = registry(vp);
    let mut surface = WindowSurface::new(SurfaceConfig::default());
    reg.open("projects");
    let id = WindowId::new("projects");
    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::ResizeCommitted {
            id: id.clone(),
            rect: FloatRect::new(Point::new(240, 158), Size::new(100, 50)),
        },
    );
    assert_eq!(rect_of(&mut surface, &reg, vp, "projects").size(), Size::new(380, 300));

    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::ResizeCommitted {
            id,
            rect: FloatRect::new(Point::new(0, 28), Size::new(5000, 5000)),
        },
    );
    let rect = rect_of(&mut surface, &reg, vp, "projects");
    let desk = desktop_area(vp, surface.config());
    assert!(rect.width <= desk.width);
    assert!(rect.height <= desk.height);
}

#[test]
fn closed_windows_reopen_at_default() {
    let vp = Viewport::FALLBACK;
    let mut reg = registry(vp);
    let mut surface = WindowSurface::default();
    reg.open("chat");
    let default = rect_of(&mut surface, &reg, vp, "chat");
    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::MoveCommitted {
            id: WindowId::new("chat"),
            position: Point::new(200, 200),
        },
    );
    assert_ne!(rect_of(&mut surface, &reg, vp, "chat"), default);
    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::TrafficLight(WindowId::new("chat"), TrafficLight::Close),
    );
    assert!(surface.layout(&reg, vp).is_empty());
    reg.open("chat");
    assert_eq!(rect_of(&mut surface, &reg, vp, "chat"), default);
}

#[test]
fn gestures_for_unknown_windows_are_ignored() {
    let vp = Viewport::FALLBACK;
    let mut reg = registry(vp);
    let mut surface = WindowSurface::default();
    reg.open("chat");
    let before = reg.entries().to_vec();
    surface.handle_gesture(&mut reg, vp, Gesture::PointerDown(WindowId::new("ghost")));
    surface.handle_gesture(
        &mut reg,
        vp,
        Gesture::TrafficLight(WindowId::new("projects"), TrafficLight::Close),
    );
    assert_eq!(reg.entries(), before.as_slice());
}

#[test]
fn registry_round_trips_between_frames_restore_default_geometry() {
    let vp = Viewport::FALLBACK;
    let mut reg = registry(vp);
    let mut surface = WindowSurface::default();
    reg.open("chat");
    let default = rect_of(&mut surface, &reg, vp, "chat");
    let drag = Gesture::MoveCommitted {
        id: WindowId::new("chat"),
        position: Point::new(200, 200),
    };

    surface.handle_gesture(&mut reg, vp, drag.clone());
    assert_eq!(rect_of(&mut surface, &reg, vp, "chat").position(), Point::new(200, 200));
    reg.close("chat");
    reg.open("chat");
    assert_eq!(rect_of(&mut surface, &reg, vp, "chat"), default);

    surface.handle_gesture(&mut reg, vp, drag.clone());
    reg.toggle_maximize("chat");
    reg.toggle_maximize("chat");
    assert_eq!(rect_of(&mut surface, &reg, vp, "chat"), default);

    surface.handle_gesture(&mut reg, vp, drag);
    reg.minimize("chat");
    reg.open("chat");
    assert_eq!(rect_of(&mut surface, &reg, vp, "chat"), default);
}
