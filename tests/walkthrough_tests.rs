//! End-to-end scenarios driving the coordinator the way a host shell does:
//! resize, reveal, pointer traffic, overlay round-trips, with time stepped
//! deterministically.

use glam::Vec3;
use vantage::effect::{Cursor, HostEffect};
use vantage::input::InputEvent;
use vantage::interaction::InteractionState;
use vantage::options::Options;
use vantage::overlay::{OverlayKind, OverlayPhase, PostItem};
use vantage::scene::{Tags, Transform};
use vantage::slide::NavMode;
use vantage::view::{Category, Pose, ViewCatalog, ViewKey, Viewport};
use vantage::engine::Walkthrough;
use web_time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(16);

fn home() -> Pose {
    Pose::new(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO)
}

fn slide_left() -> Pose {
    Pose::new(Vec3::new(-3.0, 0.0, 5.0), Vec3::new(-1.0, 0.0, 0.0))
}

fn slide_right() -> Pose {
    Pose::new(Vec3::new(3.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0))
}

fn desk_view() -> Pose {
    Pose::new(Vec3::new(0.0, 0.5, 2.0), Vec3::new(0.0, 0.0, 0.0))
}

/// A walkthrough with one desk station at the origin, straight ahead of
/// the home pose.
fn rig() -> Walkthrough {
    let mut catalog = ViewCatalog::new(home(), slide_left(), slide_right());
    catalog.insert(ViewKey::Desk, desk_view());
    catalog.insert(ViewKey::Studio, Pose::new(Vec3::new(2.0, 0.5, 2.0), Vec3::ZERO));
    let mut w = Walkthrough::new(catalog, Options::default());
    let _ = w.registry_mut().register(
        "desk-station",
        Tags::station(Category::Desk),
        Transform::IDENTITY,
        1.0,
    );
    w
}

/// Drive ticks for `span`, collecting every effect.
fn run_for(
    w: &mut Walkthrough,
    now: &mut Instant,
    span: Duration,
) -> Vec<HostEffect> {
    let deadline = *now + span;
    let mut effects = Vec::new();
    while *now < deadline {
        *now += TICK;
        effects.extend(w.advance(*now));
    }
    effects
}

fn resize(w: &mut Walkthrough, now: &mut Instant, width: f32, height: f32) {
    let _ = w.handle_event(InputEvent::Resized { width, height }, *now);
    let _ = run_for(w, now, Duration::from_millis(200));
}

fn landscape_ready(w: &mut Walkthrough, now: &mut Instant) {
    resize(w, now, 1920.0, 1080.0);
    w.on_reveal(*now);
    // Let the reveal animation play out.
    let _ = run_for(w, now, Duration::from_secs(2));
}

fn portrait_ready(w: &mut Walkthrough, now: &mut Instant) {
    resize(w, now, 400.0, 800.0);
    w.on_reveal(*now);
    let _ = run_for(w, now, Duration::from_secs(2));
}

fn center_click(w: &mut Walkthrough, now: Instant) -> Vec<HostEffect> {
    w.handle_event(InputEvent::Clicked { x: 960.0, y: 540.0 }, now)
}

#[test]
fn click_station_flies_then_opens_modal_then_close_returns_home() {
    let mut w = rig();
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let _ = center_click(&mut w, now);
    assert!(w.interaction().camera_moving);
    assert!(w.interaction().modal_open);

    // Flight (0.7 s) then fade-in (0.5 s).
    let effects = run_for(&mut w, &mut now, Duration::from_secs(2));
    assert!(effects
        .contains(&HostEffect::ShowOverlay(OverlayKind::Work(Category::Desk))));
    assert!(effects.iter().any(|e| matches!(
        e,
        HostEffect::RenderContent { category: Category::Desk, items } if items.is_empty()
    )));
    assert_eq!(w.overlay_phase(), OverlayPhase::Open);
    assert!((w.overlay_opacity() - 1.0).abs() < 1e-6);
    assert!(!w.interaction().camera_moving);

    // While the modal is open, a second click must be inert.
    let before = w.camera_pose();
    let _ = center_click(&mut w, now);
    assert_eq!(w.camera_pose(), before);

    // Close: fade-out, return flight, settle re-clamp.
    let _ = w.close(now);
    let effects = run_for(&mut w, &mut now, Duration::from_secs(3));
    assert!(effects
        .contains(&HostEffect::HideOverlay(OverlayKind::Work(Category::Desk))));
    assert_eq!(w.overlay_phase(), OverlayPhase::Closed);
    assert!(!w.interaction().modal_open);
    assert!((w.camera_pose().position - home().position).length() < 1e-3);

    let limits = w.director().rig().limits();
    assert!(limits.max_distance.is_finite());
    assert!(
        (limits.max_azimuth - limits.min_azimuth
            - 2.0 * w.options().camera.azimuth_limit)
            .abs()
            < 1e-5
    );
    assert!(w.director().rig().rotate_enabled);
    assert_eq!(
        w.director().rig().pan_enabled,
        w.options().camera.pan_after_close
    );
}

#[test]
fn modal_open_suppresses_hover_and_close_arms_suppression_window() {
    let mut w = rig();
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    // Hovering the station shows the pointer cursor.
    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));

    // Open a modal; hover must drop immediately.
    let _ = w.open(OverlayKind::Work(Category::Desk), now);
    let effects = run_for(&mut w, &mut now, Duration::from_secs(2));
    assert!(effects.contains(&HostEffect::SetCursor(Cursor::Default)));

    // Close; inside the 800 ms suppression window a pointer move over the
    // station must not bring hover back.
    let _ = w.close(now);
    let _ = run_for(&mut w, &mut now, Duration::from_millis(700));
    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(!effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));

    // After every suppression deadline has passed, a move re-arms hover.
    let _ = run_for(&mut w, &mut now, Duration::from_secs(1));
    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));
}

#[test]
fn navigation_flight_lands_with_hover_held_down() {
    let mut w = rig();
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    // Park the pointer over the station; hover is live.
    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));

    // Fly to the studio view; the station is still under the pointer from
    // the new pose, but the landing tick must not re-emphasize it.
    let _ = w.navigate_to(ViewKey::Studio, now);
    let _ = run_for(&mut w, &mut now, Duration::from_millis(750));
    assert!(!w.interaction().camera_moving);

    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(!effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));

    // Once the settle window passes, a pointer move re-arms hover.
    let _ = run_for(&mut w, &mut now, Duration::from_millis(400));
    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));
}

#[test]
fn wall_occludes_station_from_hover_and_clicks() {
    let mut w = rig();
    // A raycastable but inert wall between the home pose and the station.
    let _ = w.registry_mut().register(
        "wall",
        Tags {
            raycastable: true,
            ..Tags::default()
        },
        Transform {
            position: Vec3::new(0.0, 0.0, 3.0),
            ..Transform::IDENTITY
        },
        0.5,
    );
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let _ = w.handle_event(InputEvent::PointerMoved { x: 960.0, y: 540.0 }, now);
    let effects = run_for(&mut w, &mut now, TICK * 2);
    assert!(!effects.contains(&HostEffect::SetCursor(Cursor::Pointer)));

    let before = w.camera_pose();
    let _ = center_click(&mut w, now);
    assert!(!w.interaction().modal_open);
    assert!(!w.interaction().camera_moving);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(1));
    assert_eq!(w.camera_pose(), before);
}

#[test]
fn content_items_flow_into_render_effect() {
    let mut w = rig();
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);
    w.content_mut().set_items(
        Category::Desk,
        vec![PostItem {
            id: "p1".to_owned(),
            title: "Piece".to_owned(),
            subtitle: "Sub".to_owned(),
            date: "2024-06-01".to_owned(),
            aspect_ratio: 1.0,
        }],
    );

    let _ = w.open(OverlayKind::Work(Category::Desk), now);
    let effects = run_for(&mut w, &mut now, Duration::from_secs(2));
    assert!(effects.iter().any(|e| matches!(
        e,
        HostEffect::RenderContent { items, .. } if items.len() == 1
    )));
}

#[test]
fn portrait_drag_scrubs_to_left_pose() {
    let mut w = rig();
    let mut now = Instant::now();
    portrait_ready(&mut w, &mut now);

    assert_eq!(w.nav_mode(), NavMode::Slide);
    assert!(w.interaction().portrait_mode);
    assert_eq!(w.slide_t(), 0.5);

    // 200 px rightward drag on a 400 px viewport at sensitivity 1.7.
    let _ = w.handle_event(InputEvent::PointerPressed { x: 100.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerMoved { x: 300.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerReleased { x: 300.0, y: 400.0 }, now);

    assert_eq!(w.slide_t(), 0.0);
    let _ = run_for(&mut w, &mut now, TICK * 2);
    assert!((w.camera_pose().position - slide_left().position).length() < 1e-4);
}

#[test]
fn portrait_modal_close_restores_saved_pose_and_slide() {
    let mut w = rig();
    let mut now = Instant::now();
    portrait_ready(&mut w, &mut now);

    // Scrub to the left end, then open the desk modal.
    let _ = w.handle_event(InputEvent::PointerPressed { x: 100.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerMoved { x: 300.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerReleased { x: 300.0, y: 400.0 }, now);
    let _ = run_for(&mut w, &mut now, TICK * 2);
    assert_eq!(w.slide_t(), 0.0);

    let _ = w.open(OverlayKind::Work(Category::Desk), now);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(2));
    assert_eq!(w.overlay_phase(), OverlayPhase::Open);

    // Close; a stray drag mid-restore must not stomp the flight.
    let _ = w.close(now);
    let _ = run_for(&mut w, &mut now, Duration::from_millis(700));
    let _ = w.handle_event(InputEvent::PointerPressed { x: 50.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerMoved { x: 350.0, y: 400.0 }, now);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(2));

    assert_eq!(w.overlay_phase(), OverlayPhase::Closed);
    assert_eq!(w.slide_t(), 0.0);
    assert!(!w.interaction().suppress_slide);
    assert!((w.camera_pose().position - slide_left().position).length() < 1e-3);

    // Slide interaction resumes.
    let _ = w.handle_event(InputEvent::PointerPressed { x: 300.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerMoved { x: 100.0, y: 400.0 }, now);
    assert!(w.slide_t() > 0.5);
}

#[test]
fn drag_during_close_suppression_is_inert() {
    let mut w = rig();
    let mut now = Instant::now();
    portrait_ready(&mut w, &mut now);

    let _ = w.open(OverlayKind::Work(Category::Desk), now);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(2));
    assert_eq!(w.overlay_phase(), OverlayPhase::Open);

    // Close sets the slide suppression; a press-and-drag delivered while
    // the overlay is still fading must not move `t`.
    let _ = w.close(now);
    assert!(w.interaction().suppress_slide);
    let _ = w.handle_event(InputEvent::PointerPressed { x: 100.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerMoved { x: 300.0, y: 400.0 }, now);
    assert_eq!(w.slide_t(), 0.5);
}

#[test]
fn leaving_portrait_resets_slide_and_reclamps() {
    let mut w = rig();
    let mut now = Instant::now();
    portrait_ready(&mut w, &mut now);

    let _ = w.handle_event(InputEvent::PointerPressed { x: 100.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerMoved { x: 300.0, y: 400.0 }, now);
    let _ = w.handle_event(InputEvent::PointerReleased { x: 300.0, y: 400.0 }, now);

    resize(&mut w, &mut now, 1920.0, 1080.0);
    assert_eq!(w.nav_mode(), NavMode::Orbit);
    assert_eq!(w.slide_t(), 0.5);
    assert!((w.camera_pose().position - home().position).length() < 1e-4);
    assert!(w.director().rig().limits().max_distance.is_finite());
}

#[test]
fn leaving_portrait_mid_restore_still_lands_home() {
    let mut w = rig();
    let mut now = Instant::now();
    portrait_ready(&mut w, &mut now);

    let _ = w.open(OverlayKind::Work(Category::Desk), now);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(2));
    assert_eq!(w.overlay_phase(), OverlayPhase::Open);

    // Close, then rotate to landscape while the restore flight is still in
    // the air. The home restore must happen once the flight lets go.
    let _ = w.close(now);
    let _ = run_for(&mut w, &mut now, Duration::from_millis(600));
    assert!(w.interaction().camera_moving);
    let _ = w.handle_event(
        InputEvent::Resized {
            width: 1920.0,
            height: 1080.0,
        },
        now,
    );
    let _ = run_for(&mut w, &mut now, Duration::from_secs(3));

    assert_eq!(w.nav_mode(), NavMode::Orbit);
    assert_eq!(w.slide_t(), 0.5);
    assert!((w.camera_pose().position - home().position).length() < 1e-3);
    assert!(w.director().rig().limits().max_distance.is_finite());
    assert!(w.director().rig().rotate_enabled);
}

#[test]
fn navigation_flights_are_last_writer_wins() {
    let mut w = rig();
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let _ = w.navigate_to(ViewKey::Desk, now);
    let _ = run_for(&mut w, &mut now, Duration::from_millis(200));
    let _ = w.navigate_to(ViewKey::Studio, now);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(2));

    let studio = Pose::new(Vec3::new(2.0, 0.5, 2.0), Vec3::ZERO);
    assert!((w.camera_pose().position - studio.position).length() < 1e-3);
    assert!(!w.interaction().camera_moving);
}

#[test]
fn unknown_view_is_a_logged_noop() {
    let mut catalog = ViewCatalog::new(home(), slide_left(), slide_right());
    // About never registered.
    catalog.insert(ViewKey::Desk, desk_view());
    let mut w = Walkthrough::new(catalog, Options::default());
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let before = w.camera_pose();
    let _ = w.open(OverlayKind::About, now);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(1));
    assert_eq!(w.camera_pose(), before);
    assert!(!w.interaction().modal_open);
    assert_eq!(w.overlay_phase(), OverlayPhase::Closed);
}

#[test]
fn tap_then_synthetic_click_fires_once() {
    let mut catalog = ViewCatalog::new(home(), slide_left(), slide_right());
    catalog.insert(ViewKey::Desk, desk_view());
    let mut w = Walkthrough::new(catalog, Options::default());
    let _ = w.registry_mut().register(
        "social-link",
        Tags::link("https://example.com/profile".to_owned()),
        Transform::IDENTITY,
        1.0,
    );
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let mut effects =
        w.handle_event(InputEvent::TouchEnded { x: 960.0, y: 540.0 }, now);
    effects.extend(w.handle_event(InputEvent::Clicked { x: 960.0, y: 540.0 }, now));
    let opens = effects
        .iter()
        .filter(|e| matches!(e, HostEffect::OpenUrl(_)))
        .count();
    assert_eq!(opens, 1);
}

#[test]
fn menu_opens_in_place_and_blocks_modals() {
    let mut w = rig();
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let before = w.camera_pose();
    let effects = w.open(OverlayKind::Menu, now);
    assert!(effects.contains(&HostEffect::ShowOverlay(OverlayKind::Menu)));
    assert!(w.interaction().menu_open);
    assert_eq!(w.camera_pose(), before);

    // A station click while the menu is up is ignored.
    let _ = center_click(&mut w, now);
    assert!(!w.interaction().modal_open);
    let _ = run_for(&mut w, &mut now, Duration::from_secs(1));
    assert_eq!(w.camera_pose(), before);
}

#[test]
fn open_menu_absorbs_link_clicks() {
    let mut catalog = ViewCatalog::new(home(), slide_left(), slide_right());
    catalog.insert(ViewKey::Desk, desk_view());
    let mut w = Walkthrough::new(catalog, Options::default());
    let _ = w.registry_mut().register(
        "social-link",
        Tags::link("https://example.com/profile".to_owned()),
        Transform::IDENTITY,
        1.0,
    );
    let mut now = Instant::now();
    landscape_ready(&mut w, &mut now);

    let _ = w.open(OverlayKind::Menu, now);
    assert!(w.interaction().menu_open);

    // The link sits under the click, but the menu owns focus.
    let mut effects = center_click(&mut w, now);
    effects.extend(run_for(&mut w, &mut now, TICK * 2));
    assert!(!effects.iter().any(|e| matches!(e, HostEffect::OpenUrl(_))));
}

#[test]
fn zero_viewport_resize_retries_until_measured() {
    let mut w = rig();
    let mut now = Instant::now();
    let _ = w.handle_event(
        InputEvent::Resized {
            width: 0.0,
            height: 0.0,
        },
        now,
    );
    let _ = run_for(&mut w, &mut now, Duration::from_millis(400));

    // A later real measurement lands without another debounce trigger
    // being strictly required.
    let _ = w.handle_event(
        InputEvent::Resized {
            width: 400.0,
            height: 800.0,
        },
        now,
    );
    let _ = run_for(&mut w, &mut now, Duration::from_millis(400));
    assert!(w.interaction().portrait_mode);
}

#[test]
fn nothing_responds_before_reveal() {
    let mut w = rig();
    let mut now = Instant::now();
    resize(&mut w, &mut now, 1920.0, 1080.0);

    let state: &InteractionState = w.interaction();
    assert!(!state.interaction_enabled);
    let _ = center_click(&mut w, now);
    assert!(!w.interaction().modal_open);
    assert!(!w.interaction().camera_moving);

    let viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };
    assert!(viewport.is_measured());
}
