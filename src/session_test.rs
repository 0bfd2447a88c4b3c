use super::*;

use crate::catalog::FurnitureRef;
use crate::fit::{Point, Size};
use crate::scene::{BackgroundPlacement, Transform};

fn sofa() -> FurnitureRef {
    FurnitureRef { name: "sofa".to_owned(), path: "/furniture/sofa.png".to_owned() }
}

fn ready_session() -> EditorSession {
    let mut session = EditorSession::new();
    session.set_uploaded_image("room_abc.jpg".to_owned());
    session.selection.toggle(&sofa());
    session
        .scene
        .set_background(BackgroundPlacement::fit_to(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0)));
    session.scene.add_furniture(
        sofa(),
        Size::new(200.0, 100.0),
        Transform::uniform(Point::new(100.0, 50.0), 0.5),
    );
    session
}

// --- preconditions ---

#[test]
fn composite_requires_uploaded_photo() {
    let mut session = EditorSession::new();
    session.selection.toggle(&sofa());
    assert!(matches!(session.composite_request(), Err(Error::NoPhotoUploaded)));
}

#[test]
fn composite_requires_a_selection() {
    let mut session = EditorSession::new();
    session.set_uploaded_image("room_abc.jpg".to_owned());
    assert!(matches!(session.composite_request(), Err(Error::NoSelection)));
}

#[test]
fn masks_require_uploaded_photo() {
    let session = EditorSession::new();
    assert!(matches!(session.masks_request(), Err(Error::NoPhotoUploaded)));
}

#[test]
fn masks_require_a_background() {
    let mut session = EditorSession::new();
    session.set_uploaded_image("room_abc.jpg".to_owned());
    session.scene.add_furniture(
        sofa(),
        Size::new(200.0, 100.0),
        Transform::uniform(Point::new(0.0, 0.0), 1.0),
    );
    assert!(matches!(session.masks_request(), Err(Error::NoBackground)));
}

#[test]
fn masks_require_furniture() {
    let mut session = EditorSession::new();
    session.set_uploaded_image("room_abc.jpg".to_owned());
    session
        .scene
        .set_background(BackgroundPlacement::fit_to(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0)));
    assert!(matches!(session.masks_request(), Err(Error::NoFurniture)));
}

// --- request contents ---

#[test]
fn composite_request_carries_raw_transforms() {
    let session = ready_session();
    let request = session.composite_request().unwrap();

    assert_eq!(request.original_image, "room_abc.jpg");
    assert_eq!(request.furniture_selections, vec![sofa()]);
    assert_eq!(request.furniture_positions.len(), 1);
    let position = &request.furniture_positions[0];
    assert!((position.left - 100.0).abs() < 1e-10);
    assert!((position.top - 50.0).abs() < 1e-10);
    assert!((position.scale_x - 0.5).abs() < 1e-10);
    assert!((position.scale_y - 0.5).abs() < 1e-10);
    assert!((position.angle - 0.0).abs() < 1e-10);
}

#[test]
fn composite_positions_follow_scene_order() {
    let mut session = ready_session();
    session.scene.add_furniture(
        FurnitureRef { name: "lamp".to_owned(), path: "/furniture/lamp.png".to_owned() },
        Size::new(50.0, 150.0),
        Transform::uniform(Point::new(400.0, 300.0), 1.0),
    );

    let request = session.composite_request().unwrap();
    assert_eq!(request.furniture_positions.len(), 2);
    assert!((request.furniture_positions[1].left - 400.0).abs() < 1e-10);
}

#[test]
fn masks_request_carries_projection() {
    let session = ready_session();
    let request = session.masks_request().unwrap();

    assert_eq!(request.living_room_image, "room_abc.jpg");
    assert_eq!(request.canvas_bg_width, 800);
    assert_eq!(request.canvas_bg_height, 600);
    assert_eq!(request.furniture_items.len(), 1);
    assert_eq!(request.furniture_items[0].x, 100);
    assert_eq!(request.furniture_items[0].y, 50);
}

// --- in-flight guard ---

#[test]
fn begin_request_claims_the_trigger() {
    let mut session = EditorSession::new();
    assert!(!session.request_in_flight());
    assert!(session.begin_request().is_ok());
    assert!(session.request_in_flight());
}

#[test]
fn second_begin_is_refused_while_pending() {
    let mut session = EditorSession::new();
    assert!(session.begin_request().is_ok());
    assert!(matches!(session.begin_request(), Err(Error::RequestInFlight)));
}

#[test]
fn finish_request_re_arms_the_trigger() {
    let mut session = EditorSession::new();
    assert!(session.begin_request().is_ok());
    session.finish_request();
    assert!(session.begin_request().is_ok());
}

// --- reset ---

#[test]
fn reset_clears_everything() {
    let mut session = ready_session();
    assert!(session.begin_request().is_ok());

    session.reset();

    assert!(session.uploaded_image().is_none());
    assert!(session.selection.is_empty());
    assert!(session.scene.background().is_none());
    assert_eq!(session.scene.furniture_count(), 0);
    assert!(!session.request_in_flight());
}

#[test]
fn uploaded_image_round_trips() {
    let mut session = EditorSession::new();
    assert!(session.uploaded_image().is_none());
    session.set_uploaded_image("room_abc.jpg".to_owned());
    assert_eq!(session.uploaded_image(), Some("room_abc.jpg"));
}
