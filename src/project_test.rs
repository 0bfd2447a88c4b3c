use super::*;

use crate::catalog::FurnitureRef;
use crate::fit::{Point, Size};
use crate::scene::{BackgroundPlacement, Transform};

fn furniture(name: &str) -> FurnitureRef {
    FurnitureRef { name: name.to_owned(), path: format!("/furniture/{name}.png") }
}

fn scene_with_background(natural: Size, canvas: Size) -> Scene {
    let mut scene = Scene::new();
    scene.set_background(BackgroundPlacement::fit_to(natural, canvas));
    scene
}

// --- preconditions ---

#[test]
fn no_background_is_refused() {
    let mut scene = Scene::new();
    scene.add_furniture(
        furniture("sofa"),
        Size::new(200.0, 100.0),
        Transform::uniform(Point::new(100.0, 50.0), 0.5),
    );
    assert_eq!(project(&scene), Err(Error::NoBackground));
}

#[test]
fn no_furniture_is_refused() {
    let scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    assert_eq!(project(&scene), Err(Error::NoFurniture));
}

#[test]
fn empty_scene_reports_missing_background_first() {
    assert_eq!(project(&Scene::new()), Err(Error::NoBackground));
}

// --- the worked example ---

#[test]
fn end_to_end_example() {
    // canvas 800x600, photo 1600x1200: scale 0.5, displayed 800x600, offset (0,0).
    // 200x100 furniture at canvas (100,50) with scale 0.5.
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(200.0, 100.0),
        Transform::uniform(Point::new(100.0, 50.0), 0.5),
    );

    let projection = project(&scene).unwrap();
    assert_eq!(projection.background_width, 800);
    assert_eq!(projection.background_height, 600);
    assert_eq!(
        projection.furniture,
        vec![PlacedFurniture {
            name: "sofa".to_owned(),
            x: 100,
            y: 50,
            width: 100,
            height: 50,
            rotation: 0.0,
        }]
    );
}

// --- coordinate translation ---

#[test]
fn coordinates_are_relative_to_background_corner() {
    // letterboxed background at (100, 0): canvas (110, 20) is background (10, 20)
    let mut scene = scene_with_background(Size::new(1200.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("lamp"),
        Size::new(50.0, 50.0),
        Transform::uniform(Point::new(110.0, 20.0), 1.0),
    );

    let projection = project(&scene).unwrap();
    assert_eq!(projection.furniture[0].x, 10);
    assert_eq!(projection.furniture[0].y, 20);
}

#[test]
fn same_offset_from_corner_projects_identically() {
    // the record is independent of where the background sits on the canvas
    let mut records = Vec::new();
    for natural in [Size::new(1600.0, 1200.0), Size::new(1200.0, 1200.0)] {
        let mut scene = scene_with_background(natural, Size::new(800.0, 600.0));
        let bg = *scene.background().unwrap();
        scene.add_furniture(
            furniture("chair"),
            Size::new(80.0, 80.0),
            Transform::uniform(Point::new(bg.left + 10.0, bg.top + 20.0), 1.0),
        );
        records.push(project(&scene).unwrap().furniture.remove(0));
    }
    assert_eq!(records[0].x, records[1].x);
    assert_eq!(records[0].y, records[1].y);
    assert_eq!(records[0].x, 10);
    assert_eq!(records[0].y, 20);
}

#[test]
fn off_background_coordinates_go_negative_unclamped() {
    let mut scene = scene_with_background(Size::new(1200.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("rug"),
        Size::new(50.0, 50.0),
        Transform::uniform(Point::new(40.0, -12.0), 1.0),
    );

    let record = project(&scene).unwrap().furniture.remove(0);
    assert_eq!(record.x, -60);
    assert_eq!(record.y, -12);
}

// --- rounding ---

#[test]
fn positions_round_to_nearest_pixel() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(200.0, 100.0),
        Transform { left: 10.4, top: 20.6, scale_x: 1.0, scale_y: 1.0, angle: 0.0 },
    );

    let record = project(&scene).unwrap().furniture.remove(0);
    assert_eq!(record.x, 10);
    assert_eq!(record.y, 21);
}

#[test]
fn sizes_round_to_nearest_pixel() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(333.0, 111.0),
        Transform::uniform(Point::new(0.0, 0.0), 0.4),
    );

    let record = project(&scene).unwrap().furniture.remove(0);
    assert_eq!(record.width, 133); // 133.2
    assert_eq!(record.height, 44); // 44.4
}

#[test]
fn displayed_background_size_rounds() {
    // 999x750 into 800x600: height binds, scale 0.8, displayed 799.2x600 -> 799x600
    let mut scene = scene_with_background(Size::new(999.0, 750.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(10.0, 10.0),
        Transform::uniform(Point::new(0.0, 0.0), 1.0),
    );

    let projection = project(&scene).unwrap();
    assert_eq!(projection.background_width, 799);
    assert_eq!(projection.background_height, 600);
}

// --- record content ---

#[test]
fn one_record_per_furniture_object() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    for i in 0..4 {
        scene.add_furniture(
            furniture(&format!("item{i}")),
            Size::new(100.0, 100.0),
            Transform::uniform(Point::new(f64::from(i) * 50.0, 0.0), 1.0),
        );
    }
    let projection = project(&scene).unwrap();
    assert_eq!(projection.furniture.len(), 4);
}

#[test]
fn records_keep_scene_order() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    for name in ["sofa", "lamp", "rug"] {
        scene.add_furniture(
            furniture(name),
            Size::new(100.0, 100.0),
            Transform::uniform(Point::new(0.0, 0.0), 1.0),
        );
    }
    let names: Vec<String> =
        project(&scene).unwrap().furniture.into_iter().map(|record| record.name).collect();
    assert_eq!(names, ["sofa", "lamp", "rug"]);
}

#[test]
fn rotation_passes_through_unrounded() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(100.0, 100.0),
        Transform { left: 0.0, top: 0.0, scale_x: 1.0, scale_y: 1.0, angle: 33.7 },
    );
    let record = project(&scene).unwrap().furniture.remove(0);
    assert!((record.rotation - 33.7).abs() < 1e-10);
}

#[test]
fn per_axis_scales_produce_per_axis_sizes() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(200.0, 100.0),
        Transform { left: 0.0, top: 0.0, scale_x: 0.5, scale_y: 2.0, angle: 0.0 },
    );
    let record = project(&scene).unwrap().furniture.remove(0);
    assert_eq!(record.width, 100);
    assert_eq!(record.height, 200);
}

// --- purity ---

#[test]
fn projection_leaves_scene_untouched() {
    let mut scene = scene_with_background(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
    scene.add_furniture(
        furniture("sofa"),
        Size::new(200.0, 100.0),
        Transform::uniform(Point::new(100.0, 50.0), 0.5),
    );

    let before = scene.objects().to_vec();
    project(&scene).unwrap();
    project(&scene).unwrap();
    assert_eq!(scene.objects(), &before[..]);
}
