//! Projection of canvas geometry into background-relative placement records.
//!
//! The backend renders against the uploaded room photo, so it needs furniture
//! geometry expressed relative to the photo as displayed on the canvas, not
//! relative to the canvas itself. This is the one real transform in the
//! editor: a pure read of scene state producing the records the
//! mask-generation endpoint consumes.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use serde::Serialize;

use crate::error::Error;
use crate::scene::{CanvasObject, Scene};

/// A furniture placement expressed relative to the background image's
/// displayed top-left corner.
///
/// `x`/`y` may be negative when the object was dragged partially off the
/// background; nothing is clamped. Sizes are the displayed pixel size
/// (natural × scale), rounded to the nearest pixel. `rotation` is degrees,
/// clockwise-positive, passed through unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedFurniture {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub rotation: f64,
}

/// The projected scene: placement records in scene order, plus the
/// background's displayed size, which the backend needs to re-derive
/// absolute positions in photo space.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneProjection {
    pub furniture: Vec<PlacedFurniture>,
    pub background_width: i64,
    pub background_height: i64,
}

/// Project the scene into background-relative records.
///
/// Emits one record per furniture placement, in scene order. The background
/// itself is skipped by matching its variant, never by position in the
/// object list.
///
/// # Errors
///
/// [`Error::NoBackground`] when no background is loaded;
/// [`Error::NoFurniture`] when the scene holds no furniture. Both are
/// user-correctable states, surfaced as blocking messages by the host.
pub fn project(scene: &Scene) -> Result<SceneProjection, Error> {
    let Some(bg) = scene.background() else {
        return Err(Error::NoBackground);
    };

    let mut furniture = Vec::new();
    for obj in scene.objects() {
        match obj {
            CanvasObject::Background(_) => {}
            CanvasObject::Furniture(item) => {
                let t = item.transform;
                furniture.push(PlacedFurniture {
                    name: item.furniture.name.clone(),
                    x: round_px(t.left - bg.left),
                    y: round_px(t.top - bg.top),
                    width: round_px(item.natural.width * t.scale_x),
                    height: round_px(item.natural.height * t.scale_y),
                    rotation: t.angle,
                });
            }
        }
    }
    if furniture.is_empty() {
        return Err(Error::NoFurniture);
    }

    let displayed = bg.displayed();
    Ok(SceneProjection {
        furniture,
        background_width: round_px(displayed.width),
        background_height: round_px(displayed.height),
    })
}

/// Round to the nearest integer pixel.
#[allow(clippy::cast_possible_truncation)]
fn round_px(value: f64) -> i64 {
    value.round() as i64
}
