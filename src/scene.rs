//! Canvas object model and the ordered scene store.
//!
//! The scene is the single piece of mutable editor state describing what is
//! on the canvas: at most one background (the uploaded room photo, fit and
//! centered) and any number of furniture placements. Objects are held in
//! insertion order, and that order is the order placements are serialized
//! for the backend.
//!
//! The background is a tagged [`CanvasObject`] variant rather than an ad hoc
//! marker field, so consumers match on it instead of probing; the projector
//! in [`crate::project`] skips it by pattern, never by list position.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::catalog::FurnitureRef;
use crate::fit::{self, Point, Size};

/// Unique identifier for a placed object.
pub type ObjectId = Uuid;

/// Position, scale, and rotation of an object in canvas space.
///
/// `left`/`top` anchor the object's top-left corner in canvas pixels.
/// `scale_x`/`scale_y` are relative to the image's natural pixel size.
/// `angle` is degrees, clockwise-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub left: f64,
    pub top: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub angle: f64,
}

impl Transform {
    /// A uniform, unrotated placement at `origin`.
    #[must_use]
    pub fn uniform(origin: Point, scale: f64) -> Self {
        Self { left: origin.x, top: origin.y, scale_x: scale, scale_y: scale, angle: 0.0 }
    }
}

/// The uploaded room photo as displayed on the canvas: natural size, one
/// uniform fit scale, and the centering offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPlacement {
    pub natural: Size,
    pub scale: f64,
    pub left: f64,
    pub top: f64,
}

impl BackgroundPlacement {
    /// Fit the photo inside the canvas, preserving aspect ratio, and center
    /// it.
    #[must_use]
    pub fn fit_to(natural: Size, canvas: Size) -> Self {
        let scale = fit::scale_to_fit(natural, canvas);
        let offset = fit::center_in(canvas, natural.scaled(scale));
        Self { natural, scale, left: offset.x, top: offset.y }
    }

    /// The size the photo occupies on the canvas (natural × uniform scale).
    #[must_use]
    pub fn displayed(&self) -> Size {
        self.natural.scaled(self.scale)
    }
}

/// One furniture image placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureInstance {
    pub id: ObjectId,
    pub furniture: FurnitureRef,
    /// Natural pixel size of the source image, known once it has decoded.
    pub natural: Size,
    pub transform: Transform,
}

impl FurnitureInstance {
    /// The size this placement occupies on the canvas.
    #[must_use]
    pub fn displayed(&self) -> Size {
        Size::new(
            self.natural.width * self.transform.scale_x,
            self.natural.height * self.transform.scale_y,
        )
    }
}

/// Everything that can sit on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasObject {
    Background(BackgroundPlacement),
    Furniture(FurnitureInstance),
}

/// Ordered store of everything on the canvas.
pub struct Scene {
    objects: Vec<CanvasObject>,
    active: Option<ObjectId>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Vec::new(), active: None }
    }

    /// Install the background, replacing any previous one in place.
    pub fn set_background(&mut self, placement: BackgroundPlacement) {
        for obj in &mut self.objects {
            if let CanvasObject::Background(existing) = obj {
                *existing = placement;
                return;
            }
        }
        self.objects.push(CanvasObject::Background(placement));
    }

    /// The current background, if one has been loaded.
    #[must_use]
    pub fn background(&self) -> Option<&BackgroundPlacement> {
        self.objects.iter().find_map(|obj| match obj {
            CanvasObject::Background(placement) => Some(placement),
            CanvasObject::Furniture(_) => None,
        })
    }

    /// Append a furniture placement and make it the active object. Returns
    /// the new placement's id.
    pub fn add_furniture(
        &mut self,
        furniture: FurnitureRef,
        natural: Size,
        transform: Transform,
    ) -> ObjectId {
        let id = Uuid::new_v4();
        self.objects.push(CanvasObject::Furniture(FurnitureInstance {
            id,
            furniture,
            natural,
            transform,
        }));
        self.active = Some(id);
        id
    }

    /// Look up a furniture placement by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&FurnitureInstance> {
        self.furniture().find(|item| item.id == *id)
    }

    /// Move, scale, or rotate an existing placement. Returns `false` if the
    /// id is unknown.
    pub fn set_transform(&mut self, id: &ObjectId, transform: Transform) -> bool {
        for obj in &mut self.objects {
            if let CanvasObject::Furniture(item) = obj {
                if item.id == *id {
                    item.transform = transform;
                    return true;
                }
            }
        }
        false
    }

    /// Remove a placement by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<FurnitureInstance> {
        let index = self.objects.iter().position(|obj| {
            matches!(obj, CanvasObject::Furniture(item) if item.id == *id)
        })?;
        if self.active == Some(*id) {
            self.active = None;
        }
        match self.objects.remove(index) {
            CanvasObject::Furniture(item) => Some(item),
            CanvasObject::Background(_) => None,
        }
    }

    /// Mark a placement as active. Returns `false` if the id is unknown.
    pub fn set_active(&mut self, id: &ObjectId) -> bool {
        if self.get(id).is_some() {
            self.active = Some(*id);
            true
        } else {
            false
        }
    }

    /// The active placement's id, if any.
    #[must_use]
    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    /// Remove the active placement, returning it if there was one.
    pub fn delete_active(&mut self) -> Option<FurnitureInstance> {
        let id = self.active?;
        self.remove(&id)
    }

    /// Remove all furniture. The background survives.
    pub fn clear_furniture(&mut self) {
        self.objects.retain(|obj| matches!(obj, CanvasObject::Background(_)));
        self.active = None;
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[CanvasObject] {
        &self.objects
    }

    /// Furniture placements in insertion order.
    pub fn furniture(&self) -> impl Iterator<Item = &FurnitureInstance> {
        self.objects.iter().filter_map(|obj| match obj {
            CanvasObject::Furniture(item) => Some(item),
            CanvasObject::Background(_) => None,
        })
    }

    /// Number of furniture placements on the canvas.
    #[must_use]
    pub fn furniture_count(&self) -> usize {
        self.furniture().count()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
