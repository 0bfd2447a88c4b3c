//! Editor session state and backend request construction.
//!
//! One [`EditorSession`] lives for the lifetime of the page and owns
//! everything mutable: the uploaded photo's server filename, the library
//! selection, the scene, and the in-flight flag for the generate trigger.
//! All mutation happens from event callbacks on the single browser thread,
//! so no locking discipline applies beyond not mutating mid-iteration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::catalog::Selection;
use crate::error::Error;
use crate::project;
use crate::scene::Scene;
use crate::wire::{CompositeRequest, FurniturePosition, MasksRequest};

/// All mutable editor state for one page lifetime.
#[derive(Default)]
pub struct EditorSession {
    pub selection: Selection,
    pub scene: Scene,
    uploaded_image: Option<String>,
    request_in_flight: bool,
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the server-assigned filename after a successful upload.
    pub fn set_uploaded_image(&mut self, filename: String) {
        self.uploaded_image = Some(filename);
    }

    /// The server-assigned filename of the uploaded photo, if any.
    #[must_use]
    pub fn uploaded_image(&self) -> Option<&str> {
        self.uploaded_image.as_deref()
    }

    /// Start-over: drop the upload, the selection, and the whole scene.
    pub fn reset(&mut self) {
        self.uploaded_image = None;
        self.selection.clear();
        self.scene = Scene::new();
        self.request_in_flight = false;
    }

    // ── In-flight guard ─────────────────────────────────────────

    /// Claim the generate trigger. A second generate while one is pending
    /// is refused rather than issuing a duplicate request.
    ///
    /// # Errors
    ///
    /// [`Error::RequestInFlight`] while a previous call is unresolved.
    pub fn begin_request(&mut self) -> Result<(), Error> {
        if self.request_in_flight {
            return Err(Error::RequestInFlight);
        }
        self.request_in_flight = true;
        Ok(())
    }

    /// Release the generate trigger once the pending call resolves, whether
    /// it succeeded or failed.
    pub fn finish_request(&mut self) {
        self.request_in_flight = false;
    }

    #[must_use]
    pub fn request_in_flight(&self) -> bool {
        self.request_in_flight
    }

    // ── Request construction ────────────────────────────────────

    /// Build the composite-render payload: the uploaded filename, the
    /// selected refs, and the raw canvas transforms of every placement in
    /// scene order.
    ///
    /// # Errors
    ///
    /// [`Error::NoPhotoUploaded`] or [`Error::NoSelection`] when the
    /// corresponding precondition is unmet.
    pub fn composite_request(&self) -> Result<CompositeRequest, Error> {
        let Some(image) = &self.uploaded_image else {
            return Err(Error::NoPhotoUploaded);
        };
        if self.selection.is_empty() {
            return Err(Error::NoSelection);
        }
        let furniture_positions = self
            .scene
            .furniture()
            .map(|item| FurniturePosition {
                left: item.transform.left,
                top: item.transform.top,
                scale_x: item.transform.scale_x,
                scale_y: item.transform.scale_y,
                angle: item.transform.angle,
            })
            .collect();
        Ok(CompositeRequest {
            original_image: image.clone(),
            furniture_selections: self.selection.items().to_vec(),
            furniture_positions,
        })
    }

    /// Build the mask-generation payload by projecting the scene into
    /// background-relative records.
    ///
    /// # Errors
    ///
    /// [`Error::NoPhotoUploaded`] before an upload, or whatever
    /// [`project::project`] reports about the scene.
    pub fn masks_request(&self) -> Result<MasksRequest, Error> {
        let Some(image) = &self.uploaded_image else {
            return Err(Error::NoPhotoUploaded);
        };
        let projection = project::project(&self.scene)?;
        Ok(MasksRequest {
            living_room_image: image.clone(),
            furniture_items: projection.furniture,
            canvas_bg_width: projection.background_width,
            canvas_bg_height: projection.background_height,
        })
    }
}
