//! Browser host for the staging editor.
//!
//! [`StageApp`] owns the [`EditorSession`] and exposes the event-facing
//! operations the page wires to: upload, background load, furniture
//! placement, transform updates, and the two generate flows. Async flows
//! return a `js_sys::Promise` via `future_to_promise`; the session sits in
//! an `Rc<RefCell<_>>` and is only borrowed for the short synchronous spans
//! between awaits, which is safe on the browser's single-threaded event
//! loop.
//!
//! Image loading is decode-before-place: placement waits on
//! `HtmlImageElement::decode()` so natural dimensions are known before the
//! object enters the scene.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};
use web_sys::{File, HtmlImageElement};

use crate::catalog::{self, FurnitureRef};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, FURNITURE_TILE_MAX_PX};
use crate::error::Error;
use crate::fit::{self, Size};
use crate::net::api;
use crate::scene::{BackgroundPlacement, ObjectId, Transform};
use crate::session::EditorSession;

/// Install the panic hook and console logger at module load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module load finds the logger already installed; nothing to do.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The staging editor: one session, one canvas, one page lifetime.
#[wasm_bindgen]
pub struct StageApp {
    session: Rc<RefCell<EditorSession>>,
}

#[wasm_bindgen]
impl StageApp {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { session: Rc::new(RefCell::new(EditorSession::new())) }
    }

    // ── Upload ──────────────────────────────────────────────────

    /// Validate and upload a room photo. Resolves to the server-assigned
    /// filename, which is also recorded in the session.
    pub fn upload_room_photo(&self, file: File) -> Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            match api::upload_room_photo(&file).await {
                Ok(filename) => {
                    log::info!("room photo uploaded as {filename}");
                    session.borrow_mut().set_uploaded_image(filename.clone());
                    Ok(JsValue::from_str(&filename))
                }
                Err(e) => {
                    log::warn!("upload failed: {e}");
                    Err(js_err(&e))
                }
            }
        })
    }

    /// The uploaded photo's server filename, if any.
    #[must_use]
    pub fn uploaded_image(&self) -> Option<String> {
        self.session.borrow().uploaded_image().map(str::to_owned)
    }

    // ── Scene ───────────────────────────────────────────────────

    /// Decode the uploaded photo, fit it to the canvas, and install it as
    /// the scene background. Resolves once the background is placed.
    pub fn load_background(&self) -> Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            let filename = session.borrow().uploaded_image().map(str::to_owned);
            let Some(filename) = filename else {
                return Err(js_err(&Error::NoPhotoUploaded));
            };
            let natural = load_image_size(&format!("/user/{filename}")).await.map_err(|e| js_err(&e))?;
            let placement = BackgroundPlacement::fit_to(natural, canvas_size());
            log::info!(
                "background {}x{} fit at scale {:.3}",
                natural.width,
                natural.height,
                placement.scale
            );
            session.borrow_mut().scene.set_background(placement);
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Decode a furniture image, fit it to the tile box, scatter it onto
    /// the canvas, and make it the active object. Resolves to the new
    /// placement's id.
    pub fn add_furniture(&self, name: String, path: String) -> Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            let natural = load_image_size(&path).await.map_err(|e| js_err(&e))?;
            let tile = Size::new(FURNITURE_TILE_MAX_PX, FURNITURE_TILE_MAX_PX);
            let scale = fit::scale_to_fit(natural, tile);
            let origin = fit::scatter_in(
                canvas_size(),
                natural.scaled(scale),
                js_sys::Math::random(),
                js_sys::Math::random(),
            );
            let id = session.borrow_mut().scene.add_furniture(
                FurnitureRef { name, path },
                natural,
                Transform::uniform(origin, scale),
            );
            Ok(JsValue::from_str(&id.to_string()))
        })
    }

    /// Move, scale, or rotate a placement after a drag/resize/rotate
    /// gesture. Returns `false` for an unknown id.
    pub fn set_transform(
        &self,
        id: &str,
        left: f64,
        top: f64,
        scale_x: f64,
        scale_y: f64,
        angle: f64,
    ) -> bool {
        let Some(id) = parse_id(id) else { return false };
        self.session
            .borrow_mut()
            .scene
            .set_transform(&id, Transform { left, top, scale_x, scale_y, angle })
    }

    /// Mark a placement as the active object. Returns `false` for an
    /// unknown id.
    pub fn set_active(&self, id: &str) -> bool {
        let Some(id) = parse_id(id) else { return false };
        self.session.borrow_mut().scene.set_active(&id)
    }

    /// Remove a placement. Returns `false` for an unknown id.
    pub fn remove_furniture(&self, id: &str) -> bool {
        let Some(id) = parse_id(id) else { return false };
        self.session.borrow_mut().scene.remove(&id).is_some()
    }

    /// Remove the active placement. Returns `false` when none is active.
    pub fn delete_active(&self) -> bool {
        self.session.borrow_mut().scene.delete_active().is_some()
    }

    /// Remove all furniture, keeping the background.
    pub fn clear_furniture(&self) {
        self.session.borrow_mut().scene.clear_furniture();
    }

    #[must_use]
    pub fn furniture_count(&self) -> usize {
        self.session.borrow().scene.furniture_count()
    }

    // ── Library selection ───────────────────────────────────────

    /// Toggle a library item in or out of the selection. Returns `true`
    /// when the item is selected after the call.
    pub fn toggle_selection(&self, name: String, path: String) -> bool {
        self.session.borrow_mut().selection.toggle(&FurnitureRef { name, path })
    }

    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.session.borrow().selection.len()
    }

    // ── Generate ────────────────────────────────────────────────

    /// Whether a generate call is pending. The page keeps the trigger
    /// disabled while this is `true`.
    #[must_use]
    pub fn request_in_flight(&self) -> bool {
        self.session.borrow().request_in_flight()
    }

    /// Submit the composite-render flow. Resolves to the generated image
    /// URL. Refuses to run while another generate call is pending.
    pub fn generate_composite(&self) -> Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            let request = {
                let mut s = session.borrow_mut();
                s.begin_request().map_err(|e| js_err(&e))?;
                match s.composite_request() {
                    Ok(request) => request,
                    Err(e) => {
                        s.finish_request();
                        return Err(js_err(&e));
                    }
                }
            };
            let result = api::generate_composite(&request).await;
            session.borrow_mut().finish_request();
            match result {
                Ok(url) => {
                    log::info!("composite ready: {url}");
                    Ok(JsValue::from_str(&url))
                }
                Err(e) => {
                    log::warn!("composite generation failed: {e}");
                    Err(js_err(&e))
                }
            }
        })
    }

    /// Submit the mask-generation flow. Resolves to an object with
    /// `composite_image` and `mask_image` URLs. Refuses to run while
    /// another generate call is pending.
    pub fn generate_masks(&self) -> Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            let request = {
                let mut s = session.borrow_mut();
                s.begin_request().map_err(|e| js_err(&e))?;
                match s.masks_request() {
                    Ok(request) => request,
                    Err(e) => {
                        s.finish_request();
                        return Err(js_err(&e));
                    }
                }
            };
            let result = api::generate_masks(&request).await;
            session.borrow_mut().finish_request();
            match result {
                Ok(images) => {
                    log::info!("masks ready: {}", images.mask);
                    let out = js_sys::Object::new();
                    js_sys::Reflect::set(
                        &out,
                        &JsValue::from_str("composite_image"),
                        &JsValue::from_str(&images.composite),
                    )?;
                    js_sys::Reflect::set(
                        &out,
                        &JsValue::from_str("mask_image"),
                        &JsValue::from_str(&images.mask),
                    )?;
                    Ok(out.into())
                }
                Err(e) => {
                    log::warn!("mask generation failed: {e}");
                    Err(js_err(&e))
                }
            }
        })
    }

    /// Start-over: drop the upload, the selection, and the whole scene.
    pub fn reset(&self) {
        self.session.borrow_mut().reset();
    }
}

impl Default for StageApp {
    fn default() -> Self {
        Self::new()
    }
}

// ── Library fetch/filter ────────────────────────────────────────

/// Fetch the furniture library. Resolves to a JS array of `{name, path}`
/// records.
#[wasm_bindgen]
pub fn fetch_furniture() -> Promise {
    future_to_promise(async move {
        let items = api::fetch_furniture().await.map_err(|e| js_err(&e))?;
        log::info!("furniture library: {} items", items.len());
        to_js(&items)
    })
}

/// Filter a furniture array (as returned by [`fetch_furniture`]) by
/// category: case-insensitive name substring, with `"all"` passing
/// everything.
///
/// # Errors
///
/// Rejects when `items` is not an array of `{name, path}` records.
#[wasm_bindgen]
pub fn filter_catalog(items: &JsValue, category: &str) -> Result<JsValue, JsValue> {
    let json = js_sys::JSON::stringify(items)?;
    let items: Vec<FurnitureRef> = serde_json::from_str(&String::from(json))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let filtered = catalog::filter_by_category(&items, category);
    to_js(&filtered)
}

// ── Helpers ─────────────────────────────────────────────────────

/// Decode an image and report its natural pixel size. Callers place the
/// object only after this resolves.
async fn load_image_size(url: &str) -> Result<Size, Error> {
    let img = HtmlImageElement::new().map_err(|e| Error::Transport(format!("{e:?}")))?;
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| Error::Transport(format!("image decode failed for {url}: {e:?}")))?;
    Ok(Size::new(f64::from(img.natural_width()), f64::from(img.natural_height())))
}

fn canvas_size() -> Size {
    Size::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

fn parse_id(raw: &str) -> Option<ObjectId> {
    Uuid::parse_str(raw).map_or(None, Some)
}

fn js_err(err: &Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}
