//! REST helpers for the staging backend.
//!
//! One async function per endpoint, all via `gloo-net`. No timeout, no
//! retry, no cancellation; a failed call is terminal for that user action
//! and the caller re-enables the trigger.
//!
//! The generate endpoints answer failures as JSON bodies (`success: false`
//! plus a message), sometimes under a non-2xx status, so bodies are decoded
//! regardless of status; only an undecodable body becomes a transport error.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::catalog::FurnitureRef;
use crate::error::Error;
use crate::upload;
use crate::wire::{
    CompositeRequest, CompositeResponse, FurnitureListResponse, MaskImages, MasksRequest,
    MasksResponse, UploadResponse,
};

/// Upload a room photo and return the server-assigned filename.
///
/// The file is validated client-side first; a rejected file produces no
/// request at all.
///
/// # Errors
///
/// [`Error::InvalidUpload`] before any network traffic,
/// [`Error::Transport`] when the call fails, or [`Error::Rejected`] with the
/// server's message.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn upload_room_photo(file: &File) -> Result<String, Error> {
    upload::validate(&file.type_(), file.size() as u64)?;

    let form = FormData::new().map_err(js_transport)?;
    form.append_with_blob("file", file).map_err(js_transport)?;

    let resp = gloo_net::http::Request::post("/upload")
        .body(form)
        .map_err(|e| Error::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    decode::<UploadResponse>(resp).await?.into_filename()
}

/// Fetch the furniture library from `GET /furniture`.
///
/// # Errors
///
/// [`Error::Transport`] when the call fails or answers non-2xx.
pub async fn fetch_furniture() -> Result<Vec<FurnitureRef>, Error> {
    let resp = gloo_net::http::Request::get("/furniture")
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(Error::Transport(format!("furniture list failed with status {status}")));
    }
    let body: FurnitureListResponse = decode(resp).await?;
    Ok(body.furniture)
}

/// Submit the composite-render request and return the generated image URL.
///
/// # Errors
///
/// [`Error::Transport`] or [`Error::Rejected`] with the server's message.
pub async fn generate_composite(request: &CompositeRequest) -> Result<String, Error> {
    let resp = gloo_net::http::Request::post("/generate")
        .json(request)
        .map_err(|e| Error::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    decode::<CompositeResponse>(resp).await?.into_image()
}

/// Submit the mask-generation request and return both result image URLs.
///
/// # Errors
///
/// [`Error::Transport`] or [`Error::Rejected`] with the server's message.
pub async fn generate_masks(request: &MasksRequest) -> Result<MaskImages, Error> {
    let resp = gloo_net::http::Request::post("/generate_masks")
        .json(request)
        .map_err(|e| Error::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    decode::<MasksResponse>(resp).await?.into_images()
}

/// Decode a JSON body, folding an undecodable body into a transport error
/// that names the HTTP status.
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, Error> {
    let status = resp.status();
    resp.json::<T>()
        .await
        .map_err(|e| Error::Transport(format!("status {status}: {e}")))
}

fn js_transport(err: JsValue) -> Error {
    Error::Transport(format!("{err:?}"))
}
