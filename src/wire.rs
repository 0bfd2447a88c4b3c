//! JSON bodies for the backend endpoints.
//!
//! Four calls exist: `POST /upload` (multipart, not JSON), `GET /furniture`,
//! `POST /generate` (composite render), and `POST /generate_masks`. The two
//! generate endpoints overlap in purpose but expect different shapes: the
//! composite endpoint takes raw canvas transforms, the masks endpoint takes
//! background-relative [`PlacedFurniture`] records. Responses all carry a
//! `success` flag with an `error` message on failure; every field is
//! defaulted so error bodies (which omit `success` entirely) still decode.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::catalog::FurnitureRef;
use crate::error::Error;
use crate::project::PlacedFurniture;

/// Response to `POST /upload`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    /// The server-assigned filename, or the server's failure message.
    ///
    /// # Errors
    ///
    /// [`Error::Rejected`] with the server message, or a placeholder when
    /// the server reported success without a filename.
    pub fn into_filename(self) -> Result<String, Error> {
        if self.success {
            self.filename
                .ok_or_else(|| Error::Rejected("upload response carried no filename".to_owned()))
        } else {
            Err(Error::Rejected(server_message(self.error)))
        }
    }
}

/// Response to `GET /furniture`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FurnitureListResponse {
    #[serde(default)]
    pub furniture: Vec<FurnitureRef>,
}

/// Raw canvas transform of one placement, as the composite endpoint expects
/// it. The camel-case scale fields are part of the endpoint's wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FurniturePosition {
    pub left: f64,
    pub top: f64,
    #[serde(rename = "scaleX")]
    pub scale_x: f64,
    #[serde(rename = "scaleY")]
    pub scale_y: f64,
    pub angle: f64,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeRequest {
    pub original_image: String,
    pub furniture_selections: Vec<FurnitureRef>,
    pub furniture_positions: Vec<FurniturePosition>,
}

/// Response to `POST /generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompositeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub generated_image: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CompositeResponse {
    /// The generated image URL, or the server's failure message.
    ///
    /// # Errors
    ///
    /// [`Error::Rejected`] with the server message.
    pub fn into_image(self) -> Result<String, Error> {
        if self.success {
            self.generated_image
                .ok_or_else(|| Error::Rejected("generate response carried no image".to_owned()))
        } else {
            Err(Error::Rejected(server_message(self.error)))
        }
    }
}

/// Body of `POST /generate_masks`.
#[derive(Debug, Clone, Serialize)]
pub struct MasksRequest {
    pub living_room_image: String,
    pub furniture_items: Vec<PlacedFurniture>,
    pub canvas_bg_width: i64,
    pub canvas_bg_height: i64,
}

/// Response to `POST /generate_masks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MasksResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub composite_image: Option<String>,
    #[serde(default)]
    pub mask_image: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// URLs of the two images a successful masks call produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskImages {
    pub composite: String,
    pub mask: String,
}

impl MasksResponse {
    /// Both result image URLs, or the server's failure message.
    ///
    /// # Errors
    ///
    /// [`Error::Rejected`] with the server message, or a placeholder when
    /// either URL is missing from a success response.
    pub fn into_images(self) -> Result<MaskImages, Error> {
        if !self.success {
            return Err(Error::Rejected(server_message(self.error)));
        }
        match (self.composite_image, self.mask_image) {
            (Some(composite), Some(mask)) => Ok(MaskImages { composite, mask }),
            _ => Err(Error::Rejected("masks response carried missing images".to_owned())),
        }
    }
}

/// The server's message, or a stand-in when it sent none.
fn server_message(error: Option<String>) -> String {
    error.unwrap_or_else(|| "unknown error".to_owned())
}
