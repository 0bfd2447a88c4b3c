//! Shared numeric constants for the staging editor.

// ── Canvas ──────────────────────────────────────────────────────

/// Editing canvas width in CSS pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Editing canvas height in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 600.0;

// ── Placement ───────────────────────────────────────────────────

/// Bounding box for a freshly placed furniture tile, in pixels. The image is
/// scaled to fit inside this square before it is scattered onto the canvas.
pub const FURNITURE_TILE_MAX_PX: f64 = 150.0;

// ── Upload ──────────────────────────────────────────────────────

/// Largest accepted room-photo upload, in bytes (16 MiB, inclusive).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// MIME types accepted for a room-photo upload.
pub const ALLOWED_UPLOAD_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/gif"];
