//! Scale-to-fit, centering, and scatter placement arithmetic.
//!
//! All placement in the editor goes through these helpers: the room photo is
//! fit to the full canvas and centered, while furniture is fit to a fixed
//! tile box and scattered at a random spot. Scaling is always uniform (the
//! smaller of the two axis ratios), so aspect ratio is never distorted.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// This size with both axes multiplied by a uniform factor.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self { width: self.width * scale, height: self.height * scale }
    }
}

/// A top-left position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The uniform scale that fits `natural` inside `bounds`.
///
/// `min(bounds.width / natural.width, bounds.height / natural.height)`:
/// the scaled image touches the box in at least one dimension and never
/// overflows the other.
#[must_use]
pub fn scale_to_fit(natural: Size, bounds: Size) -> f64 {
    (bounds.width / natural.width).min(bounds.height / natural.height)
}

/// The top-left offset that centers a `scaled` size inside `outer`.
#[must_use]
pub fn center_in(outer: Size, scaled: Size) -> Point {
    Point {
        x: (outer.width - scaled.width) / 2.0,
        y: (outer.height - scaled.height) / 2.0,
    }
}

/// A uniformly random top-left offset that keeps a `scaled` size inside
/// `outer`. `rx` and `ry` are unit floats supplied by the caller (the
/// browser host passes `Math.random()`), which keeps this deterministic
/// under test. Overlap with existing objects is allowed; the user
/// repositions by hand.
#[must_use]
pub fn scatter_in(outer: Size, scaled: Size, rx: f64, ry: f64) -> Point {
    Point {
        x: rx * (outer.width - scaled.width),
        y: ry * (outer.height - scaled.height),
    }
}
