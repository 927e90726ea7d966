//! Typeface parsing, text geometry, and the shared font cache.
//!
//! Fonts use the JSON typeface layout common to web 3D toolkits: a `glyphs`
//! map from single-character strings to `{ ha, o }`, where `ha` is the
//! horizontal advance and `o` a space-separated outline program in font units.
//! Outline commands:
//!
//! - `m x y` move to
//! - `l x y` line to
//! - `q x y cx cy` quadratic curve to `(x, y)` with control `(cx, cy)`
//! - `b x y c1x c1y c2x c2y` cubic curve to `(x, y)` with controls `c1`, `c2`
//!
//! Curves are flattened into line segments, so a [`TextGeometry`] is just a
//! set of closed polygons in label-local units (baseline at `y = 0`, text
//! starting at `x = 0`).

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::str::SplitWhitespace;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use serde::Deserialize;

use crate::geom::Point;

/// Glyph drawn in place of characters the typeface lacks.
const FALLBACK_GLYPH: &str = "?";

/// Failure to obtain or use a typeface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("font request failed: {0}")]
    Fetch(String),
    #[error("font request returned status {0}")]
    Status(u16),
    #[error("invalid typeface: {0}")]
    Parse(String),
    #[error("malformed outline for glyph {0:?}")]
    Outline(String),
}

/// One glyph as stored in the typeface file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub ha: f64,
    /// Outline program; absent for blank glyphs such as space.
    #[serde(default)]
    pub o: Option<String>,
}

fn default_resolution() -> f64 {
    1000.0
}

/// A parsed typeface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Typeface {
    pub glyphs: HashMap<String, Glyph>,
    /// Font units per em.
    #[serde(default = "default_resolution")]
    pub resolution: f64,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

impl Typeface {
    /// Parse typeface JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::Parse`] when the document is not a typeface.
    pub fn from_json(raw: &str) -> Result<Self, GlyphError> {
        let face: Self = serde_json::from_str(raw).map_err(|e| GlyphError::Parse(e.to_string()))?;
        if face.resolution <= 0.0 || !face.resolution.is_finite() {
            return Err(GlyphError::Parse(format!("resolution {}", face.resolution)));
        }
        Ok(face)
    }

    /// The glyph for `ch`, falling back to `?` when absent.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        let mut buf = [0u8; 4];
        self.glyphs
            .get(&*ch.encode_utf8(&mut buf))
            .or_else(|| self.glyphs.get(FALLBACK_GLYPH))
    }
}

/// Flattened text outline in label-local units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextGeometry {
    /// Closed polygons; holes are separate contours wound opposite to their outline.
    pub contours: Vec<Vec<Point>>,
    /// Total advance width.
    pub width: f64,
    /// Extrusion depth, along the label normal.
    pub depth: f64,
}

impl TextGeometry {
    /// Lay out `text` at em size `size`, flattening each curve into
    /// `curve_segments` segments.
    ///
    /// Characters with no glyph and no `?` fallback are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::Outline`] if a glyph outline cannot be parsed.
    pub fn build(face: &Typeface, text: &str, size: f64, depth: f64, curve_segments: u32) -> Result<Self, GlyphError> {
        let scale = size / face.resolution;
        let segments = curve_segments.max(1);
        let mut geometry = Self { contours: Vec::new(), width: 0.0, depth };
        let mut pen_x = 0.0;

        for ch in text.chars() {
            let Some(glyph) = face.glyph(ch) else {
                log::warn!("glyph: typeface {:?} has no glyph for {ch:?}", face.family_name);
                continue;
            };
            if let Some(outline) = &glyph.o {
                let contours = flatten_outline(outline, scale, pen_x, segments)
                    .ok_or_else(|| GlyphError::Outline(ch.to_string()))?;
                geometry.contours.extend(contours);
            }
            pen_x += glyph.ha * scale;
        }

        geometry.width = pen_x;
        Ok(geometry)
    }
}

fn quadratic(p0: Point, c: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * c.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * c.y + t * t * p1.y,
    )
}

fn cubic(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

fn parse_number(token: &str) -> Option<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Flatten one glyph outline program. Returns `None` on a malformed program.
fn flatten_outline(outline: &str, scale: f64, offset_x: f64, segments: u32) -> Option<Vec<Vec<Point>>> {
    let mut tokens = outline.split_whitespace();
    let next_point = |tokens: &mut SplitWhitespace<'_>| -> Option<Point> {
        let x = parse_number(tokens.next()?)?;
        let y = parse_number(tokens.next()?)?;
        Some(Point::new(x * scale + offset_x, y * scale))
    };

    let mut contours: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    while let Some(cmd) = tokens.next() {
        match cmd {
            "m" => {
                let p = next_point(&mut tokens)?;
                if current.len() > 1 {
                    contours.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(p);
            }
            "l" => {
                let p = next_point(&mut tokens)?;
                current.push(p);
            }
            "q" => {
                let end = next_point(&mut tokens)?;
                let ctrl = next_point(&mut tokens)?;
                let start = *current.last()?;
                current.extend((1..=segments).map(|k| quadratic(start, ctrl, end, f64::from(k) / f64::from(segments))));
            }
            "b" => {
                let end = next_point(&mut tokens)?;
                let c1 = next_point(&mut tokens)?;
                let c2 = next_point(&mut tokens)?;
                let start = *current.last()?;
                current.extend((1..=segments).map(|k| cubic(start, c1, c2, end, f64::from(k) / f64::from(segments))));
            }
            "z" => {
                if current.len() > 1 {
                    contours.push(std::mem::take(&mut current));
                }
            }
            _ => return None,
        }
    }
    if current.len() > 1 {
        contours.push(current);
    }
    Some(contours)
}

/// Shared, cloneable handle to one typeface load.
pub type FontFuture = Shared<LocalBoxFuture<'static, Result<Rc<Typeface>, GlyphError>>>;

/// Process-wide typeface cache.
///
/// The first [`FontCache::get`] starts the load; later calls share the same
/// future whether or not it has finished. A successful load is kept for the
/// cache's lifetime. A failed load is replaced by a fresh attempt on the next
/// call.
#[derive(Default)]
pub struct FontCache {
    slot: RefCell<Option<FontFuture>>,
}

impl FontCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared typeface future, starting `load` only when no usable load exists.
    pub fn get<F, Fut>(&self, load: F) -> FontFuture
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Typeface, GlyphError>> + 'static,
    {
        let mut slot = self.slot.borrow_mut();
        if let Some(existing) = slot.as_ref() {
            if !matches!(existing.peek(), Some(Err(_))) {
                return existing.clone();
            }
            log::debug!("glyph: retrying failed typeface load");
        }
        let fresh = load().map(|res| res.map(Rc::new)).boxed_local().shared();
        *slot = Some(fresh.clone());
        fresh
    }

    /// The typeface, if a load has already succeeded.
    #[must_use]
    pub fn loaded(&self) -> Option<Rc<Typeface>> {
        match self.slot.borrow().as_ref()?.peek() {
            Some(Ok(face)) => Some(Rc::clone(face)),
            _ => None,
        }
    }
}
