//! The paint command set: the three primitives an icon is built from

use image::Rgba;
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Largest coordinate magnitude a command may use. Anything past the canvas
/// is clipped, so this only keeps the raster arithmetic bounded.
pub const MAX_COORD: i32 = 1 << 20;

/// Integer pixel coordinate; `(x, y)` addresses the centre of that pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaintCommand {
    /// Filled polygon, boundary included. Vertices are implicitly closed.
    Polygon {
        points: Vec<Point>,
        #[serde(serialize_with = "serialize_rgba")]
        rgba: Rgba<u8>,
    },
    /// Filled rectangle spanning both corners inclusively.
    Rect {
        from: Point,
        to: Point,
        #[serde(serialize_with = "serialize_rgba")]
        rgba: Rgba<u8>,
    },
    /// Elliptical arc stroked inward from the ellipse inscribed in the box
    /// `from..to`. Angles are degrees clockwise from 3 o'clock.
    Arc {
        from: Point,
        to: Point,
        start_deg: f64,
        end_deg: f64,
        width: u32,
        #[serde(serialize_with = "serialize_rgba")]
        rgba: Rgba<u8>,
    },
}

impl PaintCommand {
    pub fn polygon<P: Into<Point>>(points: impl IntoIterator<Item = P>, rgba: Rgba<u8>) -> Self {
        PaintCommand::Polygon {
            points: points.into_iter().map(Into::into).collect(),
            rgba,
        }
    }

    pub fn rect(from: impl Into<Point>, to: impl Into<Point>, rgba: Rgba<u8>) -> Self {
        PaintCommand::Rect {
            from: from.into(),
            to: to.into(),
            rgba,
        }
    }

    pub fn arc(
        bbox: (i32, i32, i32, i32),
        start_deg: f64,
        end_deg: f64,
        width: u32,
        rgba: Rgba<u8>,
    ) -> Self {
        PaintCommand::Arc {
            from: Point::new(bbox.0, bbox.1),
            to: Point::new(bbox.2, bbox.3),
            start_deg,
            end_deg,
            width,
            rgba,
        }
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            PaintCommand::Polygon { .. } => "polygon",
            PaintCommand::Rect { .. } => "rect",
            PaintCommand::Arc { .. } => "arc",
        }
    }

    /// Every point the command is defined by.
    fn points(&self) -> Vec<Point> {
        match self {
            PaintCommand::Polygon { points, .. } => points.clone(),
            PaintCommand::Rect { from, to, .. } | PaintCommand::Arc { from, to, .. } => {
                vec![*from, *to]
            }
        }
    }

    /// Reject degenerate geometry before anything is drawn.
    pub fn validate(&self) -> Result<()> {
        if let Some(p) = self
            .points()
            .into_iter()
            .find(|p| p.x.unsigned_abs() > MAX_COORD as u32 || p.y.unsigned_abs() > MAX_COORD as u32)
        {
            return Err(Error::Render(format!(
                "{} coordinate ({}, {}) is outside +/-{}",
                self.kind(),
                p.x,
                p.y,
                MAX_COORD
            )));
        }
        match self {
            PaintCommand::Polygon { points, .. } => {
                if points.len() < 3 {
                    return Err(Error::Render(format!(
                        "polygon needs at least 3 points, got {}",
                        points.len()
                    )));
                }
                if doubled_area(points) == 0 {
                    return Err(Error::Render("polygon has zero area".into()));
                }
            }
            PaintCommand::Rect { from, to, .. } => {
                if to.x < from.x || to.y < from.y {
                    return Err(Error::Render(format!(
                        "rect corner ({}, {}) lies before ({}, {})",
                        to.x, to.y, from.x, from.y
                    )));
                }
            }
            PaintCommand::Arc {
                from,
                to,
                start_deg,
                end_deg,
                width,
                ..
            } => {
                if to.x <= from.x || to.y <= from.y {
                    return Err(Error::Render("arc bounding box is empty".into()));
                }
                if *width == 0 {
                    return Err(Error::Render("arc stroke width must be positive".into()));
                }
                if !start_deg.is_finite() || !end_deg.is_finite() {
                    return Err(Error::Render("arc angles must be finite".into()));
                }
            }
        }
        Ok(())
    }
}

/// Twice the signed shoelace area; zero means all vertices are collinear.
fn doubled_area(points: &[Point]) -> i64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

fn serialize_rgba<S: Serializer>(rgba: &Rgba<u8>, s: S) -> std::result::Result<S::Ok, S::Error> {
    rgba.0.serialize(s)
}
