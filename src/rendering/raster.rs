//! Rasterizer: applies paint commands to a canvas and encodes it as PNG

use std::io::Cursor;

use image::{ImageFormat, Rgba};
use log::debug;

use crate::rendering::paint::{PaintCommand, Point};
use crate::rendering::Canvas;
use crate::{CanvasSize, Error, Result};

/// Paint `commands` in order onto a fresh transparent canvas.
///
/// Every command is validated before the first pixel is touched, so a bad
/// recipe never yields a partially drawn canvas.
pub fn rasterize(commands: &[PaintCommand], size: CanvasSize) -> Result<Canvas> {
    let mut canvas = Canvas::new(size)?;
    for cmd in commands {
        cmd.validate()?;
    }
    for cmd in commands {
        debug!("painting {} onto {}x{} canvas", cmd.kind(), size.width, size.height);
        apply(&mut canvas, cmd);
    }
    Ok(canvas)
}

/// Apply a single, already validated command.
pub fn apply(canvas: &mut Canvas, cmd: &PaintCommand) {
    match cmd {
        PaintCommand::Polygon { points, rgba } => fill_polygon(canvas, points, *rgba),
        PaintCommand::Rect { from, to, rgba } => {
            let y_hi = to.y.min(canvas.height() as i32 - 1);
            for y in from.y.max(0)..=y_hi {
                canvas.span(y, from.x, to.x, *rgba);
            }
        }
        PaintCommand::Arc {
            from,
            to,
            start_deg,
            end_deg,
            width,
            rgba,
        } => stroke_arc(canvas, *from, *to, *start_deg, *end_deg, *width, *rgba),
    }
}

/// Encode the canvas as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Render(format!("PNG encoding failed: {}", e)))?;
    debug!("encoded {}x{} canvas into {} bytes", canvas.width(), canvas.height(), bytes.len());
    Ok(bytes)
}

// Even-odd scanline fill sampled at pixel centres, then the outline so the
// boundary pixels are always covered.
fn fill_polygon(canvas: &mut Canvas, points: &[Point], rgba: Rgba<u8>) {
    let n = points.len();
    let (Some(ymin), Some(ymax)) = (
        points.iter().map(|p| p.y).min(),
        points.iter().map(|p| p.y).max(),
    ) else {
        return;
    };

    let lo = ymin.max(0);
    let hi = ymax.min(canvas.height() as i32 - 1);
    let mut xs: Vec<f64> = Vec::with_capacity(n);

    for y in lo..=hi {
        xs.clear();
        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            if a.y == b.y {
                continue;
            }
            let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
            // half-open rows so shared vertices are counted once
            if y < top.y || y >= bottom.y {
                continue;
            }
            let t = (y as f64 - top.y as f64) / (bottom.y as f64 - top.y as f64);
            xs.push(top.x as f64 + t * (bottom.x as f64 - top.x as f64));
        }
        xs.sort_by(|a, b| a.total_cmp(b));
        for pair in xs.chunks_exact(2) {
            canvas.span(y, pair[0].ceil() as i32, pair[1].floor() as i32, rgba);
        }
    }

    for i in 0..n {
        draw_line(canvas, points[i], points[(i + 1) % n], rgba);
    }
}

// Bresenham, endpoints inclusive. Lines whose bounding box misses the
// canvas are skipped outright.
fn draw_line(canvas: &mut Canvas, a: Point, b: Point, rgba: Rgba<u8>) {
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    let (ax, ay, bx, by) = (a.x as i64, a.y as i64, b.x as i64, b.y as i64);
    if ax.max(bx) < 0 || ay.max(by) < 0 || ax.min(bx) >= w || ay.min(by) >= h {
        return;
    }

    let dx = (bx - ax).abs();
    let dy = -(by - ay).abs();
    let sx = if ax < bx { 1 } else { -1 };
    let sy = if ay < by { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (ax, ay);

    loop {
        canvas.put(x as i32, y as i32, rgba);
        if x == bx && y == by {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn stroke_arc(
    canvas: &mut Canvas,
    from: Point,
    to: Point,
    start_deg: f64,
    end_deg: f64,
    width: u32,
    rgba: Rgba<u8>,
) {
    let cx = (from.x as f64 + to.x as f64) / 2.0;
    let cy = (from.y as f64 + to.y as f64) / 2.0;
    let rx = (to.x as f64 - from.x as f64) / 2.0;
    let ry = (to.y as f64 - from.y as f64) / 2.0;
    // sample against half-pixel widened radii so the band is `width` pixels
    // thick on every axis
    let (orx, ory) = (rx + 0.5, ry + 0.5);
    let (irx, iry) = (rx - width as f64 + 0.5, ry - width as f64 + 0.5);

    let full_turn = (end_deg - start_deg).abs() >= 360.0;
    let start = start_deg.rem_euclid(360.0);
    let mut end = end_deg.rem_euclid(360.0);
    if end < start {
        end += 360.0;
    }

    let (x_lo, x_hi) = (from.x.max(0), to.x.min(canvas.width() as i32 - 1));
    let (y_lo, y_hi) = (from.y.max(0), to.y.min(canvas.height() as i32 - 1));

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let (ox, oy) = (dx / orx, dy / ory);
            if ox * ox + oy * oy > 1.0 {
                continue;
            }
            // a stroke at least as wide as the radius fills the whole sector
            if irx > 0.0 && iry > 0.0 {
                let (ix, iy) = (dx / irx, dy / iry);
                if ix * ix + iy * iy < 1.0 {
                    continue;
                }
            }
            if !full_turn {
                // y grows downward, so atan2 already measures clockwise
                let mut angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                if angle < start {
                    angle += 360.0;
                }
                if angle > end {
                    continue;
                }
            }
            canvas.put(x, y, rgba);
        }
    }
}
