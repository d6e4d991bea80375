//! glyphgen
//!
//! Generates the toolbar icon assets used by the file browser: an upward
//! arrow and a circular refresh arrow, each a 64x64 RGBA PNG drawn from a
//! fixed list of primitives.
//!
//! # Features
//!
//! - **Fixed recipes**: polygon, rectangle and arc commands with literal coordinates
//! - **Self-contained rasterizer**: scanline fill and arc stroke over an RGBA buffer
//! - **Atomic writes**: icons land via write-then-rename, never half-written
//!
//! # Example
//!
//! ```no_run
//! use glyphgen::{generate_all, GeneratorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig {
//!     output_dir: "assets".into(),
//!     ..Default::default()
//! };
//!
//! for path in generate_all(&config)? {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod generator;
pub mod icons;
pub mod rendering;

pub use generator::{generate, generate_all, render};
pub use icons::IconDefinition;
pub use rendering::paint::{PaintCommand, Point};
pub use rendering::Canvas;

/// Configuration for icon generation
///
/// The defaults reproduce the asset layout the application expects:
/// `assets/ic_arrow_up.png` and `assets/ic_refresh.png`, 64x64 each.
///
/// # Examples
///
/// ```
/// let cfg = glyphgen::GeneratorConfig::default();
/// assert_eq!(cfg.canvas.width, 64);
/// assert!(cfg.output_dir.ends_with("assets"));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the icon files are written into; created if missing
    pub output_dir: PathBuf,
    /// Canvas dimensions for every icon
    pub canvas: CanvasSize,
    /// Write to a temporary sibling and rename it over the target
    pub atomic_write: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets"),
            canvas: CanvasSize::default(),
            atomic_write: true,
        }
    }
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.canvas, CanvasSize { width: 64, height: 64 });
        assert_eq!(config.output_dir, PathBuf::from("assets"));
        assert!(config.atomic_write);
    }
}
