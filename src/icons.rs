//! Built-in icon recipes
//!
//! Each recipe is a fixed list of paint commands in 64x64 canvas coordinates.
//! The coordinates are literal; nothing here is derived at runtime.

use serde::Serialize;

use crate::rendering::paint::PaintCommand;
use crate::rendering::WHITE;

/// A named icon: where it is written and how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconDefinition {
    /// Identifier used on the command line (`--only arrow-up`)
    pub name: &'static str,
    /// File name inside the output directory
    pub file_name: &'static str,
    /// Commands applied in order onto a transparent canvas
    pub commands: Vec<PaintCommand>,
}

/// Upward arrow: a triangular head over a vertical bar.
pub fn arrow_up() -> IconDefinition {
    IconDefinition {
        name: "arrow-up",
        file_name: "ic_arrow_up.png",
        commands: vec![
            PaintCommand::polygon([(32, 8), (8, 32), (56, 32)], WHITE),
            PaintCommand::rect((24, 32), (40, 56), WHITE),
        ],
    }
}

/// Circular refresh arrow: an open ring with an arrowhead near its end.
pub fn refresh() -> IconDefinition {
    IconDefinition {
        name: "refresh",
        file_name: "ic_refresh.png",
        commands: vec![
            PaintCommand::arc((10, 10, 54, 54), 30.0, 330.0, 6, WHITE),
            // hand-placed near the 330 degree end, not computed from the arc
            PaintCommand::polygon([(48, 10), (60, 22), (48, 30)], WHITE),
        ],
    }
}

/// Every built-in icon, in generation order.
pub fn builtin() -> Vec<IconDefinition> {
    vec![arrow_up(), refresh()]
}

/// Look up a built-in icon by name.
pub fn find(name: &str) -> Option<IconDefinition> {
    builtin().into_iter().find(|d| d.name == name)
}
