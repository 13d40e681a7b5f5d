use wasm_bindgen::prelude::*;

pub mod color;
pub mod commands;
pub mod engine;
pub mod input;
pub mod shape;
pub mod storage;

pub use commands::Command;
pub use engine::StampEngine;
pub use input::PointerState;
pub use shape::{AngleBundle, Shape, ShapeStyle, StyleOptions};
pub use storage::BrushRecord;

/// Used by the host page to verify the module loaded.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
