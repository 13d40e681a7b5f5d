//! UI command dispatch.
//!
//! Buttons on the host page post `{ "action": ..., "params": ... }` payloads
//! into [`StampEngine::execute_command`]. Unknown or malformed commands are
//! logged and swallowed; the caller always gets a JSON status string back,
//! never a thrown error.

use serde::Deserialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::engine::StampEngine;
use crate::storage::BrushRecord;

/// The fixed command table, keyed by the `action` tag.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum Command {
    /// Wipe the canvas.
    Clear,
    /// Append a brush; omitted parameters take the documented defaults and
    /// omitted colors are randomized.
    AddBrush(BrushRecord),
    /// Write the brush list back to localStorage.
    SaveBrushes,
    /// Return the brush parameter records for the side panel.
    GetBrushes,
}

#[wasm_bindgen]
impl StampEngine {
    pub fn execute_command(&mut self, ctx: &CanvasRenderingContext2d, cmd_json: &str) -> String {
        let cmd: Command = match serde_json::from_str(cmd_json) {
            Ok(cmd) => cmd,
            Err(err) => {
                log::error!("unrecognized command: {err}");
                return json!({ "error": format!("unrecognized command: {err}") }).to_string();
            }
        };
        self.execute(ctx, cmd)
    }
}

impl StampEngine {
    pub fn execute(&mut self, ctx: &CanvasRenderingContext2d, cmd: Command) -> String {
        match cmd {
            Command::Clear => {
                self.clear(ctx);
                json!({ "success": true }).to_string()
            }
            Command::AddBrush(record) => {
                let index = self.add_shape(record.into_shape());
                json!({ "success": true, "index": index }).to_string()
            }
            Command::SaveBrushes => {
                if self.save_brushes() {
                    json!({ "success": true }).to_string()
                } else {
                    json!({ "error": "could not save brushes" }).to_string()
                }
            }
            Command::GetBrushes => self.get_brushes_json(),
        }
    }
}
