use kurbo::Point;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::input::PointerState;
use crate::shape::{Shape, StyleOptions};
use crate::storage::{self, BrushRecord};

/// Engine for the stamping toy: owns the brush list, the pointer state and
/// the recorded canvas size. The host page forwards DOM events and a 2d
/// context; no state lives on the JS side.
#[wasm_bindgen]
pub struct StampEngine {
    pub(crate) brushes: Vec<Shape>,
    pub(crate) pointer: PointerState,
    pub(crate) canvas_width: f64,
    pub(crate) canvas_height: f64,
}

#[wasm_bindgen]
impl StampEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> StampEngine {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        StampEngine {
            brushes: Vec::new(),
            pointer: PointerState::new(),
            canvas_width: 0.0,
            canvas_height: 0.0,
        }
    }

    /// Reconstitute persisted brushes. Call once on page load; a storage
    /// failure leaves the list empty and only logs.
    pub fn load_saved_brushes(&mut self) -> usize {
        match storage::load_brushes() {
            Ok(records) => {
                for record in records {
                    self.brushes.push(record.into_shape());
                }
            }
            Err(err) => log::warn!("could not load saved brushes: {err}"),
        }
        self.brushes.len()
    }

    /// Persist the current brush list.
    pub fn save_brushes(&self) -> bool {
        let records: Vec<BrushRecord> = self.brushes.iter().map(BrushRecord::from_shape).collect();
        match storage::save_brushes(&records) {
            Ok(()) => true,
            Err(err) => {
                log::error!("could not save brushes: {err}");
                false
            }
        }
    }

    /// Record the drawing surface size after the host resizes the canvas
    /// element to the window.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn pointer_down(&mut self, ctx: &CanvasRenderingContext2d) {
        self.pointer.press();
        self.stamp(ctx);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    pub fn pointer_moved(&mut self, ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
        self.pointer.moved(Point::new(x, y));
        if self.pointer.down {
            self.stamp(ctx);
        }
    }

    /// Draw dispatcher: stamp every registered brush at the current pointer
    /// position. Nothing flows back from the shapes.
    pub fn stamp(&mut self, ctx: &CanvasRenderingContext2d) {
        let pos = self.pointer.position;
        for brush in &mut self.brushes {
            brush.draw(ctx, Some(pos));
        }
    }

    /// Wipe the full recorded canvas rect.
    pub fn clear(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.canvas_width, self.canvas_height);
    }

    /// Append a brush with randomized styling. Returns its index; the brush
    /// list is append-only for the session.
    pub fn add_brush(&mut self, inner_r: f64, outer_r: f64, point_count: u32, rotation: f64) -> usize {
        self.add_shape(Shape::new(inner_r, outer_r, point_count, rotation, StyleOptions::default()))
    }

    /// Append a brush with an explicit style-options bag; unset fields take
    /// the documented defaults. A malformed bag falls back to all-defaults.
    pub fn add_brush_with_options(
        &mut self,
        inner_r: f64,
        outer_r: f64,
        point_count: u32,
        rotation: f64,
        options: JsValue,
    ) -> usize {
        let options: StyleOptions = serde_wasm_bindgen::from_value(options).unwrap_or_else(|err| {
            log::warn!("ignoring malformed style options: {err}");
            StyleOptions::default()
        });
        self.add_shape(Shape::new(inner_r, outer_r, point_count, rotation, options))
    }

    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Brush parameter records for the side panel, as a structured JS value.
    pub fn get_brushes(&self) -> JsValue {
        let records: Vec<BrushRecord> = self.brushes.iter().map(BrushRecord::from_shape).collect();
        serde_wasm_bindgen::to_value(&records).unwrap_or(JsValue::NULL)
    }

    pub fn get_brushes_json(&self) -> String {
        let records: Vec<BrushRecord> = self.brushes.iter().map(BrushRecord::from_shape).collect();
        serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Text for the on-screen coordinate label, refreshed from the host's
    /// animation frame callback.
    pub fn pointer_readout(&self) -> String {
        format!(
            "x: {}, y: {}, {}",
            self.pointer.position.x, self.pointer.position.y, self.pointer.down
        )
    }
}

impl StampEngine {
    pub(crate) fn add_shape(&mut self, shape: Shape) -> usize {
        self.brushes.push(shape);
        self.brushes.len() - 1
    }
}

impl Default for StampEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::StyleOptions;

    fn styled(inner: f64, outer: f64, count: u32) -> Shape {
        Shape::new(
            inner,
            outer,
            count,
            0.0,
            StyleOptions {
                fill: Some("hsl(0,100%,50%)".to_string()),
                stroke: Some("hsl(90,100%,50%)".to_string()),
                shadow_color: Some("hsl(180,100%,50%)".to_string()),
                ..StyleOptions::default()
            },
        )
    }

    #[test]
    fn brush_list_is_append_only() {
        let mut engine = StampEngine::new();
        assert_eq!(engine.brush_count(), 0);
        assert_eq!(engine.add_shape(styled(5.0, 20.0, 8)), 0);
        assert_eq!(engine.add_shape(styled(10.0, 10.0, 6)), 1);
        assert_eq!(engine.brush_count(), 2);
        assert_eq!(engine.brushes[0].points(), 4);
        assert_eq!(engine.brushes[1].points(), 3);
    }

    #[test]
    fn brushes_json_lists_records_in_order() {
        let mut engine = StampEngine::new();
        engine.add_shape(styled(5.0, 20.0, 8));
        engine.add_shape(styled(7.0, 21.0, 6));
        let records: Vec<BrushRecord> = serde_json::from_str(&engine.get_brushes_json()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].n, 4);
        assert_eq!(records[1].inner_r, 7.0);
    }

    #[test]
    fn resize_records_surface_size() {
        let mut engine = StampEngine::new();
        engine.resize(1280.0, 720.0);
        assert_eq!(engine.canvas_width, 1280.0);
        assert_eq!(engine.canvas_height, 720.0);
    }

    #[test]
    fn pointer_readout_tracks_state() {
        let mut engine = StampEngine::new();
        engine.pointer.moved(Point::new(4.0, 9.0));
        assert_eq!(engine.pointer_readout(), "x: 4, y: 9, false");
        engine.pointer.press();
        assert_eq!(engine.pointer_readout(), "x: 4, y: 9, true");
    }
}
