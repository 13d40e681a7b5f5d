use std::f64::consts::TAU;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use web_sys::CanvasRenderingContext2d;

use crate::color::{random_hsl, HslRanges};

const DEFAULT_LINE_WIDTH: f64 = 2.0;
const DEFAULT_SHADOW_BLUR: f64 = 6.0;

/// Fully resolved canvas styling for one brush.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ShapeStyle {
    pub fill: String,
    pub stroke: String,
    pub line_width: f64,
    pub shadow_color: String,
    pub shadow_blur: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
}

/// Optional style overrides merged over the documented defaults.
/// Colors left unset are randomized per instance.
///
/// Serialized keys are the canvas context property names, which is also what
/// the legacy persisted format stored.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    #[serde(rename = "fillStyle")]
    pub fill: Option<String>,
    #[serde(rename = "strokeStyle")]
    pub stroke: Option<String>,
    pub line_width: Option<f64>,
    pub shadow_color: Option<String>,
    pub shadow_blur: Option<f64>,
    pub shadow_offset_x: Option<f64>,
    pub shadow_offset_y: Option<f64>,
}

impl StyleOptions {
    pub fn resolve(self) -> ShapeStyle {
        let ranges = HslRanges::default();
        ShapeStyle {
            fill: self.fill.unwrap_or_else(|| random_hsl(&ranges)),
            stroke: self.stroke.unwrap_or_else(|| random_hsl(&ranges)),
            line_width: self.line_width.unwrap_or(DEFAULT_LINE_WIDTH),
            shadow_color: self.shadow_color.unwrap_or_else(|| random_hsl(&ranges)),
            shadow_blur: self.shadow_blur.unwrap_or(DEFAULT_SHADOW_BLUR),
            shadow_offset_x: self.shadow_offset_x.unwrap_or(0.0),
            shadow_offset_y: self.shadow_offset_y.unwrap_or(0.0),
        }
    }
}

impl From<ShapeStyle> for StyleOptions {
    fn from(style: ShapeStyle) -> StyleOptions {
        StyleOptions {
            fill: Some(style.fill),
            stroke: Some(style.stroke),
            line_width: Some(style.line_width),
            shadow_color: Some(style.shadow_color),
            shadow_blur: Some(style.shadow_blur),
            shadow_offset_x: Some(style.shadow_offset_x),
            shadow_offset_y: Some(style.shadow_offset_y),
        }
    }
}

/// Angular step geometry for an n-spike star, computed once at construction.
///
/// The spike count is fixed for the lifetime of a shape; mutating it afterwards
/// would desynchronize this bundle from the vertex loop.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct AngleBundle {
    pub step: f64,
    pub step_cos: f64,
    pub step_sin: f64,
    pub half_step: f64,
    pub half_step_cos: f64,
    pub half_step_sin: f64,
}

impl AngleBundle {
    pub fn for_points(points: u32) -> AngleBundle {
        let step = TAU / f64::from(points.max(1));
        let half_step = step / 2.0;
        AngleBundle {
            step,
            step_cos: step.cos(),
            step_sin: step.sin(),
            half_step,
            half_step_cos: half_step.cos(),
            half_step_sin: half_step.sin(),
        }
    }
}

/// A parametric star/polygon brush: alternating inner/outer vertex rings,
/// a star when the radii differ and a regular polygon when they match.
#[derive(Clone, Debug)]
pub struct Shape {
    pub inner_r: f64,
    pub outer_r: f64,
    points: u32,
    pub rotation: f64,
    /// Fallback stamp position when `draw` is given no explicit one.
    pub origin: Point,
    pub style: ShapeStyle,
    angle: AngleBundle,
}

impl Shape {
    /// `point_count` is the doubled vertex count the legacy format stores;
    /// it is halved here to get the effective spike count (minimum 1).
    pub fn new(
        inner_r: f64,
        outer_r: f64,
        point_count: u32,
        rotation: f64,
        options: StyleOptions,
    ) -> Shape {
        let points = (point_count / 2).max(1);
        Shape {
            inner_r,
            outer_r,
            points,
            rotation: rotation.rem_euclid(TAU),
            origin: Point::ZERO,
            style: options.resolve(),
            angle: AngleBundle::for_points(points),
        }
    }

    /// Effective spike count.
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn angle(&self) -> &AngleBundle {
        &self.angle
    }

    /// Vertex sequence relative to the stamp position, rotation applied.
    /// Alternates inner vertices (half-step offsets) and outer vertices
    /// (full-step offsets); always `2 * points()` entries. The closing outer
    /// vertex coincides with the path's starting point.
    pub fn vertices(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.points as usize * 2);
        for i in 0..self.points {
            let frame = self.rotation + self.angle.step * f64::from(i);
            let inner = frame + self.angle.half_step;
            let outer = frame + self.angle.step;
            out.push(Point::new(inner.cos() * self.inner_r, inner.sin() * self.inner_r));
            out.push(Point::new(outer.cos() * self.outer_r, outer.sin() * self.outer_r));
        }
        out
    }

    /// Spin the brush by half an angular step, wrapped into `[0, 2π)`.
    pub fn advance_rotation(&mut self) {
        self.rotation = (self.rotation + self.angle.half_step).rem_euclid(TAU);
    }

    /// Stamp the shape at `pos` (or at the shape's own origin when `None`).
    /// Context style mutation is scoped by save/restore so it never leaks
    /// into other brushes' draws.
    pub fn draw(&mut self, ctx: &CanvasRenderingContext2d, pos: Option<Point>) {
        let pos = pos.unwrap_or(self.origin);
        ctx.save();
        self.apply_style(ctx);
        ctx.translate(pos.x, pos.y).unwrap();
        self.advance_rotation();
        ctx.rotate(self.rotation).unwrap();
        ctx.begin_path();
        ctx.move_to(self.outer_r, 0.0);
        for _ in 0..self.points {
            ctx.line_to(
                self.angle.half_step_cos * self.inner_r,
                self.angle.half_step_sin * self.inner_r,
            );
            ctx.line_to(self.angle.step_cos * self.outer_r, self.angle.step_sin * self.outer_r);
            // Rotate the frame so the next spike reuses the same two offsets.
            ctx.rotate(self.angle.step).unwrap();
        }
        ctx.close_path();
        ctx.stroke();
        ctx.fill();
        ctx.restore();
    }

    fn apply_style(&self, ctx: &CanvasRenderingContext2d) {
        ctx.set_fill_style_str(&self.style.fill);
        ctx.set_stroke_style_str(&self.style.stroke);
        ctx.set_line_width(self.style.line_width);
        ctx.set_shadow_color(&self.style.shadow_color);
        ctx.set_shadow_blur(self.style.shadow_blur);
        ctx.set_shadow_offset_x(self.style.shadow_offset_x);
        ctx.set_shadow_offset_y(self.style.shadow_offset_y);
    }
}
