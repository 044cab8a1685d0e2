// Drawing-surface abstraction. The simulation and renderer only ever see
// the Surface trait and the current Bounds, so they run (and get tested)
// without a browser; CanvasSurface is the one real implementation, backed
// by a 2d canvas context.

use web_sys::CanvasRenderingContext2d;

use crate::color::ACCENT;

// Current surface dimensions in pixels. Dimensions reported as zero or
// negative are clamped to 1 so the wrap rule always has a usable bound.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Bounds {
        Bounds {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, alpha: f64);
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> CanvasSurface {
        CanvasSurface { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.ctx
            .set_fill_style(&ACCENT.to_css(alpha).as_str().into());
        self.ctx.begin_path();
        // arc only errors on non-finite input; a skipped dot is fine either way
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, alpha: f64) {
        self.ctx
            .set_stroke_style(&ACCENT.to_css(alpha).as_str().into());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }
}

// Test double that records every draw call in issue order.
#[cfg(test)]
#[derive(PartialEq, Debug)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Circle { x: f64, y: f64, radius: f64, alpha: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, width: f64, alpha: f64 },
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.calls.push(DrawCall::Clear {
            width: bounds.width,
            height: bounds.height,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.calls.push(DrawCall::Circle { x, y, radius, alpha });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, alpha: f64) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            alpha,
        });
    }
}
