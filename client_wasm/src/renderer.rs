//! Canvas 2D implementation of the render surface

use game_core::Surface;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn disc(&self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(x, y, radius, 0.0, TAU) {
            console_warn!("arc failed: {:?}", err);
            return;
        }
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn dashed_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        dash: [f32; 2],
        width: f32,
        color: &str,
    ) {
        let pattern = js_sys::Array::of2(
            &JsValue::from_f64(dash[0] as f64),
            &JsValue::from_f64(dash[1] as f64),
        );
        if let Err(err) = self.ctx.set_line_dash(&pattern) {
            console_warn!("setLineDash failed: {:?}", err);
        }
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
        // Solid strokes for everything drawn after
        if let Err(err) = self.ctx.set_line_dash(&js_sys::Array::new()) {
            console_warn!("setLineDash reset failed: {:?}", err);
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.disc(x as f64, y as f64, radius as f64);
    }

    fn fill_glow(&mut self, x: f32, y: f32, inner: f32, outer: f32, color: &str) {
        let (cx, cy) = (x as f64, y as f64);
        let gradient =
            match self.ctx.create_radial_gradient(cx, cy, inner as f64, cx, cy, outer as f64) {
                Ok(gradient) => gradient,
                Err(err) => {
                    console_warn!("createRadialGradient failed, drawing flat: {:?}", err);
                    return self.fill_circle(x, y, outer, color);
                }
            };
        for (offset, stop) in [(0.0, color), (1.0, "rgba(255,255,255,0)")] {
            if let Err(err) = gradient.add_color_stop(offset, stop) {
                console_warn!("addColorStop({}) failed: {:?}", stop, err);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.disc(cx, cy, outer as f64);
    }
}
