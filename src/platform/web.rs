//! Canvas 2D and DOM bindings

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::error::GameError;
use crate::renderer::{Rgb, ScoreDisplay, Surface};
use crate::sim::ArcSegment;

/// `Surface` backed by a `<canvas>` element
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas by id and acquire its 2D context
    pub fn from_document(document: &Document, id: &str) -> Result<Self, GameError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::MissingElement(id.to_string()))?
            .dyn_into()
            .map_err(|_| GameError::WrongElementType(id.to_string()))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(GameError::NoContext)?
            .dyn_into()
            .map_err(|_| GameError::NoContext)?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) -> Result<(), GameError> {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
        Ok(())
    }

    fn stroke_arc(&mut self, center: DVec2, arc: &ArcSegment) -> Result<(), GameError> {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, arc.radius, arc.theta_start, arc.theta_end)?;
        self.ctx.set_line_width(arc.thickness);
        self.ctx.set_stroke_style_str(&arc.color.to_hex());
        self.ctx.stroke();
        self.ctx.close_path();
        self.ctx.restore();
        Ok(())
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) -> Result<(), GameError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn pixel(&self, x: f64, y: f64) -> Result<[u8; 4], GameError> {
        let data = self.ctx.get_image_data(x, y, 1.0, 1.0)?.data();
        match data.0.as_slice() {
            [r, g, b, a, ..] => Ok([*r, *g, *b, *a]),
            _ => Ok([0; 4]),
        }
    }
}

/// `ScoreDisplay` writing an element's inner text
pub struct DomScoreDisplay {
    element: HtmlElement,
}

impl DomScoreDisplay {
    pub fn from_document(document: &Document, id: &str) -> Result<Self, GameError> {
        let element: HtmlElement = document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::MissingElement(id.to_string()))?
            .dyn_into()
            .map_err(|_| GameError::WrongElementType(id.to_string()))?;
        Ok(Self { element })
    }
}

impl ScoreDisplay for DomScoreDisplay {
    fn set_text(&mut self, text: &str) {
        self.element.set_inner_text(text);
    }
}
