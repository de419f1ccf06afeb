//! Canvas 2D backend
//!
//! Icons are `<img>` elements loaded once from `assets/<identifier>`; an icon
//! whose image has not finished loading is drawn as a grey placeholder.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::catalog::Catalog;
use crate::ui::{DrawCommand, FONT_SIZE, Rgb};

/// Directory icon bitmaps are served from
const ASSET_FOLDER: &str = "assets";

/// Font stack for all text
const FONT_FAMILY: &str = "'Playwrite HU', cursive";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: HashMap<String, HtmlImageElement>,
    /// CSS pixels to canvas pixels
    scale: f64,
}

impl CanvasRenderer {
    /// Grab the 2D context and start loading every catalog image
    pub fn new(canvas: &HtmlCanvasElement, catalog: &Catalog, scale: f64) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let mut images = HashMap::with_capacity(catalog.len());
        for id in catalog.iter() {
            let img = HtmlImageElement::new()?;
            img.set_src(&format!("{ASSET_FOLDER}/{id}"));
            images.insert(id.to_string(), img);
        }
        log::info!("Loading {} icon images", images.len());

        Ok(Self { ctx, images, scale })
    }

    /// Draw one frame
    pub fn render(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0)?;

        for cmd in commands {
            match cmd {
                DrawCommand::Clear(color) => {
                    let canvas = ctx
                        .canvas()
                        .ok_or_else(|| JsValue::from_str("context lost its canvas"))?;
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill_rect(
                        0.0,
                        0.0,
                        canvas.width() as f64 / self.scale,
                        canvas.height() as f64 / self.scale,
                    );
                }
                DrawCommand::Text {
                    text,
                    color,
                    center_x,
                    y,
                } => {
                    ctx.set_font(&format!("{}px {}", FONT_SIZE, FONT_FAMILY));
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("top");
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill_text(text, *center_x as f64, *y as f64)?;
                }
                DrawCommand::Icon { id, pos, size } => {
                    let (x, y, w, h) = (pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                    match self.images.get(id).filter(|img| img.complete()) {
                        Some(img) => {
                            ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)?
                        }
                        None => {
                            ctx.set_fill_style_str(&Rgb::HINT.css());
                            ctx.fill_rect(x, y, w, h);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
