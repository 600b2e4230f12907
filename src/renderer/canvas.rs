//! Canvas 2D surface (web only)

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlImageElement};

use super::surface::{Color, ImageId, Surface, TextAlign};

/// [`Surface`] backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<ImageId, HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap a context and resolve image elements once.
    ///
    /// A missing image is logged and later draws of it are skipped.
    pub fn new(ctx: CanvasRenderingContext2d, document: &Document) -> Self {
        let mut images = HashMap::new();
        for id in ImageId::ALL {
            match document
                .get_element_by_id(id.element_id())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                Some(img) => {
                    images.insert(id, img);
                }
                None => log::warn!("Image #{} not found", id.element_id()),
            }
        }
        Self { ctx, images }
    }
}

impl Surface for CanvasSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
        if let Some(img) = self.images.get(&image) {
            if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img, x as f64, y as f64, w as f64, h as f64,
            ) {
                log::warn!("drawImage failed: {:?}", e);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(align.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
