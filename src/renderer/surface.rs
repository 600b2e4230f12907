//! Draw surface abstraction

use glam::Vec2;

/// An RGBA color (alpha in 0-1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Pause overlay tint
    pub const SHADE: Color = Color::rgba(0, 0, 0, 0.5);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string (`rgba(r,g,b,a)`)
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Pre-loaded image assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Ball,
    Brick,
}

impl ImageId {
    pub const ALL: [ImageId; 2] = [ImageId::Ball, ImageId::Brick];

    /// DOM element id of the image
    pub fn element_id(&self) -> &'static str {
        match self {
            ImageId::Ball => "img_ball",
            ImageId::Brick => "img_brick",
        }
    }
}

/// Horizontal text anchor; the overlay only ever centers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Center => "center",
        }
    }
}

/// A 2D drawing target
///
/// Shapes are filled with the color last passed to [`Surface::set_fill_style`].
pub trait Surface {
    fn set_fill_style(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, align: TextAlign);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillStyle(Color),
    FillRect { pos: Vec2, size: Vec2 },
    ClearRect { pos: Vec2, size: Vec2 },
    Image { image: ImageId, pos: Vec2, size: Vec2 },
    Text { text: String, pos: Vec2, font: String, align: TextAlign },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of images drawn for `image`
    pub fn image_count(&self, image: ImageId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { image: i, .. } if *i == image))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        });
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        });
    }

    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Image {
            image,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos: Vec2::new(x, y),
            font: font.to_string(),
            align,
        });
    }
}

/// Shade the whole field and print "paused" in the middle
pub fn draw_pause_overlay(surface: &mut dyn Surface, width: f32, height: f32) {
    surface.set_fill_style(Color::SHADE);
    surface.fill_rect(0.0, 0.0, width, height);

    surface.set_fill_style(Color::WHITE);
    surface.fill_text("paused", width / 2.0, height / 2.0, "30px Arial", TextAlign::Center);
}
