use raylib::prelude::*;

use crate::constants::*;
use crate::texture_loader::Certificate;

/// A certificate image that cross-fades when the carousel flips its active flag.
/// Images that failed to load are drawn as a placeholder card.
pub struct CertificateSlide {
    image: Certificate<Texture2D>,

    active: bool,
    opacity: f32,

    fade: Option<ease::Tween>,
    fade_target: f32,
    fade_timer: f32,
}

impl CertificateSlide {
    pub fn new(image: Certificate<Texture2D>) -> Self {
        Self {
            image,
            active: false,
            opacity: 0.0,
            fade: None,
            fade_target: 0.0,
            fade_timer: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        self.fade_target = if active { 1.0 } else { 0.0 };
        self.fade_timer = 0.0;
        self.fade = Some(ease::Tween::new(
            ease::cubic_out,
            self.opacity,
            self.fade_target,
            FADE_DURATION,
        ));
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.fade.as_mut() else {
            return;
        };
        self.opacity = tween.apply(dt);
        self.fade_timer += dt;

        if self.fade_timer >= FADE_DURATION {
            self.opacity = self.fade_target;
            self.fade = None;
        }
    }

    fn tint(&self, color: Color) -> Color {
        let alpha = self.opacity.clamp(0.0, 1.0) * f32::from(color.a);
        Color::new(color.r, color.g, color.b, alpha as u8)
    }

    /// Draws the image scaled to fit `area`, centered.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, placeholder: (Color, Color)) {
        if self.opacity <= 0.0 {
            return;
        }

        let texture = match &self.image {
            Certificate::Loaded(texture) => texture,
            Certificate::Missing(_) => {
                let (fill, text) = placeholder;
                d.draw_rectangle_rec(area, self.tint(fill));
                d.draw_rectangle_lines_ex(area, 3.0, self.tint(text));
                let font_size = 24;
                let text_width = d.measure_text(MISSING_IMAGE_TEXT, font_size) as f32;
                d.draw_text(
                    MISSING_IMAGE_TEXT,
                    (area.x + (area.width - text_width) * 0.5) as i32,
                    (area.y + area.height * 0.5) as i32 - font_size / 2,
                    font_size,
                    self.tint(text),
                );
                return;
            }
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = (area.width / tex_width).min(area.height / tex_height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;
        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::zero(),
            0.0,
            self.tint(Color::WHITE),
        );
    }
}
