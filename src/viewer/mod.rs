//! raylib host for the certificate carousel.

pub mod layout;
pub mod slide;

use std::time::Duration;

use raylib::prelude::*;

use crate::effects::{Bounds, PressPulse, Ripples};
use crate::input::{CarouselInput, Key};
use crate::surface::CarouselSurface;
use crate::texture_loader::Certificate;
use crate::theme::Theme;

pub use layout::Layout;
pub use slide::CertificateSlide;

struct Palette {
    background: Color,
    text: Color,
    accent: Color,
    muted: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: Color::new(250, 243, 235, 255),
            text: Color::new(62, 39, 35, 255),
            accent: Color::new(230, 126, 34, 255),
            muted: Color::new(215, 204, 200, 255),
        },
        Theme::Dark => Palette {
            background: Color::new(28, 22, 19, 255),
            text: Color::new(240, 230, 220, 255),
            accent: Color::new(243, 156, 18, 255),
            muted: Color::new(90, 78, 70, 255),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Previous,
    Next,
}

/// Click feedback of one navigation button.
#[derive(Default)]
struct ButtonFeedback {
    pulse: PressPulse,
    ripples: Ripples,
}

fn bounds_of(rect: Rectangle) -> Bounds {
    Bounds {
        left: rect.x,
        top: rect.y,
        width: rect.width,
        height: rect.height,
    }
}

fn scaled_about_center(rect: Rectangle, scale: f32) -> Rectangle {
    let width = rect.width * scale;
    let height = rect.height * scale;
    Rectangle::new(
        rect.x + (rect.width - width) * 0.5,
        rect.y + (rect.height - height) * 0.5,
        width,
        height,
    )
}

/// Window-side carousel surface: the slides plus one indicator dot per slide.
pub struct ViewerSurface {
    slides: Vec<CertificateSlide>,
    indicators: Vec<bool>,
    buttons: [ButtonFeedback; 2],
}

impl ViewerSurface {
    pub fn new(certificates: Vec<Certificate<Texture2D>>) -> Self {
        Self {
            slides: certificates.into_iter().map(CertificateSlide::new).collect(),
            indicators: Vec::new(),
            buttons: Default::default(),
        }
    }

    /// Starts the press pulse and a ripple from the click position.
    pub fn press_button(&mut self, button: Button, layout: &Layout, click: Vector2) {
        let (feedback, rect) = match button {
            Button::Previous => (&mut self.buttons[0], layout.previous_button),
            Button::Next => (&mut self.buttons[1], layout.next_button),
        };
        feedback.pulse.press();
        feedback.ripples.spawn(bounds_of(rect), click.x, click.y);
    }

    pub fn update(&mut self, dt: Duration) {
        for slide in self.slides.iter_mut() {
            slide.update(dt.as_secs_f32());
        }
        for feedback in self.buttons.iter_mut() {
            feedback.pulse.update(dt);
            feedback.ripples.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout, theme: Theme, hint: &str) {
        let colors = palette(theme);
        d.clear_background(colors.background);

        for slide in self.slides.iter() {
            slide.draw(d, layout.slide_area, (colors.muted, colors.text));
        }

        let buttons = [(layout.previous_button, "<"), (layout.next_button, ">")];
        for ((rect, label), feedback) in buttons.into_iter().zip(self.buttons.iter()) {
            let button = scaled_about_center(rect, feedback.pulse.scale());
            d.draw_rectangle_rec(button, colors.accent);
            for ripple in feedback.ripples.iter() {
                let radius = ripple.size * 0.5;
                let center = Vector2::new(rect.x + ripple.x + radius, rect.y + ripple.y + radius);
                let alpha = (ripple.opacity() * 255.0) as u8;
                d.draw_circle_v(center, radius * ripple.scale(), Color::new(255, 255, 255, alpha));
            }
            d.draw_text(
                label,
                (button.x + button.width * 0.5 - 7.0) as i32,
                (button.y + button.height * 0.5 - 14.0) as i32,
                28,
                colors.background,
            );
        }

        for (center, active) in layout.indicators.iter().zip(self.indicators.iter()) {
            let color = if *active { colors.accent } else { colors.muted };
            d.draw_circle_v(*center, layout.indicator_radius(), color);
        }

        if let Some(position) = self.slides.iter().position(CertificateSlide::is_active) {
            d.draw_text(
                &format!("{} / {}", position + 1, self.slides.len()),
                layout.wrapper.x as i32,
                (layout.wrapper.y + layout.wrapper.height - 24.0) as i32,
                20,
                colors.text,
            );
        }
        d.draw_text(hint, 10, 10, 18, colors.text);
    }
}

impl CarouselSurface for ViewerSurface {
    fn create_indicators(&mut self, count: usize) {
        self.indicators = vec![false; count];
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.set_active(active);
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            *indicator = active;
        }
    }
}

/// Translates this frame's keyboard and mouse state into carousel events.
///
/// `hovering` carries whether the pointer was over the carousel last frame.
pub fn collect_inputs(rl: &RaylibHandle, layout: &Layout, hovering: &mut bool) -> Vec<CarouselInput> {
    let mut inputs = Vec::new();

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        inputs.push(CarouselInput::Key(Key::ArrowLeft));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        inputs.push(CarouselInput::Key(Key::ArrowRight));
    }

    let mouse = rl.get_mouse_position();
    let inside = layout.contains(mouse);
    if inside != *hovering {
        *hovering = inside;
        inputs.push(if inside {
            CarouselInput::PointerEnter
        } else {
            CarouselInput::PointerLeave
        });
    }

    if inside && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if layout.previous_button.check_collision_point_rec(mouse) {
            inputs.push(CarouselInput::PreviousButton);
        } else if layout.next_button.check_collision_point_rec(mouse) {
            inputs.push(CarouselInput::NextButton);
        } else if let Some(index) = layout.indicator_at(mouse) {
            inputs.push(CarouselInput::IndicatorClicked(index));
        } else {
            inputs.push(CarouselInput::PointerDown { x: mouse.x });
        }
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        inputs.push(CarouselInput::PointerUp { x: mouse.x });
    }

    inputs
}
