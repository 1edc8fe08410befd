use raylib::prelude::*;

const MARGIN: f32 = 0.05;
const BUTTON_SIZE: f32 = 48.0;
const INDICATOR_RADIUS: f32 = 7.0;
const INDICATOR_SPACING: f32 = 26.0;
const INDICATOR_BAND: f32 = 48.0;

/// Screen geometry of the carousel for one frame.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Hover and swipe area: slide, buttons and indicators.
    pub wrapper: Rectangle,
    pub slide_area: Rectangle,
    pub previous_button: Rectangle,
    pub next_button: Rectangle,
    pub indicators: Vec<Vector2>,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, slide_count: usize) -> Self {
        let wrapper = Rectangle::new(
            screen_width * MARGIN,
            screen_height * MARGIN,
            screen_width * (1.0 - 2.0 * MARGIN),
            screen_height * (1.0 - 2.0 * MARGIN),
        );

        let slide_area = Rectangle::new(
            wrapper.x + BUTTON_SIZE * 1.5,
            wrapper.y,
            wrapper.width - BUTTON_SIZE * 3.0,
            wrapper.height - INDICATOR_BAND,
        );

        let button_y = slide_area.y + (slide_area.height - BUTTON_SIZE) * 0.5;
        let previous_button = Rectangle::new(wrapper.x, button_y, BUTTON_SIZE, BUTTON_SIZE);
        let next_button = Rectangle::new(
            wrapper.x + wrapper.width - BUTTON_SIZE,
            button_y,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );

        let row_width = INDICATOR_SPACING * slide_count.saturating_sub(1) as f32;
        let first_x = wrapper.x + (wrapper.width - row_width) * 0.5;
        let row_y = slide_area.y + slide_area.height + INDICATOR_BAND * 0.5;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + INDICATOR_SPACING * i as f32, row_y))
            .collect();

        Self {
            wrapper,
            slide_area,
            previous_button,
            next_button,
            indicators,
        }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.wrapper.check_collision_point_rec(point)
    }

    pub fn indicator_at(&self, point: Vector2) -> Option<usize> {
        // clicks slightly off the dot still count
        let reach = INDICATOR_RADIUS * 2.0;
        self.indicators
            .iter()
            .position(|center| center.distance_to(point) <= reach)
    }

    pub fn indicator_radius(&self) -> f32 {
        INDICATOR_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_are_centered_under_the_slide() {
        let layout = Layout::new(1000.0, 800.0, 3);

        let middle = layout.indicators[1];
        assert!((middle.x - 500.0).abs() < 0.01);
        assert_eq!(layout.indicator_at(middle), Some(1));
        assert_eq!(layout.indicator_at(Vector2::new(500.0, 100.0)), None);
    }

    #[test]
    fn buttons_sit_inside_the_wrapper() {
        let layout = Layout::new(1000.0, 800.0, 2);

        let prev = Vector2::new(layout.previous_button.x + 1.0, layout.previous_button.y + 1.0);
        assert!(layout.previous_button.check_collision_point_rec(prev));
        assert!(layout.contains(prev));
        assert!(!layout.contains(Vector2::new(1.0, 1.0)));
    }
}
