use glam::Vec2;

pub const DISTANCE_TO_HEIGHT_RATIO: f32 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f32 = 0.06;
const Y_PADDING_RATIO: f32 = 0.10;
const MIN_SPAN: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlotWindow {
    /// Padded bounding box of `points` with a fixed x:y ratio, centered on the
    /// raw bounds. Non-finite points are skipped.
    pub fn around(points: &[Vec2]) -> Self {
        let mut lo = Vec2::splat(f32::INFINITY);
        let mut hi = Vec2::splat(f32::NEG_INFINITY);
        for point in points.iter().filter(|p| p.is_finite()) {
            lo = lo.min(*point);
            hi = hi.max(*point);
        }
        if !lo.is_finite() || !hi.is_finite() {
            lo = Vec2::ZERO;
            hi = Vec2::ZERO;
        }

        let raw_x_span = (hi.x - lo.x).max(MIN_SPAN);
        let raw_y_span = (hi.y - lo.y).max(MIN_SPAN);
        let mut x_span = raw_x_span * (1.0 + 2.0 * X_PADDING_RATIO);
        let mut y_span = raw_y_span * (1.0 + 2.0 * Y_PADDING_RATIO);

        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        let center = (lo + hi) * 0.5;
        let half = Vec2::new(x_span, y_span) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn span(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn to_screen(&self, world: Vec2, left: f32, right: f32, top: f32, bottom: f32) -> Vec2 {
        let span = self.span();
        let plot_w = (right - left).max(1.0);
        let plot_h = (bottom - top).max(1.0);
        Vec2::new(
            left + ((world.x - self.min.x) / span.x) * plot_w,
            bottom - ((world.y - self.min.y) / span.y) * plot_h,
        )
    }

    pub fn to_world(&self, screen: Vec2, left: f32, right: f32, top: f32, bottom: f32) -> Vec2 {
        let span = self.span();
        let plot_w = (right - left).max(1.0);
        let plot_h = (bottom - top).max(1.0);
        Vec2::new(
            self.min.x + ((screen.x - left) / plot_w) * span.x,
            self.min.y + ((bottom - screen.y) / plot_h) * span.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn keeps_fixed_ratio_and_contains_points() {
        let points = [Vec2::new(-4.0, -2.0), Vec2::new(30.0, 6.0)];
        let window = PlotWindow::around(&points);
        let span = window.span();

        assert_close(span.x / span.y, DISTANCE_TO_HEIGHT_RATIO, 1e-5);
        for point in points {
            assert!(point.cmpge(window.min).all() && point.cmple(window.max).all());
        }
    }

    #[test]
    fn empty_input_gets_minimum_window() {
        let window = PlotWindow::around(&[]);
        assert!(window.span().x >= MIN_SPAN && window.span().y >= MIN_SPAN);
        assert_close((window.min.x + window.max.x) * 0.5, 0.0, 1e-6);
    }

    #[test]
    fn screen_mapping_round_trips() {
        let window = PlotWindow::around(&[Vec2::new(0.0, 0.0), Vec2::new(20.0, 5.0)]);
        let world = Vec2::new(7.5, 3.0);
        let screen = window.to_screen(world, 100.0, 900.0, 50.0, 450.0);
        let back = window.to_world(screen, 100.0, 900.0, 50.0, 450.0);

        assert_close(back.x, world.x, 1e-3);
        assert_close(back.y, world.y, 1e-3);
        assert!(window.to_screen(window.min, 100.0, 900.0, 50.0, 450.0).y == 450.0);
    }
}
