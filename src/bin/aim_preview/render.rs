use ::glam::Vec2 as WorldVec;
use macroquad::prelude::*;

use parabolic_aim::core::window::PlotWindow;
use parabolic_aim::{LaunchSolution, Result};

use crate::constants::{CONTROLS_Y, HANDLE_RADIUS, TITLE_Y, X_GRID_LINES, Y_GRID_LINES};
use crate::model::{Handle, PreviewState, to_screen_vec};

#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn to_screen(&self, window: &PlotWindow, world: WorldVec) -> Vec2 {
        to_screen_vec(window.to_screen(world, self.left, self.right, self.top, self.bottom))
    }
}

fn format_axis_value(value: f32, axis_span: f32) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, window: &PlotWindow, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;
    let span = window.span();

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let label = format_axis_value(window.min.x + t * span.x, span.x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        let label = format_axis_value(window.min.y + t * span.y, span.y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_path(
    area: PlotArea,
    window: &PlotWindow,
    points: &[WorldVec],
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = area.to_screen(window, points[0]);
    for point in points.iter().skip(1).copied() {
        let cur = area.to_screen(window, point);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_handles(area: PlotArea, state: &PreviewState) {
    for (handle, fill) in [
        (Handle::Origin, Color::from_rgba(220, 68, 55, 255)),
        (Handle::Target, Color::from_rgba(81, 201, 122, 255)),
    ] {
        let p = area.to_screen(&state.window, state.handle_position(handle));
        let active = state.dragging == Some(handle) || state.hovered == Some(handle);
        let radius = if active {
            HANDLE_RADIUS + 3.0
        } else {
            HANDLE_RADIUS
        };
        draw_circle(p.x, p.y, radius, fill);
        draw_circle_lines(p.x, p.y, radius, 2.0, DARKGRAY);
    }
}

pub(crate) fn draw_hud(
    state: &PreviewState,
    solved: &Result<LaunchSolution>,
    area: PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Parabolic Aim - Launch Preview",
        area.left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        "Drag the red origin and green target | E earth | M moon | R reset",
        area.left + 12.0,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );

    draw_ui_text(
        &format!(
            "Gravity: {} ({:.2} m/s^2) | Offset Y: {:.2} m",
            state.gravity_name, state.gravity_mps2, state.offset_y
        ),
        area.left,
        screen_h - 45.0,
        22,
        header_color,
        font,
    );

    match solved {
        Ok(solution) => draw_ui_text(
            &format!(
                "Regime: {} | v = ({:.2}, {:.2}) m/s | time to target {:.2} s",
                solution.regime.name(),
                solution.velocity.x,
                solution.velocity.y,
                solution.flight_time
            ),
            area.left,
            screen_h - 14.0,
            20,
            BLUE,
            font,
        ),
        Err(err) => draw_ui_text(
            &format!("No valid launch solution: {err}"),
            area.left,
            screen_h - 14.0,
            20,
            MAROON,
            font,
        ),
    }
}
