use macroquad::prelude::*;
use tracing::{debug, warn};

use crate::constants::{
    BOTTOM_MARGIN, HANDLE_GRAB_SLOP_PX, HANDLE_RADIUS, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::model::{Handle, PreviewState, to_world_vec};
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_grid, draw_handles, draw_hud, draw_path,
};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Parabolic Aim Preview".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn hovered_handle(state: &PreviewState, area: PlotArea, mouse: Vec2) -> Option<Handle> {
    [Handle::Target, Handle::Origin].into_iter().find(|handle| {
        let p = area.to_screen(&state.window, state.handle_position(*handle));
        mouse.distance(p) <= HANDLE_RADIUS + HANDLE_GRAB_SLOP_PX
    })
}

fn update_drag(state: &mut PreviewState, area: PlotArea) {
    let (mx, my) = mouse_position();
    let mouse = vec2(mx, my);

    state.hovered = hovered_handle(state, area, mouse);
    if is_mouse_button_pressed(MouseButton::Left) {
        state.dragging = state.hovered;
    }
    if !is_mouse_button_down(MouseButton::Left) {
        if let Some(handle) = state.dragging.take() {
            debug!(?handle, "released handle");
        }
    }

    if let Some(handle) = state.dragging {
        let world = state
            .window
            .to_world(to_world_vec(mouse), area.left, area.right, area.top, area.bottom);
        state.move_handle(handle, world);
    }
}

pub(crate) async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!(%err, path = UI_FONT_PATH, "falling back to default font");
            None
        }
    };

    let mut state = PreviewState::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = draw_control_panel(&mut state).merge(hotkey_actions());
        apply_actions(&mut state, actions);
        update_drag(&mut state, area);
        state.refit_window();

        let solved = state.solve();
        let path = state.path(solved.as_ref().ok());

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(area, Color::from_rgba(227, 231, 236, 255));
        draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
        draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(area, &state.window, ui_font.as_ref());
        draw_path(
            area,
            &state.window,
            &path,
            3.0,
            Color::from_rgba(54, 123, 245, 255),
        );
        draw_handles(area, &state);
        draw_hud(&state, &solved, area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
