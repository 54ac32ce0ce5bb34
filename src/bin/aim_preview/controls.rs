use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use parabolic_aim::Gravity;

use crate::constants::{MAX_GRAVITY_MPS2, OFFSET_RANGE_M};
use crate::model::PreviewState;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reset: bool,
    pub(crate) earth: bool,
    pub(crate) moon: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reset: self.reset || other.reset,
            earth: self.earth || other.earth,
            moon: self.moon || other.moon,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reset: is_key_pressed(KeyCode::R),
        earth: is_key_pressed(KeyCode::E),
        moon: is_key_pressed(KeyCode::M),
    }
}

pub(crate) fn apply_actions(state: &mut PreviewState, actions: FrameActions) {
    if actions.reset {
        state.reset();
    }
    if actions.earth {
        state.set_gravity_preset("Earth", Gravity::EARTH);
    }
    if actions.moon {
        state.set_gravity_preset("Moon", Gravity::MOON);
    }
}

pub(crate) fn draw_control_panel(state: &mut PreviewState) -> FrameActions {
    let mut actions = FrameActions::default();
    let gravity_before = state.gravity_mps2;

    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(370.0, 280.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("Gravity preset: {}", state.gravity_name));
            ui.label(
                None,
                &format!(
                    "origin = ({:.2}, {:.2}) | target = ({:.2}, {:.2})",
                    state.origin.x, state.origin.y, state.target.x, state.target.y
                ),
            );
            ui.separator();
            ui.slider(
                hash!(),
                "Offset Y (m)",
                -OFFSET_RANGE_M..OFFSET_RANGE_M,
                &mut state.offset_y,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                0.0..MAX_GRAVITY_MPS2,
                &mut state.gravity_mps2,
            );
            ui.separator();
            if ui.button(None, "Earth (E)") {
                actions.earth = true;
            }
            if ui.button(None, "Moon (M)") {
                actions.moon = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
        });

    if state.gravity_mps2 != gravity_before {
        state.gravity_name = "Custom";
    }

    actions
}
