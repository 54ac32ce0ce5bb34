use ::glam::Vec2 as WorldVec;
use macroquad::prelude::{Vec2, vec2};

use parabolic_aim::core::window::PlotWindow;
use parabolic_aim::{Gravity, LaunchSolution, Result, solve};

use crate::constants::PATH_SAMPLES;

// macroquad ships its own glam; world values stay in the library's type.
pub(crate) fn to_screen_vec(v: WorldVec) -> Vec2 {
    vec2(v.x, v.y)
}

pub(crate) fn to_world_vec(v: Vec2) -> WorldVec {
    WorldVec::new(v.x, v.y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Handle {
    Origin,
    Target,
}

pub(crate) struct PreviewState {
    pub(crate) origin: WorldVec,
    pub(crate) target: WorldVec,
    pub(crate) offset_y: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) gravity_name: &'static str,
    pub(crate) dragging: Option<Handle>,
    pub(crate) hovered: Option<Handle>,
    pub(crate) window: PlotWindow,
}

impl PreviewState {
    pub(crate) fn new() -> Self {
        let mut state = Self {
            origin: WorldVec::new(0.0, 2.0),
            target: WorldVec::new(24.0, 9.0),
            offset_y: 0.0,
            gravity_mps2: Gravity::EARTH.magnitude(),
            gravity_name: "Earth",
            dragging: None,
            hovered: None,
            window: PlotWindow::around(&[]),
        };
        state.refit_window();
        state
    }

    pub(crate) fn gravity(&self) -> Gravity {
        Gravity::new(self.gravity_mps2)
    }

    pub(crate) fn set_gravity_preset(&mut self, name: &'static str, gravity: Gravity) {
        self.gravity_name = name;
        self.gravity_mps2 = gravity.magnitude();
    }

    pub(crate) fn solve(&self) -> Result<LaunchSolution> {
        solve(
            self.origin.extend(0.0),
            self.target.extend(0.0),
            self.offset_y,
            self.gravity(),
        )
    }

    pub(crate) fn path(&self, solution: Option<&LaunchSolution>) -> Vec<WorldVec> {
        solution.map_or_else(Vec::new, |s| s.path(self.origin, self.gravity(), PATH_SAMPLES))
    }

    /// Frozen while a handle is dragged so the view does not chase the mouse.
    pub(crate) fn refit_window(&mut self) {
        if self.dragging.is_some() {
            return;
        }
        let solution = self.solve().ok();
        let mut points = self.path(solution.as_ref());
        points.push(self.origin);
        points.push(self.target);
        self.window = PlotWindow::around(&points);
    }

    pub(crate) fn handle_position(&self, handle: Handle) -> WorldVec {
        match handle {
            Handle::Origin => self.origin,
            Handle::Target => self.target,
        }
    }

    pub(crate) fn move_handle(&mut self, handle: Handle, world: WorldVec) {
        match handle {
            Handle::Origin => self.origin = world,
            Handle::Target => self.target = world,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
