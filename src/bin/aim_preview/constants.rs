pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 120.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 84.0;
pub const PATH_SAMPLES: usize = 160;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const HANDLE_RADIUS: f32 = 9.0;
pub const HANDLE_GRAB_SLOP_PX: f32 = 4.0;
pub const OFFSET_RANGE_M: f32 = 20.0;
pub const MAX_GRAVITY_MPS2: f32 = 30.0;
