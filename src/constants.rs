pub const GUI_WINDOW_WIDTH: f32 = 520.0;
pub const GUI_WINDOW_HEIGHT: f32 = 340.0;

pub const GUI_ROW_SPACING: f32 = 12.0;

pub const GUI_CHANNEL_LABEL_WIDTH: f32 = 70.0;
pub const GUI_CHANNEL_LABEL_FONT_SIZE: f32 = 64.0;
pub const GUI_CHANNEL_INPUT_WIDTH: f32 = 100.0;
pub const GUI_CHANNEL_INPUT_FONT_SIZE: f32 = 40.0;
pub const GUI_CHANNEL_ROW_HEIGHT: f32 = 70.0;
pub const GUI_STEP_BUTTON_SIZE: f32 = 30.0;

pub const GUI_SWATCH_PANEL_WIDTH: f32 = 260.0;
pub const GUI_SWATCH_WIDTH: f32 = 220.0;
pub const GUI_SWATCH_HEIGHT: f32 = 170.0;
pub const GUI_SWATCH_BORDER_WIDTH: f32 = 2.0;
pub const GUI_HEX_FONT_SIZE: f32 = 36.0;
