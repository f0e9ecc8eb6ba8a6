/// Frame style constants shared with the stylesheet
pub struct FrameStyle {
    pub drag_bar_height: f32,
    pub close_icon_size: f32,
    pub home_icon_size: f32,
    pub contact_icon_size: f32,
    pub career_icon_size: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    drag_bar_height: 28.0,
    close_icon_size: 14.0,
    home_icon_size: 48.0,
    contact_icon_size: 36.0,
    career_icon_size: 56.0,
};
