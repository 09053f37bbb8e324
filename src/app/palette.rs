use ggez::graphics::Color;

pub struct Palette {
    pub background_color: Color,
    /// Outline drawn around every occupied cell
    pub border_color: Color,
    pub border_thickness: f32,
    pub apple_color: Color,
    pub snake_color: Color,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            background_color: Color::BLACK,
            border_color: Color::from_rgb(93, 216, 228),
            border_thickness: 1.,
            apple_color: Color::from_rgb(255, 0, 0),
            snake_color: Color::from_rgb(0, 255, 0),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
