use crate::color::Color;

pub const PURPLE_200: Color = Color::from_argb(0xFFBB86FC);
pub const PURPLE_500: Color = Color::from_argb(0xFF6200EE);

/// Corner radius of the small shape, in px.
pub const SMALL_RADIUS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub background: Color,
    pub on_primary: Color,
    pub on_background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: PURPLE_500,
            background: Color::WHITE,
            on_primary: Color::WHITE,
            on_background: Color::BLACK,
        }
    }
}

impl Palette {
    /// Gradient stops used by chip borders and the pressed background.
    pub fn chip_gradient(&self) -> [Color; 2] {
        [self.primary, PURPLE_200]
    }
}
