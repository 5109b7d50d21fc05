use crate::render::Color;

/// Categorical colors assigned to series categories in first-appearance order.
pub const CATEGORY_PALETTE: [Color; 10] = [
    Color::rgb(0.000, 0.478, 1.000),
    Color::rgb(0.204, 0.780, 0.349),
    Color::rgb(1.000, 0.584, 0.000),
    Color::rgb(0.686, 0.322, 0.871),
    Color::rgb(1.000, 0.231, 0.188),
    Color::rgb(0.353, 0.784, 0.980),
    Color::rgb(1.000, 0.800, 0.000),
    Color::rgb(0.635, 0.518, 0.369),
    Color::rgb(1.000, 0.176, 0.333),
    Color::rgb(0.345, 0.337, 0.839),
];

/// Accent used for single-color series such as the line chart.
pub const ACCENT: Color = CATEGORY_PALETTE[0];

pub const CARD_BACKGROUND: Color = Color::rgb(1.0, 1.0, 1.0);
pub const GRID_LINE: Color = Color::rgba(0.0, 0.0, 0.0, 0.12);
pub const AXIS_LABEL: Color = Color::rgba(0.0, 0.0, 0.0, 0.55);

/// Palette entry for category `index`, wrapping around.
#[must_use]
pub fn category_color(index: usize) -> Color {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}
