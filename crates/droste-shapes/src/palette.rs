use droste_canvas::Color;
use serde::{Deserialize, Serialize};

/// An ordered, non-empty list of colors cycled through by iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// An empty list is accepted but collapses to solid black.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            log::warn!("empty palette, falling back to black");
            return Self(vec![Color::BLACK]);
        }
        Self(colors)
    }

    /// Color for a 1-based iteration count.
    pub fn color_for(&self, iteration: u32) -> Color {
        let index = iteration.saturating_sub(1) as usize % self.0.len();
        self.0[index]
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}
