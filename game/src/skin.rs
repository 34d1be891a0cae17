use clap::ValueEnum;
use macroquad::color::Color;

/// The player's ghost colour, chosen before the run starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Skin {
    Pink,
    Blue,
}

impl Skin {
    pub(crate) fn body(self) -> Color {
        match self {
            Skin::Pink => Color::new(1.0, 0.55, 0.8, 1.0),
            Skin::Blue => Color::new(0.45, 0.75, 1.0, 1.0),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Skin::Pink => "Pink",
            Skin::Blue => "Blue",
        }
    }

    pub(crate) fn all() -> [Self; 2] {
        [Skin::Pink, Skin::Blue]
    }
}
