use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

use crate::models::{ProfileBackground, Rgb};

pub const SPACING_UNIT: f32 = 8.0;
pub const AVATAR_SIZE: f32 = 96.0;
pub const COVER_WIDTH: f32 = 120.0;
pub const LIBRARY_ICON_SIZE: f32 = 48.0;

pub const PERSON_ICON: &[u8] = include_bytes!("../../assets/person.svg");
pub const GAME_MARK: &[u8] = include_bytes!("../../assets/game-mark.svg");

fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

pub fn gradient(background: ProfileBackground) -> Background {
    let linear = Linear::new(Degrees(135.0))
        .add_stop(0.0, color(background.from))
        .add_stop(1.0, color(background.to));
    Background::Gradient(Gradient::Linear(linear))
}

/// Rounded box used by the header, feed rows and library cells.
pub fn content_box(theme: &Theme, background: Option<ProfileBackground>) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(match background {
            Some(bg) => gradient(bg),
            None => palette.background.weak.color.into(),
        }),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}
