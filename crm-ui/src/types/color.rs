/// A color as stored in styles. Tokens are resolved against a [`Theme`](crate::Theme)
/// at paint time; concrete colors pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Oklch { l: f32, c: f32, h: f32 },
    Token(Token),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Named design tokens shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Background,
    Surface,
    Border,
    Text,
    Heading,
    Muted,
    Primary,
    Accent,
    HeaderBg,
    HeaderText,
    Selected,
    Tone(Tone),
}

/// Color schemes used for tags, badges and status markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Gray,
    Green,
    Blue,
    Purple,
    Orange,
    Red,
    Yellow,
    Teal,
}

impl Tone {
    /// Hue angle in the Oklch space.
    pub const fn hue(self) -> f32 {
        match self {
            Tone::Gray => 0.0,
            Tone::Green => 145.0,
            Tone::Blue => 250.0,
            Tone::Purple => 300.0,
            Tone::Orange => 55.0,
            Tone::Red => 25.0,
            Tone::Yellow => 95.0,
            Tone::Teal => 190.0,
        }
    }

    pub const fn chroma(self) -> f32 {
        match self {
            Tone::Gray => 0.0,
            _ => 0.15,
        }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn token(token: Token) -> Self {
        Self::Token(token)
    }

    pub const fn tone(tone: Tone) -> Self {
        Self::Token(Token::Tone(tone))
    }
}

pub(crate) fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oklch_extremes_map_to_black_and_white() {
        let black = oklch_to_rgb(0.0, 0.0, 0.0);
        let white = oklch_to_rgb(1.0, 0.0, 0.0);
        assert!(black.r <= 2 && black.g <= 2 && black.b <= 2);
        assert!(white.r >= 250 && white.g >= 250 && white.b >= 250);
    }

    #[test]
    fn red_tone_is_reddish() {
        let rgb = oklch_to_rgb(0.65, Tone::Red.chroma(), Tone::Red.hue());
        assert!(rgb.r > rgb.g);
        assert!(rgb.r > rgb.b);
    }
}
