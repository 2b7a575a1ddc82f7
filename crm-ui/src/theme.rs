//! Design tokens.
//!
//! Views never hard-code colors: they style text with [`Token`]s and the
//! active [`Theme`] turns those into terminal colors at paint time. Light and
//! dark palettes mirror each other token for token.

use std::str::FromStr;

use crate::types::color::oklch_to_rgb;
use crate::types::{Color, Rgb, Token, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub const fn light() -> Self {
        Self::new(ThemeMode::Light)
    }

    pub const fn dark() -> Self {
        Self::new(ThemeMode::Dark)
    }

    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Resolve any color to a concrete terminal color.
    pub fn resolve(&self, color: Color) -> Rgb {
        match color {
            Color::Rgb(rgb) => rgb,
            Color::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
            Color::Token(token) => self.resolve(self.token(token)),
        }
    }

    /// The concrete color behind a token. Never returns another token.
    pub fn token(&self, token: Token) -> Color {
        match self.mode {
            ThemeMode::Light => light(token),
            ThemeMode::Dark => dark(token),
        }
    }
}

fn light(token: Token) -> Color {
    match token {
        Token::Background => Color::oklch(0.985, 0.0, 0.0),
        Token::Surface => Color::rgb(255, 255, 255),
        Token::Border => Color::oklch(0.92, 0.0, 0.0),
        Token::Text => Color::oklch(0.37, 0.0, 0.0),
        Token::Heading => Color::oklch(0.28, 0.0, 0.0),
        Token::Muted => Color::oklch(0.55, 0.0, 0.0),
        Token::Primary => Color::rgb(0, 86, 179),
        Token::Accent => Color::rgb(40, 167, 69),
        Token::HeaderBg => Color::oklch(0.96, 0.0, 0.0),
        Token::HeaderText => Color::oklch(0.45, 0.0, 0.0),
        Token::Selected => Color::oklch(0.93, 0.03, 250.0),
        Token::Tone(tone) => tone_color(tone, 0.55),
    }
}

fn dark(token: Token) -> Color {
    match token {
        Token::Background => Color::oklch(0.2, 0.0, 0.0),
        Token::Surface => Color::oklch(0.26, 0.0, 0.0),
        Token::Border => Color::oklch(0.37, 0.0, 0.0),
        Token::Text => Color::oklch(0.9, 0.0, 0.0),
        Token::Heading => Color::oklch(0.98, 0.0, 0.0),
        Token::Muted => Color::oklch(0.7, 0.0, 0.0),
        Token::Primary => Color::oklch(0.72, 0.12, 250.0),
        Token::Accent => Color::rgb(72, 187, 120),
        Token::HeaderBg => Color::oklch(0.3, 0.0, 0.0),
        Token::HeaderText => Color::oklch(0.85, 0.0, 0.0),
        Token::Selected => Color::oklch(0.35, 0.06, 250.0),
        Token::Tone(tone) => tone_color(tone, 0.75),
    }
}

fn tone_color(tone: Tone, lightness: f32) -> Color {
    Color::oklch(lightness, tone.chroma(), tone.hue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_never_resolve_to_tokens() {
        let tokens = [
            Token::Background,
            Token::Surface,
            Token::Border,
            Token::Text,
            Token::Heading,
            Token::Muted,
            Token::Primary,
            Token::Accent,
            Token::HeaderBg,
            Token::HeaderText,
            Token::Selected,
            Token::Tone(Tone::Green),
        ];
        for theme in [Theme::light(), Theme::dark()] {
            for token in tokens {
                assert!(!matches!(theme.token(token), Color::Token(_)));
            }
        }
    }

    #[test]
    fn light_text_is_darker_than_dark_text() {
        let light = Theme::light().resolve(Color::token(Token::Text));
        let dark = Theme::dark().resolve(Color::token(Token::Text));
        assert!(light.r < dark.r);
    }

    #[test]
    fn parses_mode_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
