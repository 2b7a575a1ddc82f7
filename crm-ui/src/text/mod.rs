//! Styled text and width-aware string helpers.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::{Color, Style, TextAlign, Tone};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Leading offset needed to place content of `content_width` inside
/// `available` cells.
pub fn align_offset(content_width: usize, available: usize, align: TextAlign) -> usize {
    let slack = available.saturating_sub(content_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: Style::new(),
        }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.content)
    }
}

/// One line of styled text. This is the unit every cell, caption and
/// label renders to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    /// A tag-like label, `[Label]`, in the tone color.
    pub fn badge(label: impl AsRef<str>, tone: Tone) -> Self {
        Self::styled(
            format!("[{}]", label.as_ref()),
            Style::new().foreground(Color::tone(tone)).bold(),
        )
    }

    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.content.is_empty())
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Plain text with styling stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.content.as_str()).collect()
    }

    /// Clip to `max_width` cells, ending in `…` when anything was cut.
    /// Span styles are kept.
    pub fn truncate(&self, max_width: usize) -> Line {
        if self.width() <= max_width {
            return self.clone();
        }
        if max_width == 0 {
            return Line::default();
        }

        let mut remaining = max_width - 1;
        let mut spans = Vec::new();
        let mut tail_style = Style::new();

        for span in &self.spans {
            tail_style = span.style;
            let width = span.width();
            if width <= remaining {
                spans.push(span.clone());
                remaining -= width;
                continue;
            }
            let mut content = String::new();
            for ch in span.content.chars() {
                let ch_width = char_width(ch);
                if ch_width > remaining {
                    break;
                }
                content.push(ch);
                remaining -= ch_width;
            }
            spans.push(Span::styled(content, span.style));
            break;
        }

        spans.push(Span::styled("…", tail_style));
        Line::new(spans)
    }

    /// Apply `style` underneath every span; span styles still win.
    pub fn patch_style(mut self, style: Style) -> Self {
        for span in &mut self.spans {
            span.style = style.patch(span.style);
        }
        self
    }
}

impl From<String> for Line {
    fn from(content: String) -> Self {
        Line::raw(content)
    }
}

impl From<&str> for Line {
    fn from(content: &str) -> Self {
        Line::raw(content)
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Line::new(vec![span])
    }
}
