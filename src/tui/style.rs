//! Color scheme and styles (htop-style meter colours).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::meter::{ColorElement, RichLine};

/// Meter colour palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;
    pub const HEADER_BG: Color = Color::Blue;

    pub const LABEL: Color = Color::Cyan;
    pub const VALUE: Color = Color::Cyan;

    pub const MEM_USED: Color = Color::Green;
    pub const MEM_COMPRESSED: Color = Color::Gray;
    pub const MEM_BUFFERS: Color = Color::Blue;
    pub const MEM_SHARED: Color = Color::Magenta;
    pub const MEM_CACHE: Color = Color::Yellow;

    pub const SWAP: Color = Color::Red;
    pub const SWAP_CACHE: Color = Color::Yellow;
    pub const SWAP_FRONTSWAP: Color = Color::Gray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Maps a meter's [`ColorElement`] to a ratatui [`Style`].
    pub fn element(element: ColorElement) -> Style {
        match element {
            ColorElement::MeterText => Style::default().fg(Theme::LABEL),
            ColorElement::MeterValue => Style::default()
                .fg(Theme::VALUE)
                .add_modifier(Modifier::BOLD),
            ColorElement::MeterShadow => Self::dim().add_modifier(Modifier::BOLD),
            ColorElement::BarBorder => Self::default().add_modifier(Modifier::BOLD),
            ColorElement::MemoryUsed => Style::default().fg(Theme::MEM_USED),
            ColorElement::MemoryCompressed => Style::default().fg(Theme::MEM_COMPRESSED),
            ColorElement::MemoryBuffers => Style::default()
                .fg(Theme::MEM_BUFFERS)
                .add_modifier(Modifier::BOLD),
            ColorElement::MemoryBuffersText => Style::default().fg(Theme::MEM_BUFFERS),
            ColorElement::MemoryShared => Style::default().fg(Theme::MEM_SHARED),
            ColorElement::MemoryCache => Style::default().fg(Theme::MEM_CACHE),
            ColorElement::Swap => Style::default().fg(Theme::SWAP),
            ColorElement::SwapCache => Style::default().fg(Theme::SWAP_CACHE),
            ColorElement::SwapFrontswap => Style::default().fg(Theme::SWAP_FRONTSWAP),
        }
    }
}

/// Converts a meter line into a styled ratatui [`Line`].
pub fn to_line(line: &RichLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .runs()
        .map(|(element, text)| Span::styled(text.to_string(), Styles::element(element)))
        .collect();
    Line::from(spans)
}
