//! Style attribute types for text nodes.
//!
//! Each enum carries a real keyword mapping so the generator can emit the
//! target framework's dot-syntax constants (e.g., `.headline`, `.red`)
//! instead of a hardcoded placeholder.

use serde::{Deserialize, Serialize};

/// Semantic font styles available to text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Font {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Caption,
    Caption2,
    Footnote,
}

impl Font {
    /// Get the framework keyword for this font (e.g., `largeTitle`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Font::LargeTitle => "largeTitle",
            Font::Title => "title",
            Font::Title2 => "title2",
            Font::Title3 => "title3",
            Font::Headline => "headline",
            Font::Subheadline => "subheadline",
            Font::Body => "body",
            Font::Callout => "callout",
            Font::Caption => "caption",
            Font::Caption2 => "caption2",
            Font::Footnote => "footnote",
        }
    }
}

/// Named foreground colors available to text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Primary,
    Secondary,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Purple,
    Pink,
    Gray,
    Black,
    White,
}

impl Color {
    /// Get the framework keyword for this color (e.g., `red`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Color::Primary => "primary",
            Color::Secondary => "secondary",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Gray => "gray",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}
