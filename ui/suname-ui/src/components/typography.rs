// Typography Components

use crate::tokens::*;
use zoon::*;

pub fn h1(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_display())
        .s(Font::new().size(FONT_SIZE_48).weight(FontWeight::Bold))
        .s(Font::new().color_signal(text_primary()))
        .child(Text::new(text.into()))
}

pub fn h2(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_36).weight(FontWeight::Bold))
        .s(Font::new().color_signal(text_primary()))
        .child(Text::new(text.into()))
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_24).weight(FontWeight::SemiBold))
        .s(Font::new().color_signal(text_primary()))
        .child(Text::new(text.into()))
}

pub fn h4(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_20).weight(FontWeight::SemiBold))
        .s(Font::new().color_signal(text_primary()))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_16).line_height(LINE_HEIGHT_160))
        .s(Font::new().color_signal(text_secondary()))
        .child(Text::new(text.into()))
}

/// Larger intro paragraph under page heroes.
pub fn lead(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_20).line_height(LINE_HEIGHT_160))
        .s(Font::new().color_signal(text_secondary()))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(text_muted()))
        .child(Text::new(text.into()))
}
