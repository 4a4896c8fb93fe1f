//! Landing page: tagline, bio, social links.

use crate::data::biography::BIOGRAPHY;
use crate::pages::external_link;
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(hero())
        .item(bio_card())
        .item(socials_row())
}

fn hero() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .s(Align::new().center_x())
        .item(
            El::new()
                .s(font_display())
                .s(Font::new()
                    .size(FONT_SIZE_60)
                    .weight(FontWeight::Bold)
                    .color_signal(text_primary()))
                .s(Align::new().center_x())
                .child(Text::new(BIOGRAPHY.name)),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_18)
                    .italic()
                    .color_signal(text_secondary()))
                .s(Align::new().center_x())
                .child(Text::new(BIOGRAPHY.tagline)),
        )
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Align::new().center_x())
                .items(BIOGRAPHY.genres.iter().copied().map(genre_badge)),
        )
}

fn genre_badge(genre: &'static str) -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_4))
        .s(Background::new().color_signal(accent_soft()))
        .s(RoundedCorners::all(CORNER_RADIUS_MAX))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(text_primary()))
        .child(Text::new(genre))
}

fn bio_card() -> impl Element {
    card().child(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_16))
            .item(paragraph(BIOGRAPHY.bio))
            .items(BIOGRAPHY.full_bio.iter().map(|section| paragraph(*section)))
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_16)
                        .italic()
                        .color_signal(text_muted()))
                    .child(Text::new(BIOGRAPHY.quote)),
            ),
    )
}

fn socials_row() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16).y(SPACING_8))
        .s(Align::new().center_x())
        .multiline()
        .items(
            BIOGRAPHY
                .socials
                .iter()
                .map(|link| external_link(link.name, link.url)),
        )
}
