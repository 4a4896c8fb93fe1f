//! Catch-all 404 page.

use crate::router::Route;
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_24))
        .s(Align::new().center_x())
        .item(h1("Lost at sea"))
        .item(paragraph("This page drifted away with the tide."))
        .item(
            Link::new()
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(accent()))
                .label("Back to shore")
                .to(Route::Root),
        )
}
