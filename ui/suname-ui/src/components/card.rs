// Card Component
// Translucent glass panel floating over the animated backdrop.

use crate::tokens::*;
use zoon::*;

pub struct CardBuilder {
    padding: u32,
    raised: bool,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self {
            padding: SPACING_24,
            raised: false,
        }
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    pub fn child(self, child: impl Element) -> impl Element {
        let background = if self.raised {
            surface_raised().boxed()
        } else {
            surface().boxed()
        };
        El::new()
            .s(Width::fill())
            .s(Padding::all(self.padding))
            .s(Background::new().color_signal(background))
            .s(Borders::all_signal(
                surface_border().map(|color| Border::new().width(1).color(color)),
            ))
            .s(RoundedCorners::all(CORNER_RADIUS_16))
            .s(Shadows::with_signal(shadow_panel()))
            .s(transition_colors())
            .update_raw_el(|raw_el| raw_el.style("backdrop-filter", "blur(12px)"))
            .child(child)
    }
}

// Convenience function
pub fn card() -> CardBuilder {
    CardBuilder::new()
}
