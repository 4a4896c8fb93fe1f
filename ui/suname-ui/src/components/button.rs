// Button Component

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    fn padding_x(self) -> u32 {
        match self {
            ButtonSize::Small => SPACING_12,
            ButtonSize::Medium => SPACING_20,
            ButtonSize::Large => SPACING_24,
        }
    }

    fn padding_y(self) -> u32 {
        match self {
            ButtonSize::Small => SPACING_4,
            ButtonSize::Medium => SPACING_8,
            ButtonSize::Large => SPACING_12,
        }
    }

    fn font_size(self) -> u32 {
        match self {
            ButtonSize::Small => FONT_SIZE_14,
            ButtonSize::Medium => FONT_SIZE_16,
            ButtonSize::Large => FONT_SIZE_18,
        }
    }
}

pub struct ButtonBuilder {
    label: Option<String>,
    label_signal: Option<Box<dyn Signal<Item = String> + Unpin>>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled_signal: Option<Box<dyn Signal<Item = bool> + Unpin>>,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            label_signal: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled_signal: None,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.label_signal = None;
        self
    }

    pub fn label_signal<S>(mut self, label_signal: S) -> Self
    where
        S: Signal<Item = String> + Unpin + 'static,
    {
        self.label_signal = Some(Box::new(label_signal));
        self.label = None;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled_signal<S>(mut self, disabled_signal: S) -> Self
    where
        S: Signal<Item = bool> + Unpin + 'static,
    {
        self.disabled_signal = Some(Box::new(disabled_signal));
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(mut self) -> impl Element {
        let variant = self.variant;
        let size = self.size;
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let disabled = Mutable::new(false);

        let disabled_sync_task = self.disabled_signal.take().map(|disabled_signal| {
            let disabled = disabled.clone();
            Task::start_droppable(disabled_signal.for_each_sync(move |is_disabled| {
                disabled.set_neq(is_disabled);
            }))
        });

        let on_press = self.on_press.take();

        let mut button = Button::new()
            .s(Padding::new().x(size.padding_x()).y(size.padding_y()))
            .s(RoundedCorners::all(CORNER_RADIUS_MAX))
            .s(font_sans())
            .s(Font::new()
                .size(size.font_size())
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .color_signal(match variant {
                    ButtonVariant::Primary => button_primary_text().boxed(),
                    ButtonVariant::Outline | ButtonVariant::Ghost => text_primary().boxed(),
                }))
            .s(Background::new().color_signal(
                map_ref! {
                    let primary = button_primary_background(),
                    let ghost_hover = button_ghost_hover(),
                    let is_hovered = hovered_signal =>
                    match (variant, *is_hovered) {
                        (ButtonVariant::Primary, _) => *primary,
                        (ButtonVariant::Outline, true) | (ButtonVariant::Ghost, true) => *ghost_hover,
                        (ButtonVariant::Outline, false) | (ButtonVariant::Ghost, false) => "transparent",
                    }
                },
            ))
            .s(Borders::all_signal(surface_border().map(move |color| {
                match variant {
                    ButtonVariant::Outline => Border::new().width(1).color(color),
                    _ => Border::new().width(0).color("transparent"),
                }
            })))
            .s(transition_colors())
            .s(Cursor::new(CursorIcon::Pointer))
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered));

        if variant == ButtonVariant::Primary {
            button = button.s(Shadows::with_signal(shadow_glow()));
        }

        let button = if let Some(signal) = self.label_signal.take() {
            button.label_signal(signal.map(Text::new))
        } else {
            button.label(Text::new(self.label.take().unwrap_or_default()))
        };

        button
            .on_press(move || {
                if !disabled.get() {
                    if let Some(handler) = &on_press {
                        handler();
                    }
                }
            })
            .after_remove(move |_| drop(disabled_sync_task))
    }
}

// Convenience function
pub fn button() -> ButtonBuilder {
    ButtonBuilder::new()
}
