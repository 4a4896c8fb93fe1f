// Input Component

use crate::tokens::*;
use zoon::*;

pub struct InputBuilder {
    label: Option<String>,
    placeholder: Option<String>,
    input_type: InputTypeKind,
    required: bool,
    text_signal: Option<Box<dyn Signal<Item = String> + Unpin>>,
    on_change: Option<Box<dyn Fn(String)>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputTypeKind {
    Text,
    Email,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            input_type: InputTypeKind::Text,
            required: false,
            text_signal: None,
            on_change: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn input_type(mut self, input_type: InputTypeKind) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn text_signal<S>(mut self, text_signal: S) -> Self
    where
        S: Signal<Item = String> + Unpin + 'static,
    {
        self.text_signal = Some(Box::new(text_signal));
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn build(mut self) -> impl Element {
        let (focused, focused_signal) = Mutable::new_and_signal(false);
        let focused_setter = focused.clone();
        let on_change = self.on_change.take();
        let placeholder_text = self.placeholder.take().unwrap_or_default();
        let label_text = self.label.take();
        let required = self.required;
        let input_type = self.input_type;
        let text_signal = self
            .text_signal
            .take()
            .unwrap_or_else(|| Box::new(always(String::new())));

        let mut input = TextInput::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_16).y(SPACING_12))
            .s(font_sans())
            .s(Font::new()
                .size(FONT_SIZE_16)
                .color_signal(text_primary()))
            .s(Background::new().color_signal(input_background()))
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Borders::all_signal(
                map_ref! {
                    let resting = input_border(),
                    let focused_color = input_border_focused(),
                    let is_focused = focused_signal =>
                    Border::new()
                        .width(1)
                        .color(if *is_focused { *focused_color } else { *resting })
                },
            ))
            .s(transition_colors())
            .placeholder(
                Placeholder::new(placeholder_text)
                    .s(Font::new().color_signal(text_muted())),
            )
            .label_hidden(label_text.clone().unwrap_or_else(|| "input".to_string()))
            .text_signal(text_signal)
            .on_focus(move || focused_setter.set_neq(true))
            .on_blur({
                let focused = focused.clone();
                move || focused.set_neq(false)
            })
            .on_change(move |new_value| {
                if let Some(handler) = &on_change {
                    handler(new_value);
                }
            });

        if input_type == InputTypeKind::Email {
            input = input.update_raw_el(|raw_el| raw_el.attr("type", "email"));
        }

        if let Some(label_text) = label_text {
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(SPACING_4))
                .item(field_label(label_text, required))
                .item(input)
                .unify()
        } else {
            input.unify()
        }
    }
}

fn field_label(label_text: String, required: bool) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_4))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Number(FONT_WEIGHT_5))
                    .color_signal(text_secondary()))
                .child(Text::new(label_text)),
        )
        .item_signal(always(required).map(|required| {
            required.then(|| {
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Number(FONT_WEIGHT_5))
                        .color_signal(error_border()))
                    .child(Text::new("*"))
            })
        }))
}

// Convenience function
pub fn input() -> InputBuilder {
    InputBuilder::new()
}
