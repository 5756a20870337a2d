//! TextInput Component

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::TchColors;

/// A single-line text input
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    /// Render the value as bullets (API token field)
    masked: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            masked: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn emit_change(&mut self, cx: &mut Context<Self>) {
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }
        match keystroke.key.as_str() {
            "backspace" => {
                if self.value.pop().is_some() {
                    self.emit_change(cx);
                }
            }
            "space" => {
                self.value.push(' ');
                self.emit_change(cx);
            }
            _ => {
                if let Some(text) = keystroke.key_char.clone() {
                    self.value.push_str(&text);
                    self.emit_change(cx);
                }
            }
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            TchColors::border_focus()
        } else {
            TchColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            SharedString::from("•".repeat(self.value.chars().count()))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            TchColors::input_placeholder()
        } else {
            TchColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_click(cx.listener(|this, _event, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .px_3()
            .py_2()
            .bg(TchColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .cursor_text()
            .child(display_text)
    }
}

/// Create a text input entity with an initial value and placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}
