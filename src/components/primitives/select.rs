//! Select Component
//!
//! Clicking the select cycles to the next option. With the short option
//! lists used here (link filter, page size, language) this avoids popup
//! state entirely.

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::TchColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A cycling select component
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(&str, &mut Window, &mut App) + 'static>>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            disabled: false,
            on_change: None,
        }
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Handler receives the value of the next option in the cycle
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    fn next_value(&self) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }
        let current = self
            .selected
            .as_ref()
            .and_then(|val| self.options.iter().position(|opt| &opt.value == val));
        let next = match current {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        Some(self.options[next].value.clone())
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let next_value = self.next_value();

        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or_else(|| SharedString::from("Select..."));

        let text_color = if self.selected.is_some() {
            TchColors::text_primary()
        } else {
            TchColors::input_placeholder()
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(TchColors::input_bg())
            .border_1()
            .border_color(TchColors::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(120.0))
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .cursor_pointer()
            .opacity(opacity)
            .child(display_text)
            .child(
                div()
                    .text_color(TchColors::text_muted())
                    .text_size(px(10.0))
                    .child("▼"),
            );

        if !self.disabled {
            if let (Some(handler), Some(next)) = (self.on_change, next_value) {
                element = element.on_click(move |_event, window, cx| {
                    handler(&next, window, cx);
                });
            }
        }

        element
    }
}
