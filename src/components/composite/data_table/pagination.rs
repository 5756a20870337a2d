//! Pagination Component
//!
//! Page navigation bar under the library table. Prev/next are separate
//! handlers so callers can wire them straight to their controller.

use gpui::{
    div, prelude::*, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::TchColors;

type NavHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    items_label: SharedString,
    has_prev: bool,
    has_next: bool,
    on_prev: Option<NavHandler>,
    on_next: Option<NavHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_label: "items".into(),
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
            on_prev: None,
            on_next: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Override prev/next availability (e.g. from the backend response)
    pub fn availability(mut self, has_prev: bool, has_next: bool) -> Self {
        self.has_prev = has_prev;
        self.has_next = has_next;
        self
    }

    /// Set the previous-page handler
    pub fn on_prev(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_prev = Some(Box::new(handler));
        self
    }

    /// Set the next-page handler
    pub fn on_next(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_next = Some(Box::new(handler));
        self
    }

    fn nav_button(
        id: &'static str,
        arrow: &'static str,
        enabled: bool,
        handler: Option<NavHandler>,
    ) -> impl IntoElement {
        let mut btn = div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                TchColors::text_primary()
            } else {
                TchColors::text_muted()
            })
            .child(arrow);

        if enabled {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(TchColors::table_row_hover()));
            if let Some(handler) = handler {
                btn = btn.on_click(handler);
            }
        }

        btn
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(TchColors::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(TchColors::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::nav_button("prev-page", "←", self.has_prev, self.on_prev))
                    .child(
                        div()
                            .text_sm()
                            .text_color(TchColors::text_primary())
                            .child(format!("{} / {}", self.current_page, self.total_pages)),
                    )
                    .child(Self::nav_button("next-page", "→", self.has_next, self.on_next)),
            )
    }
}
