//! Settings Page
//!
//! Backend URL and API token, a connection test and the language picker.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::features::settings::controller::SettingsController;
use crate::i18n::{t, Locale};
use crate::state::connection_state::ConnectionTarget;
use crate::theme::colors::TchColors;

/// Settings page component
pub struct SettingsPage {
    entities: AppEntities,
    controller: SettingsController,
    url_input: Entity<TextInput>,
    token_input: Entity<TextInput>,
}

impl SettingsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = SettingsController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;
        let config = entities.config.read(cx).config.clone();

        let url_input = text_input(
            "settings-url",
            config.backend.url.clone(),
            "http://localhost:8000",
            cx,
        );
        // Prefill the decrypted token so saving without edits keeps it
        let token = config.backend.token().unwrap_or_default().unwrap_or_default();
        let token_input = text_input("settings-token", token, t(locale, "settings-token"), cx);
        token_input.update(cx, |input, _| input.set_masked(true));

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.connection, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            url_input,
            token_input,
        }
    }

    fn field_row(label: SharedString, field: impl IntoElement) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .w(px(130.0))
                    .text_sm()
                    .text_color(TchColors::text_secondary())
                    .child(label),
            )
            .child(field)
    }

    fn render_connection_status(&self, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let connection = self.entities.connection.read(cx);
        let checking = connection.checking;

        div().flex().items_center().gap_3().children(
            [ConnectionTarget::Backend, ConnectionTarget::TeddyCloud]
                .iter()
                .map(|target| {
                    let status = connection.get_status(*target);
                    let connected = status.map(|s| s.connected).unwrap_or(false);
                    let (color, key) = if checking {
                        (TchColors::text_muted(), "status-checking")
                    } else if connected {
                        (TchColors::success(), "status-connected")
                    } else {
                        (TchColors::danger(), "status-disconnected")
                    };
                    // Probe error message, shown next to a failed status
                    let detail = (!checking && !connected)
                        .then(|| status.and_then(|s| s.detail.clone()))
                        .flatten();
                    div()
                        .flex()
                        .items_center()
                        .gap_1()
                        .text_sm()
                        .child(
                            div()
                                .text_color(TchColors::text_secondary())
                                .child(t(locale, target.label_key())),
                        )
                        .child(div().text_color(color).child(t(locale, key)))
                        .when_some(detail, |el, detail| {
                            el.child(
                                div()
                                    .text_color(TchColors::text_muted())
                                    .text_size(px(12.0))
                                    .max_w(px(260.0))
                                    .overflow_hidden()
                                    .child(detail),
                            )
                        })
                }),
        )
    }

    fn render_language_select(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let options = [Locale::DeDE, Locale::EnUS]
            .iter()
            .map(|l| SelectOption::new(l.code(), l.display_name()))
            .collect();
        Select::new("settings-language")
            .options(options)
            .selected(locale.code())
            .on_change(|value, _window, cx| {
                let entities = cx.global::<AppEntities>().clone();
                SettingsController::new(entities).set_language(Locale::from_code(value), cx);
            })
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let saving = self.entities.config.read(cx).saving;
        let checking = self.entities.connection.read(cx).checking;

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "settings-title")),
            )
            // Backend connection card
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .p_4()
                    .rounded_md()
                    .bg(TchColors::content_bg())
                    .border_1()
                    .border_color(TchColors::border())
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(t(locale, "settings-backend")),
                    )
                    .child(Self::field_row(
                        t(locale, "settings-url"),
                        self.url_input.clone(),
                    ))
                    .child(Self::field_row(
                        t(locale, "settings-token"),
                        self.token_input.clone(),
                    ))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Button::primary("settings-save", t(locale, "action-save"))
                                    .loading(saving)
                                    .on_click(cx.listener(
                                        |this, _event: &ClickEvent, _window, cx| {
                                            let url =
                                                this.url_input.read(cx).value().to_string();
                                            let token =
                                                this.token_input.read(cx).value().to_string();
                                            this.controller.save_backend(url, token, cx);
                                        },
                                    )),
                            )
                            .child(
                                Button::secondary("settings-test", t(locale, "settings-test"))
                                    .size(ButtonSize::Medium)
                                    .loading(checking)
                                    .on_click(cx.listener(
                                        |this, _event: &ClickEvent, _window, cx| {
                                            this.controller.test_connection(cx);
                                        },
                                    )),
                            ),
                    )
                    .child(self.render_connection_status(locale, cx)),
            )
            // Language card
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .p_4()
                    .rounded_md()
                    .bg(TchColors::content_bg())
                    .border_1()
                    .border_color(TchColors::border())
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(t(locale, "settings-language")),
                    )
                    .child(self.render_language_select(cx)),
            )
    }
}
