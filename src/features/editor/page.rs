//! Editor Page
//!
//! Shows the parsed TAF header, the editable series/episode/language
//! fields, cover suggestions and the create action.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::metadata::CoverImage;
use crate::features::editor::controller::EditorController;
use crate::helpers::string::format_size;
use crate::i18n::{t, Locale};
use crate::state::editor_state::EditorState;
use crate::theme::colors::TchColors;

const LANGUAGES: [&str; 3] = ["de-de", "en-us", "fr-fr"];

/// Editor page component
pub struct EditorPage {
    entities: AppEntities,
    controller: EditorController,
    series_input: Entity<TextInput>,
    episode_input: Entity<TextInput>,
}

impl EditorPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = EditorController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;
        let (series, episode) = {
            let editor = entities.editor.read(cx);
            (editor.series.clone(), editor.episode.clone())
        };

        let series_input = text_input("editor-series", series, t(locale, "editor-series"), cx);
        series_input.update(cx, |input, _| {
            input.on_change(|value, cx| {
                let entities = cx.global::<AppEntities>().clone();
                EditorController::new(entities).set_series(value.to_string(), cx);
            });
        });

        let episode_input = text_input("editor-episode", episode, t(locale, "editor-episode"), cx);
        episode_input.update(cx, |input, _| {
            input.on_change(|value, cx| {
                let entities = cx.global::<AppEntities>().clone();
                EditorController::new(entities).set_episode(value.to_string(), cx);
            });
        });

        // Prefills from a metadata parse have to land in the inputs
        let series_clone = series_input.clone();
        let episode_clone = episode_input.clone();
        cx.observe(&entities.editor, move |_this, editor, cx| {
            let (series, episode) = {
                let editor = editor.read(cx);
                (editor.series.clone(), editor.episode.clone())
            };
            series_clone.update(cx, |input, cx| {
                if input.value() != series {
                    input.set_value(series);
                    cx.notify();
                }
            });
            episode_clone.update(cx, |input, cx| {
                if input.value() != episode {
                    input.set_value(episode);
                    cx.notify();
                }
            });
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        Self {
            entities,
            controller,
            series_input,
            episode_input,
        }
    }

    fn info_row(label: SharedString, value: String) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .w(px(110.0))
                    .text_sm()
                    .text_color(TchColors::text_secondary())
                    .child(label),
            )
            .child(div().text_sm().child(value))
    }

    fn render_file_info(&self, editor: &EditorState, locale: Locale) -> impl IntoElement {
        let metadata = editor.metadata.as_ref();
        div()
            .flex()
            .flex_col()
            .gap_1()
            .p_3()
            .rounded_md()
            .bg(TchColors::content_bg())
            .border_1()
            .border_color(TchColors::border())
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(t(locale, "editor-file-info")),
            )
            .child(Self::info_row(
                t(locale, "editor-audio-id"),
                metadata
                    .and_then(|m| m.audio_id)
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".into()),
            ))
            .child(Self::info_row(
                t(locale, "editor-hash"),
                metadata
                    .and_then(|m| m.hash.clone())
                    .unwrap_or_else(|| "-".into()),
            ))
            .child(Self::info_row(
                t(locale, "editor-size"),
                metadata
                    .map(|m| format_size(m.size))
                    .unwrap_or_else(|| "-".into()),
            ))
            .child(Self::info_row(
                t(locale, "editor-track-count"),
                metadata
                    .and_then(|m| m.track_count)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".into()),
            ))
    }

    fn render_cover_card(
        &self,
        index: usize,
        cover: &CoverImage,
        selected: bool,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let border = if selected {
            TchColors::accent_blue()
        } else {
            TchColors::border()
        };
        let cover_clone = cover.clone();
        div()
            .id(SharedString::from(format!("cover-{index}")))
            .w(px(180.0))
            .p_2()
            .flex()
            .flex_col()
            .gap_1()
            .rounded_md()
            .border_2()
            .border_color(border)
            .bg(TchColors::content_bg())
            .cursor_pointer()
            .hover(|s| s.bg(TchColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.select_cover(cover_clone.clone(), cx);
            }))
            .child(
                div()
                    .text_sm()
                    .overflow_hidden()
                    .child(if cover.title.is_empty() {
                        cover.url.clone()
                    } else {
                        cover.title.clone()
                    }),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .text_size(px(11.0))
                    .text_color(TchColors::text_secondary())
                    .child(cover.source.clone())
                    .child(format!("{:.0}%", cover.score)),
            )
            .when_some(
                cover.width.zip(cover.height),
                |el, (w, h)| {
                    el.child(
                        div()
                            .text_size(px(11.0))
                            .text_color(TchColors::text_muted())
                            .child(format!("{w}×{h}")),
                    )
                },
            )
    }

    fn render_covers(&self, editor: &EditorState, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let mut section = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(t(locale, "editor-covers")),
                    )
                    .child(
                        Button::secondary("search-covers", t(locale, "editor-search-covers"))
                            .size(ButtonSize::Small)
                            .loading(editor.searching_covers)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.search_covers(cx);
                            })),
                    ),
            );

        if editor.covers.is_empty() && !editor.searching_covers {
            section = section.child(
                div()
                    .text_sm()
                    .text_color(TchColors::text_muted())
                    .child(t(locale, "editor-no-covers")),
            );
        } else {
            section = section.child(
                div().flex().flex_wrap().gap_2().children(
                    editor
                        .covers
                        .iter()
                        .enumerate()
                        .map(|(i, cover)| {
                            let selected = editor.selected_cover.as_ref() == Some(cover);
                            self.render_cover_card(i, cover, selected, cx)
                        })
                        .collect::<Vec<_>>(),
                ),
            );
        }

        if editor.selected_cover.is_some() {
            let label = match &editor.downloaded_pic {
                Some(path) => SharedString::from(path.clone()),
                None => t(locale, "action-save"),
            };
            section = section.child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::secondary("download-cover", label)
                            .size(ButtonSize::Small)
                            .loading(editor.downloading_cover)
                            .disabled(editor.downloaded_pic.is_some())
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.download_cover(cx);
                            })),
                    )
                    .when(editor.downloaded_pic.is_some(), |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(TchColors::success())
                                .child("✓"),
                        )
                    }),
            );
        }

        section
    }

    fn render_language_select(&self, editor: &EditorState) -> impl IntoElement {
        let options = LANGUAGES
            .iter()
            .map(|l| SelectOption::new(*l, *l))
            .collect();
        Select::new("editor-language")
            .options(options)
            .selected(editor.language.clone())
            .on_change(|value, _window, cx| {
                let entities = cx.global::<AppEntities>().clone();
                EditorController::new(entities).set_language(value.to_string(), cx);
            })
    }
}

impl Render for EditorPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let editor = self.entities.editor.read(cx).clone();

        if editor.taf_path.is_none() {
            return div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .text_color(TchColors::text_muted())
                .child(t(locale, "editor-no-file"));
        }

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .overflow_hidden()
            // Header: title and filename
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t(locale, "editor-title")),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(TchColors::text_secondary())
                            .child(editor.taf_name.clone()),
                    )
                    .when(editor.parsing, |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(TchColors::text_muted())
                                .child(t(locale, "table-loading")),
                        )
                    }),
            )
            .child(self.render_file_info(&editor, locale))
            // Editable metadata
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(t(locale, "editor-metadata")),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.series_input.clone())
                            .child(self.episode_input.clone())
                            .child(self.render_language_select(&editor)),
                    ),
            )
            .child(self.render_covers(&editor, locale, cx))
            // Error banner
            .when_some(editor.last_error.clone(), |el, error| {
                el.child(
                    div()
                        .px_3()
                        .py_2()
                        .rounded_md()
                        .bg(gpui::rgba(0xfee2e2ff))
                        .text_sm()
                        .text_color(TchColors::danger())
                        .child(error),
                )
            })
            // Success banner
            .when_some(editor.created_model.clone(), |el, model| {
                el.child(
                    div()
                        .px_3()
                        .py_2()
                        .rounded_md()
                        .bg(gpui::rgba(0xdcfce7ff))
                        .text_sm()
                        .text_color(TchColors::success())
                        .child(format!("{} ({model})", t(locale, "editor-created"))),
                )
            })
            // Create action
            .child(
                div().child(
                    Button::primary("create-tag", t(locale, "action-create"))
                        .disabled(!editor.can_create())
                        .loading(editor.creating)
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.create_tag(cx);
                        })),
                ),
            )
    }
}
