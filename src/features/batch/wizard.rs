//! Batch Wizard Modal
//!
//! Renders the four wizard steps inside a wide modal. Review rows offer
//! the catalog candidates, any external cover hits and a manual fallback.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::batch::{MatchStatus, SelectionSource, TafMatchResult};
use crate::domain::metadata::CoverImage;
use crate::features::batch::controller::BatchController;
use crate::i18n::{t, Locale};
use crate::state::wizard_state::{WizardState, WizardStep};
use crate::theme::colors::TchColors;

/// Batch wizard modal component
pub struct BatchWizard {
    entities: AppEntities,
    controller: BatchController,
}

impl BatchWizard {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = BatchController::new(entities.clone());

        cx.observe(&entities.wizard, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        Self { entities, controller }
    }

    fn render_step_indicator(&self, current: WizardStep, locale: Locale) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .children(WizardStep::all().iter().enumerate().map(|(i, step)| {
                let reached = i <= current.index();
                let (bg, fg) = if reached {
                    (TchColors::accent(), TchColors::button_primary_text())
                } else {
                    (TchColors::table_row_alt(), TchColors::text_muted())
                };
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .size(px(22.0))
                            .rounded_full()
                            .bg(bg)
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(12.0))
                            .text_color(fg)
                            .child(format!("{}", i + 1)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(if reached {
                                TchColors::text_primary()
                            } else {
                                TchColors::text_muted()
                            })
                            .child(t(locale, step.label_key())),
                    )
            }))
    }

    fn status_badge(status: MatchStatus, locale: Locale) -> impl IntoElement {
        let color = match status {
            MatchStatus::AutoMatched => TchColors::success(),
            MatchStatus::NeedsReview => TchColors::warning(),
            MatchStatus::Unmatched => TchColors::danger(),
        };
        div()
            .px_2()
            .rounded_sm()
            .text_size(px(11.0))
            .text_color(color)
            .border_1()
            .border_color(color)
            .child(t(locale, status.label_key()))
    }

    fn candidate_chip(
        &self,
        result: &TafMatchResult,
        candidate_index: usize,
        selected: bool,
        locale: Locale,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let candidate = result.candidates[candidate_index].clone();
        let result_clone = result.clone();
        let border = if selected {
            TchColors::accent_blue()
        } else {
            TchColors::border()
        };
        let mut label = candidate.series.clone();
        if let Some(episodes) = &candidate.episodes {
            label.push_str(" — ");
            label.push_str(episodes);
        }
        div()
            .id(SharedString::from(format!(
                "candidate-{}-{candidate_index}",
                result.taf_path
            )))
            .px_2()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(border)
            .cursor_pointer()
            .hover(|s| s.bg(TchColors::table_row_hover()))
            .flex()
            .items_center()
            .gap_1()
            .text_size(px(12.0))
            .child(label)
            .child(
                div()
                    .text_color(TchColors::text_secondary())
                    .child(format!(
                        "{} {:.0}%",
                        t(locale, candidate.match_type.label_key()),
                        candidate.confidence * 100.0
                    )),
            )
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.select_candidate(&result_clone, &candidate, cx);
            }))
    }

    fn cover_chip(
        &self,
        result: &TafMatchResult,
        cover: &CoverImage,
        selected: bool,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let result_clone = result.clone();
        let cover_clone = cover.clone();
        let border = if selected {
            TchColors::accent_blue()
        } else {
            TchColors::border()
        };
        div()
            .id(SharedString::from(format!("cover-{}", result.taf_path)))
            .px_2()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(border)
            .cursor_pointer()
            .hover(|s| s.bg(TchColors::table_row_hover()))
            .text_size(px(12.0))
            .child(format!(
                "{} ({:.0}%)",
                if cover.title.is_empty() {
                    cover.source.clone()
                } else {
                    cover.title.clone()
                },
                cover.score
            ))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.select_cover(&result_clone, &cover_clone, cx);
            }))
    }

    fn render_review_row(
        &self,
        wizard: &WizardState,
        result: &TafMatchResult,
        locale: Locale,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let selection = wizard.selection_for(&result.taf_path).cloned();
        let skipped = wizard.is_skipped(&result.taf_path);
        let best_cover = wizard
            .metadata
            .as_ref()
            .and_then(|m| m.results.get(&result.taf_path))
            .and_then(|item| item.best_cover.clone());

        let mut chips = div().flex().flex_wrap().items_center().gap_2();
        for (i, _) in result.candidates.iter().enumerate().take(3) {
            let selected = selection
                .as_ref()
                .map(|s| {
                    s.source == SelectionSource::ToniesJson
                        && s.tonie_index == Some(result.candidates[i].tonie_index)
                })
                .unwrap_or(false);
            chips = chips.child(self.candidate_chip(result, i, selected, locale, cx));
        }
        if let Some(cover) = &best_cover {
            let selected = selection
                .as_ref()
                .map(|s| !s.pic_url.is_empty() && s.pic_url == cover.url)
                .unwrap_or(false);
            chips = chips.child(self.cover_chip(result, cover, selected, cx));
        }
        if result.parsed_series.is_some() {
            let selected = selection
                .as_ref()
                .map(|s| s.source == SelectionSource::Manual && s.pic_url.is_empty())
                .unwrap_or(false);
            let result_clone = result.clone();
            chips = chips.child(
                div()
                    .id(SharedString::from(format!("manual-{}", result.taf_path)))
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(if selected {
                        TchColors::accent_blue()
                    } else {
                        TchColors::border()
                    })
                    .cursor_pointer()
                    .hover(|s| s.bg(TchColors::table_row_hover()))
                    .text_size(px(12.0))
                    .child(t(locale, "batch-source-manual"))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.controller.select_manual(&result_clone, cx);
                    })),
            );
        }

        let taf_path = result.taf_path.clone();
        div()
            .flex()
            .flex_col()
            .gap_1()
            .py_2()
            .border_b_1()
            .border_color(TchColors::border())
            .opacity(if skipped { 0.5 } else { 1.0 })
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().text_sm().child(result.taf_name.clone()))
                            .child(Self::status_badge(result.status(), locale))
                            .when(selection.is_some(), |el| {
                                el.child(
                                    div()
                                        .text_sm()
                                        .text_color(TchColors::success())
                                        .child("✓"),
                                )
                            }),
                    )
                    .child(
                        Button::ghost(
                            SharedString::from(format!("skip-{}", result.taf_path)),
                            t(locale, "batch-skip"),
                        )
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.controller.skip(&taf_path, cx);
                        })),
                    ),
            )
            .child(chips)
    }

    fn render_review(&self, wizard: &WizardState, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let results = wizard
            .analysis
            .as_ref()
            .map(|a| a.results.clone())
            .unwrap_or_default();
        let can_advance = wizard.review_complete();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .when(wizard.searching_metadata, |el| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(TchColors::text_muted())
                        .child(t(locale, "batch-searching")),
                )
            })
            .child(
                div()
                    .id("review-rows")
                    .max_h(px(420.0))
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .children(
                        results
                            .iter()
                            .map(|r| self.render_review_row(wizard, r, locale, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::primary("review-next", t(locale, "action-next"))
                            .disabled(!can_advance)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.advance_to_confirm(cx);
                            })),
                    ),
            )
    }

    fn render_confirm(&self, wizard: &WizardState, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let selections = wizard.confirmed_selections();
        let count = selections.len();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(format!("{} ({count})", t(locale, "batch-summary"))),
            )
            .child(
                div()
                    .id("confirm-rows")
                    .max_h(px(420.0))
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .children(selections.into_iter().map(|s| {
                        let source_label: SharedString = match s.source {
                            SelectionSource::ToniesJson => t(locale, "batch-source-catalog"),
                            SelectionSource::Musicbrainz => "MusicBrainz".into(),
                            SelectionSource::Itunes => "iTunes".into(),
                            SelectionSource::Manual => t(locale, "batch-source-manual"),
                        };
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .py_1()
                            .border_b_1()
                            .border_color(TchColors::border())
                            .child(
                                div().text_sm().child(format!("{} — {}", s.series, s.episodes)),
                            )
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .child(
                                        div()
                                            .text_size(px(11.0))
                                            .text_color(TchColors::text_secondary())
                                            .child(s.taf_path),
                                    )
                                    .child(
                                        div()
                                            .text_size(px(11.0))
                                            .text_color(TchColors::text_muted())
                                            .child(source_label),
                                    ),
                            )
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        Button::secondary("confirm-back", t(locale, "action-back"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.back_to_review(cx);
                            })),
                    )
                    .child(
                        Button::primary("confirm-process", t(locale, "batch-step-process"))
                            .disabled(count == 0)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.process(cx);
                            })),
                    ),
            )
    }

    fn render_process(&self, wizard: &WizardState, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let mut section = div().flex().flex_col().gap_2();

        if wizard.processing {
            return section.child(
                div()
                    .py_8()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(TchColors::text_muted())
                    .child(t(locale, "batch-processing")),
            );
        }

        if let Some(report) = &wizard.report {
            section = section
                .child(
                    div().text_sm().font_weight(gpui::FontWeight::MEDIUM).child(format!(
                        "{} {}, {} {}",
                        report.successful,
                        t(locale, "batch-succeeded"),
                        report.failed,
                        t(locale, "batch-failed"),
                    )),
                )
                .child(
                    div()
                        .id("report-rows")
                        .max_h(px(420.0))
                        .overflow_y_scroll()
                        .flex()
                        .flex_col()
                        .children(report.items.iter().map(|item| {
                            let (mark, color, detail) = if item.success {
                                (
                                    "✓",
                                    TchColors::success(),
                                    item.model_number.clone().unwrap_or_default(),
                                )
                            } else {
                                (
                                    "✗",
                                    TchColors::danger(),
                                    item.error.clone().unwrap_or_default(),
                                )
                            };
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .py_1()
                                .border_b_1()
                                .border_color(TchColors::border())
                                .child(div().text_sm().text_color(color).child(mark))
                                .child(div().text_sm().child(item.taf_path.clone()))
                                .child(
                                    div()
                                        .text_size(px(11.0))
                                        .text_color(TchColors::text_secondary())
                                        .child(detail),
                                )
                        })),
                );
        }

        section.child(
            div().flex().items_center().justify_end().child(
                Button::primary("process-done", t(locale, "batch-done")).on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.close(cx);
                    },
                )),
            ),
        )
    }
}

impl Render for BatchWizard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let wizard = self.entities.wizard.read(cx).clone();

        if !wizard.open {
            return div().into_any_element();
        }

        let content: gpui::AnyElement = match wizard.step {
            WizardStep::Analyze => div()
                .py_8()
                .flex()
                .items_center()
                .justify_center()
                .text_color(TchColors::text_muted())
                .child(t(locale, "batch-analyzing"))
                .into_any_element(),
            WizardStep::Review => self.render_review(&wizard, locale, cx).into_any_element(),
            WizardStep::Confirm => self.render_confirm(&wizard, locale, cx).into_any_element(),
            WizardStep::Process => self.render_process(&wizard, locale, cx).into_any_element(),
        };

        let mut modal = Modal::new(t(locale, "batch-title"))
            .max_width(900.0)
            .on_close(|cx| {
                let entities = cx.global::<AppEntities>().clone();
                BatchController::new(entities).close(cx);
            })
            .child(self.render_step_indicator(wizard.step, locale));

        // No closing mid-run; the processing report re-enables it.
        if wizard.processing {
            modal = modal.hide_close_button();
        }

        if let Some(error) = &wizard.last_error {
            modal = modal.child(
                div()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(gpui::rgba(0xfee2e2ff))
                    .text_sm()
                    .text_color(TchColors::danger())
                    .child(error.clone()),
            );
        }

        modal.child(content).into_any_element()
    }
}
