//! Library Page
//!
//! The paginated TAF listing with link status, row selection and the
//! batch wizard entry point.

use gpui::{
    div, prelude::*, App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::DataTable;
use crate::components::composite::data_table::pagination::Pagination;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::constants::PAGE_SIZE_OPTIONS;
use crate::domain::library::{LinkFilter, TafFileWithTonie};
use crate::features::library::controller::LibraryController;
use crate::helpers::string::format_size;
use crate::i18n::{t, Locale};
use crate::theme::colors::TchColors;

/// A table row: the file plus its current selection flag
#[derive(Clone)]
pub struct LibraryRow {
    pub file: TafFileWithTonie,
    pub selected: bool,
}

/// Library page component
pub struct LibraryPage {
    entities: AppEntities,
    controller: LibraryController,
    table: Entity<DataTable<LibraryRow>>,
    search_input: Entity<TextInput>,
}

impl LibraryPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = LibraryController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let table = cx.new(|cx| {
            let mut table = DataTable::<LibraryRow>::new(cx);
            table.set_columns(Self::create_columns(locale));
            table.set_selected(|row| row.selected);
            table.set_empty_message(t(locale, "table-no-data"));
            table.set_loading_message(t(locale, "table-loading"));
            table
        });

        let search_query = entities.library.read(cx).search_query.clone();
        let search_input = text_input(
            "library-search",
            search_query,
            t(locale, "library-search-placeholder"),
            cx,
        );
        search_input.update(cx, |input, _| {
            input.on_change(|query, cx| {
                let entities = cx.global::<AppEntities>().clone();
                LibraryController::new(entities).set_search_query(query.to_string(), cx);
            });
        });

        // Rows depend on both the listing and the selection
        let table_clone = table.clone();
        let entities_clone = entities.clone();
        cx.observe(&entities.library, move |_this, _, cx| {
            Self::sync_rows(&entities_clone, &table_clone, cx);
            cx.notify();
        })
        .detach();

        let table_clone = table.clone();
        let entities_clone = entities.clone();
        cx.observe(&entities.selection, move |_this, _, cx| {
            Self::sync_rows(&entities_clone, &table_clone, cx);
            cx.notify();
        })
        .detach();

        let table_clone = table.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            table_clone.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(locale));
                table.set_empty_message(t(locale, "table-no-data"));
                table.set_loading_message(t(locale, "table-loading"));
                cx.notify();
            });
        })
        .detach();

        Self {
            entities,
            controller,
            table,
            search_input,
        }
    }

    fn sync_rows(entities: &AppEntities, table: &Entity<DataTable<LibraryRow>>, cx: &mut App) {
        let (rows, loading) = {
            let library = entities.library.read(cx);
            let selection = entities.selection.read(cx);
            let rows: Vec<LibraryRow> = library
                .visible_files()
                .into_iter()
                .map(|file| LibraryRow {
                    selected: selection.is_selected(&file.path),
                    file: file.clone(),
                })
                .collect();
            (rows, library.loading)
        };
        table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_loading(loading);
            cx.notify();
        });
    }

    fn create_columns(locale: Locale) -> Vec<Column<LibraryRow>> {
        vec![
            Column::new("select", t(locale, "col-select"), |row: &LibraryRow| {
                let path = row.file.path.clone();
                Checkbox::new(SharedString::from(format!("select-{path}")))
                    .checked(row.selected)
                    .disabled(row.file.is_linked)
                    .on_change(move |_checked, _window, cx| {
                        let entities = cx.global::<AppEntities>().clone();
                        LibraryController::new(entities).toggle_selection(&path, cx);
                    })
                    .into_any_element()
            })
            .fixed_width(44.0),
            Column::new("filename", t(locale, "col-filename"), |row: &LibraryRow| {
                let file = row.file.clone();
                div()
                    .id(SharedString::from(format!("open-{}", file.path)))
                    .text_sm()
                    .cursor_pointer()
                    .hover(|s| s.text_color(TchColors::accent_blue()))
                    .on_click({
                        let file = file.clone();
                        move |_event: &ClickEvent, _window, cx| {
                            let entities = cx.global::<AppEntities>().clone();
                            LibraryController::new(entities).open_editor(&file, cx);
                        }
                    })
                    .child(file.name.clone())
                    .into_any_element()
            })
            .fixed_width(320.0),
            Column::new("size", t(locale, "col-size"), |row: &LibraryRow| {
                div()
                    .text_sm()
                    .text_color(TchColors::text_secondary())
                    .child(format_size(row.file.size))
                    .into_any_element()
            })
            .fixed_width(90.0),
            Column::new("audio_id", t(locale, "col-audio-id"), |row: &LibraryRow| {
                match row.file.audio_id {
                    Some(audio_id) => div()
                        .text_sm()
                        .text_color(TchColors::text_secondary())
                        .child(audio_id.to_string())
                        .into_any_element(),
                    None => {
                        let path = row.file.path.clone();
                        div()
                            .id(SharedString::from(format!("parse-{path}")))
                            .text_sm()
                            .text_color(TchColors::text_muted())
                            .cursor_pointer()
                            .hover(|s| s.text_color(TchColors::accent_blue()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                let entities = cx.global::<AppEntities>().clone();
                                LibraryController::new(entities).parse_header(&path, cx);
                            })
                            .child("…")
                            .into_any_element()
                    }
                }
            })
            .fixed_width(110.0),
            Column::new("tracks", t(locale, "col-tracks"), |row: &LibraryRow| {
                div()
                    .text_sm()
                    .text_color(TchColors::text_secondary())
                    .child(
                        row.file
                            .track_count
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    )
                    .into_any_element()
            })
            .fixed_width(70.0),
            Column::new("status", t(locale, "col-status"), move |row: &LibraryRow| {
                let (color, key) = if row.file.is_linked {
                    (TchColors::success(), "library-linked")
                } else {
                    (TchColors::warning(), "library-orphaned")
                };
                div()
                    .text_sm()
                    .text_color(color)
                    .child(t(locale, key))
                    .into_any_element()
            })
            .fixed_width(100.0),
            Column::new("tonie", t(locale, "col-tonie"), |row: &LibraryRow| {
                match &row.file.linked_tonie {
                    Some(tonie) => div()
                        .text_sm()
                        .child(format!(
                            "{} — {}",
                            tonie.display_label(),
                            tonie.episodes.clone().unwrap_or_default()
                        ))
                        .into_any_element(),
                    None => div()
                        .text_sm()
                        .text_color(TchColors::text_muted())
                        .child("-")
                        .into_any_element(),
                }
            })
            .flex_width(Some(220.0)),
        ]
    }

    fn render_filter_select(&self, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let filter = self.entities.library.read(cx).filter;
        let options = LinkFilter::all()
            .iter()
            .map(|f| SelectOption::new(f.as_query_value(), t(locale, f.label_key())))
            .collect();

        Select::new("link-filter")
            .options(options)
            .selected(filter.as_query_value())
            .on_change(|value, _window, cx| {
                let filter = match value {
                    "linked" => LinkFilter::Linked,
                    "orphaned" => LinkFilter::Orphaned,
                    _ => LinkFilter::All,
                };
                let entities = cx.global::<AppEntities>().clone();
                LibraryController::new(entities).set_filter(filter, cx);
            })
    }

    fn render_page_size_select(&self, cx: &Context<Self>) -> impl IntoElement {
        let page_size = self.entities.library.read(cx).page_size;
        let options = PAGE_SIZE_OPTIONS
            .iter()
            .map(|n| SelectOption::new(n.to_string(), n.to_string()))
            .collect();

        Select::new("page-size")
            .options(options)
            .selected(page_size.to_string())
            .on_change(|value, _window, cx| {
                if let Ok(size) = value.parse::<usize>() {
                    let entities = cx.global::<AppEntities>().clone();
                    LibraryController::new(entities).set_page_size(size, cx);
                }
            })
    }
}

impl Render for LibraryPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let library = self.entities.library.read(cx);
        let loading = library.loading;
        let selected_count = self.entities.selection.read(cx).len();

        let (linked, orphaned, filtered, page, total_pages, has_prev, has_next) = library
            .response
            .as_ref()
            .map(|r| {
                (
                    r.linked_count,
                    r.orphaned_count,
                    r.filtered_count,
                    r.page,
                    r.total_pages(),
                    r.has_prev,
                    r.has_next,
                )
            })
            .unwrap_or((0, 0, 0, 1, 1, false, false));
        let last_error = library.last_error.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Header row: title, counts, refresh
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(t(locale, "library-title")),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(TchColors::text_secondary())
                                    .child(format!(
                                        "{linked} {} · {orphaned} {} · {selected_count} {}",
                                        t(locale, "library-linked"),
                                        t(locale, "library-orphaned"),
                                        t(locale, "library-selected"),
                                    )),
                            ),
                    )
                    .child(
                        Button::primary("refresh-btn", t(locale, "action-refresh"))
                            .loading(loading)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            })),
                    ),
            )
            // Toolbar: search, filters, selection actions
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(self.search_input.clone())
                    .child(self.render_filter_select(locale, cx))
                    .child(self.render_page_size_select(cx))
                    .child(div().flex_1())
                    .child(
                        Button::secondary("select-all-orphaned", t(locale, "library-select-all-orphaned"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.select_all_orphaned(cx);
                            })),
                    )
                    .child(
                        Button::ghost("clear-selection", t(locale, "library-clear-selection"))
                            .size(ButtonSize::Small)
                            .disabled(selected_count == 0)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.clear_selection(cx);
                            })),
                    )
                    .child(
                        Button::new("batch-start", t(locale, "library-batch-start"))
                            .variant(ButtonVariant::Primary)
                            .disabled(selected_count == 0)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.start_wizard(cx);
                            })),
                    ),
            )
            // Error banner
            .when_some(last_error, |el, error| {
                el.child(
                    div()
                        .w_full()
                        .px_3()
                        .py_2()
                        .rounded_md()
                        .bg(gpui::rgba(0xfee2e2ff))
                        .text_sm()
                        .text_color(TchColors::danger())
                        .child(error),
                )
            })
            // Table
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
            // Pagination
            .child(
                Pagination::new(page, total_pages, filtered)
                    .items_label(t(locale, "table-items"))
                    .availability(has_prev, has_next)
                    .on_prev(|_event, _window, cx| {
                        let entities = cx.global::<AppEntities>().clone();
                        LibraryController::new(entities).prev_page(cx);
                    })
                    .on_next(|_event, _window, cx| {
                        let entities = cx.global::<AppEntities>().clone();
                        LibraryController::new(entities).next_page(cx);
                    }),
            )
    }
}
