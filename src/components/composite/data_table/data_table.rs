//! DataTable Component
//!
//! A data table entity with a selection predicate so callers can highlight
//! selected rows without owning render state.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::TchColors;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    loading_message: SharedString,
    /// Rows for which this returns true get the selected background
    selected: Option<Box<dyn Fn(&R) -> bool + Send + Sync>>,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 36.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            loading_message: "Loading...".into(),
            selected: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Set the loading message
    pub fn set_loading_message(&mut self, message: impl Into<SharedString>) {
        self.loading_message = message.into();
    }

    /// Set the row selection predicate
    pub fn set_selected(&mut self, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) {
        self.selected = Some(Box::new(predicate));
    }

    fn column_width_style(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min } => min.unwrap_or(100.0),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(TchColors::table_header_bg())
            .border_b_1()
            .border_color(TchColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width_style(&col.width);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(TchColors::text_primary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let is_selected = self.selected.as_ref().map(|p| p(row)).unwrap_or(false);
        let bg = if is_selected {
            TchColors::table_row_selected()
        } else if index % 2 == 0 {
            TchColors::content_bg()
        } else {
            TchColors::table_row_alt()
        };

        div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(TchColors::table_row_hover()))
            .border_b_1()
            .border_color(TchColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width_style(&col.width);
                let cell_content = col.render_cell(row);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .text_color(TchColors::text_primary())
                    .overflow_hidden()
                    .child(cell_content)
            }))
    }

    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(TchColors::text_muted())
            .child(self.empty_message.clone())
    }

    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(TchColors::text_muted())
            .child(self.loading_message.clone())
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(TchColors::content_bg())
            .border_1()
            .border_color(TchColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        table
    }
}
