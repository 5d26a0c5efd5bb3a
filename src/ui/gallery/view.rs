// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery grid.
//!
//! Photos are laid out in fixed three-column rows inside a scrollable.
//! Every cell is wrapped in [`measured`] so its on-screen rectangle feeds
//! the frame map used for drag hit-testing.

use crate::media::Photo;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::gallery::component::{Message, State, COLUMNS};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::measured;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, scrollable, text, Column, Row, Space};
use iced::{Background, Border, Element, Length};

/// Renders the grid for the current photo list.
pub fn view<'a>(state: &'a State, scheme: ColorScheme) -> Element<'a, Message> {
    if state.photos().is_empty() {
        return empty_state(scheme);
    }

    let mut grid = Column::new().spacing(spacing::XS).padding(spacing::XS);

    for chunk in state.photos().chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);

        for photo in chunk {
            row = row.push(cell(state, photo, scheme));
        }
        // Keep cell widths stable on a partial last row.
        for _ in chunk.len()..COLUMNS {
            row = row.push(Space::new().width(Length::Fill).height(Length::Shrink));
        }

        grid = grid.push(row);
    }

    scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset()))
        .into()
}

fn cell<'a>(state: &'a State, photo: &'a Photo, scheme: ColorScheme) -> Element<'a, Message> {
    let id = photo.id;
    let selected = state.selection().is_selected(id);

    let content: Element<'a, Message> = match state.thumbnail(id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_CELL_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => text(photo.file_name())
            .size(typography::CAPTION)
            .color(scheme.text_secondary)
            .into(),
    };

    let framed = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_CELL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(scheme.card)),
            border: Border {
                color: if selected { scheme.accent } else { scheme.border },
                width: if selected { 3.0 } else { 1.0 },
                radius: radius::SM.into(),
            },
            ..container::Style::default()
        });

    measured(framed, move |bounds| Message::CellMeasured { id, bounds }).into()
}

fn empty_state<'a>(scheme: ColorScheme) -> Element<'a, Message> {
    container(
        text("No photos yet. Open a folder to get started.")
            .size(typography::BODY)
            .color(scheme.text_secondary),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}
