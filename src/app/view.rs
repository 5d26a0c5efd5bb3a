// SPDX-License-Identifier: MPL-2.0
//! Top-level view routing and the gallery toolbar.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{gallery, settings, viewer};
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Background, Element, Length};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let scheme = self.theme.colors();

        let content: Element<'_, Message> = match self.screen {
            Screen::Gallery => self.gallery_screen(scheme),
            Screen::Viewer(id) => match self.gallery.photo(id) {
                Some(photo) => viewer::view(photo, scheme).map(Message::Viewer),
                // The photo list was replaced under us; fall back.
                None => self.gallery_screen(scheme),
            },
            Screen::Settings => settings::view(settings::ViewContext {
                mode: self.theme.mode(),
                scheme,
            })
            .map(Message::Settings),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(scheme.background)),
                ..container::Style::default()
            })
            .into()
    }

    fn gallery_screen(&self, scheme: ColorScheme) -> Element<'_, Message> {
        Column::new()
            .push(self.toolbar(scheme))
            .push(gallery::view(&self.gallery, scheme).map(Message::Gallery))
            .into()
    }

    fn toolbar(&self, scheme: ColorScheme) -> Element<'_, Message> {
        let open_folder = button(text("Open Folder").size(typography::BODY))
            .on_press(Message::OpenFolderDialog);

        let mut bar = Row::new()
            .push(open_folder)
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .spacing(spacing::XS)
            .align_y(Vertical::Center);

        let selection = self.gallery.selection();
        if selection.is_active() {
            let count = text(format!("{} selected", selection.len()))
                .size(typography::CAPTION)
                .color(scheme.text_secondary);
            let clear =
                button(text("Clear").size(typography::BODY)).on_press(Message::ClearSelection);
            bar = bar.push(count).push(clear);
        }

        let open_settings =
            button(text("Settings").size(typography::BODY)).on_press(Message::OpenSettings);
        bar = bar.push(open_settings);

        container(bar)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(scheme.background_secondary)),
                ..container::Style::default()
            })
            .into()
    }
}
