// SPDX-License-Identifier: MPL-2.0
//! Settings screen: theme mode selection.
//!
//! The screen owns no state of its own; the current mode is injected by
//! the application and changes propagate up as events.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column};
use iced::{Element, Length};

/// Contextual data needed to render the settings screen.
pub struct ViewContext {
    pub mode: ThemeMode,
    pub scheme: ColorScheme,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(ThemeMode),
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeSelected(ThemeMode),
    BackToGallery,
}

/// Process a settings screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ThemeSelected(mode) => Event::ThemeSelected(mode),
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let title = text("Settings")
        .size(typography::TITLE_LG)
        .color(ctx.scheme.text_primary);

    let mut theme_column = Column::new()
        .push(
            text("Appearance")
                .size(typography::BODY)
                .color(ctx.scheme.text_secondary),
        )
        .spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let mut mode_button =
            button(text(mode.label()).size(typography::BODY)).on_press(Message::ThemeSelected(mode));

        if mode == ctx.mode {
            mode_button = mode_button.style(button::primary);
        } else {
            mode_button = mode_button.style(button::secondary);
        }

        theme_column = theme_column.push(mode_button);
    }

    let back = button(text("Back to gallery").size(typography::BODY))
        .style(button::secondary)
        .on_press(Message::BackToGallery);

    Column::new()
        .push(title)
        .push(theme_column)
        .push(back)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selection_propagates_as_event() {
        let event = update(Message::ThemeSelected(ThemeMode::Dark));
        assert_eq!(event, Event::ThemeSelected(ThemeMode::Dark));
    }

    #[test]
    fn back_propagates_as_event() {
        assert_eq!(update(Message::BackToGallery), Event::BackToGallery);
    }

    #[test]
    fn view_renders_without_panicking() {
        let _element = view(ViewContext {
            mode: ThemeMode::System,
            scheme: ColorScheme::light(),
        });
    }
}
