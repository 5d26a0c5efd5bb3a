// SPDX-License-Identifier: MPL-2.0
//! Single-photo view opened by tapping a cell outside selection mode.

use crate::media::Photo;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, text, Column};
use iced::{ContentFit, Element, Length};

/// Messages emitted by the photo viewer.
#[derive(Debug, Clone)]
pub enum Message {
    BackToGallery,
}

/// Render a single photo full-size with a back control.
pub fn view<'a>(photo: &'a Photo, scheme: ColorScheme) -> Element<'a, Message> {
    let back = button(text("Back").size(typography::BODY)).on_press(Message::BackToGallery);

    let picture = container(
        image(image::Handle::from_path(photo.path.clone()))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let caption = text(photo.file_name())
        .size(typography::CAPTION)
        .color(scheme.text_secondary);

    Column::new()
        .push(back)
        .push(picture)
        .push(caption)
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .into()
}
