use iced::widget::{button, column, container, image, row, svg, text, Column};
use iced::{Alignment, Element, Length};

use crate::ui::images::ImageCache;
use crate::ui::msg::Message;
use crate::ui::style::{self, COVER_WIDTH, GAME_MARK, SPACING_UNIT};
use crate::view_model::{ActivityRow, ActivitySection};

pub fn view<'a>(section: ActivitySection, images: &ImageCache) -> Element<'a, Message> {
    let rows = section
        .rows
        .into_iter()
        .map(|entry| feed_item(entry, images));

    column![
        text(section.heading).size(24),
        Column::with_children(rows).spacing(SPACING_UNIT * 2.0),
    ]
    .spacing(SPACING_UNIT * 2.0)
    .width(Length::FillPortion(2))
    .into()
}

fn feed_item<'a>(entry: ActivityRow, images: &ImageCache) -> Element<'a, Message> {
    let loaded = images.resolve(&entry.cover);
    let cover: Element<'a, Message> = match loaded {
        Some(handle) => image(handle.clone()).width(COVER_WIDTH).into(),
        None => svg(svg::Handle::from_memory(GAME_MARK))
            .width(COVER_WIDTH / 2.0)
            .into(),
    };

    let mut info = column![text(entry.title).size(16)].spacing(SPACING_UNIT / 2.0);
    if let Some(label) = entry.last_played {
        info = info.push(text(label).size(12));
    }

    let body = container(
        row![container(cover).width(COVER_WIDTH).center_x(COVER_WIDTH), info]
            .spacing(SPACING_UNIT * 2.0)
            .align_y(Alignment::Center),
    )
    .padding(SPACING_UNIT)
    .width(Length::Fill)
    .style(|theme| style::content_box(theme, None));

    button(body)
        .padding(0)
        .style(button::text)
        .width(Length::Fill)
        .on_press(Message::OpenGame(entry.game))
        .into()
}
