use iced::widget::{button, column, container, horizontal_rule, image, row, svg, text, tooltip, Column, Row, Space};
use iced::{Alignment, Element, Length};

use crate::ui::images::ImageCache;
use crate::ui::msg::Message;
use crate::ui::style::{self, GAME_MARK, LIBRARY_ICON_SIZE, SPACING_UNIT};
use crate::view_model::{LibraryCell, LibrarySection};

pub fn view<'a>(section: LibrarySection, images: &ImageCache) -> Element<'a, Message> {
    let heading = row![
        text(section.heading).size(24),
        horizontal_rule(1),
        text(section.count.to_string()).size(20),
    ]
    .spacing(SPACING_UNIT * 2.0)
    .align_y(Alignment::Center);

    let columns = section.columns.max(1);
    let mut grid = Column::new().spacing(SPACING_UNIT);
    let mut cells = section.cells.into_iter().peekable();
    while cells.peek().is_some() {
        let mut line = Row::new().spacing(SPACING_UNIT);
        for slot in 0..columns {
            line = match cells.next() {
                Some(cell) => line.push(grid_cell(cell, images)),
                // Pad the last line so cells keep the same width.
                None if slot > 0 => line.push(Space::with_width(Length::FillPortion(1))),
                None => line,
            };
        }
        grid = grid.push(line);
    }

    column![heading, text(section.total_play_time).size(12), grid]
        .spacing(SPACING_UNIT * 2.0)
        .width(Length::FillPortion(1))
        .into()
}

fn grid_cell<'a>(cell: LibraryCell, images: &ImageCache) -> Element<'a, Message> {
    let loaded = images.resolve(&cell.icon);
    let icon: Element<'a, Message> = match loaded {
        Some(handle) => image(handle.clone())
            .width(LIBRARY_ICON_SIZE)
            .height(LIBRARY_ICON_SIZE)
            .into(),
        None => svg(svg::Handle::from_memory(GAME_MARK))
            .width(LIBRARY_ICON_SIZE)
            .height(LIBRARY_ICON_SIZE)
            .into(),
    };

    let body = container(icon)
        .padding(SPACING_UNIT * 1.5)
        .center_x(Length::Fill)
        .style(|theme| style::content_box(theme, None));

    let cell_button = button(body)
        .padding(0)
        .style(button::text)
        .width(Length::Fill)
        .on_press(Message::OpenGame(cell.game));

    container(tooltip(cell_button, text(cell.label), tooltip::Position::Bottom))
        .width(Length::FillPortion(1))
        .into()
}
