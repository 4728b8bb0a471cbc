use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text, text_input};
use iced::{Element, Length};
use iced_aw::Card;

use crate::ui::msg::Message;
use crate::ui::style::{self, SPACING_UNIT};
use crate::view_model::EditModalView;

/// Draws `modal` over `base`. Clicking the backdrop closes it.
pub fn overlay<'a>(base: Element<'a, Message>, modal: EditModalView) -> Element<'a, Message> {
    let mut body = column![
        text(modal.field_label).size(14),
        text_input("", &modal.display_name)
            .on_input(Message::DisplayNameChanged)
            .on_submit(Message::SaveProfile)
            .padding(SPACING_UNIT),
    ]
    .spacing(SPACING_UNIT);

    if let Some(error) = modal.error {
        body = body.push(text(error).size(12).style(text::danger));
    }

    let foot = row![
        button(text(modal.cancel_label))
            .style(button::secondary)
            .on_press(Message::CloseEditModal),
        button(text(modal.save_label))
            .style(button::primary)
            .on_press_maybe(modal.can_save.then_some(Message::SaveProfile)),
    ]
    .spacing(SPACING_UNIT);

    let card = Card::new(text(modal.title), body)
        .foot(foot)
        .max_width(420.0)
        .on_close(Message::CloseEditModal);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(container(card).width(Length::Shrink))).style(style::backdrop))
                .on_press(Message::CloseEditModal)
        )
    ]
    .into()
}
