use iced::widget::{button, column, container, image, row, svg, text, Space};
use iced::{Alignment, Element, Length};

use crate::models::ProfileBackground;
use crate::ui::images::ImageCache;
use crate::ui::msg::Message;
use crate::ui::style::{self, AVATAR_SIZE, PERSON_ICON, SPACING_UNIT};
use crate::view_model::{Header, OwnerActions};

pub fn view<'a>(
    header: Header,
    actions: Option<OwnerActions>,
    background: Option<ProfileBackground>,
    images: &ImageCache,
) -> Element<'a, Message> {
    let loaded = images.resolve(&header.avatar);
    let avatar: Element<'a, Message> = match loaded {
        Some(handle) => image(handle.clone()).width(AVATAR_SIZE).height(AVATAR_SIZE).into(),
        None => svg(svg::Handle::from_memory(PERSON_ICON))
            .width(72.0)
            .height(72.0)
            .into(),
    };

    let avatar = container(avatar)
        .width(AVATAR_SIZE)
        .height(AVATAR_SIZE)
        .center_x(AVATAR_SIZE)
        .center_y(AVATAR_SIZE);

    let name = text(header.display_name).size(24).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    });

    let mut content = row![avatar, name]
        .spacing(SPACING_UNIT * 2.0)
        .align_y(Alignment::Center);

    // Only present for the profile owner.
    if let Some(actions) = actions {
        let sign_out = button(text(actions.sign_out_label))
            .style(button::danger)
            .on_press_maybe((!actions.signing_out).then_some(Message::SignOut));

        content = content
            .push(Space::with_width(Length::Fill))
            .push(
                column![
                    button(text(actions.edit_label))
                        .style(button::secondary)
                        .on_press(Message::EditProfile),
                    sign_out,
                ]
                .spacing(SPACING_UNIT),
            );
    }

    container(content)
        .width(Length::Fill)
        .padding([SPACING_UNIT * 4.0, SPACING_UNIT * 2.0])
        .style(move |theme| style::content_box(theme, background))
        .into()
}
