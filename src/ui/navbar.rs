// SPDX-License-Identifier: MPL-2.0
//! Top bar and side drawer.
//!
//! The top bar carries the drawer button, the page title and the dark-mode
//! switch. The drawer lists the pages available to the current session and,
//! when signed in, a logout entry.

use crate::app::navigation::Navigation;
use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, mouse_area, toggler, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar and drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub dark_mode: bool,
    pub signed_in: bool,
    pub username: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    CloseDrawer,
    Navigate(Screen),
    DarkModeToggled(bool),
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The page changed; the parent may load its data.
    Navigated(Screen),
    DarkModeChanged(bool),
    Logout,
}

pub fn update(message: Message, navigation: &mut Navigation) -> Event {
    match message {
        Message::ToggleDrawer => {
            navigation.toggle_drawer();
            Event::None
        }
        Message::CloseDrawer => {
            navigation.close_drawer();
            Event::None
        }
        Message::Navigate(screen) => {
            if navigation.select_from_drawer(screen) {
                Event::Navigated(screen)
            } else {
                Event::None
            }
        }
        Message::DarkModeToggled(dark) => Event::DarkModeChanged(dark),
        Message::Logout => {
            navigation.close_drawer();
            Event::Logout
        }
    }
}

/// Render the top bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("☰").size(typography::TITLE_MD))
        .on_press(Message::ToggleDrawer)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::text_link);

    let title = Text::new(ctx.i18n.tr(ctx.screen.title_key())).size(typography::TITLE_MD);

    let dark_switch = toggler(ctx.dark_mode)
        .label(ctx.i18n.tr("navbar-dark-mode"))
        .on_toggle(Message::DarkModeToggled);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::SM])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if ctx.signed_in {
        row = row.push(Text::new(ctx.username.to_string()).size(typography::BODY_SM));
    }

    Container::new(row.push(dark_switch))
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

/// Render the drawer over a dimmed backdrop; clicking the backdrop closes it.
pub fn view_drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries: &[Screen] = if ctx.signed_in {
        &Screen::SIGNED_IN
    } else {
        &Screen::SIGNED_OUT
    };

    let mut column = Column::new().spacing(spacing::XXS).padding(spacing::SM);
    for &screen in entries {
        let style = if screen == ctx.screen {
            styles::button::selected
        } else {
            styles::button::text_link
        };
        column = column.push(
            button(Text::new(ctx.i18n.tr(screen.title_key())))
                .on_press(Message::Navigate(screen))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(style),
        );
    }

    if ctx.signed_in {
        column = column.push(Space::new().height(Length::Fixed(spacing::MD))).push(
            button(Text::new(ctx.i18n.tr("action-logout")))
                .on_press(Message::Logout)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::danger),
        );
    }

    let drawer = Container::new(column)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::CloseDrawer);

    Row::new().push(drawer).push(backdrop).into()
}
