// SPDX-License-Identifier: MPL-2.0
//! Page shell: header chrome above the embedded feed.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::feed;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a feed::State,
    /// Translation keys of startup warnings still on screen.
    pub warnings: &'a [String],
}

/// Renders the header and the feed below it.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut header = Column::new().spacing(spacing::XS).push(
        text(ctx.i18n.tr("header-app-name"))
            .size(typography::TITLE_MD)
            .color(palette::SMART_DARK_GREEN),
    );

    for (index, key) in ctx.warnings.iter().enumerate() {
        header = header.push(warning_row(ctx.i18n, key, index));
    }

    let header = container(header)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::header);

    let body = ctx.feed.view(ctx.i18n).map(Message::Feed);

    Container::new(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn warning_row<'a>(i18n: &I18n, key: &str, index: usize) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("header-dismiss-warning")).size(typography::CAPTION))
                .style(styles::button::ghost)
                .on_press(Message::DismissWarning(index)),
        )
        .into()
}
