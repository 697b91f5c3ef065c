// SPDX-License-Identifier: MPL-2.0
//! Stateless card rendering one post.

use crate::config::POST_IMAGE_HEIGHT;
use crate::domain::post::{ImageRef, Post, PostId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{self, badge::BadgeTone};
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::{button, container, image, text, Column, Row, Space};
use iced::{Color, ContentFit, Element, Length};

/// Interaction affordances. The container only logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Like(PostId),
    Comment(PostId),
    Share(PostId),
}

/// "role • time" line under the author name.
#[must_use]
pub fn byline(post: &Post, i18n: &I18n) -> String {
    i18n.tr_with_args(
        "post-byline",
        &[
            ("role", post.author.role.as_str()),
            ("time", post.time_label.as_str()),
        ],
    )
}

#[must_use]
pub fn badge_tone(post: &Post) -> BadgeTone {
    BadgeTone::for_tag(post.category.tag())
}

/// Render one post.
#[must_use]
pub fn view<'a>(post: &'a Post, i18n: &I18n) -> Element<'a, Message> {
    let avatar = container(text(post.author.avatar.as_str()).size(typography::BODY_LG))
        .width(sizing::AVATAR)
        .height(sizing::AVATAR)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar);

    let name = text(post.author.name.as_str())
        .size(typography::BODY_LG)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    let who = Column::new()
        .spacing(spacing::XXS)
        .push(name)
        .push(text(byline(post, i18n)).size(typography::CAPTION));

    let badge = container(text(post.category.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::badge::pill(badge_tone(post)));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(who)
        .push(Space::new().width(Length::Fill))
        .push(badge);

    let mut card = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(text(post.body.as_str()).size(typography::BODY));

    if let Some(picture) = image_view(post, i18n) {
        card = card.push(picture);
    }

    card = card.push(interaction_bar(post, i18n));

    container(card)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn image_view<'a>(post: &'a Post, i18n: &I18n) -> Option<Element<'a, Message>> {
    let handle = match post.image.as_ref()? {
        ImageRef::Remote(_) => {
            let label = text(i18n.tr("post-image-remote")).size(typography::CAPTION);
            let placeholder = container(label)
                .width(Length::Fill)
                .height(POST_IMAGE_HEIGHT)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::image_placeholder);
            return Some(placeholder.into());
        }
        ImageRef::File(path) => image::Handle::from_path(path),
        ImageRef::Preview(preview) => preview.image().clone(),
    };

    Some(
        image(handle)
            .width(Length::Fill)
            .height(POST_IMAGE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
    )
}

fn interaction_bar<'a>(post: &Post, i18n: &I18n) -> Element<'a, Message> {
    let affordance = |glyph: &'static str, color: Color, label: String, message: Message| {
        button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(text(glyph).size(sizing::ICON_SM).color(color))
                .push(text(label).size(typography::BODY)),
        )
        .style(styles::button::ghost)
        .on_press(message)
    };

    Row::new()
        .spacing(spacing::SM)
        .push(affordance(
            "♥",
            palette::LIKE_RED,
            i18n.tr_count("post-likes", post.likes),
            Message::Like(post.id),
        ))
        .push(affordance(
            "💬",
            palette::COMMENT_BLUE,
            i18n.tr_count("post-comments", post.comments),
            Message::Comment(post.id),
        ))
        .push(affordance(
            "↗",
            palette::SMART_GREEN,
            i18n.tr("post-share"),
            Message::Share(post.id),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::post::{Author, Category};
    use std::path::PathBuf;

    fn post(category: Category, image: Option<ImageRef>) -> Post {
        Post {
            id: PostId::new(7),
            author: Author::new("Dr. Elena Petrova", "D", "Professor"),
            time_label: "2 days ago".into(),
            body: "Grid optimisation".into(),
            image,
            likes: 1,
            comments: 9,
            category,
        }
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn byline_joins_role_and_time() {
        let i18n = english();
        assert_eq!(
            byline(&post(Category::Learning, None), &i18n),
            "Professor • 2 days ago"
        );
    }

    #[test]
    fn badge_tone_follows_category_tag() {
        assert_eq!(badge_tone(&post(Category::Action, None)), BadgeTone::EcoAction);
        assert_eq!(
            badge_tone(&post(Category::Other("Gardening".into()), None)),
            BadgeTone::Neutral
        );
    }

    #[test]
    fn view_builds_for_every_image_kind() {
        let i18n = english();
        for image in [
            None,
            Some(ImageRef::Remote("https://example.com/a.jpg".into())),
            Some(ImageRef::File(PathBuf::from("missing.png"))),
        ] {
            let post = post(Category::Exploration, image);
            let _element: Element<'_, Message> = view(&post, &i18n);
        }
    }
}
