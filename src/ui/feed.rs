// SPDX-License-Identifier: MPL-2.0
//! Feed container: the post list plus the composer dialog.
//!
//! Owns every piece of durable state: the ordered posts, the id generator,
//! the demo author and the preview ledger. The composer is `Some` only
//! while open.

use crate::config::FEED_MAX_WIDTH;
use crate::domain::feed::Feed;
use crate::domain::post::{Author, Post, PostIdGenerator};
use crate::i18n::fluent::I18n;
use crate::media::preview::{PreviewRegistry, PreviewStats};
use crate::ui::composer;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::post_card;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, keyed_column, scrollable, text, Column, Row, Space};
use iced::{Element, Length, Subscription, Task};

#[derive(Debug, Clone)]
pub enum Message {
    NewPostRequested,
    Composer(composer::Message),
    Post(post_card::Message),
}

#[derive(Debug)]
pub struct State {
    feed: Feed,
    composer: Option<composer::State>,
    ids: PostIdGenerator,
    author: Author,
    previews: PreviewRegistry,
}

impl State {
    /// Creates the container from seed posts. Composed posts are written
    /// as `author`.
    #[must_use]
    pub fn new(posts: Vec<Post>, author: Author) -> Self {
        let feed = Feed::from_seed(posts);
        let ids = PostIdGenerator::after(feed.max_id());
        Self {
            feed,
            composer: None,
            ids,
            author,
            previews: PreviewRegistry::new(),
        }
    }

    #[must_use]
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    #[must_use]
    pub fn is_composer_open(&self) -> bool {
        self.composer.is_some()
    }

    #[must_use]
    pub fn composer(&self) -> Option<&composer::State> {
        self.composer.as_ref()
    }

    /// Preview acquisitions and releases so far.
    #[must_use]
    pub fn preview_stats(&self) -> PreviewStats {
        self.previews.stats()
    }

    /// Shares the preview ledger, e.g. to check it after the feed is gone.
    #[must_use]
    pub fn preview_registry(&self) -> PreviewRegistry {
        self.previews.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NewPostRequested => {
                if self.composer.is_none() {
                    tracing::debug!("composer opened");
                    self.composer = Some(composer::State::new());
                }
                Task::none()
            }
            Message::Composer(message) => self.handle_composer_message(message),
            Message::Post(message) => {
                tracing::debug!(?message, "post interaction");
                Task::none()
            }
        }
    }

    fn handle_composer_message(&mut self, message: composer::Message) -> Task<Message> {
        let Some(state) = self.composer.as_mut() else {
            tracing::debug!(?message, "dropping message for closed composer");
            return Task::none();
        };

        let mut ctx = composer::UpdateContext {
            ids: &mut self.ids,
            author: &self.author,
            previews: &self.previews,
        };
        let (event, task) = composer::update(state, message, &mut ctx);

        match event {
            composer::Event::None => {}
            composer::Event::CloseRequested => {
                tracing::debug!("composer closed");
                self.composer = None;
            }
            composer::Event::Submitted(post) => {
                tracing::info!(id = %post.id, category = %post.category, "post published");
                self.feed.prepend(*post);
                self.composer = None;
            }
        }

        task.map(Message::Composer)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let label = format!("+ {}", i18n.tr("feed-new-post-button"));
        let new_post = button(text(label).size(typography::BODY))
            .height(sizing::BUTTON_HEIGHT)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(Message::NewPostRequested);

        let header = Row::new()
            .align_y(Vertical::Center)
            .push(text(i18n.tr("feed-title")).size(typography::TITLE_LG))
            .push(Space::new().width(Length::Fill))
            .push(new_post);

        let posts: Element<'a, Message> = if self.feed.is_empty() {
            text(i18n.tr("feed-empty")).size(typography::BODY).into()
        } else {
            keyed_column(self.feed.posts().iter().map(|post| {
                (post.id, post_card::view(post, i18n).map(Message::Post))
            }))
            .spacing(spacing::LG)
            .into()
        };

        let column = Column::new()
            .spacing(spacing::LG)
            .max_width(FEED_MAX_WIDTH)
            .padding(spacing::MD)
            .push(header)
            .push(posts);

        let page = scrollable(container(column).center_x(Length::Fill)).height(Length::Fill);

        match &self.composer {
            Some(state) => composer::modal(
                page,
                composer::view(state, composer::ViewContext { i18n }).map(Message::Composer),
                Message::Composer(composer::Message::BackdropClicked),
            ),
            None => page.into(),
        }
    }

    /// Whether the Escape listener is registered. True only while the
    /// composer is open.
    #[must_use]
    pub fn escape_listener_active(&self) -> bool {
        self.composer.is_some()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.escape_listener_active() {
            composer::subscription().map(Message::Composer)
        } else {
            Subscription::none()
        }
    }
}
