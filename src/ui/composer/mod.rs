// SPDX-License-Identifier: MPL-2.0
//! Create-post dialog.
//!
//! The composer only exists while open: the feed container holds it as an
//! `Option<State>` and drops it on close, which releases any preview the
//! draft still owns. Close requests and submissions travel upward as
//! [`Event`]s.

pub mod draft;

pub use draft::{Draft, SelectionToken};

use crate::config::{COMPOSER_EDITOR_HEIGHT, COMPOSER_MAX_WIDTH, PREVIEW_IMAGE_HEIGHT};
use crate::domain::post::{Author, Category, Post, PostIdGenerator};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::image::{pick_image, DecodedImage};
use crate::media::preview::PreviewRegistry;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{self, key};
use iced::widget::{
    button, center, container, image, mouse_area, opaque, pick_list, stack, text, text_editor,
    Column, Row, Space,
};
use iced::{event, ContentFit, Element, Length, Subscription, Task};
use std::path::Path;

/// Composer state. Created fresh each time the dialog opens.
pub struct State {
    draft: Draft,
    editor: text_editor::Content,
    load_failed: bool,
}

/// Messages emitted by the composer's widgets and subscription.
#[derive(Debug, Clone)]
pub enum Message {
    BodyEdited(text_editor::Action),
    CategorySelected(Category),
    PickImage,
    ImageLoaded(SelectionToken, Result<Option<DecodedImage>, Error>),
    RemoveImage,
    Submit,
    CloseRequested,
    BackdropClicked,
    EscapePressed,
}

/// Events propagated to the feed container.
#[derive(Debug)]
pub enum Event {
    None,
    CloseRequested,
    Submitted(Box<Post>),
}

/// Everything the composer borrows from its container while updating.
pub struct UpdateContext<'a> {
    pub ids: &'a mut PostIdGenerator,
    pub author: &'a Author,
    pub previews: &'a PreviewRegistry,
}

/// Contextual data needed to render the composer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        Self {
            draft: Draft::new(),
            editor: text_editor::Content::new(),
            load_failed: false,
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("draft", &self.draft)
            .field("load_failed", &self.load_failed)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the last photo pick failed to decode.
    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }
}

/// Process a composer message.
pub fn update(
    state: &mut State,
    message: Message,
    ctx: &mut UpdateContext<'_>,
) -> (Event, Task<Message>) {
    match message {
        Message::BodyEdited(action) => {
            state.editor.perform(action);
            state.draft.set_body(state.editor.text());
        }
        Message::CategorySelected(category) => {
            state.draft.set_category(category);
        }
        Message::PickImage => {
            let token = state.draft.begin_selection();
            state.load_failed = false;
            let start_dir = state
                .draft
                .selected_path()
                .and_then(Path::parent)
                .map(Path::to_path_buf);
            tracing::debug!(?token, "photo pick started");
            return (
                Event::None,
                Task::perform(pick_image(start_dir), move |result| {
                    Message::ImageLoaded(token, result)
                }),
            );
        }
        Message::ImageLoaded(token, result) => {
            handle_image_loaded(state, token, result, ctx.previews);
        }
        Message::RemoveImage => {
            state.draft.remove_image();
            state.load_failed = false;
        }
        Message::Submit => {
            if !state.draft.is_submittable() {
                return (Event::None, Task::none());
            }
            let id = ctx.ids.next_id();
            if let Some(post) = state.draft.take_post(id, ctx.author) {
                return (Event::Submitted(Box::new(post)), Task::none());
            }
        }
        Message::CloseRequested | Message::BackdropClicked | Message::EscapePressed => {
            return (Event::CloseRequested, Task::none());
        }
    }

    (Event::None, Task::none())
}

fn handle_image_loaded(
    state: &mut State,
    token: SelectionToken,
    result: Result<Option<DecodedImage>, Error>,
    previews: &PreviewRegistry,
) {
    if !state.draft.is_pending(token) {
        tracing::debug!(?token, "discarding result of superseded photo pick");
        return;
    }

    match result {
        Ok(Some(decoded)) => {
            let preview = previews.acquire(decoded);
            if let Err(preview) = state.draft.accept_selection(token, preview) {
                drop(preview);
            }
            state.load_failed = false;
        }
        Ok(None) => state.draft.cancel_selection(token),
        Err(err) => {
            tracing::warn!(error = %err, "selected photo could not be loaded");
            state.draft.cancel_selection(token);
            state.load_failed = true;
        }
    }
}

/// Render the dialog content. Use [`modal`] to lay it over the page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(text(i18n.tr("composer-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("✕").size(typography::BODY_LG))
                .style(styles::button::ghost)
                .on_press(Message::CloseRequested),
        );

    let editor = text_editor(&state.editor)
        .placeholder(i18n.tr("composer-placeholder"))
        .on_action(Message::BodyEdited)
        .height(COMPOSER_EDITOR_HEIGHT)
        .size(typography::BODY)
        .padding(spacing::SM);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(editor);

    if let Some(preview) = state.draft.preview() {
        content = content.push(preview_tile(preview.image().clone(), i18n));
    }

    if state.load_failed {
        content = content.push(
            text(i18n.tr("composer-image-load-error"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let photo_label = if state.draft.is_picking() {
        i18n.tr("composer-loading-photo")
    } else {
        i18n.tr("composer-add-photo")
    };
    let add_photo = button(text(format!("📷 {photo_label}")).size(typography::BODY))
        .style(styles::button::ghost)
        .on_press_maybe((!state.draft.is_picking()).then_some(Message::PickImage));

    let category = pick_list(
        Category::CHOICES,
        Some(state.draft.category().clone()),
        Message::CategorySelected,
    )
    .text_size(typography::BODY);

    let submit = button(
        text(i18n.tr("composer-submit"))
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .height(sizing::BUTTON_HEIGHT)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary)
    .on_press_maybe(state.draft.is_submittable().then_some(Message::Submit));

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(add_photo)
        .push(category)
        .push(Space::new().width(Length::Fill))
        .push(submit);

    container(content.push(actions))
        .max_width(COMPOSER_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

fn preview_tile<'a>(handle: image::Handle, i18n: &I18n) -> Element<'a, Message> {
    let picture = image(handle)
        .width(Length::Fill)
        .height(PREVIEW_IMAGE_HEIGHT)
        .content_fit(ContentFit::Cover);

    let remove = button(text("✕").size(typography::CAPTION))
        .style(styles::button::remove)
        .on_press(Message::RemoveImage);

    let remove_label = text(i18n.tr("composer-remove-photo")).size(typography::CAPTION);

    stack![
        picture,
        container(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(remove_label)
                .push(remove)
        )
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::XS),
    ]
    .into()
}

/// Lays `content` over `base` behind a dimmed backdrop.
///
/// Presses on the backdrop outside the content emit `on_blur`; presses
/// inside the content never reach the backdrop.
pub fn modal<'a, M>(
    base: impl Into<Element<'a, M>>,
    content: impl Into<Element<'a, M>>,
    on_blur: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(styles::container::backdrop))
                .on_press(on_blur)
        )
    ]
    .into()
}

/// Escape closes the dialog. Subscribe only while the composer is open.
pub fn subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
