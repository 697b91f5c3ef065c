// SPDX-License-Identifier: MPL-2.0
//! Application root: the page shell hosting the feed.
//!
//! The `App` struct wires together configuration, localization, theme and
//! the feed container. Startup problems (unreadable config, bad seed file)
//! never abort the launch; they fall back to defaults and surface as
//! dismissable warnings in the header.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::post::Post;
use crate::i18n::fluent::I18n;
use crate::seed;
use crate::ui::feed;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: Theme,
    feed: feed::State,
    /// Translation keys of startup warnings still shown in the header.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("posts", &self.feed.feed().len())
            .field("composer_open", &self.feed.is_composer_open())
            .field("warnings", &self.warnings)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and seed posts, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let seed_path = flags.seed_path.or_else(|| config.feed.seed_file.clone());
        let (posts, seed_warning) = seed::load(seed_path.as_deref());
        let i18n = I18n::new(flags.lang, &config);

        tracing::info!(
            locale = %i18n.current_locale(),
            posts = posts.len(),
            "starting feed"
        );

        let warnings = config_warning.into_iter().chain(seed_warning).collect();
        (Self::with_config(i18n, &config, posts, warnings), Task::none())
    }

    /// Builds the application from already-loaded parts.
    #[must_use]
    pub fn with_config(
        i18n: I18n,
        config: &Config,
        posts: Vec<Post>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            i18n,
            theme: config.general.theme_mode.theme(),
            feed: feed::State::new(posts, config.composer.author()),
            warnings,
        }
    }

    #[must_use]
    pub fn feed(&self) -> &feed::State {
        &self.feed
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(&self.feed)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(message) => self.feed.update(message).map(Message::Feed),
            Message::DismissWarning(index) => {
                if index < self.warnings.len() {
                    self.warnings.remove(index);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            feed: &self.feed,
            warnings: &self.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComposerConfig, GeneralConfig};
    use crate::ui::composer;
    use crate::ui::theming::ThemeMode;
    use iced::widget::text_editor;
    use std::sync::Arc;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn app_with(config: &Config, warnings: Vec<String>) -> App {
        App::with_config(english(), config, seed::builtin(), warnings)
    }

    fn composer(message: composer::Message) -> Message {
        Message::Feed(feed::Message::Composer(message))
    }

    #[test]
    fn title_comes_from_translations() {
        let app = app_with(&Config::default(), Vec::new());
        assert_eq!(app.title(), "Eco-Connect");
    }

    #[test]
    fn theme_follows_configured_mode() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(app_with(&config, Vec::new()).theme(), Theme::Dark);
    }

    #[test]
    fn dismiss_warning_removes_only_that_entry() {
        let mut app = app_with(
            &Config::default(),
            vec![
                "warning-config-load-error".to_string(),
                "warning-seed-unreadable".to_string(),
            ],
        );

        let _ = app.update(Message::DismissWarning(0));
        assert_eq!(app.warnings(), ["warning-seed-unreadable".to_string()]);

        let _ = app.update(Message::DismissWarning(5));
        assert_eq!(app.warnings().len(), 1);
    }

    #[test]
    fn composed_post_uses_configured_author() {
        let config = Config {
            composer: ComposerConfig {
                author_name: "Mina".to_string(),
                author_avatar: "M".to_string(),
                author_role: "Ranger".to_string(),
            },
            ..Config::default()
        };
        let mut app = app_with(&config, Vec::new());

        let _ = app.update(Message::Feed(feed::Message::NewPostRequested));
        let edit = text_editor::Edit::Paste(Arc::new("Counted birds".to_string()));
        let _ = app.update(composer(composer::Message::BodyEdited(
            text_editor::Action::Edit(edit),
        )));
        let _ = app.update(composer(composer::Message::Submit));

        let first = &app.feed().feed().posts()[0];
        assert_eq!(first.author.name, "Mina");
        assert_eq!(first.author.role, "Ranger");
        assert_eq!(first.body, "Counted birds");
    }

    #[test]
    fn view_builds_with_warnings_and_open_composer() {
        let mut app = app_with(
            &Config::default(),
            vec!["warning-seed-malformed".to_string()],
        );
        let _ = app.update(Message::Feed(feed::Message::NewPostRequested));
        let _element = app.view();
    }
}
