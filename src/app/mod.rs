// SPDX-License-Identifier: MPL-2.0
//! Application root: composes the store, router, outlet and layout shell.
//!
//! The `App` owns every piece of global state. Views read it; changes come
//! back as [`Message`]s handled in `update`, after which the side effects
//! (document root theme class, active translation bundle) are re-synced.

pub mod document;
mod message;
pub mod outlet;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::Composition;

use crate::config::{self, Config};
use crate::i18n::{self, fluent::I18n};
use crate::router::Router;
use crate::store::{Action, Notice, Store};
use crate::ui::loading::Spinner;
use crate::ui::pages::{EmbeddedPages, PageSource};
use crate::ui::theming;
use document::{DocumentRoot, ThemeEffect};
use iced::{window, Element, Subscription, Task, Theme};
use outlet::{Outlet, OutletContent};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Title used when the bundle has no `app-title` entry.
pub const FALLBACK_TITLE: &str = "Tasks list";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    store: Store,
    i18n: I18n,
    document: DocumentRoot,
    theme_effect: ThemeEffect,
    router: Router,
    outlet: Outlet,
    spinner: Spinner,
    /// Where preferences are persisted; `None` uses the resolved default.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.router.location())
            .field("theme", &self.store.themes().theme())
            .field("locale", &self.store.locales().locale())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
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

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
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
    /// Loads the user configuration and boots with the embedded pages.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::with_source(&config, config_warning, flags, Arc::new(EmbeddedPages))
    }

    /// Boots from an already-loaded configuration and a page source.
    ///
    /// `config_warning` is the i18n key of a problem found while loading the
    /// configuration; it is surfaced through the notification banner.
    /// The returned task loads the body of the initial route.
    pub fn with_source(
        config: &Config,
        config_warning: Option<String>,
        flags: Flags,
        source: Arc<dyn PageSource>,
    ) -> (Self, Task<Message>) {
        let locale = i18n::resolve_locale(flags.lang, config);
        let theme = flags
            .theme
            .or_else(|| config.general.theme.clone())
            .unwrap_or_else(|| config::DEFAULT_THEME.to_string());
        let store = Store::new(theme, locale.clone())
            .with_notification_dismiss_after(config.notifications.auto_dismiss());
        let initial_path = flags
            .initial_path
            .unwrap_or_else(|| config::DEFAULT_INITIAL_PATH.to_string());

        let mut app = App {
            store,
            i18n: I18n::new(&locale),
            document: DocumentRoot::default(),
            theme_effect: ThemeEffect::default(),
            router: Router::new(&initial_path),
            outlet: Outlet::new(source),
            spinner: Spinner::default(),
            config_dir: flags.config_dir.map(PathBuf::from),
        };
        app.sync_effects();
        tracing::info!(
            location = app.router.location(),
            locale = app.i18n.locale(),
            "application started"
        );

        if let Some(key) = config_warning {
            app.store.dispatch(Action::notify(Notice::warning(key)));
        }

        let task = app.outlet.ensure_loaded(app.router.route().page());
        (app, task)
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn document(&self) -> &DocumentRoot {
        &self.document
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// What the outlet shows for the current route.
    #[must_use]
    pub fn outlet_content(&self) -> OutletContent {
        self.outlet.content(self.router.route().page())
    }

    /// What the next frame is made of.
    #[must_use]
    pub fn composition(&self) -> Composition {
        view::compose(self)
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr_or("app-title", FALLBACK_TITLE)
    }

    /// Theme derived from the class applied to the document root.
    #[must_use]
    pub fn theme(&self) -> Theme {
        theming::iced_theme(self.document.active_class().unwrap_or_default())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.outlet.is_loading(),
            self.store.notifications().show(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::handle_message(self, message);
        self.sync_effects();
        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Re-applies store-derived side effects. Each effect only acts when its
    /// input changed since the last run.
    fn sync_effects(&mut self) {
        self.theme_effect
            .sync(self.store.themes().theme(), &mut self.document);

        let locale = self.store.locales().locale();
        if self.i18n.locale() != locale {
            self.i18n = I18n::new(locale);
            tracing::info!(locale, bundle = self.i18n.bundle().locale_tag(), "locale applied");
        }
    }
}
