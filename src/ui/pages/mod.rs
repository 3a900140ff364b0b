// SPDX-License-Identifier: MPL-2.0
//! Page bodies shown in the route outlet.
//!
//! A page body is not constructed until its route is first visited. The
//! [`PageSource`] trait is the seam that produces bodies asynchronously;
//! [`EmbeddedPages`] is the production source.

pub mod not_found;
pub mod settings;
pub mod task_detail;
pub mod task_list;

use crate::error::PageLoadError;
use crate::i18n::fluent::I18n;
use crate::router::{PageKind, Route};
use crate::store::{Action, Store};
use futures_util::future::{BoxFuture, FutureExt};
use iced::Element;

/// Contextual data every page needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
}

/// Messages addressed to the page currently in the outlet.
#[derive(Debug, Clone)]
pub enum Message {
    TaskList(task_list::Message),
    TaskDetail(task_detail::Message),
    Settings(settings::Message),
    NotFound(not_found::Message),
}

/// Requests a page makes to the application root.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(String),
    /// A preference change the page owns (theme, locale).
    SetPreference(PreferenceChange),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(String),
    Locale(String),
}

impl PreferenceChange {
    #[must_use]
    pub fn into_action(self) -> Action {
        match self {
            PreferenceChange::Theme(theme) => Action::set_theme(theme),
            PreferenceChange::Locale(locale) => Action::set_locale(locale),
        }
    }
}

/// A loaded page body.
#[derive(Debug, Clone)]
pub enum PageModule {
    TaskList(task_list::Page),
    TaskDetail(task_detail::Page),
    Settings(settings::Page),
    NotFound(not_found::Page),
}

impl PageModule {
    /// Constructs the body for `kind`.
    #[must_use]
    pub fn build(kind: PageKind) -> Self {
        match kind {
            PageKind::TaskList => PageModule::TaskList(task_list::Page::new()),
            PageKind::TaskDetail => PageModule::TaskDetail(task_detail::Page::new()),
            PageKind::Settings => PageModule::Settings(settings::Page::new()),
            PageKind::NotFound => PageModule::NotFound(not_found::Page::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PageKind {
        match self {
            PageModule::TaskList(_) => PageKind::TaskList,
            PageModule::TaskDetail(_) => PageKind::TaskDetail,
            PageModule::Settings(_) => PageKind::Settings,
            PageModule::NotFound(_) => PageKind::NotFound,
        }
    }

    /// Forwards `message` to this page. Messages for another page are dropped.
    pub fn update(&mut self, message: Message) -> Event {
        match (self, message) {
            (PageModule::TaskList(page), Message::TaskList(message)) => page.update(message),
            (PageModule::TaskDetail(page), Message::TaskDetail(message)) => page.update(message),
            (PageModule::Settings(page), Message::Settings(message)) => page.update(message),
            (PageModule::NotFound(page), Message::NotFound(message)) => page.update(message),
            (page, message) => {
                tracing::debug!(page = %page.kind(), ?message, "message for inactive page dropped");
                Event::None
            }
        }
    }

    /// Heading of this page for `route`, built from the same route
    /// parameters [`view`](Self::view) receives.
    #[must_use]
    pub fn title(&self, route: &Route, i18n: &I18n) -> String {
        match (self, route) {
            (PageModule::TaskList(_), _) => task_list::title(i18n),
            (PageModule::TaskDetail(_), Route::TaskDetail { task_id }) => {
                task_detail::title(task_id, i18n)
            }
            (PageModule::Settings(_), _) => settings::title(i18n),
            (PageModule::NotFound(_), _) => not_found::title(i18n),
            (PageModule::TaskDetail(_), _) => i18n.tr("page-load-error"),
        }
    }

    /// Renders this page with the parameters carried by `route`.
    pub fn view<'a>(&'a self, route: &'a Route, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match (self, route) {
            (PageModule::TaskList(page), _) => page.view(ctx).map(Message::TaskList),
            (PageModule::TaskDetail(page), Route::TaskDetail { task_id }) => {
                page.view(task_id, ctx).map(Message::TaskDetail)
            }
            (PageModule::Settings(page), _) => page.view(ctx).map(Message::Settings),
            (PageModule::NotFound(page), Route::NotFound { path }) => {
                page.view(path, ctx).map(Message::NotFound)
            }
            (PageModule::TaskDetail(_), _) | (PageModule::NotFound(_), _) => {
                iced::widget::text(ctx.i18n.tr("page-load-error")).into()
            }
        }
    }
}

/// Asynchronous provider of page bodies.
pub trait PageSource: Send + Sync {
    fn load(&self, kind: PageKind) -> BoxFuture<'static, Result<PageModule, PageLoadError>>;
}

/// Builds page bodies from the code compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedPages;

impl PageSource for EmbeddedPages {
    fn load(&self, kind: PageKind) -> BoxFuture<'static, Result<PageModule, PageLoadError>> {
        async move { Ok(PageModule::build(kind)) }.boxed()
    }
}
