// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{persistence, App, Message};
use crate::store::{notifications, Action};
use crate::ui::pages::Event;
use crate::ui::{layout, notification};
use iced::Task;

/// Routes `message` to its handler. Effects are re-synced by the caller.
pub(super) fn handle_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(path) => handle_navigate(app, &path),
        Message::Back => handle_back(app),
        Message::Layout(layout::Message::Navigate(target)) => handle_navigate(app, target),
        Message::Layout(layout::Message::Back) => handle_back(app),
        Message::Page(page_message) => handle_page_message(app, page_message),
        Message::PageLoaded { kind, result } => {
            app.outlet.finish(kind, result);
            Task::none()
        }
        Message::RetryPage(kind) => {
            app.spinner.reset();
            app.outlet.retry(kind)
        }
        Message::Notification(notification::Message::Dismiss) => {
            app.store.dispatch(Action::dismiss_notification());
            Task::none()
        }
        Message::Store(action) => {
            app.store.dispatch(action);
            Task::none()
        }
        Message::Tick(now) => {
            if app.outlet.is_loading() {
                app.spinner.tick();
            }
            app.store
                .dispatch(Action::Notifications(notifications::Action::Expire(now)));
            Task::none()
        }
    }
}

fn handle_navigate(app: &mut App, path: &str) -> Task<Message> {
    app.router.navigate(path);
    load_current_page(app)
}

fn handle_back(app: &mut App) -> Task<Message> {
    if !app.router.back() {
        return Task::none();
    }
    load_current_page(app)
}

fn load_current_page(app: &mut App) -> Task<Message> {
    let kind = app.router.route().page();
    app.outlet.ensure_loaded(kind)
}

fn handle_page_message(app: &mut App, message: crate::ui::pages::Message) -> Task<Message> {
    let kind = app.router.route().page();
    let Some(page) = app.outlet.page_mut(kind) else {
        tracing::debug!(page = %kind, "message for unloaded page dropped");
        return Task::none();
    };

    match page.update(message) {
        Event::None => Task::none(),
        Event::Navigate(path) => handle_navigate(app, &path),
        Event::SetPreference(change) => {
            if app.store.dispatch(change.into_action()) {
                let notice = persistence::persist_preferences(&app.store, app.config_dir.clone());
                app.store.dispatch(Action::notify(notice));
            }
            Task::none()
        }
    }
}
