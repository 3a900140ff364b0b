// SPDX-License-Identifier: MPL-2.0
use futures_util::future::{BoxFuture, FutureExt};
use iced_tasks::app::outlet::OutletContent;
use iced_tasks::app::{App, Flags, Message};
use iced_tasks::config::{self, Config, GeneralConfig};
use iced_tasks::error::PageLoadError;
use iced_tasks::router::{PageKind, Route};
use iced_tasks::store::{Action, Notice};
use iced_tasks::ui::pages::{EmbeddedPages, PageModule, PageSource};
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

struct FailingPages;

impl PageSource for FailingPages {
    fn load(&self, kind: PageKind) -> BoxFuture<'static, Result<PageModule, PageLoadError>> {
        let err = PageLoadError::new(kind.name(), "bundle missing");
        async move { Err(err) }.boxed()
    }
}

fn flags(dir: &TempDir, initial_path: &str) -> Flags {
    Flags {
        initial_path: Some(initial_path.to_string()),
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        ..Flags::default()
    }
}

fn boot(dir: &TempDir, initial_path: &str) -> App {
    let (app, _task) = App::with_source(
        &Config::default(),
        None,
        flags(dir, initial_path),
        Arc::new(EmbeddedPages),
    );
    app
}

/// Delivers the load result the runtime would produce for the current page.
async fn complete_load(app: &mut App, source: &dyn PageSource) {
    let kind = app.router().route().page();
    let result = source.load(kind).await;
    let _ = app.update(Message::PageLoaded { kind, result });
}

#[test]
fn root_redirects_to_task_list() {
    let dir = tempdir().expect("tempdir");
    let app = boot(&dir, "/");

    assert_eq!(app.router().location(), "/tasks");
    assert_eq!(app.router().route(), &Route::TaskList);
    assert!(!app.router().can_go_back());
}

#[tokio::test]
async fn task_detail_receives_task_id() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(&dir, "/tasks/42");

    assert_eq!(
        app.router().route(),
        &Route::TaskDetail {
            task_id: "42".to_string()
        }
    );

    complete_load(&mut app, &EmbeddedPages).await;
    let frame = app.composition();
    assert_eq!(frame.outlet, OutletContent::Page(PageKind::TaskDetail));
    assert_eq!(frame.page_title.as_deref(), Some("Task 42"));
}

#[test]
fn unknown_path_renders_not_found() {
    let dir = tempdir().expect("tempdir");
    let app = boot(&dir, "/unknown/path");

    assert_eq!(app.router().route().page(), PageKind::NotFound);
    assert_eq!(app.router().location(), "/unknown/path");
}

#[tokio::test]
async fn placeholder_shows_until_page_loads() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(&dir, "/settings");
    assert_eq!(app.outlet_content(), OutletContent::Placeholder);
    assert_eq!(app.title(), "Tasks list");

    complete_load(&mut app, &EmbeddedPages).await;
    assert_eq!(app.outlet_content(), OutletContent::Page(PageKind::Settings));
}

#[tokio::test]
async fn visited_pages_stay_loaded() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(&dir, "/tasks");
    complete_load(&mut app, &EmbeddedPages).await;

    let _ = app.update(Message::Navigate("/settings".into()));
    assert_eq!(app.outlet_content(), OutletContent::Placeholder);

    let _ = app.update(Message::Back);
    assert_eq!(app.router().location(), "/tasks");
    assert_eq!(app.outlet_content(), OutletContent::Page(PageKind::TaskList));
}

#[test]
fn shell_and_overlay_stay_while_page_is_pending() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(&dir, "/tasks");
    let _ = app.update(Message::Store(Action::notify(Notice::success(
        "notification-preferences-saved",
    ))));

    let frame = app.composition();
    assert_eq!(frame.outlet, OutletContent::Placeholder);
    assert_eq!(frame.page_title, None);
    assert_eq!(frame.title, "Tasks list");
    assert!(frame.overlay_show);

    // The full frame builds in this state.
    let _element = app.view();
}

#[test]
fn theme_change_replaces_root_class() {
    let dir = tempdir().expect("tempdir");
    let config = Config {
        general: GeneralConfig {
            theme: Some("light".into()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let (mut app, _) = App::with_source(&config, None, flags(&dir, "/"), Arc::new(EmbeddedPages));
    assert_eq!(app.document().classes(), ["light".to_string()]);

    let _ = app.update(Message::Store(Action::set_theme("dark")));
    assert_eq!(app.document().classes(), ["dark".to_string()]);
}

#[test]
fn notification_flag_does_not_touch_routing() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(&dir, "/tasks/42");
    let location = app.router().location().to_string();
    let content = app.outlet_content();

    let _ = app.update(Message::Store(Action::set_notification_visible(true)));
    assert!(app.store().notifications().show());
    let _ = app.update(Message::Store(Action::set_notification_visible(false)));
    assert!(!app.store().notifications().show());

    assert_eq!(app.router().location(), location);
    assert_eq!(app.outlet_content(), content);
}

#[tokio::test]
async fn failed_load_keeps_shell_and_can_retry() {
    let dir = tempdir().expect("tempdir");
    let source = Arc::new(FailingPages);
    let (mut app, _) = App::with_source(
        &Config::default(),
        None,
        flags(&dir, "/tasks"),
        source.clone(),
    );

    complete_load(&mut app, source.as_ref()).await;
    assert_eq!(app.outlet_content(), OutletContent::Failed(PageKind::TaskList));
    assert_eq!(app.title(), "Tasks list");

    let _ = app.update(Message::RetryPage(PageKind::TaskList));
    assert_eq!(app.outlet_content(), OutletContent::Placeholder);
}

#[test]
fn arabic_locale_selects_rtl_bundle() {
    let dir = tempdir().expect("tempdir");
    let mut app_flags = flags(&dir, "/");
    app_flags.lang = Some("ar-SA".into());
    let (app, _) = App::with_source(&Config::default(), None, app_flags, Arc::new(EmbeddedPages));

    assert_eq!(app.store().locales().locale(), "ar-SA");
    assert!(app.i18n().is_rtl());
    assert_ne!(app.title(), "Tasks list");
}

#[test]
fn config_round_trip_through_settings_file() {
    let dir = tempdir().expect("tempdir");
    let mut saved = Config::default();
    saved.general.language = Some("ar".into());
    saved.general.theme = Some("dark".into());
    saved.notifications.auto_dismiss_secs = Some(4);

    config::save_with_override(&saved, Some(dir.path().to_path_buf())).expect("save config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, saved);
}
