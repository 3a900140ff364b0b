// SPDX-License-Identifier: MPL-2.0
//! View composition for the application root.

use super::outlet::{OutletContent, PageState};
use super::{App, Message};
use crate::error::PageLoadError;
use crate::i18n::fluent::I18n;
use crate::router::PageKind;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{layout, loading, notification, pages, theming};
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Parts of one rendered frame. The layout shell and the notification
/// overlay belong to every frame, whatever the outlet shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Title shown in the layout shell.
    pub title: String,
    pub can_go_back: bool,
    pub outlet: OutletContent,
    /// Heading of the page in the outlet, once its body is loaded.
    pub page_title: Option<String>,
    /// `show` input handed to the overlay.
    pub overlay_show: bool,
}

pub(super) fn compose(app: &App) -> Composition {
    let route = app.router.route();
    let page_title = match app.outlet.state(route.page()) {
        Some(PageState::Loaded(page)) => Some(page.title(route, &app.i18n)),
        _ => None,
    };

    Composition {
        title: app.title(),
        can_go_back: app.router.can_go_back(),
        outlet: app.outlet.content(route.page()),
        page_title,
        overlay_show: app.store.notifications().show(),
    }
}

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let frame = compose(app);
    let i18n = &app.i18n;
    let colors = theming::color_scheme(app.document.active_class().unwrap_or_default());
    let route = app.router.route();

    let outlet = match (frame.outlet, app.outlet.state(route.page())) {
        (OutletContent::Page(_), Some(PageState::Loaded(page))) => page
            .view(
                route,
                pages::ViewContext {
                    i18n,
                    store: &app.store,
                },
            )
            .map(Message::Page),
        (OutletContent::Failed(kind), Some(PageState::Failed(err))) => {
            failed_view(i18n, kind, err)
        }
        _ => loading::view(i18n, app.spinner, colors.brand_primary),
    };

    let overlay = notification::view(
        frame.overlay_show,
        app.store.notifications().notice(),
        i18n,
    )
    .map(Message::Notification);

    layout::view(
        layout::ViewContext {
            title: frame.title,
            i18n,
            colors,
            location: app.router.location(),
            can_go_back: frame.can_go_back,
        },
        Message::Layout,
        outlet,
        overlay,
    )
}

fn failed_view<'a>(i18n: &I18n, kind: PageKind, err: &PageLoadError) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr(err.i18n_key())).size(typography::TITLE_MD))
        .push(button(Text::new(i18n.tr("page-load-retry"))).on_press(Message::RetryPage(kind)));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
