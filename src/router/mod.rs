// SPDX-License-Identifier: MPL-2.0
//! Path-based routing for the page outlet.
//!
//! The route table is a fixed, ordered list. [`resolve`] walks it top to
//! bottom and stops at the first match; the final `*` entry matches every
//! path, so resolution is total. [`Router`] tracks the current location,
//! follows redirects and keeps a back-stack.

use std::fmt;

/// Upper bound on chained redirects before giving up on a navigation.
const MAX_REDIRECTS: usize = 8;

/// Page bodies the outlet can show. Each is loaded on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    TaskList,
    TaskDetail,
    Settings,
    NotFound,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::TaskList,
        PageKind::TaskDetail,
        PageKind::Settings,
        PageKind::NotFound,
    ];

    /// Stable name used in logs and errors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PageKind::TaskList => "task-list",
            PageKind::TaskDetail => "task-detail",
            PageKind::Settings => "settings",
            PageKind::NotFound => "not-found",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A matched route together with the parameters its page receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    TaskList,
    TaskDetail { task_id: String },
    Settings,
    NotFound { path: String },
}

impl Route {
    #[must_use]
    pub fn page(&self) -> PageKind {
        match self {
            Route::TaskList => PageKind::TaskList,
            Route::TaskDetail { .. } => PageKind::TaskDetail,
            Route::Settings => PageKind::Settings,
            Route::NotFound { .. } => PageKind::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Page(PageKind),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub target: Target,
}

/// The route table, in evaluation order.
pub const ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        pattern: "/",
        target: Target::Redirect("/tasks"),
    },
    RouteEntry {
        pattern: "/tasks",
        target: Target::Page(PageKind::TaskList),
    },
    RouteEntry {
        pattern: "/tasks/:taskId",
        target: Target::Page(PageKind::TaskDetail),
    },
    RouteEntry {
        pattern: "/settings",
        target: Target::Page(PageKind::Settings),
    },
    RouteEntry {
        pattern: "*",
        target: Target::Page(PageKind::NotFound),
    },
];

/// Outcome of matching one path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(String),
}

/// Parameters captured from `:name` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Normalizes a path: leading slash, no trailing slash, no query or
/// fragment, no empty segments.
#[must_use]
pub fn normalize(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Params> {
    if pattern == "*" {
        return Some(Params::default());
    }

    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());
    let mut params = Params::default();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.0.push((name, decode_segment(actual)));
                } else if !expected.eq_ignore_ascii_case(actual) {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Percent-decodes a captured segment. Invalid UTF-8 keeps the raw text.
fn decode_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

/// Resolves `path` against [`ROUTES`]. Literal segments match without
/// regard to ASCII case; `:name` captures are percent-decoded.
#[must_use]
pub fn resolve(path: &str) -> Resolution {
    let path = normalize(path);
    for entry in &ROUTES {
        let Some(params) = match_pattern(entry.pattern, &path) else {
            continue;
        };
        return match entry.target {
            Target::Redirect(to) => Resolution::Redirect(to.to_string()),
            Target::Page(kind) => Resolution::Render(build_route(kind, &params, &path)),
        };
    }
    // The wildcard entry is last and always matches.
    Resolution::Render(Route::NotFound { path })
}

fn build_route(kind: PageKind, params: &Params, path: &str) -> Route {
    match kind {
        PageKind::TaskList => Route::TaskList,
        PageKind::TaskDetail => match params.get("taskId") {
            Some(task_id) => Route::TaskDetail {
                task_id: task_id.to_string(),
            },
            None => Route::NotFound {
                path: path.to_string(),
            },
        },
        PageKind::Settings => Route::Settings,
        PageKind::NotFound => Route::NotFound {
            path: path.to_string(),
        },
    }
}

/// Current location plus back-stack.
#[derive(Debug, Clone)]
pub struct Router {
    location: String,
    route: Route,
    history: Vec<String>,
}

impl Router {
    /// Creates a router positioned at `initial_path` (redirects applied).
    pub fn new(initial_path: &str) -> Self {
        let (location, route) = follow(initial_path);
        Self {
            location,
            route,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Navigates to `path`. Returns `false` when the final location equals
    /// the current one (nothing is pushed).
    pub fn navigate(&mut self, path: &str) -> bool {
        let (location, route) = follow(path);
        if location == self.location {
            return false;
        }
        tracing::debug!(from = %self.location, to = %location, "navigate");
        let previous = std::mem::replace(&mut self.location, location);
        self.history.push(previous);
        self.route = route;
        true
    }

    /// Returns to the previous location. Returns `false` if there is none.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        let (location, route) = follow(&previous);
        tracing::debug!(from = %self.location, to = %location, "navigate back");
        self.location = location;
        self.route = route;
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INITIAL_PATH)
    }
}

/// Resolves `path`, following redirects. Redirecting locations are replaced,
/// never recorded.
fn follow(path: &str) -> (String, Route) {
    let mut location = normalize(path);
    for _ in 0..MAX_REDIRECTS {
        match resolve(&location) {
            Resolution::Render(route) => return (location, route),
            Resolution::Redirect(to) => {
                tracing::debug!(from = %location, %to, "redirect");
                location = normalize(&to);
            }
        }
    }
    tracing::warn!(%location, "redirect limit reached");
    let route = Route::NotFound {
        path: location.clone(),
    };
    (location, route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_tasks() {
        assert_eq!(resolve("/"), Resolution::Redirect("/tasks".to_string()));

        let router = Router::new("/");
        assert_eq!(router.location(), "/tasks");
        assert_eq!(router.route(), &Route::TaskList);
    }

    #[test]
    fn task_id_is_captured() {
        assert_eq!(
            resolve("/tasks/42"),
            Resolution::Render(Route::TaskDetail {
                task_id: "42".to_string()
            })
        );
    }

    #[test]
    fn literal_segments_ignore_case() {
        assert_eq!(resolve("/Tasks"), Resolution::Render(Route::TaskList));
        assert_eq!(resolve("/SETTINGS"), Resolution::Render(Route::Settings));
        assert_eq!(
            resolve("/TASKS/Ab"),
            Resolution::Render(Route::TaskDetail {
                task_id: "Ab".to_string()
            })
        );
    }

    #[test]
    fn captured_params_are_percent_decoded() {
        assert_eq!(
            resolve("/tasks/a%20b"),
            Resolution::Render(Route::TaskDetail {
                task_id: "a b".to_string()
            })
        );
        // Not valid UTF-8 once decoded.
        assert_eq!(
            resolve("/tasks/%FF"),
            Resolution::Render(Route::TaskDetail {
                task_id: "%FF".to_string()
            })
        );
    }

    #[test]
    fn settings_route_matches() {
        assert_eq!(resolve("/settings"), Resolution::Render(Route::Settings));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            resolve("/unknown/path"),
            Resolution::Render(Route::NotFound {
                path: "/unknown/path".to_string()
            })
        );
        assert_eq!(
            resolve("/tasks/42/edit"),
            Resolution::Render(Route::NotFound {
                path: "/tasks/42/edit".to_string()
            })
        );
    }

    #[test]
    fn every_path_has_a_first_matching_entry() {
        for path in ["/", "/tasks", "/tasks/a", "/settings", "/x", "/settings/x", ""] {
            let matches = ROUTES
                .iter()
                .take_while(|entry| match_pattern(entry.pattern, &normalize(path)).is_none())
                .count();
            assert!(matches < ROUTES.len(), "{path} matched nothing");
        }
    }

    #[test]
    fn wildcard_is_last() {
        assert_eq!(ROUTES.last().map(|entry| entry.pattern), Some("*"));
    }

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize("tasks/"), "/tasks");
        assert_eq!(normalize("//tasks//7/"), "/tasks/7");
        assert_eq!(normalize("/settings?tab=1#top"), "/settings");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn navigate_pushes_history_and_back_returns() {
        let mut router = Router::new("/");
        assert!(router.navigate("/tasks/7"));
        assert_eq!(router.route(), &Route::TaskDetail { task_id: "7".into() });
        assert!(router.can_go_back());

        assert!(router.back());
        assert_eq!(router.location(), "/tasks");
        assert!(!router.back());
    }

    #[test]
    fn redirect_does_not_stack_the_root() {
        let mut router = Router::new("/settings");
        assert!(router.navigate("/"));
        assert_eq!(router.location(), "/tasks");

        assert!(router.back());
        assert_eq!(router.location(), "/settings");
    }

    #[test]
    fn navigating_to_current_location_is_a_no_op() {
        let mut router = Router::new("/tasks");
        assert!(!router.navigate("/tasks/"));
        assert!(!router.navigate("/"));
        assert!(!router.can_go_back());
    }

    #[test]
    fn route_maps_to_page_kind() {
        assert_eq!(Route::TaskList.page(), PageKind::TaskList);
        assert_eq!(
            Route::TaskDetail { task_id: "1".into() }.page(),
            PageKind::TaskDetail
        );
        assert_eq!(Route::Settings.page(), PageKind::Settings);
        assert_eq!(Route::NotFound { path: "/x".into() }.page(), PageKind::NotFound);
    }
}
