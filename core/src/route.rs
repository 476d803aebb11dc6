use crate::lang::{split_first_segment, Lang};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
    Toolbox,
}

impl Route {
    pub fn path(self, lang: Lang) -> String {
        match self {
            Route::Home => format!("/{lang}/"),
            Route::Blog => format!("/{lang}/blog/"),
            Route::Toolbox => format!("/{lang}/toolbox/"),
        }
    }

    /// Alt-key shortcut letter bound to this route.
    pub fn shortcut_key(self) -> &'static str {
        match self {
            Route::Home => "h",
            Route::Blog => "b",
            Route::Toolbox => "t",
        }
    }
}

const SHORTCUT_ROUTES: &[Route] = &[Route::Home, Route::Blog, Route::Toolbox];

/// Path reached by switching `path` to `lang`.
///
/// A recognized language prefix is swapped and the rest of the path kept.
/// Any other path lands on the language home.
pub fn switch_language_path(path: &str, lang: Lang) -> String {
    match split_first_segment(path) {
        Some((segment, rest)) if Lang::parse(segment).is_ok() => format!("/{lang}/{rest}"),
        _ => Route::Home.path(lang),
    }
}

/// Language of `path`, or `fallback` if the path carries no known prefix.
pub fn current_lang(path: &str, fallback: Lang) -> Lang {
    Lang::from_path(path).unwrap_or(fallback)
}

pub fn shortcut_route(alt: bool, key: &str) -> Option<Route> {
    if !alt {
        return None;
    }
    SHORTCUT_ROUTES
        .iter()
        .copied()
        .find(|route| route.shortcut_key() == key)
}

/// Navigation target for a keydown, keeping the current language prefix.
pub fn shortcut_target(path: &str, alt: bool, key: &str, fallback: Lang) -> Option<String> {
    let route = shortcut_route(alt, key)?;
    Some(route.path(current_lang(path, fallback)))
}

/// Whether a nav link with `href` should be highlighted on `path`.
pub fn nav_link_is_active(path: &str, href: &str) -> bool {
    !href.is_empty() && href != "/" && path.contains(href)
}
