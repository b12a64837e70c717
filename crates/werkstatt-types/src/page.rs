//! Page table entries for the site routes.

use serde::Serialize;

use std::fmt;

/// Which section of the site a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Info,
    Projects,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Home => write!(f, "home"),
            PageKind::Info => write!(f, "info"),
            PageKind::Projects => write!(f, "projects"),
        }
    }
}

/// A routable page backed by a template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Request path, e.g. `/cad_info`.
    pub path: &'static str,
    /// Template path relative to the templates directory.
    pub template: &'static str,
    /// Department title shown in listings.
    pub title: &'static str,
    pub kind: PageKind,
}

impl Page {
    /// Whether the template expects the `{{ greeting }}` placeholder.
    pub fn has_greeting(&self) -> bool {
        self.kind == PageKind::Home
    }
}
