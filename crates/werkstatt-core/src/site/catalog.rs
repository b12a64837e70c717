//! Page catalog: every routable page of the site and its template.

use werkstatt_types::page::{Page, PageKind};

const fn page(path: &'static str, template: &'static str, title: &'static str, kind: PageKind) -> Page {
    Page {
        path,
        template,
        title,
        kind,
    }
}

/// All pages, home first.
pub const PAGES: &[Page] = &[
    page("/", "index.html", "Startseite", PageKind::Home),
    page("/drehen_info", "Info/drehen_info.html", "Drehen & Fräsen", PageKind::Info),
    page(
        "/automatisierungstechnik_info",
        "Info/automatisierungstechnik_info.html",
        "Automatisierungstechnik",
        PageKind::Info,
    ),
    page(
        "/automatisierungstechnik_projekte",
        "Projekte/automatisierungstechnik_projekte.html",
        "Automatisierungstechnik",
        PageKind::Projects,
    ),
    page("/wifi_projekte", "Projekte/wifi_projekte.html", "WiFi", PageKind::Projects),
    page("/3d_druck_info", "Info/3d_druck_info.html", "3D-Druck", PageKind::Info),
    page("/3d_druck_projekte", "Projekte/3d_druck_projekte.html", "3D-Druck", PageKind::Projects),
    page("/cad_info", "Info/cad_info.html", "CAD", PageKind::Info),
    page("/cad_projekte", "Projekte/cad_projekte.html", "CAD", PageKind::Projects),
    page("/ueber_uns_info", "Info/ueber_uns_info.html", "Über uns", PageKind::Info),
    page(
        "/artificial_intelligence_info",
        "Info/ai_info.html",
        "Künstliche Intelligenz",
        PageKind::Info,
    ),
    page(
        "/artificial_intelligence_projekte",
        "Projekte/ai_projekte.html",
        "Künstliche Intelligenz",
        PageKind::Projects,
    ),
    page("/smartlab_info", "Info/smartlab_info.html", "Smartlab", PageKind::Info),
    // the smartlab project page lives next to the info pages
    page("/smartlab_projekte", "Info/smartlab_projekte.html", "Smartlab", PageKind::Projects),
    page("/lasertechnik_info", "Info/lasertechnik_info.html", "Lasertechnik", PageKind::Info),
    page(
        "/lasertechnik_projekte",
        "Projekte/lasertechnik_projekte.html",
        "Lasertechnik",
        PageKind::Projects,
    ),
    page("/cae_info", "Info/cae_info.html", "CAE", PageKind::Info),
    page("/cae_projekte", "Projekte/cae_projekte.html", "CAE", PageKind::Projects),
];

/// Lookup over [`PAGES`].
#[derive(Debug, Clone, Copy)]
pub struct PageCatalog {
    pages: &'static [Page],
}

impl PageCatalog {
    pub fn new() -> Self {
        Self { pages: PAGES }
    }

    pub fn all(&self) -> &'static [Page] {
        self.pages
    }

    /// Find a page by request path. A trailing slash is ignored.
    pub fn find(&self, path: &str) -> Option<&'static Page> {
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        self.pages.iter().find(|p| p.path == path)
    }

    pub fn home(&self) -> &'static Page {
        &self.pages[0]
    }

    pub fn by_kind(&self, kind: PageKind) -> impl Iterator<Item = &'static Page> {
        self.pages.iter().filter(move |p| p.kind == kind)
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::new()
    }
}
