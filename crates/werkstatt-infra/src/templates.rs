//! Template store for the site pages.
//!
//! Templates are plain HTML files under one root directory. The only
//! dynamic value is the home page greeting, substituted for the
//! `{{ greeting }}` placeholder.

use std::path::PathBuf;

use werkstatt_types::error::PageError;
use werkstatt_types::page::Page;

const GREETING_PLACEHOLDERS: [&str; 2] = ["{{ greeting }}", "{{greeting}}"];

/// Reads page templates from disk on every request.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn template_path(&self, page: &Page) -> PathBuf {
        self.root.join(page.template)
    }

    /// Load the page template and fill in the greeting, if given.
    pub async fn render(&self, page: &Page, greeting: Option<&str>) -> Result<String, PageError> {
        let path = self.template_path(page);
        let html = match tokio::fs::read_to_string(&path).await {
            Ok(html) => html,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(template = %path.display(), "template missing");
                return Err(PageError::NotFound(page.path.to_string()));
            }
            Err(e) => {
                return Err(PageError::Template {
                    template: page.template.to_string(),
                    message: e.to_string(),
                });
            }
        };

        Ok(match greeting {
            Some(greeting) => fill_greeting(&html, greeting),
            None => html,
        })
    }
}

fn fill_greeting(html: &str, greeting: &str) -> String {
    let escaped = escape_html(greeting);
    GREETING_PLACEHOLDERS
        .iter()
        .fold(html.to_string(), |acc, placeholder| acc.replace(placeholder, &escaped))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
