//! `werk pages` -- list the site's routes and templates.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, Table};
use console::style;

use werkstatt_core::site::catalog::PageCatalog;
use werkstatt_types::page::{Page, PageKind};

/// Print the page catalog, optionally filtered by kind.
pub fn list_pages(kind: Option<PageKind>, json: bool) -> anyhow::Result<()> {
    let catalog = PageCatalog::new();
    let pages: Vec<&Page> = match kind {
        Some(kind) => catalog.by_kind(kind).collect(),
        None => catalog.all().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Path", "Title", "Kind", "Template"]);

    for page in &pages {
        let kind_color = match page.kind {
            PageKind::Home => Color::Green,
            PageKind::Info => Color::Cyan,
            PageKind::Projects => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(page.path),
            Cell::new(page.title),
            Cell::new(page.kind).fg(kind_color),
            Cell::new(page.template),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} pages", style(pages.len()).bold());
    println!();
    Ok(())
}
