//! Welcome banner for chat sessions.

use console::style;

/// Print the banner: which service is being asked and how to get help.
pub fn print_welcome_banner(endpoint: &str) {
    println!();
    println!("  * {}", style("Werkstatt Assistent").cyan().bold());
    println!("  {}", style("Fragen an die Werkstatt").dim());
    println!();
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
