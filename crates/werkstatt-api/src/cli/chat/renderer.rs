//! Terminal rendering of chat bubbles.
//!
//! User messages are green, bot messages cyan, matching the
//! widget's two bubble styles.

use console::style;

use werkstatt_types::chat::{ChatMessage, Sender};

/// Format one transcript entry as a styled line.
pub fn render_message(message: &ChatMessage) -> String {
    match message.sender {
        Sender::User => format!("  {} {}", style("You >").green().bold(), message.text),
        Sender::Bot => format!("  {} {}", style("Bot >").cyan().bold(), message.text),
    }
}

pub fn print_message(message: &ChatMessage) {
    println!("{}", render_message(message));
}

/// Print the whole transcript between blank lines.
pub fn print_transcript(messages: &[ChatMessage]) {
    println!();
    for message in messages {
        print_message(message);
    }
    println!();
}
