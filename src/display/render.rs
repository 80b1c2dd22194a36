//! Terminal rendering of the display model

use super::model::DisplayModel;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// How long a transient status line stays visible
const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(1500);

pub fn render(model: &DisplayModel) {
    println!("{}", model.hijri_header);
    println!("{}", model.gregorian_header);
    println!();

    for card in &model.cards {
        println!("  {:<8} {}", card.name, card.time);
    }
    println!();

    let heading = if model.fasting.ramadan_mode {
        "Ramadan Mubarak"
    } else {
        "Fasting window"
    };
    println!("{}", heading);
    println!("  {:<8} {}", "Suhoor", model.fasting.suhoor);
    println!("  {:<8} {}", "Iftar", model.fasting.iftar);
    println!();

    println!("Upcoming sacred days");
    if model.holidays.is_empty() {
        println!("  No upcoming sacred days this month.");
    } else {
        for item in &model.holidays {
            println!("  {}", item.name);
            println!("    {} \u{2022} {}", item.gregorian, item.hijri_label);
        }
    }
}

/// Generic failure rendering; the concrete cause goes to the log only
pub fn render_error() {
    println!("Unable to load data");
    println!("Check settings and try again.");
}

/// Show a transient status line and clear it after a fixed delay
pub fn flash_status(status: &str) {
    print!("{}", status);
    let _ = io::stdout().flush();
    thread::sleep(STATUS_CLEAR_DELAY);
    print!("\r{}\r", " ".repeat(status.len()));
    let _ = io::stdout().flush();
}
