//! Menu text, coloured with ANSI escapes.

use crossterm::style::Stylize;

use crate::models::Kind;

const RULE: &str = "-----------------------------------------------------";

/// Upper-cases the first letter (`game` -> `Game`).
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The main menu for a catalog flavour, ending with the input arrow.
pub fn main_menu<K: Kind>() -> String {
    let record = capitalize(K::RECORD);
    let task = capitalize(K::TASK);
    let archive = K::ARCHIVED_LABEL.to_lowercase();

    let lines = [
        format!("{}", RULE.cyan()),
        format!("|{}|", format!("  Shelf: {}", capitalize(K::RECORDS)).white().bold()),
        format!("{}", RULE.cyan()),
        format!("| {} MENU", record.to_uppercase()),
        format!("{}", format!("|   1) Add a {}", K::RECORD).green()),
        format!("{}", format!("|   2) List {}", K::RECORDS).green()),
        format!("{}", format!("|   3) Update a {}", K::RECORD).yellow()),
        format!("{}", format!("|   4) Delete a {}", K::RECORD).yellow()),
        format!("{}", format!("|   5) Mark a {} as {}", K::RECORD, archive).green()),
        format!("{}", RULE.cyan()),
        format!("| {} MENU", task.to_uppercase()),
        format!("{}", format!("|   6) Add {} to a {}", K::TASK, K::RECORD).green()),
        format!("{}", format!("|   7) Update {} contents on a {}", K::TASK, K::RECORD).yellow()),
        format!("{}", format!("|   8) Delete {} from a {}", K::TASK, K::RECORD).yellow()),
        format!(
            "{}",
            format!(
                "|   9) Mark {} as {}/{}",
                K::TASK,
                K::COMPLETE_LABEL.to_lowercase(),
                K::PENDING_LABEL.to_lowercase()
            )
            .blue()
        ),
        format!("{}", RULE.cyan()),
        "| REPORTS".to_string(),
        format!("{}", format!("|   10) Search {} (by name)", K::RECORDS).blue()),
        format!("{}", format!("|   15) Search {} (by contents)", K::TASKS).blue()),
        format!("{}", format!("|   16) List {} {}", K::PENDING_LABEL, K::TASKS).blue()),
        format!("{}", RULE.cyan()),
        format!("{}", "|   19) Save".magenta()),
        format!("{}", "|   20) Load".magenta()),
        format!("{}", RULE.cyan()),
        format!("{}", "|   0) Exit".red()),
        format!("{}", RULE.cyan()),
    ];

    format!("{}\n==>> ", lines.join("\n"))
}

/// Sub-menu offered by "List".
pub fn list_menu<K: Kind>() -> String {
    [
        "-----------------------------------".to_string(),
        format!("|   1) View ALL {}", K::RECORDS),
        format!("|   2) View ACTIVE {}", K::RECORDS),
        format!("|   3) View {} {}", K::ARCHIVED_LABEL.to_uppercase(), K::RECORDS),
        "-----------------------------------".to_string(),
        "==>> ".to_string(),
    ]
    .join("\n")
}
