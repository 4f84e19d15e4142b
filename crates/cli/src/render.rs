//! Plain-text rendering of the two routes.

use std::fmt::Write;

use booklet_core::{AnswerState, CompletionOutcome};
use booklet_progress::{CategoryScreen, CompletionReport, HomeScreen};
use chrono::NaiveDate;

/// `MM/DD/YYYY`, as shown in the header.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub fn home(screen: &HomeScreen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Date: {}", format_date(screen.today));
    let _ = writeln!(out, "Store: {}", or_placeholder(&screen.store_name));
    let _ = writeln!(out, "Name:  {}", or_placeholder(&screen.user_name));
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<28} {}", "Categories", "Progress");

    for row in &screen.rows {
        let (title, status) = if row.locked {
            (format!("{} [locked]", row.category.title), "Locked")
        } else {
            (format!("{} ({})", row.category.title, row.category.id), "Unlocked")
        };
        let _ = writeln!(
            out,
            "{:<28} {}/{}  {}",
            title, row.count, row.category.target, status
        );
    }
    out
}

fn choice(answer: AnswerState) -> &'static str {
    match answer {
        AnswerState::Understood => "[x] Got it   [ ] Not fully clear",
        AnswerState::NotUnderstood => "[ ] Got it   [x] Not fully clear",
        AnswerState::Unset => "[ ] Got it   [ ] Not fully clear",
    }
}

pub fn category(screen: &CategoryScreen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", screen.category.title);
    let _ = write!(
        out,
        "Progress: {}/{} · Week: {}",
        screen.count, screen.category.target, screen.week
    );
    if screen.completed_this_week() {
        out.push_str(" · Completed this week");
    }
    out.push('\n');
    out.push('\n');

    for (i, answer) in screen.answers.iter().enumerate() {
        let _ = writeln!(out, "Q{}  {}", i + 1, choice(*answer));
    }
    out.push('\n');

    let action = if screen.can_complete() { "available" } else { "disabled" };
    let _ = writeln!(out, "Complete this week: {}", action);
    let _ = writeln!(out, "{}", screen.hint());
    out
}

pub fn completion(title: &str, report: &CompletionReport) -> String {
    let mut out = match report.outcome {
        CompletionOutcome::Completed { count } => {
            format!("Recorded this week for {} (total {}).", title, count)
        }
        CompletionOutcome::NotReady => {
            format!("{} is not ready: every answer must be \"Got it\".", title)
        }
        CompletionOutcome::AlreadyCompletedThisWeek => {
            format!("{} was already completed this week; progress unchanged.", title)
        }
    };
    if let Some(next) = report.unlocked {
        let _ = write!(out, "\nUnlocked: {}", next.title);
    }
    out
}
