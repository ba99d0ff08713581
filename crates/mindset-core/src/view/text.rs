//! Plain-text rendering for terminals.

use std::fmt::Write;

use super::{Notice, Page, View, STREAK_CAPTION};
use crate::catalog::{LearnContent, FOOTER_QUOTE};
use crate::streak::format_streak;

pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    match &view.page {
        Page::Learn { content } => learn(&mut out, content),
        Page::Challenge {
            challenge, notice, ..
        } => {
            heading(&mut out, "Your Daily Growth Mindset Challenge");
            let _ = writeln!(out, "Today's Challenge:\n  {challenge}\n");
            let _ = writeln!(
                out,
                "Reflect on your challenge: how did it help you grow today? What did you learn?"
            );
            if let Some(notice) = notice {
                let _ = writeln!(out, "\n{}", notice_line(notice));
            }
        }
        Page::Progress { entries, streak } => {
            heading(&mut out, "Your Growth Journey");
            let _ = writeln!(out, "Your Recent Reflections\n");
            for entry in entries {
                let _ = writeln!(out, "{}", entry.date);
                let _ = writeln!(out, "  Challenge: {}", entry.challenge);
                let _ = writeln!(out, "  Your Reflection: {}\n", entry.reflection);
            }
            let _ = writeln!(out, "Current Streak: {}", format_streak(*streak));
            let _ = writeln!(out, "{STREAK_CAPTION}");
        }
        Page::NoProgress { notice } => {
            heading(&mut out, "Your Growth Journey");
            let _ = writeln!(out, "{}", notice_line(notice));
        }
        Page::Inspiration { quote, tips } => {
            heading(&mut out, "Inspiration for Your Journey");
            let _ = writeln!(out, "\"{}\"\n", quote.attributed());
            let _ = writeln!(out, "Growth Mindset Tips");
            for tip in tips.iter() {
                let _ = writeln!(out, "- {tip}");
            }
        }
    }

    let (text, author) = FOOTER_QUOTE;
    let _ = write!(out, "\n---\n\"{text}\" - {author}\n");
    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}\n{}\n", "=".repeat(title.chars().count()));
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::Success(m) => format!("[ok] {m}"),
        Notice::Warning(m) => format!("[warning] {m}"),
        Notice::Info(m) => format!("[info] {m}"),
    }
}

fn learn(out: &mut String, content: &LearnContent) {
    heading(out, content.heading);
    let _ = writeln!(out, "{}", content.definition.replace('\n', " ").trim_end());
    let _ = writeln!(out, "\n{}", content.comparison_title);
    for column in [&content.fixed, &content.growth] {
        let _ = writeln!(out, "\n  {}: {}", column.name, column.belief);
        for item in column.traits {
            let _ = writeln!(out, "  - {item}");
        }
    }
    let _ = writeln!(out, "\n{}", content.why.title);
    for (term, detail) in content.why.items {
        let _ = writeln!(out, "- {term}: {detail}");
    }
    let _ = writeln!(out, "\n{}", content.practice.title);
    for (i, (term, detail)) in content.practice.items.iter().enumerate() {
        let _ = writeln!(out, "{}. {term}: {detail}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuMode;
    use crate::session::Session;
    use crate::storage::DisplayConfig;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_progress_text() {
        let mut session = Session::seeded(4);
        session.submit_reflection(d(1), "first").unwrap();
        session.submit_reflection(d(2), "second").unwrap();

        let view = View::build(MenuMode::ProgressTracker, &mut session, d(3), &DisplayConfig::default());
        let text = render_text(&view);
        assert!(text.contains("January 02, 2024"));
        assert!(text.contains("Your Reflection: second"));
        assert!(text.contains("Current Streak: 2 days"));
        assert!(text.find("second").unwrap() < text.find("first").unwrap());
    }

    #[test]
    fn test_learn_text_numbers_practice_steps() {
        let mut session = Session::seeded(4);
        let view = View::build(MenuMode::Learn, &mut session, d(1), &DisplayConfig::default());
        let text = render_text(&view);
        assert!(text.contains("1. Set Learning Goals: Focus on developing new skills"));
        assert!(text.contains("4. Stay Positive"));
        assert!(text.ends_with("\"Becoming is better than being.\" - Carol Dweck\n"));
    }

    #[test]
    fn test_inspiration_text_lists_tips() {
        let mut session = Session::seeded(4);
        let view = View::build(MenuMode::Inspiration, &mut session, d(1), &DisplayConfig::default());
        let text = render_text(&view);
        assert_eq!(text.matches("\n- ").count(), 10);
    }
}
