//! HTML rendering with maud.
//!
//! Every piece of user text goes through maud's escaping; only the static
//! stylesheet is emitted raw.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{EntryView, Notice, Page, View, APP_TITLE, STREAK_CAPTION, WELCOME};
use crate::catalog::{LearnContent, Quote, FOOTER_QUOTE};
use crate::menu::MenuMode;
use crate::streak::format_streak;

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; display: flex; color: #1f2937; }
nav.sidebar { width: 16rem; min-height: 100vh; background: #f0f2f6; padding: 1.5rem 1rem; }
nav.sidebar a { display: block; padding: .5rem .75rem; border-radius: .5rem; color: inherit; text-decoration: none; }
nav.sidebar a.active { background: #2e8b57; color: #fff; }
main { flex: 1; max-width: 46rem; padding: 2rem 3rem; }
.big-font { font-size: 20px !important; font-weight: bold; }
.quote { font-style: italic; font-size: 18px; color: #2e8b57; padding: 10px; border-left: 5px solid #2e8b57; background-color: #f8f9fa; }
.challenge-card { padding: 15px; border-radius: 10px; box-shadow: 0 4px 8px 0 rgba(0,0,0,0.2); margin: 10px 0; }
.columns { display: flex; gap: 2rem; }
.columns > div { flex: 1; }
.notice { padding: .75rem 1rem; border-radius: .5rem; margin: 1rem 0; }
.notice.success { background: #d1fae5; }
.notice.warning { background: #fef3c7; }
.notice.info { background: #dbeafe; }
.streak { text-align: center; color: #2e8b57; }
.caption { color: #6b7280; font-size: .875rem; }
textarea { width: 100%; min-height: 8rem; }
footer { margin-top: 2rem; border-top: 1px solid #e5e7eb; padding-top: 1rem; }
"#;

/// Full HTML document for a view.
pub fn render_page(view: &View) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (APP_TITLE) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (render_menu(view.mode))
                main {
                    h1 { "🌱 " (APP_TITLE) }
                    p { (WELCOME) }
                    (render_body(&view.page))
                    (render_footer())
                }
            }
        }
    }
}

/// Page for an unknown route.
pub fn render_not_found(path: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (APP_TITLE) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (render_menu(MenuMode::default()))
                main {
                    h1 { "Page not found" }
                    p { "Nothing lives at " code { (path) } ". Pick a section from the menu." }
                }
            }
        }
    }
}

fn render_menu(current: MenuMode) -> Markup {
    html! {
        nav.sidebar {
            h3 { "Menu" }
            @for mode in MenuMode::ALL {
                @if mode == current {
                    a class="active" href={ "/" (mode.slug()) } { (mode.label()) }
                } @else {
                    a href={ "/" (mode.slug()) } { (mode.label()) }
                }
            }
        }
    }
}

fn render_body(page: &Page) -> Markup {
    match page {
        Page::Learn { content } => render_learn(content),
        Page::Challenge {
            challenge,
            notice,
            draft,
        } => render_challenge(challenge, notice.as_ref(), draft),
        Page::Progress { entries, streak } => render_progress(entries, *streak),
        Page::NoProgress { notice } => html! {
            h2 { "Your Growth Journey" }
            (render_notice(notice))
        },
        Page::Inspiration { quote, tips } => render_inspiration(quote, tips),
    }
}

fn render_learn(content: &LearnContent) -> Markup {
    html! {
        h2 { (content.heading) }
        div.big-font { (content.definition) }
        h3 { (content.comparison_title) }
        div.columns {
            @for column in [&content.fixed, &content.growth] {
                div {
                    ul {
                        li { strong { (column.name) } ": " (column.belief) }
                        @for item in column.traits {
                            li { (item) }
                        }
                    }
                }
            }
        }
        h3 { (content.why.title) }
        ul {
            @for (term, detail) in content.why.items {
                li { strong { (term) } ": " (detail) }
            }
        }
        h3 { (content.practice.title) }
        ol {
            @for (term, detail) in content.practice.items {
                li { strong { (term) } ": " (detail) }
            }
        }
    }
}

fn render_challenge(challenge: &str, notice: Option<&Notice>, draft: &str) -> Markup {
    html! {
        h2 { "Your Daily Growth Mindset Challenge" }
        div.challenge-card {
            h3 { "Today's Challenge" }
            p.big-font { (challenge) }
        }
        h3 { "Reflect on Your Challenge" }
        form method="post" action={ "/" (MenuMode::DailyChallenge.slug()) } {
            label for="reflection" { "How did this challenge help you grow today? What did you learn?" }
            textarea #reflection name="reflection" { (draft) }
            button type="submit" { "Submit Reflection" }
        }
        @if let Some(notice) = notice {
            (render_notice(notice))
        }
    }
}

fn render_progress(entries: &[EntryView], streak: u32) -> Markup {
    html! {
        h2 { "Your Growth Journey" }
        h3 { "Your Recent Reflections" }
        @for entry in entries {
            div.challenge-card {
                h4 { (entry.date) }
                p { strong { "Challenge:" } " " (entry.challenge) }
                p { strong { "Your Reflection:" } " " (entry.reflection) }
            }
        }
        h3 { "Current Streak" }
        h1.streak { (format_streak(streak)) }
        p.caption { (STREAK_CAPTION) }
    }
}

fn render_inspiration(quote: &Quote, tips: &[&str]) -> Markup {
    html! {
        h2 { "Inspiration for Your Journey" }
        div.quote { "\"" (quote.attributed()) "\"" }
        form method="get" action={ "/" (MenuMode::Inspiration.slug()) } {
            button type="submit" { "Another Inspiring Quote" }
        }
        h3 { "Growth Mindset Tips" }
        ul {
            @for tip in tips {
                li { (tip) }
            }
        }
    }
}

fn render_notice(notice: &Notice) -> Markup {
    let level = match notice {
        Notice::Success(_) => "success",
        Notice::Warning(_) => "warning",
        Notice::Info(_) => "info",
    };
    html! {
        div class={ "notice " (level) } { (notice.message()) }
    }
}

fn render_footer() -> Markup {
    let (text, author) = FOOTER_QUOTE;
    html! {
        footer {
            em { "\"" (text) "\"" } " - " (author)
        }
    }
}
