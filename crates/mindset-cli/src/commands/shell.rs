//! Interactive single-session loop over stdin.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Args;
use mindset_core::storage::DisplayConfig;
use mindset_core::view::text::render_text;
use mindset_core::{Config, MenuMode, Session, View};

use super::resolve_today;

#[derive(Args)]
pub struct ShellArgs {
    /// Pin the session to this date (YYYY-MM-DD) instead of the local date
    #[arg(long)]
    today: Option<String>,
}

const HELP: &str = "\
Commands:
  learn | challenge | progress | inspiration   show a section (or 1-4)
  reflect <text>                               submit today's reflection
  help                                         show this help
  quit                                         end the session (reflections are discarded)
";

pub fn run(args: ShellArgs) -> Result<(), Box<dyn std::error::Error>> {
    let pinned = args
        .today
        .as_deref()
        .map(|value| resolve_today(Some(value)))
        .transpose()?;
    let config = Config::load()?;
    let mut session = Session::from_seed(config.random.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(
        stdin.lock(),
        stdout.lock(),
        &mut session,
        &config.display,
        || pinned.unwrap_or_else(|| chrono::Local::now().date_naive()),
    )?;
    Ok(())
}

/// Reads commands until EOF or `quit`. `today` is asked once per command so
/// a session left open past midnight picks up the new day.
pub fn run_loop<R, W, F>(
    input: R,
    mut output: W,
    session: &mut Session,
    display: &DisplayConfig,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", render_text(&View::build(MenuMode::Learn, session, today(), display)))?;
    write!(output, "{HELP}\n> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let (command, rest) = match line.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => write!(output, "{HELP}")?,
            "reflect" => {
                let view = View::submit(session, today(), rest);
                writeln!(output, "{}", render_text(&view))?;
            }
            other => match other.parse::<MenuMode>() {
                Ok(mode) => {
                    let view = View::build(mode, session, today(), display);
                    writeln!(output, "{}", render_text(&view))?;
                }
                Err(err) => {
                    tracing::debug!(input = other, "unrecognised shell command");
                    writeln!(output, "{err}. Type 'help' for commands.")?;
                }
            },
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
