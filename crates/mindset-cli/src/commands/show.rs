use clap::Args;
use mindset_core::view::{html, text};
use mindset_core::{Config, MenuMode, Session, View};

use super::resolve_today;

#[derive(Args)]
pub struct ShowArgs {
    /// Section: learn, challenge, progress, inspiration (or 1-4)
    mode: String,
    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

/// Renders one section in a throwaway session.
pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode: MenuMode = args.mode.parse()?;
    let today = resolve_today(args.today.as_deref())?;
    let config = Config::load()?;

    let mut session = Session::from_seed(config.random.seed);
    let view = View::build(mode, &mut session, today, &config.display);

    match args.format {
        Format::Text => print!("{}", text::render_text(&view)),
        Format::Html => println!("{}", html::render_page(&view).into_string()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
