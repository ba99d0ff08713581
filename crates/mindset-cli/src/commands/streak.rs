use clap::Args;
use mindset_core::{format_streak, parse_date, StreakCalculator};

use super::resolve_today;

#[derive(Args)]
pub struct StreakArgs {
    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<String>,
    /// Print the bare number instead of "N days"
    #[arg(long)]
    raw: bool,
    /// Dates with a qualifying entry (YYYY-MM-DD)
    dates: Vec<String>,
}

pub fn run(args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today = resolve_today(args.today.as_deref())?;
    let dates = args
        .dates
        .iter()
        .map(|value| parse_date(value))
        .collect::<Result<Vec<_>, _>>()?;

    let streak = StreakCalculator::new().compute(dates, today);
    if args.raw {
        println!("{streak}");
    } else {
        println!("{}", format_streak(streak));
    }
    Ok(())
}
