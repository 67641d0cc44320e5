use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use u_vaxsets::campaign;
use u_vaxsets::config::{CampaignConfig, DEFAULT_COHORT, DEFAULT_POPULATION, DEFAULT_SAMPLE_LIMIT};
use u_vaxsets::random::resolve_seed;
use u_vaxsets::report::Report;

#[derive(Parser)]
#[command(name = "u-vaxsets")]
#[command(about = "Simulate a two-vaccine campaign and report set breakdowns")]
#[command(override_usage = "u-vaxsets [SEED] [OPTIONS]")]
struct Cli {
    /// Taken verbatim from the first argument; unparsable or missing uses the clock
    #[arg(skip)]
    seed: Option<String>,

    /// Number of citizens in the population
    #[arg(long, default_value_t = DEFAULT_POPULATION as i64, allow_negative_numbers = true)]
    population: i64,

    /// Citizens vaccinated with Pfizer (P)
    #[arg(long, default_value_t = DEFAULT_COHORT as i64, allow_negative_numbers = true)]
    pfizer: i64,

    /// Citizens vaccinated with AstraZeneca (A)
    #[arg(long, default_value_t = DEFAULT_COHORT as i64, allow_negative_numbers = true)]
    astra: i64,

    /// Maximum members listed per set
    #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
    sample_limit: usize,

    /// Extra positional arguments are ignored
    #[arg(hide = true)]
    _rest: Vec<String>,
}

impl Cli {
    /// Parses `args` (program name first). The first argument is the seed
    /// unless it names one of the options, so any token there, hyphenated
    /// or not, falls through to seed resolution instead of failing.
    fn parse_with_seed<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args: Vec<String> = args.into_iter().collect();
        let seed = match args.get(1) {
            Some(first) if !Self::is_option(first) => Some(args.remove(1)),
            _ => None,
        };
        let mut cli = Self::parse_from(args);
        cli.seed = seed;
        cli
    }

    fn is_option(token: &str) -> bool {
        let Some(long) = token.strip_prefix("--") else {
            return token == "-h";
        };
        let name = long.split('=').next().unwrap_or_default();
        name == "help"
            || Self::command()
                .get_arguments()
                .any(|arg| arg.get_long() == Some(name))
    }
}

fn render(cli: Cli) -> Result<String> {
    let mut config = CampaignConfig::from_raw(cli.population, cli.pfizer, cli.astra)
        .context("invalid campaign parameters")?;
    config.sample_limit = cli.sample_limit;

    let seed = resolve_seed(cli.seed.as_deref());
    let outcome = campaign::run(config, seed).context("campaign failed")?;
    Ok(Report::new(&outcome).to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse_with_seed(std::env::args_os().map(|a| a.to_string_lossy().into_owned()));
    print!("{}", render(cli)?);
    Ok(())
}
