use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::info;
use log::LevelFilter;

mod config;
mod engine;
mod error;
mod frontend;

use config::AppConfig;
use engine::{ConversionEngine, CurrencyCode};
use frontend::{Frontend, InteractiveFrontend, OneshotFrontend};

use error::{Error, ErrorKind};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Oneshot,
    Interactive,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Convert an amount between EUR, USD and YEN with fixed rates
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// amount to convert (oneshot mode)
    #[clap(short, long, value_parser)]
    amount: Option<String>,

    /// source currency
    #[clap(default_value_t = CurrencyCode::Eur, short = 'f', long = "from", value_parser)]
    source: CurrencyCode,

    /// destination currency
    #[clap(default_value_t = CurrencyCode::Usd, short = 't', long = "to", value_parser)]
    destination: CurrencyCode,

    /// frontend mode
    #[clap(default_value_t = Mode::Oneshot, short, long, value_parser)]
    mode: Mode,
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    //
    // fixed configuration and engine
    let config = AppConfig::new();
    let engine = ConversionEngine::new(config.rates);
    info!(
        "{} ready, converting {} -> {}",
        config.app_name, args.source, args.destination
    );

    //
    // run frontend
    let mut frontend: Box<dyn Frontend + '_> = match args.mode {
        Mode::Oneshot => {
            let amount = args.amount.ok_or_else(|| {
                Error::new(ErrorKind::Frontend, "--amount is required in oneshot mode")
            })?;
            Box::new(OneshotFrontend::new(
                &engine,
                config.empty_value,
                &amount,
                args.source,
                args.destination,
            ))
        }
        Mode::Interactive => Box::new(InteractiveFrontend::new(
            &engine,
            config.app_name,
            config.empty_value,
            args.source,
            args.destination,
        )),
    };
    frontend.run()?;

    Ok(())
}
