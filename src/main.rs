//! currency-converter CLI
//!
//! Convert amounts and inspect the resulting audit log from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Convert with rates from a config file
//! currency-converter convert --from USD --to EUR --amount 50 --config rates.json
//!
//! # Output as JSON
//! currency-converter convert --from USD --to EUR --amount 50 --config rates.json --format json
//!
//! # Run a random workload against a flaky rate source
//! currency-converter simulate --config rates.json --conversions 100 --failure-rate 0.2
//! ```

use currency_converter::config::ServiceConfig;
use currency_converter::core::currency::CurrencyCode;
use currency_converter::rates::table::StaticRateTable;
use currency_converter::service::conversion::ConversionService;
use currency_converter::simulation::flaky::FlakyRateSource;
use currency_converter::simulation::workload::{generate_requests, run_requests, WorkloadConfig};
use std::process;

fn print_usage() {
    eprintln!(
        r#"currency-converter: currency conversion with default-rate fallback and audit log

USAGE:
    currency-converter <COMMAND> [OPTIONS]

COMMANDS:
    convert     Convert a single amount
    simulate    Run random conversions against a flaky rate source
    help        Show this message

OPTIONS (convert):
    --from <CCY>          Origin currency code
    --to <CCY>            Target currency code
    --amount <N>          Amount to convert (must be positive)

OPTIONS (simulate):
    --conversions <N>     Number of conversions (default: 100)
    --failure-rate <P>    Probability the rate source is unavailable (default: 0.1)
    --seed <N>            RNG seed (default: 0)

OPTIONS (all):
    --config <FILE>       JSON config with default_rate and rates
    --default-rate <R>    Override the configured default rate
    --format <FORMAT>     Output format: text (default) or json

Set RUST_LOG=warn to see fallbacks to the default rate.

EXAMPLES:
    currency-converter convert --from USD --to EUR --amount 50 --config rates.json
    currency-converter simulate --config rates.json --conversions 500 --failure-rate 0.25"#
    );
}

/// Options shared by every command.
struct CommonOptions {
    config_path: Option<String>,
    default_rate: Option<f64>,
    format: String,
}

impl CommonOptions {
    fn new() -> Self {
        Self {
            config_path: None,
            default_rate: None,
            format: "text".to_string(),
        }
    }

    /// Consume a shared option at `args[*i]`. Returns false if it is not one.
    fn parse(&mut self, args: &[String], i: &mut usize) -> bool {
        match args[*i].as_str() {
            "--config" => {
                *i += 1;
                self.config_path = Some(required(args, *i, "--config requires a file path"));
            }
            "--default-rate" => {
                *i += 1;
                self.default_rate = Some(parse_number(args, *i, "--default-rate requires a number"));
            }
            "--format" => {
                *i += 1;
                self.format = required(args, *i, "--format requires 'text' or 'json'");
            }
            _ => return false,
        }
        true
    }

    fn load(&self) -> (ServiceConfig, StaticRateTable) {
        let mut config = match &self.config_path {
            Some(path) => ServiceConfig::from_file(path).unwrap_or_else(|e| {
                eprintln!("Error loading config '{}': {}", path, e);
                process::exit(1);
            }),
            None => ServiceConfig::default(),
        };
        if let Some(rate) = self.default_rate {
            config.default_rate = rate;
            if let Err(e) = config.validate() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        let table = config.rate_table().unwrap_or_else(|e| {
            eprintln!("Error building rate table: {}", e);
            process::exit(1);
        });
        (config, table)
    }
}

fn required(args: &[String], i: usize, message: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{}", message);
        process::exit(1);
    })
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, message: &str) -> T {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{}", message);
            process::exit(1);
        })
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        process::exit(1);
    })
}

fn cmd_convert(args: &[String]) {
    let mut common = CommonOptions::new();
    let mut from = None;
    let mut to = None;
    let mut amount: Option<f64> = None;
    let mut i = 0;
    while i < args.len() {
        if !common.parse(args, &mut i) {
            match args[i].as_str() {
                "--from" => {
                    i += 1;
                    from = Some(required(args, i, "--from requires a currency code"));
                }
                "--to" => {
                    i += 1;
                    to = Some(required(args, i, "--to requires a currency code"));
                }
                "--amount" => {
                    i += 1;
                    amount = Some(parse_number(args, i, "--amount requires a number"));
                }
                _ => {
                    eprintln!("Unknown option: {}", args[i]);
                    process::exit(1);
                }
            }
        }
        i += 1;
    }

    let (Some(from), Some(to), Some(amount)) = (from, to, amount) else {
        eprintln!("Error: --from, --to and --amount are required");
        process::exit(1);
    };

    let (config, table) = common.load();
    let mut service = ConversionService::from_config(table, &config);

    let record = service
        .convert(&CurrencyCode::new(from), &CurrencyCode::new(to), amount)
        .unwrap_or_else(|e| {
            eprintln!("Conversion failed: {}", e);
            process::exit(1);
        });

    if common.format == "json" {
        println!("{}", to_json(&record));
    } else {
        println!("{}", record);
    }
}

fn cmd_simulate(args: &[String]) {
    let mut common = CommonOptions::new();
    let mut conversions = 100usize;
    let mut failure_rate = 0.1f64;
    let mut seed = 0u64;
    let mut i = 0;
    while i < args.len() {
        if !common.parse(args, &mut i) {
            match args[i].as_str() {
                "--conversions" => {
                    i += 1;
                    conversions = parse_number(args, i, "--conversions requires a number");
                }
                "--failure-rate" => {
                    i += 1;
                    failure_rate = parse_number(args, i, "--failure-rate requires a number");
                }
                "--seed" => {
                    i += 1;
                    seed = parse_number(args, i, "--seed requires a number");
                }
                _ => {
                    eprintln!("Unknown option: {}", args[i]);
                    process::exit(1);
                }
            }
        }
        i += 1;
    }

    let (config, table) = common.load();
    let mut currencies = table.currencies();
    if currencies.is_empty() {
        currencies = vec![CurrencyCode::new("USD"), CurrencyCode::new("EUR")];
    }

    let requests = generate_requests(&WorkloadConfig {
        request_count: conversions,
        currencies,
        seed,
        ..Default::default()
    });

    let source = FlakyRateSource::new(table, failure_rate, seed);
    let mut service = ConversionService::from_config(source, &config);
    let outcomes = run_requests(&mut service, &requests);
    let failed = outcomes.iter().filter(|o| o.is_err()).count();

    let log = service.audit_logs();
    if common.format == "json" {
        println!("{}", to_json(log));
    } else {
        println!("{}", log);
        println!("Requests:       {}", requests.len());
        println!("Rejected:       {}", failed);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "convert" => cmd_convert(rest),
        "simulate" => cmd_simulate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
