//! `person` command line: replays a record variant or salutes an addressee

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use person_record::{Age, DemoConfig, Greetable, Greeter, Variant};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn cli() -> Command {
    Command::new("person")
        .version(person_record::VERSION)
        .about("Greet a person, celebrate a birthday, capitalize the name")
        .arg_required_else_help(false)
        .arg(
            Arg::new("log-timestamps")
                .long("log-timestamps")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Include timestamps in log output (stderr)"),
        )
        .subcommand(
            Command::new("run")
                .about("Replay a program variant (the default when no subcommand is given)")
                .arg(
                    Arg::new("variant")
                        .long("variant")
                        .value_parser(value_parser!(Variant))
                        .help("Variant to run: full, basic or greet-only [default: full]"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Override the starting name"),
                )
                .arg(
                    Arg::new("age")
                        .long("age")
                        .value_parser(value_parser!(Age))
                        .help("Override the starting age"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML file with variant, name and age"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the final record as JSON"),
                ),
        )
        .subcommand(
            Command::new("salute")
                .about("Greet and bid farewell to an addressee")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .default_value(Greeter::DEFAULT_ADDRESSEE)
                        .help("Who to greet"),
                ),
        )
}

fn init_tracing(timestamps: bool) {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let with_time_layer = if timestamps {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(filter()),
        )
    } else {
        None
    };

    let without_time_layer = if timestamps {
        None
    } else {
        Some(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr)
                .with_filter(filter()),
        )
    };

    tracing_subscriber::registry()
        .with(with_time_layer)
        .with(without_time_layer)
        .init();
}

/// Build the effective config: file first, then flags on top
fn resolve_config(args: &ArgMatches) -> anyhow::Result<DemoConfig> {
    let base = match args.get_one::<PathBuf>("config") {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    let flags = DemoConfig {
        variant: args.get_one::<Variant>("variant").copied().unwrap_or(base.variant),
        name: args.get_one::<String>("name").cloned(),
        age: args.get_one::<Age>("age").copied(),
    };

    Ok(base.overlay(flags))
}

fn run(config: &DemoConfig, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::info!(variant = %config.variant, "running variant");

    let mut script = config.script();
    let messages = script
        .run()
        .with_context(|| format!("running variant {}", config.variant))?;

    for message in &messages {
        writeln!(out, "{message}")?;
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(script.record())?)?;
    }
    Ok(())
}

fn salute(name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let greeter = Greeter::new(name);
    writeln!(out, "{}", greeter.greeting())?;
    writeln!(out, "{}", greeter.farewell())?;
    Ok(())
}

fn dispatch(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("run", args)) => {
            let config = resolve_config(args)?;
            run(&config, args.get_flag("json"), out)
        }
        Some(("salute", args)) => {
            let name = args
                .get_one::<String>("name")
                .map_or(Greeter::DEFAULT_ADDRESSEE, String::as_str);
            salute(name, out)
        }
        _ => run(&DemoConfig::default(), false, out),
    }
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-timestamps"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&matches, &mut out)?;
    out.flush()?;
    Ok(())
}
