// SPDX-License-Identifier: MPL-2.0
use impact_feed::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "impact_feed=info";

const HELP: &str = "\
impact_feed - a small community feed with a post composer

USAGE:
  impact_feed [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --seed <PATH>         TOML file with the startup posts
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  IMPACT_FEED_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG                Log filter (default: impact_feed=info)
";

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        seed_path: args.opt_value_from_os_str("--seed", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok((flags, config_dir))
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (flags, config_dir) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(config_dir);
    app::run(flags)
}
