// SPDX-License-Identifier: MPL-2.0
use iced_tasks::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_tasks [OPTIONS] [PATH]

Arguments:
  [PATH]                Location to open on startup (default: /)

Options:
      --lang <LOCALE>   Interface language (e.g. en-US, ar)
      --theme <THEME>   Theme: light, dark or system
      --config-dir <DIR>
                        Directory containing settings.toml
  -h, --help            Print help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let theme = args.opt_value_from_str("--theme")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let initial_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        theme,
        config_dir,
        initial_path,
    }))
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)
}
