mod clipboard;
mod config;
mod output;

use config::Config;

use std::io::{self, BufRead, IsTerminal};

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser};
use colored::{control::set_override, Colorize};
use dtime_core::{DiscordTime, ItemCategory, Moment, Plugin, PluginConfig, RenderVariant, Zone};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::clipboard::SystemClipboard;
use crate::output::OutputMode;

const LONG_ABOUT: &str = r##"
dtime turns a date or time into Discord timestamp markup.

Discord renders <t:EPOCH:STYLE> in every reader's own timezone. dtime shows
all six styles with a preview of how each one reads, plus the markup to paste.

SUPPORTED INPUT:
  Time of day:   13:00                     (today's date, local time)
  Date and time: 2023-12-30 13:00          (local time)
                 2023-12-30T13:00:15       (with seconds)
                 2023-12-30T13:00Z         (UTC)
                 2023-12-30 13:00+02:00    (explicit offset)

STYLES:
  R  Relative timestamp                  in 3 hours
  t  Short time                          13:00
  d  Short date                          30/12/23
  D  Long date                           December 30, 2023
  f  Long date, short time               December 30, 2023 at 13:00
  F  Long date, day of week, short time  Saturday, December 30, 2023 at 13:00

EXAMPLES:
  dtime 13:00                   All six styles for 13:00 today
  dtime 2023-12-30 13:00        Quotes are optional
  dtime -s F -c 20:30           Copy <t:...:F> for 20:30 today
  dtime -r 2023-12-30T13:00Z    Markup only, one per line
  echo 13:00 | dtime -j         JSON output from piped input

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting   | CLI flag       | Env var         | Default
  ----------|----------------|-----------------|---------
  style     | -s, --style    | DTIME_STYLE     | R
  utc       | -u, --utc      | DTIME_UTC       | false
  copy      | -c, --copy     | DTIME_COPY      | false
  no_color  | -C, --no-color | DTIME_NO_COLOR  | false

  Config file location: dtime --config-path
  Generate default config: dtime --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "dtime")]
#[command(version)]
#[command(about = "Turn dates and times into Discord timestamp markup")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// The date/time to convert (e.g. 13:00 or 2023-12-30 13:00)
    ///
    /// Multiple words are joined with spaces, so quoting is optional.
    /// Reads one line from stdin when omitted and stdin is piped.
    #[arg(value_name = "INPUT")]
    input: Vec<String>,

    /// Output results as JSON (for scripting/piping)
    #[arg(long, short = 'j', conflicts_with = "raw")]
    json: bool,

    /// Output only the markup tokens (for scripting)
    #[arg(long, short = 'r')]
    raw: bool,

    /// Only show one style (R, t, d, D, f, F)
    #[arg(long, short = 's', value_parser = parse_style_arg)]
    style: Option<RenderVariant>,

    /// Copy the markup for --style (or the configured style) to the clipboard
    #[arg(long, short = 'c')]
    copy: bool,

    /// Interpret inputs without an offset as UTC instead of local time
    #[arg(long, short = 'u')]
    utc: bool,

    /// Evaluate against this moment instead of the current time (RFC 3339)
    #[arg(long, value_name = "RFC3339", value_parser = parse_now_arg)]
    now: Option<DateTime<Utc>>,

    /// List the recognised input shapes
    #[arg(long)]
    shapes: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Enable verbose logging (use multiple times for more detail)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the config file path
    #[arg(long)]
    config_path: bool,

    /// Create a default config file
    #[arg(long)]
    config_init: bool,

    /// Keep clipboard text read from stdin alive (spawned by --copy)
    #[arg(long, hide = true)]
    hold_clipboard: bool,
}

fn parse_style_arg(s: &str) -> Result<RenderVariant, String> {
    config::parse_style(s)
        .ok_or_else(|| format!("unknown style '{}' (expected one of R, t, d, D, f, F)", s))
}

fn parse_now_arg(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp: {}", e))
}

/// Input from arguments, or one line of piped stdin.
fn read_input(cli: &Cli) -> io::Result<Option<String>> {
    if !cli.input.is_empty() {
        return Ok(Some(cli.input.join(" ")));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(Some(line))
}

/// Sample the reference moment once for the whole run.
fn reference_moment(now: Option<DateTime<Utc>>, utc: bool) -> Moment {
    let zone = if utc { Zone::utc() } else { Zone::Local };
    match now {
        Some(now) => Moment::new(now.fixed_offset(), zone),
        None if utc => Moment::utc(Utc::now()),
        None => Moment::now(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), message);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    if cli.hold_clipboard {
        if let Err(e) = clipboard::hold_from_stdin() {
            fail(e);
        }
        return;
    }

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => fail("Cannot determine config directory"),
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => fail(e),
        }
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load config file and merge with CLI args
    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    let no_color = cli.no_color || file_config.no_color() || !io::stdout().is_terminal();
    if no_color {
        set_override(false);
    }

    let utc = cli.utc || file_config.utc();
    let copy = cli.copy || file_config.copy();
    let copy_style = cli.style.unwrap_or_else(|| file_config.style());
    tracing::debug!(utc, copy, style = %copy_style.style_code(), "settings resolved");

    if cli.shapes {
        print!("{}", output::render_shapes(&DiscordTime::new().shape_infos()));
        return;
    }

    let input = match read_input(&cli) {
        Ok(Some(input)) => input,
        Ok(None) => {
            if let Err(e) = Cli::command().print_help() {
                fail(format!("Failed to print help: {}", e));
            }
            return;
        }
        Err(e) => fail(format!("Failed to read stdin: {}", e)),
    };

    let now = reference_moment(cli.now, utc);
    tracing::debug!(now = %now.datetime(), "reference moment");

    let plugin = Plugin::new(PluginConfig::default());
    let chain = plugin.on_catalog();
    let items = plugin.on_suggest(&input, &chain, &now);

    // Blank input: nothing to suggest
    if items.is_empty() {
        return;
    }

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.raw {
        OutputMode::Raw
    } else {
        OutputMode::Pretty
    };

    if let Some(error) = items.iter().find(|i| i.category == ItemCategory::Error) {
        if mode == OutputMode::Json {
            println!("{}", output::render_items(&[error], mode));
        } else {
            eprintln!("{}", output::render_error(error));
        }
        std::process::exit(1);
    }

    let visible: Vec<_> = items
        .iter()
        .filter(|item| cli.style.is_none() || item.variant == cli.style)
        .collect();
    println!("{}", output::render_items(&visible, mode));

    if copy {
        let Some(item) = items.iter().find(|i| i.variant == Some(copy_style)) else {
            return;
        };
        match plugin.on_execute(item, &mut SystemClipboard::default()) {
            Ok(()) => {
                if mode == OutputMode::Pretty {
                    eprintln!("{} {}", "Copied".green(), item.target);
                }
            }
            Err(e) => fail(e),
        }
    }
}
