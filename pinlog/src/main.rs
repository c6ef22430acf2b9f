//! Command-line front end for pinlog.
//!
//! Renders one value the way a `Logger` would, formats millisecond counts,
//! and writes a starter `pinlog.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use pinlog::core::time_format::format_time;
use pinlog::io::config::{DEFAULT_CONFIG_FILE, LogConfig, load_config, write_config};
use pinlog::{Logger, logging};

#[derive(Parser)]
#[command(
    name = "pinlog",
    version,
    about = "Render values as pinned, indented log lines"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render VALUE as one log line through the configured sink.
    Render {
        value: String,
        /// Pin title; its length picks the short, long or very long layout.
        #[arg(short, long)]
        title: Option<String>,
        /// Body indent level (0-255).
        #[arg(short, long)]
        indent: Option<u8>,
        /// Ruler character for deep indents.
        #[arg(long)]
        mark: Option<char>,
        /// Prefix placed before the ruler.
        #[arg(long)]
        offset: Option<String>,
        /// Draw the ruler mark on every N-th column.
        #[arg(long)]
        repeat: Option<u32>,
        /// Raw timer value (milliseconds) for the `[Time: ...]` box.
        #[arg(long)]
        time: Option<String>,
        /// Value for the `[Turn: ...]` box.
        #[arg(long)]
        turn: Option<String>,
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Print a millisecond count as `[H:]M:SS.mmm`.
    Time { value: String },
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

struct RenderArgs {
    value: String,
    title: Option<String>,
    indent: Option<u8>,
    mark: Option<char>,
    offset: Option<String>,
    repeat: Option<u32>,
    time: Option<String>,
    turn: Option<String>,
    config: PathBuf,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            value,
            title,
            indent,
            mark,
            offset,
            repeat,
            time,
            turn,
            config,
        } => cmd_render(RenderArgs {
            value,
            title,
            indent,
            mark,
            offset,
            repeat,
            time,
            turn,
            config,
        }),
        Command::Time { value } => {
            println!("{}", format_time(&value));
            Ok(())
        }
        Command::Init { force, path } => cmd_init(&path, force),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let mut logger = Logger::new(config);
    if let Some(time) = args.time {
        logger = logger.with_timer(move || time.clone());
    }
    if let Some(turn) = args.turn {
        logger = logger.with_turner(move || turn.clone());
    }

    let mut request = logger.request(&args.value);
    if let Some(title) = &args.title {
        request = request.title(title);
    }
    if let Some(level) = args.indent {
        request = request.indent(level);
    }
    if args.mark.is_some() || args.repeat.is_some() {
        request = request.ruler(
            args.mark.unwrap_or(request.ruler_mark),
            args.repeat.unwrap_or(request.ruler_repeat),
        );
    }
    if let Some(offset) = &args.offset {
        request = request.offset(offset);
    }
    logger.emit(&request);
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, leaving it");
        return Ok(());
    }
    write_config(path, &LogConfig::default())
        .with_context(|| format!("init {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_render_with_layout_flags() {
        let cli = Cli::parse_from([
            "pinlog", "render", "42", "--title", "answer", "--indent", "9", "--mark", ":",
        ]);
        match cli.command {
            Command::Render {
                value,
                title,
                indent,
                mark,
                config,
                ..
            } => {
                assert_eq!(value, "42");
                assert_eq!(title.as_deref(), Some("answer"));
                assert_eq!(indent, Some(9));
                assert_eq!(mark, Some(':'));
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["pinlog", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }

    #[test]
    fn parse_time() {
        let cli = Cli::parse_from(["pinlog", "time", "65000"]);
        assert!(matches!(cli.command, Command::Time { value } if value == "65000"));
    }

    #[test]
    fn init_writes_loadable_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("pinlog.toml");
        cmd_init(&path, false).expect("init");
        assert_eq!(load_config(&path).expect("load"), LogConfig::default());
    }
}
