mod app;
mod command;
mod config;
mod consts;
mod game;
mod surface;
use crate::app::App;
use crate::config::Config;
use crate::surface::{check_terminal_colors, TerminalSurface};
use anyhow::Context;
use lexopt::{Arg, Parser};
use simplelog::{LevelFilter, WriteLogger};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [OPTIONS]

Steer with the arrow keys or h/j/k/l.  r restarts, q quits.

Options:
  -c, --config <FILE>    Read configuration from FILE
      --log-file <FILE>  Write a log to FILE
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit
";

fn main() -> ExitCode {
    match Action::from_parser(Parser::from_env()) {
        Ok(Action::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Action::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = if let Some(path) = args.config {
        Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else if let Ok(path) = Config::default_path() {
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else {
        Config::default()
    };
    if let Some(path) = args.log_file.or_else(|| config.log_file.clone()) {
        init_logging(&path)?;
    }
    log::info!(
        "Starting gridsnake {} with tick period {:?}",
        env!("CARGO_PKG_VERSION"),
        config.tick_period
    );
    check_terminal_colors()?;
    let terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let mut surface = TerminalSurface::new(terminal, config.palette);
    let r = App::new(&surface, config.tick_period).and_then(|mut app| app.run(&mut surface));
    ratatui::restore();
    if let Err(ref e) = r {
        log::error!("Exiting on error: {e}");
    }
    r.map_err(Into::into)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to create log file")?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .context("failed to initialize logger")
}

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
enum Action {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Action {
    fn from_parser(mut parser: Parser) -> Result<Action, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Action::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Action::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Action::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Action, lexopt::Error> {
        Action::from_parser(Parser::from_iter(
            std::iter::once("gridsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Action::Run(Arguments::default()));
    }

    #[rstest]
    #[case(&["--config", "snake.toml"])]
    #[case(&["-c", "snake.toml"])]
    #[case(&["--config=snake.toml"])]
    fn config_path(#[case] args: &[&str]) {
        assert_eq!(
            parse(args).unwrap(),
            Action::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: None,
            })
        );
    }

    #[test]
    fn log_file() {
        assert_eq!(
            parse(&["--log-file", "snake.log", "-c", "cfg.toml"]).unwrap(),
            Action::Run(Arguments {
                config: Some(PathBuf::from("cfg.toml")),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Action::Help)]
    #[case(&["--help"], Action::Help)]
    #[case(&["-V"], Action::Version)]
    #[case(&["--version", "--bogus"], Action::Version)]
    fn info_flags(#[case] args: &[&str], #[case] action: Action) {
        assert_eq!(parse(args).unwrap(), action);
    }

    #[rstest]
    #[case(&["--speed", "3"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
