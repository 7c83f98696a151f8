use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, SessionService};
use tandem_core::model::QuizSettings;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDuration { raw } => {
                write!(f, "invalid --question-ms value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    session: SessionService,
    settings: QuizSettings,
}

impl UiApp for DesktopApp {
    fn session(&self) -> SessionService {
        self.session.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn request_exit(&self) {
        // Desktop build: the summary screen's Close ends the process.
        std::process::exit(0);
    }
}

#[derive(Debug)]
struct Args {
    settings: QuizSettings,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--question-ms <millis>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --question-ms 5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TANDEM_QUESTION_MS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut question_ms = std::env::var("TANDEM_QUESTION_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--question-ms" => {
                    let value = require_value(args, "--question-ms")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDuration { raw: value.clone() })?;
                    question_ms = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let settings = match question_ms {
            None => QuizSettings::default(),
            Some(ms) => QuizSettings::from_millis(ms)
                .map_err(|_| ArgsError::InvalidDuration { raw: ms.to_string() })?,
        };

        Ok(Self { settings })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app = DesktopApp {
        session: SessionService::new(Clock::default_clock()),
        settings: parsed.settings,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Tandem")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
