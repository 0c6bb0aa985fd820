use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use services::{ApiClient, ApiConfig, Haptics, Speech, SpeechOptions, StudyService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Desktop stand-ins for the phone's vibration motor and TTS engine. Both
/// are one-way notifications; on this platform they land in the log.
struct DesktopFeedback;

impl Haptics for DesktopFeedback {
    fn pulse(&self, duration_ms: u64) {
        info!(duration_ms, "haptic pulse");
    }
}

impl Speech for DesktopFeedback {
    fn speak(&self, text: &str, options: &SpeechOptions) {
        info!(language = %options.language, chars = text.len(), "read-back requested");
    }
}

struct DesktopApp {
    study: Arc<StudyService>,
    speech: Arc<dyn Speech>,
}

impl UiApp for DesktopApp {
    fn study(&self) -> Arc<StudyService> {
        Arc::clone(&self.study)
    }

    fn speech(&self) -> Arc<dyn Speech> {
        Arc::clone(&self.speech)
    }
}

struct Args {
    api_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::config::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}", services::config::BASE_URL_ENV);
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = args.next().ok_or(ArgsError::MissingValue { flag: "--api-url" })?;
                    api_url = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Self { api_url })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let config = match args.api_url {
        Some(raw) => ApiConfig::new(&raw)?,
        None => ApiConfig::from_env()?,
    };
    info!(base_url = %config.base_url(), "using study coach backend");

    let feedback = Arc::new(DesktopFeedback);
    let study = Arc::new(StudyService::new(
        Arc::new(ApiClient::new(config)),
        Arc::clone(&feedback) as Arc<dyn Haptics>,
    ));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        study,
        speech: feedback,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Coach")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
