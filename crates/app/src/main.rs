use std::fmt;
use std::sync::Arc;

use assessment_core::AssessmentError;
use assessment_core::model::AssessmentPath;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AssessmentService, AssessmentTimings, Clock};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMillis { flag: &'static str, raw: String },
    InvalidUrl { raw: String, source: AssessmentError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMillis { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected milliseconds)")
            }
            ArgsError::InvalidUrl { raw, source } => {
                write!(f, "invalid --url value {raw}: {source}")
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_millis(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<u64, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidMillis { flag, raw })
}

struct DesktopApp {
    service: AssessmentService,
    launch_path: Option<AssessmentPath>,
}

impl UiApp for DesktopApp {
    fn assessment_service(&self) -> AssessmentService {
        self.service
    }

    fn launch_path(&self) -> Option<AssessmentPath> {
        self.launch_path.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    launch_path: Option<AssessmentPath>,
    timings: AssessmentTimings,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--subject <s>] [--topic <t>] [--subtopic <st>]");
    eprintln!("  cargo run -p app -- [ui] [--url /assessment/<s>/<t>/<st>]");
    eprintln!("      [--recording-ms <ms>] [--grading-ms <ms>] [--redirect-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --recording-ms 3000");
    eprintln!("  --grading-ms 1500");
    eprintln!("  --redirect-ms 3000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ASSESS_SUBJECT, ASSESS_TOPIC, ASSESS_SUBTOPIC, ASSESS_URL");
    eprintln!("  ASSESS_RECORDING_MS, ASSESS_GRADING_MS, ASSESS_REDIRECT_MS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    /// Flags win over environment values; an explicit or env URL wins over segments.
    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut subject = env("ASSESS_SUBJECT");
        let mut topic = env("ASSESS_TOPIC");
        let mut subtopic = env("ASSESS_SUBTOPIC");
        let mut url = env("ASSESS_URL");

        let defaults = AssessmentTimings::default();
        let mut recording = env_millis(&env, "ASSESS_RECORDING_MS")
            .unwrap_or(duration_ms(defaults.recording));
        let mut grading =
            env_millis(&env, "ASSESS_GRADING_MS").unwrap_or(duration_ms(defaults.grading));
        let mut redirect =
            env_millis(&env, "ASSESS_REDIRECT_MS").unwrap_or(duration_ms(defaults.redirect));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--subject" => subject = Some(require_value(args, "--subject")?),
                "--topic" => topic = Some(require_value(args, "--topic")?),
                "--subtopic" => subtopic = Some(require_value(args, "--subtopic")?),
                "--url" => url = Some(require_value(args, "--url")?),
                "--recording-ms" => recording = require_millis(args, "--recording-ms")?,
                "--grading-ms" => grading = require_millis(args, "--grading-ms")?,
                "--redirect-ms" => redirect = require_millis(args, "--redirect-ms")?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let launch_path = match url {
            Some(raw) => Some(
                AssessmentPath::parse(&raw)
                    .map_err(|source| ArgsError::InvalidUrl { raw, source })?,
            ),
            None if subject.is_some() || topic.is_some() || subtopic.is_some() => {
                Some(AssessmentPath::from_segments(subject, topic, subtopic))
            }
            None => None,
        };

        Ok(Self {
            launch_path,
            timings: AssessmentTimings::from_millis(recording, grading, redirect),
        })
    }
}

// Malformed env values fall back to defaults; only flags are strict.
fn env_millis(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    env(key).and_then(|value| value.trim().parse().ok())
}

fn duration_ms(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // `ui` is the only subcommand and also the default.
    match argv.first().map(String::as_str) {
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with('-') => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
        _ => {}
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let service = AssessmentService::new(Clock::system(), parsed.timings);
    match parsed.launch_path.as_ref() {
        Some(path) => tracing::info!(route = %path.assessment_route(), "launching assessment"),
        None => tracing::info!("launching without an assessment"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        service,
        launch_path: parsed.launch_path,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Assessment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
