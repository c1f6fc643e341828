use chia::{ChiaConfig, ChiaResult, CheckRunner, Language, Reporter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Lightweight project health checker
#[derive(Parser)]
#[command(name = "chia")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Return the project language for the current folder; all checks are skipped
  #[arg(long)]
  language_detection: bool,

  /// Render results Xcode formatted
  #[arg(short = 'x', long = "xcode")]
  xcode: bool,

  /// Path to the config file (local or remote), e.g. 'https://PATH/TO/.chia.yml'
  #[arg(short = 'c', long = "config", value_name = "PATH_OR_URL")]
  config: Option<String>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .init();

  match run(&cli) {
    Ok(failed) => std::process::exit(if failed { 1 } else { 0 }),
    Err(err) => {
      tracing::error!("{}", err);
      std::process::exit(1);
    }
  }
}

/// Returns whether the run produced at least one error-severity result
fn run(cli: &Cli) -> ChiaResult<bool> {
  let project_root = std::env::current_dir()?;

  // Config resolution is the sole fatal, run-aborting path: an explicitly
  // supplied source that cannot be resolved stops everything here.
  let config = ChiaConfig::resolve(cli.config.as_deref(), &project_root)?;

  if cli.language_detection {
    match Language::detect(&project_root) {
      Some(language) => tracing::info!("Language: {}", language),
      None => tracing::warn!("No language detected."),
    }
    return Ok(false);
  }

  let language = Language::detect(&project_root);
  let results = CheckRunner::from_registry().run_all(&config, &project_root, language);
  let summary = Reporter::new(cli.xcode).report(&results);

  Ok(summary.failed())
}
