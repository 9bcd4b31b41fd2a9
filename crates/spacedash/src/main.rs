use std::fs;
use std::io::{self, IsTerminal, Read};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{Select, theme::ColorfulTheme};
use spacedash_config::{
    DashConfigData, config_exists, get_config_value, load_config, open_in_editor,
    resolve_log_level, resolve_simple_output, resolve_track_url, resolve_url_prefix, save_config,
    set_config_value,
};
use spacedash_core::{DashError, DashResult, Track, format_duration};
use spacedash_dashboard::{CancelToken, CommsTab, Dashboard, FuelGauge};
use spacedash_music::{MockTrackResolver, TrackResolver, lookup};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve track URLs without drawing the dashboard
    Track {
        #[arg(long)]
        input: Option<String>,
        #[arg(value_name = "URL")]
        urls: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Open config file in editor
    Edit,
}

#[derive(Debug, Parser)]
#[command(name = "spacedash")]
#[command(version, about = "Space exploration dashboard", long_about = None)]
struct Cli {
    /// Track URL for the current-track card
    #[arg(value_name = "URL")]
    url: Option<String>,
    /// Engage thrusters this many times before rendering
    #[arg(long, default_value_t = 0)]
    engage: u32,
    /// Communication tab to show (incoming or outgoing)
    #[arg(long)]
    tab: Option<String>,
    #[arg(long)]
    simple: bool,
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    interactive: bool,
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Config commands never touch logging or the resolver
    if let Some(Commands::Config { action }) = &cli.command {
        exit_on_error(handle_config_command(action));
        return;
    }

    let config = exit_on_error(load_config());
    ensure_config_file(&config);

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| resolve_log_level(&config));
    init_logging(&level);

    let resolver: Arc<dyn TrackResolver> =
        Arc::new(exit_on_error(MockTrackResolver::new(resolve_url_prefix(&config))));
    let simple = cli.simple || resolve_simple_output(&config).unwrap_or(false);

    match &cli.command {
        Some(Commands::Track { input, urls }) => {
            let urls = exit_on_error(gather_inputs(urls, input.as_deref()));
            if urls.is_empty() {
                eprintln!("{} no input URLs provided", style("Error:").red());
                std::process::exit(1);
            }
            let summary = run_track_lookups(resolver.as_ref(), &urls, simple, cli.json).await;
            if summary.all_failed() {
                std::process::exit(1);
            }
        }
        Some(Commands::Config { .. }) => unreachable!("handled above"),
        None => {
            let locator = cli
                .url
                .clone()
                .unwrap_or_else(|| resolve_track_url(&config));
            exit_on_error(run_dashboard(&cli, &config, resolver, locator, simple).await);
        }
    }
}

fn exit_on_error<T>(result: DashResult<T>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("{} {err}", style("Error:").red());
        std::process::exit(1);
    })
}

/// Writes the default config on first run so `config edit` has a file to open.
///
/// The notice goes to stderr so `--json` and `--simple` stdout stays clean.
fn ensure_config_file(config: &DashConfigData) {
    if config_exists().unwrap_or(true) {
        return;
    }
    if let Err(err) = save_config(config) {
        eprintln!("{} {err}", style("Warning:").yellow());
    } else {
        eprintln!(
            "{} Config file created at ~/.spacedash/config.toml",
            style("✓").green()
        );
    }
}

/// Initialize the logging subsystem.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run_dashboard(
    cli: &Cli,
    config: &DashConfigData,
    resolver: Arc<dyn TrackResolver>,
    locator: String,
    simple: bool,
) -> DashResult<()> {
    let mission = &config.mission;
    let fuel = FuelGauge::new(
        mission.initial_fuel,
        mission.fuel_step,
        mission.low_fuel_threshold,
    );
    let mut dashboard = Dashboard::new(resolver, locator, fuel);

    if let Some(tab) = &cli.tab {
        dashboard.comms.select(tab.parse::<CommsTab>()?);
    }

    let cancel = CancelToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    info!(locator = dashboard.locator(), "loading track");
    if !dashboard.load_track(&cancel).await {
        eprintln!("{} track load cancelled", style("Warning:").yellow());
    }

    for _ in 0..cli.engage {
        let level = dashboard.engage_thrusters();
        debug!(level, "thrusters engaged");
    }

    if cli.json {
        return print_json(&dashboard.track.track());
    }
    if simple {
        println!("{}", format_simple(dashboard.track.track()));
        return Ok(());
    }
    if cli.interactive && io::stdout().is_terminal() {
        return run_interactive(&mut dashboard);
    }

    println!("{}", dashboard.render());
    Ok(())
}

fn run_interactive(dashboard: &mut Dashboard) -> DashResult<()> {
    let theme = ColorfulTheme::default();
    loop {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|err| DashError::Render(format!("failed to clear screen: {err}")))?;
        println!("{}\n", dashboard.render());

        let switch_label = format!("Show {} messages", dashboard.comms.active().other().label());
        let items = ["Engage Thrusters", switch_label.as_str(), "Quit"];
        let selection = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|err| DashError::InvalidInput(format!("selection failed: {err}")))?;

        match selection {
            0 => {
                dashboard.engage_thrusters();
            }
            1 => {
                let next = dashboard.comms.active().other();
                dashboard.comms.select(next);
            }
            _ => return Ok(()),
        }
    }
}

fn gather_inputs(args: &[String], input: Option<&str>) -> DashResult<Vec<String>> {
    let mut urls = args.to_vec();

    if let Some(path) = input {
        let content = fs::read_to_string(path)
            .map_err(|err| DashError::InvalidInput(format!("failed to read input file: {err}")))?;
        urls.extend(parse_lines(&content));
    }

    if urls.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| DashError::InvalidInput(format!("failed to read stdin: {err}")))?;
        urls.extend(parse_lines(&buffer));
    }

    Ok(urls)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LookupSummary {
    success: usize,
    failed: usize,
}

impl LookupSummary {
    fn all_failed(self) -> bool {
        self.failed > 0 && self.success == 0
    }
}

async fn run_track_lookups(
    resolver: &dyn TrackResolver,
    urls: &[String],
    simple: bool,
    json: bool,
) -> LookupSummary {
    let mut summary = LookupSummary::default();
    let mut found = Vec::new();

    for url in urls {
        match lookup(resolver, url).await {
            Some(track) => {
                summary.success += 1;
                if json {
                    found.push(track);
                } else if simple {
                    println!("{}", format_simple(Some(&track)));
                } else {
                    print_track(url, &track);
                }
            }
            None => {
                summary.failed += 1;
                eprintln!("{} {url}: track not found", style("Failed").red());
            }
        }
    }

    if json {
        if let Err(err) = print_json(&found) {
            eprintln!("{} {err}", style("Error:").red());
        }
        eprintln!("{}", format_summary(summary));
    } else {
        println!("{}", format_summary(summary));
    }
    summary
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> DashResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| DashError::Render(format!("failed to encode json: {err}")))?;
    println!("{text}");
    Ok(())
}

fn print_track(url: &str, track: &Track) {
    println!("{} {}", style("Track:").cyan(), track.title);
    println!("  {} {url}", style("URL:").dim());
    println!("  {} {}", style("Artists:").dim(), track.artist_names());
    println!(
        "  {} {} • {}",
        style("Album:").dim(),
        track.album.title,
        format_duration(track.duration_ms)
    );
    println!("{} {}", style("Open:").green(), track.canonical_url);
    println!();
}

fn format_simple(track: Option<&Track>) -> String {
    match track {
        Some(track) => format!(
            "{} - {} ({}) {}",
            track.title,
            track.artist_names(),
            format_duration(track.duration_ms),
            track.canonical_url
        ),
        None => "Track Not Found".to_string(),
    }
}

fn format_summary(summary: LookupSummary) -> String {
    format!(
        "{} Total: {} | Success: {} | Failed: {}",
        style("Summary:").bold(),
        summary.success + summary.failed,
        summary.success,
        summary.failed
    )
}

fn handle_config_command(action: &ConfigAction) -> DashResult<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config()?;
            match get_config_value(&config, key) {
                Some(v) => println!("{} = {}", key, v),
                None => println!("{} = <null>", key),
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            set_config_value(key, value)?;
            println!("{} Set {} = {}", style("✓").green(), key, value);
            Ok(())
        }
        ConfigAction::List => {
            let config = load_config()?;
            println!("Current configuration:");
            println!("\n[track]");
            println!("url = {}", resolve_track_url(&config));
            println!("url_prefix = {}", resolve_url_prefix(&config));
            println!("\n[mission]");
            println!("initial_fuel = {}", config.mission.initial_fuel);
            println!("fuel_step = {}", config.mission.fuel_step);
            println!("low_fuel_threshold = {}", config.mission.low_fuel_threshold);
            println!("\n[output]");
            println!("simple = {}", config.output.simple.unwrap_or(false));
            println!("\n[logging]");
            println!("level = {}", resolve_log_level(&config));
            Ok(())
        }
        ConfigAction::Edit => open_in_editor(),
    }
}

#[cfg(test)]
mod tests {
    use spacedash_core::TrackId;

    use super::*;

    #[test]
    fn parse_lines_skips_blank_lines() {
        let lines = parse_lines("  https://a/track/x \n\n\t\nhttps://b/track/y\n");
        assert_eq!(lines, vec!["https://a/track/x", "https://b/track/y"]);
    }

    #[test]
    fn simple_output_for_missing_track() {
        assert_eq!(format_simple(None), "Track Not Found");
    }

    #[test]
    fn simple_output_for_track() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let track = rt
            .block_on(MockTrackResolver::default().resolve(&TrackId::new("abc").unwrap()))
            .unwrap();
        assert_eq!(
            format_simple(Some(&track)),
            "Sample Track - Sample Artist (3:00) https://open.spotify.com/track/abc"
        );
    }

    #[test]
    fn lookup_summary_flags_total_failure_only() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let resolver = MockTrackResolver::default();

        let urls = vec!["https://example.com/album/abc".to_string()];
        let summary = rt.block_on(run_track_lookups(&resolver, &urls, true, false));
        assert_eq!(summary, LookupSummary { success: 0, failed: 1 });
        assert!(summary.all_failed());

        let urls = vec![
            "https://example.com/album/abc".to_string(),
            "https://open.spotify.com/track/abc".to_string(),
        ];
        let summary = rt.block_on(run_track_lookups(&resolver, &urls, true, false));
        assert_eq!(summary, LookupSummary { success: 1, failed: 1 });
        assert!(!summary.all_failed());
        assert!(!LookupSummary::default().all_failed());
    }

    #[test]
    fn cli_parses_dashboard_flags() {
        let cli = Cli::parse_from(["spacedash", "--engage", "3", "--tab", "outgoing", "/track/x"]);
        assert_eq!(cli.engage, 3);
        assert_eq!(cli.tab.as_deref(), Some("outgoing"));
        assert_eq!(cli.url.as_deref(), Some("/track/x"));
        assert!(cli.command.is_none());
    }
}
