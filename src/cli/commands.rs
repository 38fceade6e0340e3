//! CLI command implementations
//!
//! `identify` drives a full interactive session through the controller
//! and the plain-text surface. `filter`, `clues`, and `validate` are
//! one-shot commands over the pure core: fetch, parse, compute, print.

use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::controller::Controller;
use crate::fetch::{CatalogSource, FileCatalogSource, HttpCatalogSource};
use crate::locale::{resolve, LocalePreferences};
use crate::matcher::{live_clues, match_suspects};
use crate::observability::{log_event, Event, Logger};
use crate::render::TextSurface;
use crate::selection::SelectionState;

use super::args::{CatalogArgs, Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{parse_command, read_line, write_prompt, SessionCommand, HELP_TEXT};

/// Parse arguments, build a runtime, dispatch the subcommand
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Identify { catalog } => identify(catalog).await,
        Command::Filter {
            catalog,
            present,
            absent,
        } => filter(catalog, present, absent).await,
        Command::Clues { catalog } => clues(catalog).await,
        Command::Validate { catalog } => validate(catalog).await,
    }
}

/// Resolve the session configuration: file first, then flag overrides
fn resolve_config(args: &CatalogArgs) -> CliResult<SessionConfig> {
    let mut config = match args.config {
        Some(ref path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(ref catalog) = args.catalog {
        config.catalog_url = catalog.clone();
    }
    if let Some(ref lang) = args.lang {
        config.locale_override = Some(lang.clone());
    }
    log_event(Event::ConfigLoaded, &[("catalog_url", &config.catalog_url)]);
    Ok(config)
}

/// Pick the source for a location: http(s) goes over the network,
/// anything else is a local path.
fn select_source(url: &str) -> Box<dyn CatalogSource> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Box::new(HttpCatalogSource::new())
    } else {
        Box::new(FileCatalogSource::new())
    }
}

fn session_prefs(config: &SessionConfig) -> LocalePreferences {
    let mut prefs = LocalePreferences::from_env();
    if let Some(ref tag) = config.locale_override {
        prefs.set_override(tag.clone());
    }
    prefs
}

async fn fetch_catalog(config: &SessionConfig) -> CliResult<Catalog> {
    let source = select_source(&config.catalog_url);
    let raw = source.fetch(&config.catalog_url).await?;
    Ok(Catalog::parse(&raw)?)
}

/// Interactive deduction session over the plain-text surface
async fn identify(args: CatalogArgs) -> CliResult<()> {
    log_event(Event::BootStart, &[]);
    let config = resolve_config(&args)?;
    let source = select_source(&config.catalog_url);
    let mut controller = Controller::new(source, TextSurface::new(), config);

    controller.load().await?;
    log_event(
        Event::BootComplete,
        &[("session_id", &controller.session_id().to_string())],
    );

    loop {
        write_prompt(controller.phase().as_str())?;
        let Some(line) = read_line()? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            SessionCommand::MarkPresent(target) => {
                with_clue(&mut controller, &target, Controller::mark_present)
            }
            SessionCommand::MarkAbsent(target) => {
                with_clue(&mut controller, &target, Controller::mark_absent)
            }
            SessionCommand::MarkUnknown(target) => {
                with_clue(&mut controller, &target, Controller::mark_unknown)
            }
            SessionCommand::Cycle(target) => {
                with_clue(&mut controller, &target, Controller::cycle_mark)
            }
            SessionCommand::Clear => controller.clear_marks(),
            SessionCommand::Show(target) => {
                let key = controller
                    .catalog()
                    .and_then(|catalog| resolve_suspect_key(catalog, &target));
                match key {
                    Some(key) => controller.select_suspect(&key),
                    None => println!("no suspect '{}'", target),
                }
            }
            SessionCommand::Lang(tag) => controller.set_locale_override(tag),
            SessionCommand::Reload => {
                // The failure is already rendered; the session continues
                // with the previous catalog
                let _ = controller.reload().await;
            }
            SessionCommand::Help => println!("{}", HELP_TEXT),
            SessionCommand::Quit => break,
        }
    }

    log_event(
        Event::SessionEnd,
        &[("session_id", &controller.session_id().to_string())],
    );
    Ok(())
}

type MarkFn = fn(&mut Controller<Box<dyn CatalogSource>, TextSurface>, &str);

fn with_clue(
    controller: &mut Controller<Box<dyn CatalogSource>, TextSurface>,
    target: &str,
    op: MarkFn,
) {
    let key = controller
        .catalog()
        .and_then(|catalog| resolve_clue_key(catalog, target));
    match key {
        Some(key) => op(controller, &key),
        None => println!("no clue '{}'", target),
    }
}

/// A clue target is a 1-based display index or a key
fn resolve_clue_key(catalog: &Catalog, target: &str) -> Option<String> {
    if let Ok(index) = target.parse::<usize>() {
        return catalog.clue_keys().get(index.checked_sub(1)?).cloned();
    }
    catalog.clue_by_key(target).map(|c| c.key)
}

/// A suspect target is a 1-based display index or a key
fn resolve_suspect_key(catalog: &Catalog, target: &str) -> Option<String> {
    if let Ok(index) = target.parse::<usize>() {
        return catalog
            .all_suspects()
            .get(index.checked_sub(1)?)
            .map(|s| s.key.clone());
    }
    catalog.suspect_by_key(target).map(|s| s.key)
}

/// One-shot filter: apply the given marks, print what remains.
/// A no-match outcome is a normal result and still exits zero.
async fn filter(args: CatalogArgs, present: Vec<String>, absent: Vec<String>) -> CliResult<()> {
    let config = resolve_config(&args)?;
    let catalog = fetch_catalog(&config).await?;
    let prefs = session_prefs(&config);

    let mut selection = SelectionState::new();
    selection.reset_to(catalog.clue_keys());
    for key in &present {
        if selection.mark_present(key).is_none() {
            Logger::warn(Event::LookupMiss.as_str(), &[("kind", "clue"), ("key", key)]);
        }
    }
    for key in &absent {
        if selection.mark_absent(key).is_none() {
            Logger::warn(Event::LookupMiss.as_str(), &[("kind", "clue"), ("key", key)]);
        }
    }

    let suspects = catalog.all_suspects();
    let matched = match_suspects(&suspects, &selection);

    println!("catalog version: {}", catalog.version());
    if matched.is_empty() {
        println!("{}", config.no_match_message);
    } else {
        println!("matched suspects:");
        for suspect in &matched {
            let name = resolve(*suspect, "name", &prefs, &config.default_locale).unwrap_or("");
            println!("  {} ({})", name, suspect.key);
        }
    }

    let live = live_clues(&matched);
    let dead: Vec<String> = catalog
        .all_clues()
        .iter()
        .filter(|clue| !live.contains(&clue.key))
        .map(|clue| {
            resolve(clue, "name", &prefs, &config.default_locale)
                .unwrap_or(clue.key.as_str())
                .to_string()
        })
        .collect();
    if !dead.is_empty() {
        println!("clues that can no longer discriminate: {}", dead.join(", "));
    }

    Ok(())
}

/// Print the ordered clue list with localized names
async fn clues(args: CatalogArgs) -> CliResult<()> {
    let config = resolve_config(&args)?;
    let catalog = fetch_catalog(&config).await?;
    let prefs = session_prefs(&config);

    println!("catalog version: {}", catalog.version());
    for (index, clue) in catalog.all_clues().iter().enumerate() {
        let name = resolve(clue, "name", &prefs, &config.default_locale).unwrap_or("");
        println!("  {:>2}. {} ({})", index + 1, name, clue.key);
    }
    Ok(())
}

/// Parse the catalog strictly and report what was found
async fn validate(args: CatalogArgs) -> CliResult<()> {
    let config = resolve_config(&args)?;
    let source = select_source(&config.catalog_url);
    let raw = source.fetch(&config.catalog_url).await?;

    let catalog = Catalog::parse(&raw).map_err(CliError::from)?;
    println!("catalog version: {}", catalog.version());
    println!("loaded at: {}", catalog.loaded_at().to_rfc3339());
    println!("clues: {}", catalog.clue_count());
    println!("suspects: {}", catalog.suspect_count());
    if catalog.dangling_refs().is_empty() {
        println!("clue references: all resolve");
    } else {
        println!(
            "dangling clue references: {}",
            catalog.dangling_refs().join(", ")
        );
    }
    Ok(())
}
