//! # medalstat
//!
//! A CLI for browsing aggregate reports over a file of Olympic medal records.
//!
//! ## Overview
//!
//! medalstat is built on top of medalstatlib. It loads a tab-separated,
//! headerless medal file and renders any of the sixteen reports as a text
//! table or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # List the available reports
//! medalstat reports
//!
//! # Show the first rows of a file
//! medalstat preview medals.tsv -n 10
//!
//! # Run one or more reports
//! medalstat report medals.tsv gold-pivot only-bronze
//! medalstat report medals.tsv --all --output json
//!
//! # Pick reports interactively
//! medalstat menu medals.tsv
//! ```

mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{info, LevelFilter};
use medalstatlib::{
    load_file, LoadOptions, MedalTable, MedalstatError, ReportKind, ReportResult, ReportTable,
    Session,
};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use outstanding::OutputMode;
use serde::Serialize;

use crate::render::{create_theme, menu_table, render_reports, report_context, REPORT_TEMPLATE};

/// Set when a selected report fails; handlers still render the others
static REPORT_FAILED: AtomicBool = AtomicBool::new(false);

/// Outcome of one report, as emitted in JSON mode
#[derive(Debug, Serialize)]
struct ReportOutcome {
    kind: ReportKind,
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ReportResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Menu entry, as emitted in JSON mode
#[derive(Debug, Serialize)]
struct MenuEntry {
    slug: &'static str,
    label: &'static str,
    title: &'static str,
}

/// Parse a delimiter given as `tab`, `\t` or a single ASCII character
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!(
            "delimiter must be 'tab' or a single ASCII character, got '{}'",
            s
        )),
    }
}

fn file_arg() -> Arg {
    Arg::new("file")
        .help("Tab-separated medal file (no header, 10 columns)")
        .required(true)
}

fn delimiter_arg() -> Arg {
    Arg::new("delimiter")
        .short('d')
        .long("delimiter")
        .value_parser(parse_delimiter)
        .default_value("tab")
        .help("Field delimiter")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("medalstat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Olympic medal data analyzer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(Command::new("reports").about("List the available reports"))
        .subcommand(
            Command::new("preview")
                .about("Show the first rows of a medal file")
                .arg(file_arg())
                .arg(
                    Arg::new("rows")
                        .short('n')
                        .long("rows")
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("Number of rows to show"),
                )
                .arg(delimiter_arg()),
        )
        .subcommand(
            Command::new("report")
                .about("Run reports against a medal file")
                .arg(file_arg())
                .arg(
                    Arg::new("kind")
                        .action(ArgAction::Append)
                        .value_parser(|s: &str| ReportKind::from_str(s))
                        .help("Report slug or label (see `medalstat reports`)"),
                )
                .arg(
                    Arg::new("all")
                        .short('a')
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("kind")
                        .help("Run every report"),
                )
                .arg(delimiter_arg()),
        )
        .subcommand(
            Command::new("menu")
                .about("Choose reports interactively from stdin")
                .arg(file_arg())
                .arg(delimiter_arg()),
        )
}

/// Initialise env_logger once; RUST_LOG overrides the verbosity flag
fn init_logging(matches: &ArgMatches) {
    let level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Output mode chosen with the global `--output` flag
fn output_mode(matches: &ArgMatches) -> OutputMode {
    matches
        .try_get_one::<String>("_output_mode")
        .ok()
        .flatten()
        .map(|s| match s.as_str() {
            "json" => OutputMode::Json,
            "text" => OutputMode::Text,
            "term-debug" => OutputMode::TermDebug,
            "term" => OutputMode::Term,
            _ => OutputMode::Auto,
        })
        .unwrap_or(OutputMode::Auto)
}

/// Build load options from matches
fn load_options(matches: &ArgMatches) -> LoadOptions {
    let mut options = LoadOptions::new();
    if let Some(delimiter) = matches.get_one::<u8>("delimiter") {
        options = options.delimiter(*delimiter);
    }
    if let Some(rows) = matches.try_get_one::<usize>("rows").ok().flatten() {
        options = options.preview_rows(*rows);
    }
    options
}

fn file_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or_default()
}

/// Attach the remediation hint to ingestion failures
fn with_hint(err: MedalstatError) -> anyhow::Error {
    match err.hint() {
        Some(hint) => anyhow::anyhow!("{err}\n{hint}"),
        None => err.into(),
    }
}

fn load_table(matches: &ArgMatches, options: &LoadOptions) -> anyhow::Result<MedalTable> {
    load_file(file_path(matches), options).map_err(with_hint)
}

/// Handler for reports command
fn reports_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_logging(matches);

    if ctx.output_mode.is_structured() {
        let entries: Vec<MenuEntry> = ReportKind::ALL
            .iter()
            .map(|k| MenuEntry {
                slug: k.slug(),
                label: k.label(),
                title: k.title(),
            })
            .collect();
        return Ok(Output::Render(serde_json::to_value(&entries)?));
    }

    let context = report_context(&[menu_table()]);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Handler for preview command
fn preview_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_logging(matches);
    let options = load_options(matches);
    let table = load_table(matches, &options)?;

    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::json!({
            "records": table.len(),
            "rows": table.head(options.preview_rows),
        })));
    }

    let context = report_context(&[ReportTable::preview(&table, options.preview_rows)]);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

fn selected_kinds(matches: &ArgMatches) -> anyhow::Result<Vec<ReportKind>> {
    let kinds: Vec<ReportKind> = if matches.get_flag("all") {
        ReportKind::ALL.to_vec()
    } else {
        matches
            .get_many::<ReportKind>("kind")
            .map(|v| v.copied().collect())
            .unwrap_or_default()
    };
    if kinds.is_empty() {
        return Err(anyhow::anyhow!(
            "no report selected; name one or more reports or pass --all"
        ));
    }
    Ok(kinds)
}

/// Handler for report command
///
/// Each failed report is printed to stderr; the rest still run.
fn report_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_logging(matches);
    let kinds = selected_kinds(matches)?;
    let table = load_table(matches, &load_options(matches))?;

    let outcomes: Vec<(ReportKind, medalstatlib::Result<ReportResult>)> = kinds
        .into_iter()
        .map(|kind| (kind, medalstatlib::run(&table, kind)))
        .collect();

    for (kind, outcome) in &outcomes {
        if let Err(e) = outcome {
            eprintln!("Error: {}: {}", kind.label(), e);
            REPORT_FAILED.store(true, Ordering::Relaxed);
        }
    }

    if ctx.output_mode.is_structured() {
        let outcomes: Vec<ReportOutcome> = outcomes
            .into_iter()
            .map(|(kind, outcome)| {
                let (result, error) = match outcome {
                    Ok(result) => (Some(result), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                ReportOutcome {
                    kind,
                    title: kind.title(),
                    result,
                    error,
                }
            })
            .collect();
        return Ok(Output::Render(serde_json::to_value(&outcomes)?));
    }

    let tables: Vec<ReportTable> = outcomes
        .iter()
        .filter_map(|(kind, outcome)| {
            outcome
                .as_ref()
                .ok()
                .map(|result| ReportTable::from_result(*kind, result))
        })
        .collect();
    let context = report_context(&tables);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Resolve a menu selection: a 1-based number, slug or label
fn parse_selection(input: &str) -> Option<ReportKind> {
    match input.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| ReportKind::ALL.get(i).copied()),
        Err(_) => ReportKind::from_str(input).ok(),
    }
}

/// Handler for menu command
///
/// Reads stdin interactively, so it runs outside the command dispatcher.
fn menu_handler(matches: &ArgMatches, output_mode: OutputMode) -> anyhow::Result<ExitCode> {
    init_logging(matches);
    let path = file_path(matches);
    let bytes = std::fs::read(path)
        .map_err(|source| MedalstatError::FileRead {
            path: Path::new(path).to_path_buf(),
            source,
        })
        .map_err(with_hint)?;

    let mut session = Session::new(load_options(matches));
    let table = session.upload(&bytes).map_err(with_hint)?;
    info!("loaded {} records from {}", table.len(), path);

    print!("{}", render_reports(&[menu_table()], output_mode)?);
    let stdin = io::stdin();
    let mut all_ok = true;

    loop {
        print!("\nSelect a report (number, slug, or q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(kind) = parse_selection(input) else {
            eprintln!("Error: unknown selection '{}'", input);
            continue;
        };

        println!();
        match session.report(kind) {
            Ok(result) if output_mode.is_structured() => {
                println!("{}", serde_json::to_string_pretty(&result)?)
            }
            Ok(result) => print!(
                "{}",
                render_reports(&[ReportTable::from_result(kind, &result)], output_mode)?
            ),
            Err(e) => {
                eprintln!("Error: {}: {}", kind.label(), e);
                all_ok = false;
            }
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cmd = build_command();

    // Build the outstanding app with command handlers and run
    let result = App::builder()
        .theme(create_theme())
        .command("reports", reports_handler, REPORT_TEMPLATE)
        .command("preview", preview_handler, REPORT_TEMPLATE)
        .command("report", report_handler, REPORT_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if output.starts_with("Error:") {
                eprintln!("{}", output);
                return ExitCode::FAILURE;
            }
            if !output.is_empty() {
                print!("{}", output);
            }
            if REPORT_FAILED.load(Ordering::Relaxed) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        RunResult::Binary(_, _) => {
            // Not used in medalstat
            ExitCode::SUCCESS
        }
        RunResult::NoMatch(matches) => match matches.subcommand() {
            Some(("menu", sub)) => match menu_handler(sub, output_mode(sub)) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            },
            _ => {
                eprintln!("Error: unknown command");
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert!(parse_delimiter("ab").is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1"), Some(ReportKind::MostGold));
        assert_eq!(parse_selection("16"), Some(ReportKind::GoldPivot));
        assert_eq!(parse_selection("0"), None);
        assert_eq!(parse_selection("17"), None);
        assert_eq!(parse_selection("only-bronze"), Some(ReportKind::OnlyBronze));
        assert_eq!(parse_selection("nope"), None);
    }

    #[test]
    fn test_global_verbose_flag_after_subcommand() {
        let matches = build_command()
            .try_get_matches_from(["medalstat", "report", "f.tsv", "most-gold", "-vv"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_count("verbose"), 2);
        let kinds: Vec<ReportKind> = sub.get_many::<ReportKind>("kind").unwrap().copied().collect();
        assert_eq!(kinds, vec![ReportKind::MostGold]);
    }

    #[test]
    fn test_selected_kinds() {
        let matches = build_command()
            .try_get_matches_from(["medalstat", "report", "f.tsv", "--all"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(selected_kinds(sub).unwrap().len(), 16);

        let matches = build_command()
            .try_get_matches_from(["medalstat", "report", "f.tsv"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(selected_kinds(sub).is_err());
    }

    #[test]
    fn test_unknown_kind_rejected_by_parser() {
        let err = build_command()
            .try_get_matches_from(["medalstat", "report", "f.tsv", "fastest-runner"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown report 'fastest-runner'"));
    }

    #[test]
    fn test_output_mode_defaults_to_auto() {
        let matches = build_command()
            .try_get_matches_from(["medalstat", "menu", "f.tsv"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(matches!(output_mode(sub), OutputMode::Auto));
    }

    #[test]
    fn test_parse_errors_carry_hint() {
        let err = with_hint(MedalstatError::ColumnCount { line: 1, found: 9 });
        let message = err.to_string();
        assert!(message.starts_with("line 1: expected 10 columns, found 9\n"));
        assert!(message.ends_with(medalstatlib::PARSE_HINT));

        let err = with_hint(MedalstatError::NoDataset);
        assert!(!err.to_string().contains('\n'));
    }
}
