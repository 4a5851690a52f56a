//! Interactive REPL for the PageLens MCP server.
//!
//! Launch with `pagelens-mcp repl` to enter interactive mode.
//! Type `/help` for available commands, Tab for completion.

use pagelens::{report_for_markup, PageAnalyzer, PageReport};
use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};
use tokio::runtime::Handle;

use crate::tools::ToolRegistry;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/density", "Score scanability of a URL"),
    ("/access", "Check accessibility of a URL"),
    ("/report", "Both reports for a URL from one fetch"),
    ("/file", "Analyze a local .html file"),
    ("/info", "Show server capabilities and tools"),
    ("/tools", "List available MCP tools"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// REPL helper for tab completion.
#[derive(Default)]
struct LensHelper;

impl Completer for LensHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        let (cmd, args) = input.split_once(' ').unwrap_or((input, ""));

        if cmd == "/file" {
            let mut files = Vec::new();
            if let Ok(entries) = std::fs::read_dir(".") {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path
                        .extension()
                        .is_some_and(|e| e == "html" || e == "htm")
                    {
                        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                            files.push(name.to_string());
                        }
                    }
                }
            }
            files.sort();
            let prefix_start = input.len() - args.len();
            let matches: Vec<Pair> = files
                .iter()
                .filter(|f| f.starts_with(args.trim()))
                .map(|f| Pair {
                    display: f.clone(),
                    replacement: format!("{f} "),
                })
                .collect();
            return Ok((prefix_start, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for LensHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for LensHelper {}
impl Validator for LensHelper {}
impl Helper for LensHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Run the interactive REPL.
///
/// Must be called outside an async context (e.g. inside
/// `tokio::task::block_in_place`); page fetches are driven on `runtime`.
pub fn run(analyzer: PageAnalyzer, runtime: Handle) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mpagelens-mcp v{}\x1b[0m \x1b[90m\u{2014} Page scanability and accessibility checks\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Press \x1b[36m/\x1b[0m to browse commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<LensHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(LensHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".pagelens_mcp_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let prompt = " \x1b[36mlens>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let (cmd, args) = input.split_once(' ').unwrap_or((input, ""));
                let args = args.trim();

                match cmd {
                    "exit" | "quit" => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                        break;
                    }
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "info" => cmd_info(),
                    "tools" => cmd_tools(),
                    "density" => cmd_density(args, &analyzer, &runtime),
                    "access" => cmd_access(args, &analyzer, &runtime),
                    "report" => cmd_report(args, &analyzer, &runtime),
                    "file" => cmd_file(args),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = std::fs::create_dir_all(hist_path.parent().unwrap_or(std::path::Path::new(".")));
    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
    eprintln!("  Tip: Tab completion works for commands and .html files.");
    eprintln!();
}

fn cmd_info() {
    let capabilities = crate::types::InitializeResult::default_result();
    let tools = ToolRegistry::list_tools();
    eprintln!();
    eprintln!(
        "  Server:   {} v{}",
        capabilities.server_info.name, capabilities.server_info.version
    );
    eprintln!("  Protocol: {}", capabilities.protocol_version);
    eprintln!("  Tools:    {}", tools.len());
    eprintln!();
}

fn cmd_tools() {
    let tools = ToolRegistry::list_tools();
    eprintln!();
    eprintln!("  {} MCP tools available:", tools.len());
    eprintln!();
    for tool in &tools {
        eprintln!(
            "    {:<28} {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }
    eprintln!();
}

fn url_arg(args: &str, usage: &str) -> Option<String> {
    match args.split_whitespace().next() {
        Some(url) => Some(url.to_string()),
        None => {
            eprintln!("  Usage: {usage}");
            None
        }
    }
}

fn cmd_density(args: &str, analyzer: &PageAnalyzer, runtime: &Handle) {
    let Some(url) = url_arg(args, "/density <url>") else {
        return;
    };
    match runtime.block_on(analyzer.density(&url)) {
        Ok(m) => {
            eprintln!();
            eprintln!("  Scanability: {}/100  ({url})", m.scanability_score);
            eprintln!(
                "    Words: {}  Avg paragraph: {}  Images: {}  Headings: {}",
                m.word_count, m.avg_paragraph_length, m.image_count, m.heading_count
            );
            print_notes(&m.notes);
        }
        Err(e) => eprintln!("  Analysis failed: {e}"),
    }
}

fn cmd_access(args: &str, analyzer: &PageAnalyzer, runtime: &Handle) {
    let Some(url) = url_arg(args, "/access <url>") else {
        return;
    };
    match runtime.block_on(analyzer.accessibility(&url)) {
        Ok(m) => {
            eprintln!();
            eprintln!("  Accessibility: {}/100  ({url})", m.accessibility_score);
            eprintln!(
                "    H1: {}  Missing alt: {}  Unlabeled buttons: {}  Heading jumps: {}",
                m.h1_count, m.images_missing_alt, m.unlabeled_buttons, m.heading_order_issues
            );
            print_notes(&m.notes);
        }
        Err(e) => eprintln!("  Analysis failed: {e}"),
    }
}

fn cmd_report(args: &str, analyzer: &PageAnalyzer, runtime: &Handle) {
    let Some(url) = url_arg(args, "/report <url>") else {
        return;
    };
    match runtime.block_on(analyzer.report(&url)) {
        Ok(report) => print_report(&report),
        Err(e) => eprintln!("  Analysis failed: {e}"),
    }
}

fn cmd_file(args: &str) {
    let Some(path) = url_arg(args, "/file <page.html>") else {
        return;
    };
    match std::fs::read_to_string(&path) {
        Ok(markup) => print_report(&report_for_markup(&path, &markup)),
        Err(e) => eprintln!("  Cannot read {path}: {e}"),
    }
}

fn print_report(report: &PageReport) {
    eprintln!();
    eprintln!("  {}", report.url);
    eprintln!("    Scanability:   {}/100", report.density.scanability_score);
    eprintln!("    Accessibility: {}/100", report.accessibility.accessibility_score);
    print_notes(&report.density.notes);
    print_notes(&report.accessibility.notes);
}

fn print_notes(notes: &[String]) {
    for note in notes {
        eprintln!("    \x1b[90m-\x1b[0m {note}");
    }
    eprintln!();
}
