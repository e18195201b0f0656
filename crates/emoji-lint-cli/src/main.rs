//! check-emoji - filename checker for emoji image assets
//!
//! Scans the emoji directory and reports every file whose name does not
//! follow the `U+<HEX>(_U+<HEX>)*.png` convention.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use emoji_lint_cli::commands::{self, check::OutputFormat, check::RuleSelection};
use emoji_lint_cli::logging;

/// Check that emoji asset filenames spell out valid codepoint sequences
#[derive(Parser)]
#[command(name = "check-emoji")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to check (default: ../Base/res/emoji next to this executable)
    dir: Option<PathBuf>,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,

    /// Disable specific lint rules (can be repeated)
    #[arg(long = "disable-rule", value_name = "RULE_ID")]
    disable_rules: Vec<String>,

    /// Only run these rules (comma-separated list)
    #[arg(long = "only-rules", value_name = "RULE_IDS")]
    only_rules: Option<String>,

    /// List the available rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(&e),
    };
    let format = OutputFormat::from_json_flag(cli.json);

    if cli.json || !std::io::stdout().is_terminal() || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let result = if cli.list_rules {
        commands::list_rules::run(format)
    } else {
        let selection = RuleSelection {
            disable_rules: cli.disable_rules,
            only_rules: cli.only_rules,
        };
        commands::check::run(cli.dir.as_deref(), &selection, format)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

/// Prints a clap error and maps it to an exit code.
///
/// `--help` and `--version` exit 0; every usage error exits 1.
fn usage_exit(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    exit_code_for(e)
}

fn exit_code_for(e: &clap::Error) -> ExitCode {
    if e.use_stderr() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
