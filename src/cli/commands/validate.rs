//! Validate command implementation.
//!
//! The `fabnet validate` command loads a network configuration document, runs
//! the validation session over the built-in rule set, and renders either the
//! grouped summary or the critical-abort message.
//!
//! Exit-code policy: a critical finding (and an unreadable or unparsable
//! document) exits 1 before any summary is produced. A completed run exits 0
//! even when error findings were collected; `--strict` turns collected errors
//! into exit 1. Warnings never affect the exit code.

use std::io::Write;

use console::style;

use crate::cli::args::ValidateArgs;
use crate::config::load_config_file;
use crate::error::{FabnetError, Result};
use crate::validation::report::{
    render_critical, render_summary, CRITICAL_BANNER, ERRORS_CAPTION, SUMMARY_FOOTER,
    SUMMARY_HEADER, WARNINGS_CAPTION,
};
use crate::validation::{Finding, RuleSet, ValidationOutcome, ValidationSession};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }

    fn report_critical(&self, finding: &Finding, out: &mut dyn Write) -> Result<CommandResult> {
        let mut buf = Vec::new();
        render_critical(finding, &mut buf)?;
        write_styled(&buf, out)?;
        Ok(CommandResult::failure(1))
    }
}

impl Command for ValidateCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = match load_config_file(&self.args.config) {
            Ok(c) => c,
            Err(err @ FabnetError::ConfigNotFound { .. })
            | Err(err @ FabnetError::ConfigParseError { .. }) => {
                // A missing or unreadable document surfaces through the same
                // critical path as an unprocessable one.
                let mut buf = Vec::new();
                writeln!(buf, "{CRITICAL_BANNER}")?;
                writeln!(buf, "   {err}")?;
                write_styled(&buf, out)?;
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(path = %self.args.config.display(), "config loaded, starting rule sweep");

        let rules = RuleSet::with_defaults();
        match ValidationSession::new().run(&rules, &config) {
            ValidationOutcome::Aborted(finding) => self.report_critical(&finding, out),
            ValidationOutcome::Completed(report) => {
                let mut buf = Vec::new();
                render_summary(&report, &mut buf)?;
                write_styled(&buf, out)?;

                if self.args.strict && report.errors().count() > 0 {
                    Ok(CommandResult::failure(1))
                } else {
                    Ok(CommandResult::success())
                }
            }
        }
    }
}

/// Write rendered report lines, applying terminal styling to the structural
/// ones. `console` drops the styling when stdout is not a terminal or
/// `NO_COLOR` is set, so the plain rendering stays byte-stable in pipes.
fn write_styled(rendered: &[u8], out: &mut dyn Write) -> std::io::Result<()> {
    let text = String::from_utf8_lossy(rendered);
    for line in text.lines() {
        match line {
            SUMMARY_HEADER | SUMMARY_FOOTER => writeln!(out, "{}", style(line).bold())?,
            ERRORS_CAPTION => writeln!(out, "{}", style(line).red().bold())?,
            WARNINGS_CAPTION => writeln!(out, "{}", style(line).yellow())?,
            CRITICAL_BANNER => writeln!(out, "{}", style(line).red().bold())?,
            _ if line.starts_with("  ") && line.ends_with(':') => {
                writeln!(out, "{}", style(line).bold())?;
            }
            _ => writeln!(out, "{line}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("network.json");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn execute(path: PathBuf, strict: bool) -> (CommandResult, String) {
        console::set_colors_enabled(false);
        let cmd = ValidateCommand::new(ValidateArgs {
            config: path,
            strict,
        });
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    const CLEAN: &str = r#"{
        "fabnetVersion": "0.1.0",
        "networkSettings": { "fabricVersion": "1.4.4" },
        "rootOrg": { "orderer": { "consensus": "solo", "instances": 1 } }
    }"#;

    const WARNING_ONLY: &str = r#"{
        "fabnetVersion": "0.1.0",
        "networkSettings": { "fabricVersion": "1.4.4" },
        "rootOrg": { "orderer": { "consensus": "solo", "instances": 3 } }
    }"#;

    const ERROR_AND_WARNING: &str = r#"{
        "fabnetVersion": "0.1.0",
        "networkSettings": { "fabricVersion": "2.0.0" },
        "rootOrg": { "orderer": { "consensus": "solo", "instances": 5 } }
    }"#;

    const UNSUPPORTED_TOOL: &str = r#"{
        "fabnetVersion": "9.9.9",
        "networkSettings": { "fabricVersion": "2.0.0" },
        "rootOrg": { "orderer": { "consensus": "solo", "instances": 5 } }
    }"#;

    #[test]
    fn clean_config_succeeds_with_zero_counts() {
        let (_temp, path) = write_config(CLEAN);
        let (result, output) = execute(path, false);

        assert!(result.success);
        assert!(output.contains("Errors count: 0"));
        assert!(output.contains("Warnings count: 0"));
    }

    #[test]
    fn warning_does_not_fail_the_run() {
        let (_temp, path) = write_config(WARNING_ONLY);
        let (result, output) = execute(path, false);

        assert!(result.success);
        assert!(output.contains("Warnings count: 1"));
        assert!(output.contains("number of instances is 3"));
    }

    #[test]
    fn errors_succeed_without_strict() {
        let (_temp, path) = write_config(ERROR_AND_WARNING);
        let (result, output) = execute(path, false);

        assert!(result.success);
        assert!(output.contains("Errors count: 1"));
        assert!(output.contains("Warnings count: 1"));
    }

    #[test]
    fn strict_fails_on_errors() {
        let (_temp, path) = write_config(ERROR_AND_WARNING);
        let (result, _) = execute(path, true);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn strict_does_not_fail_on_warnings_alone() {
        let (_temp, path) = write_config(WARNING_ONLY);
        let (result, _) = execute(path, true);
        assert!(result.success);
    }

    #[test]
    fn critical_abort_prints_no_summary() {
        let (_temp, path) = write_config(UNSUPPORTED_TOOL);
        let (result, output) = execute(path, false);

        assert!(!result.success);
        assert!(output.contains(CRITICAL_BANNER));
        assert!(output.contains("9.9.9"));
        // Later rules would also fail, but the abort must come first and alone.
        assert!(!output.contains(SUMMARY_HEADER));
        assert!(!output.contains("2.0.0"));
    }

    #[test]
    fn missing_file_uses_critical_path() {
        let temp = TempDir::new().unwrap();
        let (result, output) = execute(temp.path().join("absent.json"), false);

        assert!(!result.success);
        assert!(output.contains(CRITICAL_BANNER));
        assert!(output.contains("No file under path"));
    }

    #[test]
    fn unparsable_file_uses_critical_path() {
        let (_temp, path) = write_config("{ not json");
        let (result, output) = execute(path, false);

        assert!(!result.success);
        assert!(output.contains(CRITICAL_BANNER));
        assert!(output.contains("Failed to parse config"));
    }
}
