//! Prettier invoked as an external process
//!
//! Snippet text is written to the formatter's stdin and the canonical text is
//! read back from stdout. A non-zero exit means the snippet did not parse.

use super::CodeFormatter;
use crate::error::FormatError;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Formats snippets with the `prettier` command line tool
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    /// Executable to run
    command: String,
    /// Arguments placed before `--parser`, e.g. `["prettier"]` for `npx`
    args: Vec<String>,
    /// Grammar passed as `--parser`
    parser: String,
}

impl PrettierFormatter {
    /// Create a formatter running `command` with the given parser grammar
    pub fn new(command: &str, parser: &str) -> Self {
        Self {
            command: command.to_string(),
            args: Vec::new(),
            parser: parser.to_string(),
        }
    }

    /// Set the leading arguments
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// `prettier --parser typescript`
    pub fn typescript() -> Self {
        Self::new("prettier", "typescript")
    }

    /// Grammar this formatter parses with
    pub fn parser(&self) -> &str {
        &self.parser
    }

    fn spawn_error(&self, reason: impl std::fmt::Display) -> FormatError {
        FormatError::Spawn {
            command: self.command.clone(),
            reason: reason.to_string(),
        }
    }
}

impl Default for PrettierFormatter {
    fn default() -> Self {
        Self::typescript()
    }
}

#[async_trait::async_trait]
impl CodeFormatter for PrettierFormatter {
    async fn format(&self, source: &str) -> Result<String, FormatError> {
        tracing::debug!(command = %self.command, parser = %self.parser, "Running formatter");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg("--parser")
            .arg(&self.parser)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // stdin is closed when dropped at the end of this block. A formatter
        // that exits early closes the pipe; its exit status decides the outcome.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(source.as_bytes()).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(self.spawn_error(e)),
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(FormatError::Rejected {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput)
    }

    fn name(&self) -> &str {
        &self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatterAdapter;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let formatter = PrettierFormatter::default();
        assert_eq!(formatter.name(), "prettier");
        assert_eq!(formatter.parser(), "typescript");
    }

    #[tokio::test]
    async fn test_missing_executable_is_a_spawn_error() {
        let formatter = PrettierFormatter::new("snipprint-no-such-formatter", "typescript");
        let err = formatter.format("const a = 1").await.unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_missing_executable_aborts_adapter() {
        let formatter = PrettierFormatter::new("snipprint-no-such-formatter", "typescript");
        let adapter = FormatterAdapter::new(Arc::new(formatter));

        let err = adapter.format("const a = 1".to_string()).await.unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }

    // `sh -c SCRIPT --parser typescript` runs SCRIPT with the parser flags as
    // positional parameters, standing in for the real formatter.
    #[cfg(unix)]
    fn shell(script: &str) -> PrettierFormatter {
        PrettierFormatter::new("sh", "typescript").with_args(["-c", script])
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_is_read_from_stdout() {
        let formatter = shell(r#"test "$1" = typescript || exit 3; tr a-z A-Z"#);
        let text = formatter.format("const a = 1;\n").await.unwrap();
        assert_eq!(text, "CONST A = 1;\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_rejected() {
        let formatter = shell("cat >/dev/null; echo 'SyntaxError: Unexpected token' >&2; exit 2");
        let err = formatter.format("const a = {").await.unwrap_err();
        assert_eq!(
            err,
            FormatError::Rejected {
                stderr: "SyntaxError: Unexpected token".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_rejection_falls_back_in_adapter() {
        let adapter = FormatterAdapter::new(Arc::new(shell("cat >/dev/null; exit 2")));
        let outcome = adapter.format("const a = {".to_string()).await.unwrap();
        assert!(!outcome.is_formatted());
        assert_eq!(outcome.text(), "const a = {");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_output() {
        let formatter = shell(r"cat >/dev/null; printf '\377'");
        let err = formatter.format("x").await.unwrap_err();
        assert_eq!(err, FormatError::InvalidOutput);
    }
}
