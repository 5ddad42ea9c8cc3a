//! Best-effort validation of the generated site by running its builder.

use tokio::process::Command;

use crate::ui::Style;

/// External site build command, `hugo --gc --minify` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBuilder {
    program: String,
    args: Vec<String>,
}

/// Result of a builder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed {
        /// Exit status or spawn error.
        reason: String,
        /// Combined stdout and stderr.
        output: String,
    },
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new("hugo", ["--gc", "--minify"])
    }
}

impl SiteBuilder {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Runs the builder in the current directory. Never fails; a missing
    /// binary is reported as a failed build.
    pub async fn run(&self) -> BuildOutcome {
        match Command::new(&self.program).args(&self.args).output().await {
            Ok(output) if output.status.success() => BuildOutcome::Success,
            Ok(output) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));
                BuildOutcome::Failed {
                    reason: output.status.to_string(),
                    output: combined,
                }
            }
            Err(e) => BuildOutcome::Failed {
                reason: format!("failed to run {}: {e}", self.program),
                output: String::new(),
            },
        }
    }

    /// Runs the builder and prints the outcome. Failures are warnings only.
    pub async fn validate(&self) -> BuildOutcome {
        crate::info!("Validating site build...");
        let outcome = self.run().await;
        match &outcome {
            BuildOutcome::Success => println!("{}", Style::success("✓ Site builds successfully")),
            BuildOutcome::Failed { reason, output } => {
                crate::warn!(
                    "{} Site build validation failed: {reason}",
                    Style::warning("Warning:")
                );
                if !output.is_empty() {
                    crate::warn!("Output: {output}");
                }
            }
        }
        outcome
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_success() {
        let builder = SiteBuilder::new("true", Vec::<String>::new());
        assert_eq!(builder.run().await, BuildOutcome::Success);
    }

    #[tokio::test]
    async fn test_run_failure_captures_output() {
        let builder = SiteBuilder::new("sh", ["-c", "echo building; echo broken >&2; exit 3"]);

        let BuildOutcome::Failed { reason, output } = builder.run().await else {
            panic!("expected a failed build");
        };
        assert!(reason.contains('3'));
        assert_eq!(output, "building\nbroken\n");
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let builder = SiteBuilder::new("pkgcatalog-no-such-builder", ["--gc"]);

        let BuildOutcome::Failed { reason, .. } = builder.run().await else {
            panic!("expected a failed build");
        };
        assert!(reason.contains("pkgcatalog-no-such-builder"));
    }

    #[test]
    fn test_default_is_hugo() {
        assert_eq!(
            SiteBuilder::default(),
            SiteBuilder::new("hugo", ["--gc", "--minify"])
        );
    }
}
