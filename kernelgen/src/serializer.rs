//! Kernel source to C++ string literal
//!
//! A kernel body is filtered line by line with a two-state scanner that
//! drops comments, blank lines and the common include. Surviving lines are
//! quote-escaped and wrapped into a multi-line `std::string` literal using
//! `\n\` line continuations, which the JIT side compiles as-is.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::COMMON_INCLUDE;
use crate::error::{GenError, Result};

/// Column width of the text field each retained line is padded to
pub const LINE_WIDTH: usize = 70;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*//").unwrap());
static ONE_LINE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*.*\*/").unwrap());

/// Comment scanner state carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InBlockComment,
}

/// Turns kernel source lines into a string declaration
#[derive(Debug, Clone)]
pub struct KernelSerializer {
    skipped_include: String,
}

impl Default for KernelSerializer {
    fn default() -> Self {
        Self::new(COMMON_INCLUDE)
    }
}

impl KernelSerializer {
    pub fn new(skipped_include: impl Into<String>) -> Self {
        Self {
            skipped_include: skipped_include.into(),
        }
    }

    /// Advance the scanner by one line
    ///
    /// Returns the next state and the line if it is kept.
    pub fn step<'a>(&self, state: ScanState, line: &'a str) -> (ScanState, Option<&'a str>) {
        match state {
            ScanState::Normal => {
                if line.is_empty()
                    || LINE_COMMENT.is_match(line)
                    || ONE_LINE_BLOCK.is_match(line)
                    || line.contains(self.skipped_include.as_str())
                {
                    (ScanState::Normal, None)
                } else if opens_block_comment(line) {
                    (ScanState::InBlockComment, None)
                } else {
                    (ScanState::Normal, Some(line))
                }
            }
            ScanState::InBlockComment => {
                if line.contains("*/") {
                    (ScanState::Normal, None)
                } else {
                    (ScanState::InBlockComment, None)
                }
            }
        }
    }

    /// Lines of `source` that end up in the literal, unescaped
    pub fn retained_lines<'a, S: AsRef<str>>(&self, source: &'a [S]) -> Vec<&'a str> {
        let mut state = ScanState::Normal;
        let mut retained = Vec::new();
        for line in source {
            let (next, kept) = self.step(state, line.as_ref());
            state = next;
            retained.extend(kept);
        }
        if state == ScanState::InBlockComment {
            log::warn!("Kernel source ends inside a block comment");
        }
        retained
    }

    /// Build the `std::string <name> = "...";` declaration for one kernel
    ///
    /// `origin` is only used to report which file carried a bad name.
    pub fn serialize<S: AsRef<str>>(
        &self,
        source: &[S],
        name: &str,
        origin: &Path,
    ) -> Result<String> {
        validate_identifier(name, origin)?;

        let mut out = declaration_open(name);
        out.push('\n');
        let retained = self.retained_lines(source);
        for line in &retained {
            out.push_str(&wrap_line(&escape_line(line)));
            out.push('\n');
        }
        out.push_str("\";");

        log::debug!("Kernel {}: kept {} of {} lines", name, retained.len(), source.len());
        Ok(out)
    }
}

/// Serialize with the default include filter
pub fn serialize_kernel<S: AsRef<str>>(source: &[S], name: &str) -> Result<String> {
    KernelSerializer::default().serialize(source, name, Path::new(name))
}

/// Reject names that are not C/C++ variable names
pub fn validate_identifier(name: &str, origin: &Path) -> Result<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(GenError::InvalidIdentifier {
            name: name.to_string(),
            path: origin.to_path_buf(),
        })
    }
}

/// True if the last `/*` before any `//` is not closed on the same line
fn opens_block_comment(line: &str) -> bool {
    let code = line.split("//").next().unwrap_or(line);
    code.rfind("/*").is_some_and(|start| !code[start + 2..].contains("*/"))
}

pub fn escape_line(line: &str) -> String {
    line.replace('"', "\\\"")
}

/// Pad to [`LINE_WIDTH`] and append the `\n\` continuation
pub fn wrap_line(line: &str) -> String {
    format!("{:<width$}\\n\\", line, width = LINE_WIDTH)
}

fn declaration_open(name: &str) -> String {
    format!("std::string {} = \"{:37}\\n\\", name, "")
}
