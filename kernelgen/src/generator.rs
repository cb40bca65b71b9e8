//! Scan, serialize and write in one pass

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::document::OutputDocument;
use crate::error::{GenError, Result};
use crate::scanner::{kernel_name, scan_kernel_folder};
use crate::serializer::KernelSerializer;

/// One kernel header as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelFile {
    pub path: PathBuf,
    pub name: String,
    pub lines: Vec<String>,
}

impl KernelFile {
    /// Read a kernel header, splitting it with [`split_lines`]
    pub fn read(path: &Path, prefix: &str, suffix: &str) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            name: kernel_name(path, prefix, suffix)?,
            lines: split_lines(&text).into_iter().map(str::to_string).collect(),
        })
    }
}

/// Split on every line boundary a text editor may leave in a kernel
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators. A trailing boundary does not yield an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some((_, '\n')) => {
                    chars.next();
                    i + 2
                }
                _ => i + 1,
            },
            '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&text[start..i]);
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kernel_count: usize,
    pub output_path: PathBuf,
}

/// Kernel header generator
pub struct Generator {
    config: GeneratorConfig,
    serializer: KernelSerializer,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let serializer = KernelSerializer::new(config.skipped_include.clone());
        Self { config, serializer }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline and write the output file
    ///
    /// Nothing is written unless every kernel was read and serialized.
    pub fn generate(&self) -> Result<Report> {
        let config = &self.config;
        let kernel_files =
            scan_kernel_folder(&config.kernels_folder, &config.file_prefix, &config.file_suffix)?;

        let kernels = kernel_files
            .iter()
            .map(|path| KernelFile::read(path, &config.file_prefix, &config.file_suffix))
            .collect::<Result<Vec<_>>>()?;

        println!("Re-write kernels as strings...");
        let text = self.render(&kernels)?;

        fs::write(&config.output_path, &text).map_err(|e| GenError::io(&config.output_path, e))?;
        log::info!("Wrote {} bytes to {}", text.len(), config.output_path.display());
        println!("Wrote kernel string to file\n-> {}", config.output_path.display());

        Ok(Report {
            kernel_count: kernels.len(),
            output_path: config.output_path.clone(),
        })
    }

    /// Assemble the generated header in memory
    pub fn render(&self, kernels: &[KernelFile]) -> Result<String> {
        let mut document = OutputDocument::new();
        for kernel in kernels {
            let declaration = self.serializer.serialize(&kernel.lines, &kernel.name, &kernel.path)?;
            document.push_declaration(&declaration);
        }
        log::debug!("Rendered {} kernel declarations", document.declaration_count());
        Ok(document.finish())
    }
}
