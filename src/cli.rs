//! CLI host: read JSON documents, convert each, print or write the result.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{ConvertOptions, convert_value, error};

// ------------------------------- Types ------------------------------------ //

/// Infer TypeScript type declarations from JSON documents
#[derive(Parser, Debug)]
#[command(name = "json2ts", version)]
pub struct CommandLineInterface {
    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// Emit `type` aliases instead of `interface` declarations
    #[arg(long, default_value_t = false)]
    type_aliases: bool,

    /// Mark every property optional
    #[arg(long, default_value_t = false)]
    optional_fields: bool,

    /// Output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ---------------------------- Implementation ------------------------------- //

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        let options = ConvertOptions {
            use_interfaces: !self.type_aliases,
            use_optional_fields: self.optional_fields,
        };

        // Each document is converted independently; the core allocates a fresh
        // registry per conversion, so names never collide across inputs.
        let mut outputs = Vec::new();
        for (source_name, source) in self.read_sources()? {
            let document = error::parse_json(&source)
                .with_context(|| format!("failed to parse JSON source ({source_name})"))?;
            let selected = match self.json_pointer.as_deref() {
                None => &document,
                Some(pointer) => document.pointer(pointer).with_context(|| {
                    format!("JSON pointer {pointer} selects nothing in {source_name}")
                })?,
            };
            let rendered = convert_value(selected, &options);
            if !rendered.is_empty() {
                outputs.push(rendered);
            }
        }
        let rendered = outputs.join("\n\n");

        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
                std::fs::write(out, &rendered)
                    .with_context(|| format!("failed to write {}", out.display()))?;
            }
            None => println!("{rendered}"),
        }
        Ok(())
    }

    /// Expand the input arguments into `(display name, contents)` pairs.
    fn read_sources(&self) -> Result<Vec<(String, String)>> {
        let mut sources = Vec::new();
        for raw in &self.input {
            if raw == "-" {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read stdin")?;
                sources.push(("stdin".to_string(), buffer));
                continue;
            }
            for path in resolve_file_path_pattern(raw)? {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read source file {}", path.display()))?;
                sources.push((path.to_string_lossy().into_owned(), text));
            }
        }
        Ok(sources)
    }
}

// ---------------------------- Internal helpers ----------------------------- //

fn resolve_file_path_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    if !has_glob_chars(pattern) {
        // Treat as a literal path
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let mut out = Vec::new();
    for entry in
        glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?
    {
        out.push(entry?);
    }
    if out.is_empty() {
        // Pattern was explicitly a glob but matched nothing -> surface as an error
        bail!("glob pattern matched no files: {pattern}");
    }
    Ok(out)
}
