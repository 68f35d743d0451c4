//! # Documentation Generator
//!
//! Renders Markdown from documentation blocks embedded in source text.
//!
//! A block is a `/** … **/` comment whose lines carry `@tag value` headers,
//! followed by the code it documents (everything up to the next comment):
//!
//! ```text
//! /**
//!  * @name Identity function
//!  * @type function
//!  * @description
//!  * Returns its argument, i.e. $f(x) = x$.
//!  **/
//! pub fn id<A>(x: A) -> A { x }
//! ```
//!
//! Recognised tags: `name`, `type`, `introduction`, `description`,
//! `example` and `nodoc`. Inline TeX (`$…$`) in the introduction and the
//! description becomes a rendered-formula image link.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

static BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/\*\*((?:[^*]|\*[^*]|\*\*[^/])*)\*\*/((?:[^/]|/[^*]|/\*[^*])*)")
        .expect("block pattern is valid")
});

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([a-z]+)([^@]*)").expect("header pattern is valid"));

static TEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$((?:[^$\\]|\\\$|\\)*)\$").expect("tex pattern is valid"));

const FORMULA_URL: &str = "http://latex.codecogs.com/png.latex?";

#[derive(Debug, Error)]
pub enum DocError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One documentation comment and the code after it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocBlock {
    pub header: BTreeMap<String, String>,
    pub body: String,
}

impl DocBlock {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.header.get(name).map(String::as_str)
    }

    fn is_module(&self) -> bool {
        self.tag("type") == Some("module")
    }
}

pub fn parse_blocks(text: &str) -> Vec<DocBlock> {
    BLOCK
        .captures_iter(text)
        .map(|block| DocBlock {
            header: parse_header(&block[1]),
            body: block[2].trim().to_string(),
        })
        .collect()
}

fn parse_header(text: &str) -> BTreeMap<String, String> {
    let clean = text
        .lines()
        .map(|line| line.replacen('*', "", 1).trim().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    HEADER
        .captures_iter(&clean)
        .map(|tag| {
            let name = tag[1].to_string();
            let mut value = tag[2].trim().to_string();
            if name == "introduction" || name == "description" {
                value = render_tex(&value);
            }
            if name == "introduction" {
                value = format!("> {}", value.replace('\n', "\n> "));
            }
            (name, value)
        })
        .collect()
}

fn render_tex(text: &str) -> String {
    TEX.replace_all(text, |formula: &Captures| {
        let content = &formula[1];
        format!(
            "![${}$]({FORMULA_URL}{}) ",
            content.replace('\n', ""),
            encode_formula(content)
        )
    })
    .into_owned()
}

/// Percent-encodes a formula, leaving `!'()*` readable in the URL.
fn encode_formula(formula: &str) -> String {
    const KEPT: [(&str, &str); 5] = [
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];

    KEPT.iter()
        .fold(urlencoding::encode(formula).into_owned(), |url, (escaped, raw)| {
            url.replace(escaped, raw)
        })
}

/// Markdown for every block of `text` not marked `@nodoc`.
pub fn render_markdown(text: &str) -> String {
    let mut md = String::new();

    for (i, block) in parse_blocks(text).iter().enumerate() {
        if block.header.contains_key("nodoc") {
            continue;
        }
        let module_header = i == 0 && block.is_module();

        if let Some(name) = block.tag("name") {
            let level = if module_header { "#" } else { "###" };
            md.push_str(&format!("\n{level} {name}\n"));
        }
        if let Some(introduction) = block.tag("introduction") {
            md.push_str(&format!("{introduction}\n\n"));
        }
        if let Some(description) = block.tag("description") {
            md.push_str(&format!("{description}\n"));
        }

        let code = if module_header {
            block.tag("example")
        } else {
            Some(block.body.as_str())
        };
        if let Some(code) = code {
            md.push_str(&format!("```rust\n{code}\n```\n"));
        }
    }
    md
}

/// Renders the documentation of `input` into the Markdown file `output`.
pub fn render_file(input: &Path, output: &Path) -> Result<(), DocError> {
    let text = fs::read_to_string(input).map_err(|source| DocError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let markdown = render_markdown(&text);
    fs::write(output, &markdown).map_err(|source| DocError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!("wrote {} ({} bytes)", output.display(), markdown.len());
    Ok(())
}
