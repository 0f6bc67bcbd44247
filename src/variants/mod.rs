use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::output::CommandOutput;

/// A `<variant name="...">` span including its inner content.
/// Tag and name matching is case-insensitive; content is matched lazily and
/// spans newlines.
static VARIANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<variant\s+name="([^"]+)"[^>]*>(.*?)</variant>"#).unwrap()
});

/// Paragraph elements left empty after variant substitution.
static EMPTY_P_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p>\s*</p>").unwrap());

/// An opening `<head>` tag, with or without attributes.
static HEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(<head[^>]*>)").unwrap());

const NOINDEX_META: &str = r#"<meta name="robots" content="noindex">"#;

/// The result of splitting one document.
#[derive(Debug)]
pub struct SplitDocument {
    /// The page with only `default` variant content kept; overwrites the
    /// source file.
    pub default_html: String,
    /// Variant name (first-seen case) and its rendered document.
    pub variants: Vec<(String, String)>,
}

/// Split a document containing variant markup into the default page and one
/// page per distinct non-default variant name. Returns `None` when the
/// document has no variant tags.
pub fn split_document(html: &str) -> Option<SplitDocument> {
    let names = variant_names(html);
    if names.is_empty() {
        return None;
    }

    let default_html = clean_empty_paragraphs(&substitute(html, "default"));

    let variants = names
        .iter()
        .filter(|name| !name.eq_ignore_ascii_case("default"))
        .map(|name| {
            let doc = clean_empty_paragraphs(&substitute(html, name));
            (name.clone(), inject_noindex(&doc))
        })
        .collect();

    Some(SplitDocument {
        default_html,
        variants,
    })
}

/// Distinct variant names in document order. Comparison is case-insensitive;
/// the first-seen spelling is kept for the output filename.
fn variant_names(html: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in VARIANT_RE.captures_iter(html) {
        let name = &cap[1];
        if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every variant tag: tags matching the target name keep their
/// trimmed content wrapped in a paragraph (when non-empty), every other tag
/// is removed. Same-named tags are each replaced independently.
fn substitute(html: &str, target: &str) -> String {
    VARIANT_RE
        .replace_all(html, |cap: &Captures<'_>| {
            let content = cap[2].trim();
            if cap[1].eq_ignore_ascii_case(target) && !content.is_empty() {
                format!("<p>{content}</p>")
            } else {
                String::new()
            }
        })
        .into_owned()
}

fn clean_empty_paragraphs(html: &str) -> String {
    EMPTY_P_RE.replace_all(html, "").into_owned()
}

/// Variant pages must not be indexed: add a robots meta tag right after the
/// opening head tag. Documents without a head element are left unchanged.
fn inject_noindex(html: &str) -> String {
    HEAD_RE
        .replace_all(html, |cap: &Captures<'_>| {
            format!("{}\n    {}", &cap[1], NOINDEX_META)
        })
        .into_owned()
}

#[derive(Debug, Serialize)]
pub struct VariantStats {
    pub pages_processed: usize,
    pub variant_files_created: usize,
    pub errors: usize,
}

impl CommandOutput for VariantStats {
    fn human_display(&self) -> String {
        format!(
            "Processed {} page{}, created {} variant file{}",
            self.pages_processed,
            if self.pages_processed == 1 { "" } else { "s" },
            self.variant_files_created,
            if self.variant_files_created == 1 { "" } else { "s" },
        )
    }
}

/// Walk every `index.html` under the output directory and split variant
/// markup into sibling documents. Per-file failures are logged and counted,
/// never propagated: this is a best-effort batch transform.
pub fn split_tree(output_dir: &Path) -> Result<VariantStats> {
    let mut stats = VariantStats {
        pages_processed: 0,
        variant_files_created: 0,
        errors: 0,
    };

    for entry in WalkDir::new(output_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == "index.html")
    {
        match split_file(entry.path()) {
            Ok(Some(created)) => {
                stats.pages_processed += 1;
                stats.variant_files_created += created;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("failed to process {}: {e}", entry.path().display());
                stats.errors += 1;
            }
        }
    }

    Ok(stats)
}

/// Process one document. Returns the number of variant files created, or
/// `None` when the file has no variant markup.
fn split_file(path: &Path) -> Result<Option<usize>> {
    let html = fs::read_to_string(path)?;
    if !html.to_lowercase().contains("<variant") {
        return Ok(None);
    }
    let Some(split) = split_document(&html) else {
        return Ok(None);
    };

    info!("processing variants in {}", path.display());
    fs::write(path, &split.default_html)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut created = 0;
    for (name, doc) in &split.variants {
        let variant_path = base_dir.join(format!("{name}.html"));
        fs::write(&variant_path, doc)?;
        info!("created variant file {}", variant_path.display());
        created += 1;
    }

    Ok(Some(created))
}
