use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{PostbuildError, Result};

/// The site metadata tree: `{"data": [node, ...]}`.
#[derive(Debug, Deserialize)]
pub struct MetadataTree {
    pub data: Vec<MetadataNode>,
}

/// One node of the metadata tree. `type` tags the node kind; directory nodes
/// carry `children`, markdown nodes carry a post record in `value`.
#[derive(Debug, Deserialize)]
pub struct MetadataNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<MetadataNode>,
    #[serde(default)]
    pub value: Option<Post>,
}

/// A blog post record as stored in the metadata tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    /// Root-relative page path, e.g. `/blog/hello-world`.
    pub slug: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Load and parse the metadata file. Missing or malformed metadata is fatal:
/// this runs as a build step and should fail the build loudly.
pub fn load(path: &Path) -> Result<MetadataTree> {
    if !path.exists() {
        return Err(PostbuildError::MetadataNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| PostbuildError::Metadata {
        path: path.to_path_buf(),
        message: format!("invalid JSON: {e}"),
    })
}

/// Extract blog post records: the markdown children of the `blog` directory
/// entry, sorted by date descending. The sort is stable, so posts sharing a
/// date keep their order in the metadata file.
pub fn blog_posts(tree: &MetadataTree, source: &Path) -> Result<Vec<Post>> {
    let blog = tree
        .data
        .iter()
        .find(|n| n.kind == "directory" && n.name.as_deref() == Some("blog"))
        .ok_or_else(|| PostbuildError::MissingBlogSection {
            path: source.to_path_buf(),
        })?;

    let mut posts = Vec::new();
    for child in blog.children.iter().filter(|c| c.kind == "markdown") {
        let post = child.value.clone().ok_or_else(|| PostbuildError::Metadata {
            path: source.to_path_buf(),
            message: "markdown entry without a value payload".into(),
        })?;
        posts.push(post);
    }
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}
