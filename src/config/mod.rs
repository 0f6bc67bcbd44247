pub mod defaults;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PostbuildError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub feed: FeedSection,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
    #[serde(default = "defaults::language")]
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base_url: defaults::base_url(),
            language: defaults::language(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSection {
    /// Channel link path, appended to the site base URL.
    #[serde(default = "defaults::channel_path")]
    pub channel_path: String,
    /// Feed filename inside the output directory.
    #[serde(default = "defaults::feed_file")]
    pub file: String,
    /// Channel image path, appended to the site base URL.
    #[serde(default = "defaults::channel_image")]
    pub image: String,
    /// Directory under the site root holding per-post social images; the item
    /// image URL is base URL + this directory + slug + ".png".
    #[serde(default = "defaults::item_image_dir")]
    pub item_image_dir: String,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            channel_path: defaults::channel_path(),
            file: defaults::feed_file(),
            image: defaults::channel_image(),
            item_image_dir: defaults::item_image_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,
    #[serde(default = "defaults::metadata_file")]
    pub metadata_file: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            metadata_file: defaults::metadata_file(),
        }
    }
}

/// Resolved absolute paths for the project directories.
#[derive(Clone)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub output: PathBuf,
    pub metadata: PathBuf,
    pub feed: PathBuf,
}

impl SiteConfig {
    /// Load config from a `postbuild.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PostbuildError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let config: SiteConfig =
            toml::from_str(&contents).map_err(|e| PostbuildError::ConfigInvalid {
                message: e.to_string(),
            })?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults.
    /// The tool is expected to run unconfigured against the stock project
    /// layout (`metadata.json`, `dist/`).
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Resolve all file paths relative to the project root.
    pub fn resolve_paths(&self, project_root: &Path) -> ResolvedPaths {
        let output = project_root.join(&self.build.output_dir);
        ResolvedPaths {
            root: project_root.to_path_buf(),
            metadata: project_root.join(&self.build.metadata_file),
            feed: output.join(&self.feed.file),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_stock_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.build.output_dir, "dist");
        assert_eq!(config.build.metadata_file, "metadata.json");
        assert_eq!(config.feed.file, "feed.xml");
        assert_eq!(config.feed.channel_path, "/blog");
        assert_eq!(config.site.language, "en-gb");
    }

    #[test]
    fn test_resolve_paths() {
        let config = SiteConfig::default();
        let paths = config.resolve_paths(Path::new("/project"));
        assert_eq!(paths.metadata, Path::new("/project/metadata.json"));
        assert_eq!(paths.output, Path::new("/project/dist"));
        assert_eq!(paths.feed, Path::new("/project/dist/feed.xml"));
    }

    #[test]
    fn test_load_partial_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("postbuild.toml");
        std::fs::write(
            &path,
            "[site]\ntitle = \"My Site\"\nbase_url = \"https://example.com\"\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site.title, "My Site");
        assert_eq!(config.site.base_url, "https://example.com");
        // Unset sections keep their defaults
        assert_eq!(config.build.output_dir, "dist");
        assert_eq!(config.feed.file, "feed.xml");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = SiteConfig::load(&tmp.path().join("postbuild.toml"));
        assert!(matches!(
            result,
            Err(PostbuildError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(&tmp.path().join("postbuild.toml")).unwrap();
        assert_eq!(config.build.output_dir, "dist");
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("postbuild.toml");
        std::fs::write(&path, "[site\ntitle = ").unwrap();
        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(PostbuildError::ConfigInvalid { .. })));
    }
}
