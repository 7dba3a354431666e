use std::path::PathBuf;

use anyhow::Result;

const APP_NAME: &str = "shelf";

/// Which catalog a session works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogKind {
    #[default]
    Games,
    Notes,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Notes => "notes",
        }
    }
}

/// Settings for one session, resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub kind: CatalogKind,
    /// Where the catalog is saved and loaded.
    pub data_file: PathBuf,
    /// Load the data file before showing the menu.
    pub load_on_start: bool,
    pub verbose: bool,
}

impl Config {
    /// Builds a config, falling back to the platform data directory when no
    /// file was given.
    pub fn resolve(
        kind: CatalogKind,
        data_file: Option<PathBuf>,
        load_on_start: bool,
        verbose: bool,
    ) -> Result<Self> {
        let data_file = match data_file {
            Some(path) => path,
            None => default_data_file(kind)?,
        };

        Ok(Self {
            kind,
            data_file,
            load_on_start,
            verbose,
        })
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "shelf=debug"
        } else {
            "shelf=warn"
        }
    }
}

/// `<data dir>/shelf/<kind>.json`.
pub fn default_data_file(kind: CatalogKind) -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join(format!("{}.json", kind.as_str())))
}
