//! Workflow configuration DTO

use crate::domain::entities::HashAlgorithm;
use crate::infrastructure::persistence::DEFAULT_LOG_FILE;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "source.txt";
pub const DEFAULT_IMAGE: &str = "forensic_image.img";
pub const DEFAULT_RECOVERED: &str = "recovered_file.txt";
pub const SAMPLE_TEXT: &str = "This is a test file for forensic imaging.";

/// Paths and settings for one imaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Sample evidence file, overwritten at the start of each run
    pub source: PathBuf,
    /// Destination of the forensic image
    pub image: PathBuf,
    /// Destination of the simulated recovery
    pub recovered: PathBuf,
    /// Append-only chain-of-custody log
    pub log_file: PathBuf,
    /// Digest used for integrity verification
    pub algorithm: HashAlgorithm,
    /// Contents written to `source` before imaging
    pub sample_text: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            image: PathBuf::from(DEFAULT_IMAGE),
            recovered: PathBuf::from(DEFAULT_RECOVERED),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            algorithm: HashAlgorithm::default(),
            sample_text: SAMPLE_TEXT.to_string(),
        }
    }
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves every relative path against `dir`
    pub fn in_dir(mut self, dir: &Path) -> Self {
        for path in [
            &mut self.source,
            &mut self.image,
            &mut self.recovered,
            &mut self.log_file,
        ] {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
        self
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = path.into();
        self
    }

    pub fn with_recovered(mut self, path: impl Into<PathBuf>) -> Self {
        self.recovered = path.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_sample_text(mut self, text: impl Into<String>) -> Self {
        self.sample_text = text.into();
        self
    }
}
