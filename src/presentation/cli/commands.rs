//! CLI commands using clap

use crate::application::dto::{DEFAULT_IMAGE, DEFAULT_RECOVERED, DEFAULT_SOURCE, SAMPLE_TEXT};
use crate::domain::entities::HashAlgorithm;
use crate::infrastructure::persistence::DEFAULT_LOG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Forensic imaging toolkit
///
/// Images a file byte-for-byte, verifies it by digest and keeps a
/// chain-of-custody log. Runs the full demonstration workflow when no
/// subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "forensic-imaging")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Forensic imaging with digest verification and custody logging", long_about = None)]
pub struct Cli {
    /// Enable debug-level diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Chain-of-custody log file
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full workflow: sample, image, verify, recover, detect
    Run(RunArgs),

    /// Create a forensic image of a file
    Image { source: PathBuf, dest: PathBuf },

    /// Print the digest of a file
    Hash {
        path: PathBuf,

        #[arg(short, long, default_value = "sha256")]
        algorithm: HashAlgorithm,
    },

    /// Compare the digests of a source and its image
    Verify {
        source: PathBuf,
        image: PathBuf,

        #[arg(short, long, default_value = "sha256")]
        algorithm: HashAlgorithm,
    },

    /// Simulated recovery: copy a file under the recovery label
    Recover { source: PathBuf, dest: PathBuf },

    /// Mock anti-forensic check based on file existence
    Detect { path: PathBuf },

    /// Check that every line of the custody log is well formed
    VerifyLog,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Sample evidence file (overwritten)
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Forensic image destination
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: PathBuf,

    /// Simulated recovery destination
    #[arg(long, default_value = DEFAULT_RECOVERED)]
    pub recovered: PathBuf,

    /// Contents of the sample evidence file
    #[arg(long, default_value = SAMPLE_TEXT)]
    pub sample_text: String,

    /// Digest algorithm (md5, sha1, sha224 ... sha512_256, sha3_224 ... sha3_512, blake2b, blake2s)
    #[arg(short, long, default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            image: PathBuf::from(DEFAULT_IMAGE),
            recovered: PathBuf::from(DEFAULT_RECOVERED),
            sample_text: SAMPLE_TEXT.to_string(),
            algorithm: HashAlgorithm::default(),
            report: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_workflow() {
        let cli = Cli::try_parse_from(["forensic-imaging"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_file, PathBuf::from("chain_of_custody.log"));
    }

    #[test]
    fn run_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "forensic-imaging",
            "run",
            "--image",
            "disk.img",
            "--algorithm",
            "sha-512",
            "--log-file",
            "case.log",
        ])
        .unwrap();

        assert_eq!(cli.log_file, PathBuf::from("case.log"));
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.image, PathBuf::from("disk.img"));
                assert_eq!(args.source, PathBuf::from("source.txt"));
                assert_eq!(args.algorithm, HashAlgorithm::Sha512);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_algorithm_is_a_usage_error() {
        let result = Cli::try_parse_from(["forensic-imaging", "hash", "x", "-a", "crc32"]);
        assert!(result.is_err());
    }
}
