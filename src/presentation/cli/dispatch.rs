//! Subcommand dispatch
//!
//! Runs a parsed [`Cli`] against the local filesystem, writing status lines
//! to the given writer. Step failures are printed, never signalled; only
//! `verify-log` turns a finding into a failing exit code.

use super::commands::{Cli, Commands, RunArgs};
use crate::application::dto::WorkflowConfig;
use crate::application::forensic_steps::{
    anti_forensic_details, create_image_details, recover_details,
};
use crate::application::{
    ACTION_ANTI_FORENSIC, ACTION_CREATE_IMAGE, ACTION_RECOVER, ForensicSteps, ImagingWorkflow,
};
use crate::domain::entities::HashAlgorithm;
use crate::domain::repositories::DigestCalculator;
use crate::infrastructure::hashing::StreamingHasher;
use crate::infrastructure::imaging::StreamCopier;
use crate::infrastructure::persistence::{FileCustodyLog, LogAudit};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

/// Executes the selected subcommand, or the full workflow when none is given
pub fn dispatch(cli: Cli, out: &mut impl Write) -> Result<ExitCode> {
    match cli.command {
        None => run_workflow(RunArgs::default(), &cli.log_file, out)?,
        Some(Commands::Run(args)) => run_workflow(args, &cli.log_file, out)?,
        Some(Commands::Image { source, dest }) => {
            let steps = local_steps(&cli.log_file);
            let details = create_image_details(&source, &dest);
            // no custody entry, no copy
            if steps.log_action(ACTION_CREATE_IMAGE, &details, out).is_ok() {
                let _ = steps.create_image(&source, &dest, out);
            }
        }
        Some(Commands::Hash { path, algorithm }) => print_hash(&path, algorithm, out)?,
        Some(Commands::Verify {
            source,
            image,
            algorithm,
        }) => {
            local_steps(&cli.log_file).verify_integrity(&source, &image, algorithm, out);
        }
        Some(Commands::Recover { source, dest }) => {
            let steps = local_steps(&cli.log_file);
            let details = recover_details(&source, &dest);
            if steps.log_action(ACTION_RECOVER, &details, out).is_ok() {
                let _ = steps.recover(&source, &dest, out);
            }
        }
        Some(Commands::Detect { path }) => {
            let steps = local_steps(&cli.log_file);
            let _ = steps.log_action(ACTION_ANTI_FORENSIC, &anti_forensic_details(&path), out);
            steps.detect_anti_forensic(&path, out);
        }
        Some(Commands::VerifyLog) => return verify_log(&cli.log_file, out),
    }

    Ok(ExitCode::SUCCESS)
}

fn local_steps(log_file: &Path) -> ForensicSteps<StreamCopier, StreamingHasher, FileCustodyLog> {
    ForensicSteps::new(
        StreamCopier::new(),
        StreamingHasher::new(),
        FileCustodyLog::new(log_file),
    )
}

fn run_workflow(args: RunArgs, log_file: &Path, out: &mut impl Write) -> Result<()> {
    let config = WorkflowConfig::new()
        .with_source(args.source)
        .with_image(args.image)
        .with_recovered(args.recovered)
        .with_log_file(log_file)
        .with_sample_text(args.sample_text)
        .with_algorithm(args.algorithm);

    let report = ImagingWorkflow::from_config(config).run(out);

    if let Some(path) = args.report {
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        writeln!(out, "Report written: {}", path.display())?;
    }

    Ok(())
}

fn print_hash(path: &Path, algorithm: HashAlgorithm, out: &mut impl Write) -> Result<()> {
    match StreamingHasher::new().digest(path, algorithm) {
        Ok(digest) => writeln!(out, "{}  {}", digest, path.display())?,
        Err(e) => writeln!(out, "Error calculating hash: {}", e)?,
    }
    Ok(())
}

fn verify_log(log_file: &Path, out: &mut impl Write) -> Result<ExitCode> {
    let audit = LogAudit::read(log_file)
        .with_context(|| format!("Failed to read custody log: {}", log_file.display()))?;

    writeln!(
        out,
        "{}: {} well-formed entries",
        log_file.display(),
        audit.entries.len()
    )?;

    match audit.malformed.first() {
        None => Ok(ExitCode::SUCCESS),
        Some((line, reason)) => {
            writeln!(
                out,
                "{} malformed line(s); first at line {}: {}",
                audit.malformed.len(),
                line,
                reason
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}
