//! Imaging workflow
//!
//! The fixed sequence: write sample evidence, image it, verify by digest,
//! simulate recovery from the image, then run the existence check on the
//! original. A custody entry is appended before the image, recovery and
//! detection steps.
//!
//! Every step reports its own failure and the run continues; the caller
//! inspects the returned [`WorkflowReport`] to decide what a failure means.

use crate::application::dto::{Step, StepOutcome, WorkflowConfig, WorkflowReport};
use crate::application::forensic_steps::{
    self, ACTION_ANTI_FORENSIC, ACTION_CREATE_IMAGE, ACTION_RECOVER, ForensicSteps,
};
use crate::domain::repositories::{CustodyLog, DigestCalculator, EvidenceCopier};
use crate::error::IoContext;
use crate::infrastructure::hashing::StreamingHasher;
use crate::infrastructure::imaging::StreamCopier;
use crate::infrastructure::persistence::FileCustodyLog;
use std::fs;
use std::io::Write;

pub struct ImagingWorkflow<C, D, L> {
    steps: ForensicSteps<C, D, L>,
    config: WorkflowConfig,
}

impl ImagingWorkflow<StreamCopier, StreamingHasher, FileCustodyLog> {
    /// Workflow backed by the local filesystem and the wall clock
    pub fn from_config(config: WorkflowConfig) -> Self {
        let custody = FileCustodyLog::new(config.log_file.clone());
        Self::new(
            ForensicSteps::new(StreamCopier::new(), StreamingHasher::new(), custody),
            config,
        )
    }
}

impl<C: EvidenceCopier, D: DigestCalculator, L: CustodyLog> ImagingWorkflow<C, D, L> {
    pub fn new(steps: ForensicSteps<C, D, L>, config: WorkflowConfig) -> Self {
        Self { steps, config }
    }

    /// Runs every step, writing status lines to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> WorkflowReport {
        let cfg = &self.config;
        let mut report = WorkflowReport::start();

        tracing::info!(
            source = %cfg.source.display(),
            image = %cfg.image.display(),
            log = %cfg.log_file.display(),
            "starting imaging workflow"
        );

        let sample = fs::write(&cfg.source, cfg.sample_text.as_bytes())
            .with_path("writing sample", &cfg.source);
        if let Err(e) = &sample {
            let _ = writeln!(out, "Error creating sample file: {}", e);
        }
        report.record(Step::WriteSample, StepOutcome::from_result(&sample));

        let logged = self.steps.log_action(
            ACTION_CREATE_IMAGE,
            &forensic_steps::create_image_details(&cfg.source, &cfg.image),
            out,
        );
        report.record(Step::LogCreateImage, StepOutcome::from_result(&logged));

        let imaged = self.steps.create_image(&cfg.source, &cfg.image, out);
        report.bytes_imaged = imaged.as_ref().ok().copied();
        report.record(Step::CreateImage, StepOutcome::from_result(&imaged));

        let integrity = self
            .steps
            .verify_integrity(&cfg.source, &cfg.image, cfg.algorithm, out);
        let verified = if integrity.verdict.is_verified() {
            StepOutcome::Completed
        } else {
            StepOutcome::Failed(format!("integrity verdict: {:?}", integrity.verdict))
        };
        report.integrity = Some(integrity);
        report.record(Step::VerifyIntegrity, verified);

        let logged = self.steps.log_action(
            ACTION_RECOVER,
            &forensic_steps::recover_details(&cfg.image, &cfg.recovered),
            out,
        );
        report.record(Step::LogRecover, StepOutcome::from_result(&logged));

        let recovered = self.steps.recover(&cfg.image, &cfg.recovered, out);
        report.record(Step::Recover, StepOutcome::from_result(&recovered));

        let logged = self.steps.log_action(
            ACTION_ANTI_FORENSIC,
            &forensic_steps::anti_forensic_details(&cfg.source),
            out,
        );
        report.record(Step::LogAntiForensic, StepOutcome::from_result(&logged));

        let finding = self.steps.detect_anti_forensic(&cfg.source, out);
        report.anti_forensic = Some(finding);
        report.record(Step::DetectAntiForensic, StepOutcome::Completed);

        report.finish();

        let failed = report.failures().count();
        if failed == 0 {
            tracing::info!("imaging workflow finished");
        } else {
            tracing::warn!(failed, "imaging workflow finished with failed steps");
        }

        report
    }
}
