//! Workflow report DTO

use crate::domain::entities::{ExistenceFinding, IntegrityReport};
use crate::error::{IoContext, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Steps of the imaging workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    WriteSample,
    LogCreateImage,
    CreateImage,
    VerifyIntegrity,
    LogRecover,
    Recover,
    LogAntiForensic,
    DetectAntiForensic,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::WriteSample => "write sample",
            Step::LogCreateImage => "log image creation",
            Step::CreateImage => "create image",
            Step::VerifyIntegrity => "verify integrity",
            Step::LogRecover => "log recovery",
            Step::Recover => "recover",
            Step::LogAntiForensic => "log anti-forensic check",
            Step::DetectAntiForensic => "detect anti-forensic measures",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum StepOutcome {
    Completed,
    Failed(String),
}

impl StepOutcome {
    pub fn from_result<T, E: fmt::Display>(result: &std::result::Result<T, E>) -> Self {
        match result {
            Ok(_) => StepOutcome::Completed,
            Err(e) => StepOutcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Everything observed during one run of the workflow
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    pub started_at: String,
    pub finished_at: Option<String>,
    pub steps: Vec<StepRecord>,
    pub bytes_imaged: Option<u64>,
    pub integrity: Option<IntegrityReport>,
    pub anti_forensic: Option<ExistenceFinding>,
}

impl WorkflowReport {
    pub fn start() -> Self {
        Self {
            started_at: chrono::Local::now().to_rfc3339(),
            finished_at: None,
            steps: Vec::new(),
            bytes_imaged: None,
            integrity: None,
            anti_forensic: None,
        }
    }

    pub fn record(&mut self, step: Step, outcome: StepOutcome) {
        self.steps.push(StepRecord { step, outcome });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(chrono::Local::now().to_rfc3339());
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|r| r.step == step)
            .map(|r| &r.outcome)
    }

    /// Steps that failed, with their error text
    pub fn failures(&self) -> impl Iterator<Item = (Step, &str)> {
        self.steps.iter().filter_map(|r| match &r.outcome {
            StepOutcome::Failed(e) => Some((r.step, e.as_str())),
            StepOutcome::Completed => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).with_path("writing report", path)
    }
}
