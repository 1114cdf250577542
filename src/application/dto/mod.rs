//! Data Transfer Objects

mod workflow_config;
mod workflow_report;

pub use workflow_config::{
    DEFAULT_IMAGE, DEFAULT_RECOVERED, DEFAULT_SOURCE, SAMPLE_TEXT, WorkflowConfig,
};
pub use workflow_report::{Step, StepOutcome, StepRecord, WorkflowReport};
