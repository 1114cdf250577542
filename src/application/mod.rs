//! Application layer
//!
//! Step-by-step forensic operations and the workflow that sequences them.

pub mod dto;
pub mod forensic_steps;
mod imaging_workflow;

pub use forensic_steps::{
    ACTION_ANTI_FORENSIC, ACTION_CREATE_IMAGE, ACTION_RECOVER, ForensicSteps,
};
pub use imaging_workflow::ImagingWorkflow;
