//! End-to-end workflow tests

use forensic_imaging::application::dto::{SAMPLE_TEXT, Step, StepOutcome};
use forensic_imaging::application::{
    ACTION_ANTI_FORENSIC, ACTION_CREATE_IMAGE, ACTION_RECOVER, ForensicSteps,
};
use forensic_imaging::domain::entities::{ExistenceFinding, HashAlgorithm, IntegrityVerdict};
use forensic_imaging::infrastructure::hashing::StreamingHasher;
use forensic_imaging::infrastructure::imaging::StreamCopier;
use forensic_imaging::infrastructure::persistence::{FileCustodyLog, LogAudit};
use forensic_imaging::{ImagingWorkflow, WorkflowConfig};
use rstest::*;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn case_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn run(config: WorkflowConfig) -> (forensic_imaging::WorkflowReport, String) {
    let mut out = Vec::new();
    let report = ImagingWorkflow::from_config(config).run(&mut out);
    (report, String::from_utf8(out).unwrap())
}

#[rstest]
fn test_default_workflow_end_to_end(case_dir: TempDir) {
    let config = WorkflowConfig::new().in_dir(case_dir.path());
    let (report, stdout) = run(config.clone());

    let source = fs::read(&config.source).unwrap();
    assert_eq!(source, SAMPLE_TEXT.as_bytes());
    assert_eq!(fs::read(&config.image).unwrap(), source);
    assert_eq!(fs::read(&config.recovered).unwrap(), source);

    assert!(report.is_clean(), "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert_eq!(report.bytes_imaged, Some(SAMPLE_TEXT.len() as u64));
    let integrity = report.integrity.as_ref().unwrap();
    assert_eq!(integrity.verdict, IntegrityVerdict::Match);
    assert_eq!(report.anti_forensic, Some(ExistenceFinding::Present));

    let hash = integrity.source.as_ref().unwrap().as_hex().to_string();
    assert!(stdout.contains(&format!("Original File Hash: {}", hash)));
    assert!(stdout.contains(&format!("Forensic Image Hash: {}", hash)));
    assert!(stdout.contains("Integrity verified. Hashes match."));
    assert!(stdout.contains("Simulated recovery:"));
    assert!(stdout.contains("File exists. No overwriting detected."));

    let audit = LogAudit::read(&config.log_file).unwrap();
    assert!(audit.is_clean());
    let actions: Vec<&str> = audit.entries.iter().map(|e| e.action()).collect();
    assert_eq!(
        actions,
        vec![ACTION_CREATE_IMAGE, ACTION_RECOVER, ACTION_ANTI_FORENSIC]
    );
    assert_eq!(
        audit.entries[0].details(),
        format!(
            "Source: {}, Image: {}",
            config.source.display(),
            config.image.display()
        )
    );
}

#[rstest]
fn test_rerun_appends_three_more_lines(case_dir: TempDir) {
    let config = WorkflowConfig::new().in_dir(case_dir.path());

    run(config.clone());
    run(config.clone());

    let audit = LogAudit::read(&config.log_file).unwrap();
    assert_eq!(audit.entries.len(), 6);
    assert_eq!(audit.entries[3].action(), ACTION_CREATE_IMAGE);
    assert_eq!(audit.entries[5].action(), ACTION_ANTI_FORENSIC);
}

#[rstest]
fn test_status_lines_follow_step_order(case_dir: TempDir) {
    let (_, stdout) = run(WorkflowConfig::new().in_dir(case_dir.path()));

    let order = [
        "Logged action: Create Forensic Image",
        "Forensic image created:",
        "Original File Hash:",
        "Integrity verified.",
        "Logged action: Recover Deleted File",
        "Simulated recovery:",
        "Logged action: Anti-Forensic Detection",
        "File exists.",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| stdout.find(needle).unwrap_or_else(|| panic!("missing {:?}", needle)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", stdout);
}

#[rstest]
fn test_custom_algorithm_and_sample(case_dir: TempDir) {
    let config = WorkflowConfig::new()
        .in_dir(case_dir.path())
        .with_algorithm(HashAlgorithm::Sha384)
        .with_sample_text("seized laptop, serial 0042");
    let (report, _) = run(config.clone());

    let integrity = report.integrity.unwrap();
    assert_eq!(integrity.verdict, IntegrityVerdict::Match);
    assert_eq!(integrity.image.unwrap().as_hex().len(), 96);
    assert_eq!(
        fs::read_to_string(&config.recovered).unwrap(),
        "seized laptop, serial 0042"
    );
}

#[rstest]
fn test_unwritable_source_keeps_running(case_dir: TempDir) {
    let config = WorkflowConfig::new()
        .in_dir(case_dir.path())
        .with_source(case_dir.path().join("missing_dir").join("source.txt"));
    let (report, stdout) = run(config.clone());

    assert!(matches!(
        report.outcome(Step::WriteSample),
        Some(StepOutcome::Failed(_))
    ));
    assert!(matches!(
        report.outcome(Step::CreateImage),
        Some(StepOutcome::Failed(_))
    ));
    assert!(matches!(
        report.outcome(Step::Recover),
        Some(StepOutcome::Failed(_))
    ));
    assert_eq!(report.integrity.unwrap().verdict, IntegrityVerdict::Unknown);
    assert_eq!(report.anti_forensic, Some(ExistenceFinding::Missing));
    assert!(report.finished_at.is_some());

    assert!(stdout.contains("Error creating forensic image:"));
    assert!(stdout.contains("Original File Hash: None"));
    assert!(stdout.contains("Integrity could not be verified: digest unavailable."));
    assert!(!stdout.contains("Hashes do not match."));
    assert!(stdout.contains("Possible overwriting or secure deletion detected."));

    // custody entries are still written for every step
    let audit = LogAudit::read(&config.log_file).unwrap();
    assert_eq!(audit.entries.len(), 3);
}

#[rstest]
fn test_unwritable_log_does_not_stop_imaging(case_dir: TempDir) {
    let config = WorkflowConfig::new()
        .in_dir(case_dir.path())
        .with_log_file(case_dir.path().join("no_such_dir").join("custody.log"));
    let (report, stdout) = run(config.clone());

    let failed: Vec<Step> = report.failures().map(|(step, _)| step).collect();
    assert_eq!(
        failed,
        vec![Step::LogCreateImage, Step::LogRecover, Step::LogAntiForensic]
    );
    assert_eq!(fs::read(&config.image).unwrap(), SAMPLE_TEXT.as_bytes());
    assert!(stdout.contains("Error logging action:"));
}

#[rstest]
fn test_report_serializes_to_json(case_dir: TempDir) {
    let config = WorkflowConfig::new().in_dir(case_dir.path());
    let (report, _) = run(config);
    let report_path = case_dir.path().join("report.json");

    report.write_json(&report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["integrity"]["verdict"], "match");
    assert_eq!(json["integrity"]["source"]["algorithm"], "sha256");
    assert_eq!(json["anti_forensic"], "present");
    assert_eq!(json["steps"].as_array().unwrap().len(), 8);
}

#[rstest]
fn test_detect_after_removal_reports_missing(case_dir: TempDir) {
    let steps = ForensicSteps::new(
        StreamCopier::new(),
        StreamingHasher::new(),
        FileCustodyLog::new(case_dir.path().join("custody.log")),
    );
    let evidence = case_dir.path().join("evidence.txt");
    fs::write(&evidence, b"wiped soon").unwrap();
    let mut out = Vec::new();

    assert_eq!(
        steps.detect_anti_forensic(&evidence, &mut out),
        ExistenceFinding::Present
    );
    fs::remove_file(&evidence).unwrap();
    assert_eq!(
        steps.detect_anti_forensic(&evidence, &mut out),
        ExistenceFinding::Missing
    );
}

#[rstest]
fn test_verify_detects_tampered_image(case_dir: TempDir) {
    let steps = ForensicSteps::new(
        StreamCopier::new(),
        StreamingHasher::new(),
        FileCustodyLog::new(case_dir.path().join("custody.log")),
    );
    let source = case_dir.path().join("source.txt");
    let image = case_dir.path().join("image.img");
    fs::write(&source, SAMPLE_TEXT).unwrap();
    let mut out = Vec::new();

    steps.create_image(&source, &image, &mut out).unwrap();
    fs::write(&image, b"tampered").unwrap();
    let report = steps.verify_integrity(&source, &image, HashAlgorithm::Sha256, &mut out);

    assert_eq!(report.verdict, IntegrityVerdict::Mismatch);
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Integrity verification failed. Hashes do not match."));
    assert!(!stdout.contains("digest unavailable"));
}

#[rstest]
fn test_image_onto_source_fails_and_keeps_evidence(case_dir: TempDir) {
    let config = WorkflowConfig::new().in_dir(case_dir.path());
    let config = config.clone().with_image(config.source.clone());
    let (report, stdout) = run(config.clone());

    assert!(matches!(
        report.outcome(Step::CreateImage),
        Some(StepOutcome::Failed(_))
    ));
    assert_eq!(report.bytes_imaged, None);
    assert_eq!(fs::read(&config.source).unwrap(), SAMPLE_TEXT.as_bytes());
    assert!(stdout.contains("Error creating forensic image:"));
}

#[cfg(unix)]
#[rstest]
fn test_control_characters_in_paths_keep_log_line_structure(case_dir: TempDir) {
    let config = WorkflowConfig::new()
        .in_dir(case_dir.path())
        .with_source(case_dir.path().join("ev\nidence.txt"));
    let (report, _) = run(config.clone());
    assert!(report.is_clean(), "failures: {:?}", report.failures().collect::<Vec<_>>());

    let content = fs::read_to_string(&config.log_file).unwrap();
    assert_eq!(content.lines().count(), 3);

    let audit = LogAudit::read(&config.log_file).unwrap();
    assert!(audit.is_clean());
    assert_eq!(audit.entries.len(), 3);
    assert_eq!(
        audit.entries[2].details(),
        format!("Check file existence for: {}", config.source.display())
    );
}
