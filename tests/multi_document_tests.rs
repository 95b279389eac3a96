mod common;

use common::fixtures::{BracketEvent, RecordingRenderer, ScriptedUnit, UnitFailed, boxed, text_document};
use common::{GeneratedPdf, TestResult, init_logging};
use quire::layout::{ContainerGroup, TextBlock};
use quire::types::{DocumentMetadata, Margins, PageBounds, PageSize, Zone};
use quire::{DocumentUnit, GenerationOptions, MultiDocument, PipelineError};
use std::sync::{Arc, Mutex};

fn three_scripted(seen: &Arc<Mutex<Vec<(usize, bool)>>>) -> Vec<Box<dyn DocumentUnit>> {
    vec![
        Box::new(ScriptedUnit::new(0, 1, seen)),
        Box::new(ScriptedUnit::new(1, 2, seen)),
        Box::new(ScriptedUnit::new(2, 1, seen)),
    ]
}

#[test]
fn test_three_units_report_one_unit_each() -> TestResult {
    init_logging();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let multi = MultiDocument::new(three_scripted(&seen))?;
    let progress = multi.progress().clone();
    assert_eq!(progress.total_unit_count(), 3);
    assert_eq!(progress.completed_unit_count(), 0);

    let mut renderer = RecordingRenderer::default();
    multi.generate_with(&mut renderer)?;

    assert_eq!(progress.completed_unit_count(), 3);
    assert!(progress.is_finished());
    assert_eq!(renderer.begins(), 1);
    assert_eq!(renderer.ends(), 1);
    assert_eq!(renderer.count(|e| matches!(e, BracketEvent::Page(..))), 4);
    assert!(matches!(renderer.events.first(), Some(BracketEvent::Begin(..))));
    assert_eq!(renderer.events.last(), Some(&BracketEvent::End));
    Ok(())
}

#[test]
fn test_units_run_in_order() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    MultiDocument::new(three_scripted(&seen))?.generate_with(&mut RecordingRenderer::default())?;
    let order: Vec<usize> = seen.lock().map_err(|e| e.to_string())?.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn test_failing_unit_still_closes_output() -> TestResult {
    init_logging();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let units: Vec<Box<dyn DocumentUnit>> = vec![
        Box::new(ScriptedUnit::new(0, 1, &seen)),
        Box::new(ScriptedUnit::new(1, 1, &seen).failing()),
        Box::new(ScriptedUnit::new(2, 1, &seen)),
    ];
    let multi = MultiDocument::new(units)?;
    let progress = multi.progress().clone();

    let mut renderer = RecordingRenderer::default();
    let err = multi.generate_with(&mut renderer).unwrap_err();

    let source = err.generation_source().ok_or("expected a generation failure")?;
    let failed = source.downcast_ref::<UnitFailed>().ok_or("error was not passed through")?;
    assert_eq!(failed.0, 1);
    assert_eq!(err.to_string(), "unit 1 could not be generated");

    assert_eq!(renderer.begins(), 1);
    assert_eq!(renderer.ends(), 1);
    assert_eq!(renderer.events.last(), Some(&BracketEvent::End));
    assert!(!quire::render::DocumentRenderer::is_open(&renderer));

    // The third unit never ran.
    let ran: Vec<usize> = seen.lock().map_err(|e| e.to_string())?.iter().map(|(id, _)| *id).collect();
    assert_eq!(ran, vec![0, 1]);
    assert_eq!(progress.completed_unit_count(), 1);
    assert!(!progress.is_finished());
    Ok(())
}

#[test]
fn test_unit_that_reaches_its_total_then_fails_is_not_counted() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let failing = ScriptedUnit::new(1, 2, &seen).failing();
    let failing_progress = failing.progress.clone();
    let units: Vec<Box<dyn DocumentUnit>> = vec![Box::new(ScriptedUnit::new(0, 1, &seen)), Box::new(failing)];
    let multi = MultiDocument::new(units)?;
    let progress = multi.progress().clone();

    assert!(multi.generate_with(&mut RecordingRenderer::default()).is_err());
    assert!(failing_progress.is_finished());
    assert_eq!(failing_progress.completed_unit_count(), 2);
    assert_eq!(progress.completed_unit_count(), 1);
    Ok(())
}

#[test]
fn test_close_failure_is_reported_after_success() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut renderer = RecordingRenderer::failing_on_close();
    let err = MultiDocument::new(three_scripted(&seen))?.generate_with(&mut renderer).unwrap_err();
    assert!(matches!(err, PipelineError::Render(_)));
    Ok(())
}

#[test]
fn test_unit_failure_wins_over_close_failure() -> TestResult {
    init_logging();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let units: Vec<Box<dyn DocumentUnit>> = vec![Box::new(ScriptedUnit::new(0, 1, &seen).failing())];
    let mut renderer = RecordingRenderer::failing_on_close();
    let err = MultiDocument::new(units)?.generate_with(&mut renderer).unwrap_err();
    assert!(matches!(err, PipelineError::Generation(_)));
    assert_eq!(renderer.ends(), 1);
    Ok(())
}

#[test]
fn test_empty_unit_list_is_rejected_before_output_opens() {
    let renderer = RecordingRenderer::default();
    let result = MultiDocument::new(Vec::new());
    assert!(matches!(result, Err(PipelineError::EmptyDocumentSet)));
    assert!(renderer.events.is_empty());
}

#[test]
fn test_debug_overlay_reaches_every_unit() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    MultiDocument::new(three_scripted(&seen))?
        .with_debug_overlay(true)
        .generate_with(&mut RecordingRenderer::default())?;
    let flags = seen.lock().map_err(|e| e.to_string())?.clone();
    assert_eq!(flags, vec![(0, true), (1, true), (2, true)]);
    Ok(())
}

#[test]
fn test_output_bounds_come_from_first_unit() -> TestResult {
    let letter = PageBounds::from_size(PageSize::Letter, Margins::all(36.0));
    let units = vec![
        boxed(text_document(&["cover"]).with_bounds(letter)),
        boxed(text_document(&["body"])),
    ];
    let multi = MultiDocument::new(units)?.with_metadata(DocumentMetadata::titled("Bundle"));
    assert_eq!(multi.page_bounds(), letter);

    let mut renderer = RecordingRenderer::default();
    multi.generate_with(&mut renderer)?;
    assert_eq!(renderer.events[0], BracketEvent::Begin(letter, Some("Bundle".into())));
    // Each unit still lays out with its own bounds.
    assert!(matches!(renderer.events[2], BracketEvent::Page(bounds, _) if bounds == PageBounds::default()));
    Ok(())
}

#[test]
fn test_cancel_is_only_a_signal() -> TestResult {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let multi = MultiDocument::new(three_scripted(&seen))?;
    let progress = multi.progress().clone();
    progress.cancel();

    multi.generate_with(&mut RecordingRenderer::default())?;
    assert!(progress.is_cancelled());
    assert_eq!(progress.completed_unit_count(), 3);
    Ok(())
}

#[test]
fn test_generate_to_bytes_produces_one_pdf() -> TestResult {
    init_logging();
    let units = vec![
        boxed(text_document(&["Alpha one", "Alpha two"])),
        boxed(text_document(&["Beta"])),
        boxed(text_document(&["Gamma"])),
    ];
    let options = GenerationOptions {
        metadata: DocumentMetadata::titled("Combined").with_author("Reports"),
        ..Default::default()
    };
    let bytes = MultiDocument::new(units)?.with_options(options).generate_to_bytes()?;

    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert!(pdf.bytes.starts_with(b"%PDF-1.7"));
    assert_eq!(pdf.page_count(), 4);
    assert_eq!(pdf.page_strings(1)?, vec!["Alpha one"]);
    assert_eq!(pdf.page_strings(3)?, vec!["Beta"]);
    assert_eq!(pdf.info_entry(b"Title").as_deref(), Some("Combined"));
    assert_eq!(pdf.info_entry(b"Author").as_deref(), Some("Reports"));
    Ok(())
}

#[test]
fn test_mixed_page_sizes_keep_their_media_box() -> TestResult {
    let letter = PageBounds::from_size(PageSize::Letter, Margins::all(36.0));
    let units = vec![boxed(text_document(&["a4 page"])), boxed(text_document(&["letter page"]).with_bounds(letter))];
    let pdf = GeneratedPdf::from_bytes(MultiDocument::new(units)?.generate_to_bytes()?)?;
    let a4_width = PageBounds::default().width;
    assert!((pdf.page_width(1).ok_or("no media box")? - a4_width).abs() < 0.01);
    assert!((pdf.page_width(2).ok_or("no media box")? - 612.0).abs() < 0.01);
    Ok(())
}

#[test]
fn test_pdf_version_from_options() -> TestResult {
    let options = GenerationOptions::from_json(r#"{ "pdfVersion": "1.4" }"#)?;
    let bytes = MultiDocument::new(vec![boxed(text_document(&["v"]))])?
        .with_options(options)
        .generate_to_bytes()?;
    assert!(bytes.starts_with(b"%PDF-1.4"));
    Ok(())
}

#[test]
fn test_debug_overlay_draws_frames_in_pdf() -> TestResult {
    let bytes = MultiDocument::new(vec![boxed(text_document(&["framed"]))])?
        .with_debug_overlay(true)
        .generate_to_bytes()?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    let ops = pdf.page_operators(1)?;
    assert!(ops.iter().any(|op| op == "re"));
    assert!(ops.iter().any(|op| op == "S"));
    Ok(())
}

#[test]
fn test_generate_to_file_resolves_path() -> TestResult {
    init_logging();
    let dir = tempfile::tempdir()?;
    let requested = dir.path().join("nested").join("report");

    let mut doc = text_document(&["Body"]);
    doc.group(
        ContainerGroup::atomic()
            .with(Zone::HEADER, TextBlock::plain("Header"))
            .with(Zone::CONTENT, TextBlock::plain("Intro")),
    );
    let written = MultiDocument::new(vec![boxed(doc)])?.generate_to_file(&requested)?;

    assert_eq!(written, dir.path().join("nested").join("report.pdf"));
    let pdf = GeneratedPdf::from_file(&written)?;
    assert_eq!(pdf.page_count(), 1);
    let strings = pdf.page_strings(1)?;
    assert!(strings.contains(&"Header".to_string()));
    assert!(strings.contains(&"Intro".to_string()));
    Ok(())
}

#[test]
fn test_failed_file_is_left_closed_and_valid() -> TestResult {
    init_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("partial.pdf");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let units: Vec<Box<dyn DocumentUnit>> = vec![
        boxed(text_document(&["first", "second"])),
        Box::new(ScriptedUnit::new(1, 0, &seen).failing()),
        boxed(text_document(&["never"])),
    ];

    let err = MultiDocument::new(units)?.generate_to_file(&path).unwrap_err();
    assert!(matches!(err, PipelineError::Generation(_)));

    let pdf = GeneratedPdf::from_file(&path)?;
    assert_eq!(pdf.page_count(), 2);
    Ok(())
}
