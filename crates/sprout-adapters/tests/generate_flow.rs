//! End-to-end pipeline tests: scripted prompt -> collector -> generate.

use std::path::Path;

use sprout_adapters::{
    LocalFilesystem, MemoryFilesystem, ScriptedPrompt, SimpleFormatter,
    prompt::ScriptedAnswer,
};
use sprout_core::application::{AnswerCollector, GenerateService};

fn collect_and_generate(
    prompt: ScriptedPrompt,
    filesystem: MemoryFilesystem,
) -> std::path::PathBuf {
    let collector = AnswerCollector::new(Box::new(prompt));
    let spec = collector.collect().unwrap();

    let service = GenerateService::new(Box::new(SimpleFormatter::new()), Box::new(filesystem));
    service.generate(&spec).unwrap()
}

#[test]
fn unconnected_function_component_lands_in_cwd() {
    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("my button"),
        ScriptedAnswer::Choice(1), // Function
        ScriptedAnswer::Flag(false),
        ScriptedAnswer::Choice(0), // .js
        ScriptedAnswer::text(""),
    ]);
    let filesystem = MemoryFilesystem::new();

    let path = collect_and_generate(prompt, filesystem.clone());
    assert_eq!(path, Path::new("./MyButton.js"));

    let content = filesystem.read_file(&path).unwrap();
    assert!(content.starts_with("// MyButton.js\n"));
    assert!(content.contains("import React from 'react';"));
    assert!(content.contains("const MyButton = (props) => {"));
    assert!(content.contains("export default MyButton;"));
    assert!(!content.contains("react-redux"));
}

#[test]
fn connected_class_component_lands_in_subdirectory() {
    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("user card"),
        ScriptedAnswer::Choice(0), // Class
        ScriptedAnswer::Flag(true),
        ScriptedAnswer::Choice(1), // .jsx
        ScriptedAnswer::text("src/components"),
    ]);
    let filesystem = MemoryFilesystem::new();

    let path = collect_and_generate(prompt, filesystem.clone());
    assert_eq!(path, Path::new("src/components/UserCard.jsx"));

    let content = filesystem.read_file(&path).unwrap();
    assert!(content.contains("import { connect } from 'react-redux';"));
    assert!(content.contains("class UserCard extends React.Component {"));
    assert_eq!(content.matches("const mapStateToProps").count(), 1);
    assert_eq!(content.matches("const mapDispatchToProps").count(), 1);
    assert!(content.contains(
        "export default connect(mapStateToProps, mapDispatchToProps)(UserCard);"
    ));
}

#[test]
fn invalid_path_is_reasked_and_nothing_written_early() {
    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("widget"),
        ScriptedAnswer::Choice(1),
        ScriptedAnswer::Flag(false),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::text("\0bad"),
        ScriptedAnswer::text("src"),
    ]);
    let filesystem = MemoryFilesystem::new();

    let collector = AnswerCollector::new(Box::new(prompt.clone()));
    let spec = collector.collect().unwrap();

    // The rejection named the offending value and the run carried on.
    let rejections = prompt.rejections();
    assert_eq!(rejections.len(), 1);
    assert!(rejections[0].contains("\0bad"));
    assert_eq!(spec.directory(), "src/");

    // Nothing was written during collection.
    assert!(filesystem.list_files().is_empty());
}

#[test]
fn cancellation_mid_flow_writes_nothing() {
    // Script ends after two answers: the third question hits end-of-input.
    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("widget"),
        ScriptedAnswer::Choice(0),
    ]);
    let filesystem = MemoryFilesystem::new();

    let collector = AnswerCollector::new(Box::new(prompt));
    let err = collector.collect().unwrap_err();

    assert!(err.is_cancelled());
    assert!(filesystem.list_files().is_empty());
}

#[test]
fn local_filesystem_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let target = format!("{}/", dir.path().display());

    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("nav bar"),
        ScriptedAnswer::Choice(1),
        ScriptedAnswer::Flag(false),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::text(target.clone()),
    ]);

    let collector = AnswerCollector::new(Box::new(prompt));
    let spec = collector.collect().unwrap();

    let service = GenerateService::new(
        Box::new(SimpleFormatter::new()),
        Box::new(LocalFilesystem::new()),
    );
    let path = service.generate(&spec).unwrap();

    assert_eq!(path, Path::new(&format!("{target}NavBar.js")));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("const NavBar = (props) => {"));
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = format!("{}/does-not-exist/", dir.path().display());

    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("widget"),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::Flag(false),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::text(target),
    ]);

    let collector = AnswerCollector::new(Box::new(prompt));
    let spec = collector.collect().unwrap();

    let service = GenerateService::new(
        Box::new(SimpleFormatter::new()),
        Box::new(LocalFilesystem::new()),
    );

    // No directory creation happens on the way to the write.
    assert!(service.generate(&spec).is_err());
}

#[test]
fn existing_file_is_overwritten_silently() {
    let dir = tempfile::tempdir().unwrap();
    let target = format!("{}/", dir.path().display());
    let existing = dir.path().join("Widget.js");
    std::fs::write(&existing, "stale content").unwrap();

    let prompt = ScriptedPrompt::new([
        ScriptedAnswer::text("widget"),
        ScriptedAnswer::Choice(1),
        ScriptedAnswer::Flag(false),
        ScriptedAnswer::Choice(0),
        ScriptedAnswer::text(target),
    ]);

    let collector = AnswerCollector::new(Box::new(prompt));
    let spec = collector.collect().unwrap();

    let service = GenerateService::new(
        Box::new(SimpleFormatter::new()),
        Box::new(LocalFilesystem::new()),
    );
    service.generate(&spec).unwrap();

    let content = std::fs::read_to_string(&existing).unwrap();
    assert!(!content.contains("stale content"));
    assert!(content.contains("export default Widget;"));
}
