//! Auto-play specs

use crate::prelude::*;

#[test]
fn play_runs_to_completion() {
    let project = Project::minimal();

    let run = project
        .regen()
        .args(&["play", "--interval", "100ms"])
        .passes()
        .stdout_has("The Process")
        .stdout_has("0/5 Introduction")
        .stdout_has("5/5 Complete");

    let last = run.stdout.lines().last().unwrap_or_default();
    assert!(last.starts_with("[#####] 5/5 Complete"), "last line: {}", last);
    assert!(last.contains("paused"));
}

#[test]
fn play_uses_the_presentation_interval() {
    // 50ms from the presentation file keeps this fast
    Project::minimal()
        .regen()
        .args(&["play"])
        .passes()
        .stdout_has("5/5 Complete");
}

#[test]
fn play_rejects_zero_interval() {
    Project::minimal()
        .regen()
        .args(&["play", "--interval", "0ms"])
        .fails()
        .stderr_has("error: cannot start the demo")
        .stderr_has("tick interval must be greater than zero");
}

#[test]
fn play_rejects_interval_beyond_a_day() {
    Project::minimal()
        .regen()
        .args(&["play", "--interval", "18446744073709551615s"])
        .fails()
        .stderr_has("error: cannot start the demo")
        .stderr_has("exceeds the maximum");
}

#[test]
fn play_rejects_unparseable_interval() {
    regen().args(&["play", "--interval", "soon"]).fails();
}

#[test]
fn play_without_demo_section_fails() {
    let project = Project::empty();
    project.file(
        "presentation.toml",
        r#"
        title = "Static"
        [[section]]
        id = "only"
        title = "Only"
        "#,
    );

    project
        .regen()
        .args(&["play"])
        .fails()
        .stderr_has("presentation has no demo section");
}
