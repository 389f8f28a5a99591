//! Interactive demo specs

use crate::prelude::*;

#[test]
fn demo_starts_at_intro() {
    Project::minimal()
        .regen()
        .args(&["demo"])
        .stdin("quit\n")
        .passes()
        .stdout_has("commands: play, pause")
        .stdout_has("[-----] 0/5 Introduction");
}

#[test]
fn demo_manual_steps() {
    Project::minimal()
        .regen()
        .args(&["demo"])
        .stdin("next\nnext\nnext\nback\nquit\n")
        .passes()
        .stdout_has("2/5 Activation");
}

#[test]
fn demo_step_back_at_intro_changes_nothing() {
    let run = Project::minimal()
        .regen()
        .args(&["demo"])
        .stdin("back\nback\nquit\n")
        .passes();

    assert_eq!(run.stdout.matches("0/5 Introduction").count(), 1);
}

#[test]
fn demo_reset_returns_to_intro() {
    let run = Project::minimal()
        .regen()
        .args(&["demo"])
        .stdin("next\nnext\nreset\nquit\n")
        .passes();

    let last = run.stdout.lines().last().unwrap_or_default();
    assert!(last.contains("0/5 Introduction"), "last line: {}", last);
}

#[test]
fn demo_end_of_input_quits() {
    Project::minimal()
        .regen()
        .args(&["demo"])
        .stdin("next\n")
        .passes()
        .stdout_has("1/5 Ingestion");
}

#[test]
fn demo_unknown_command_is_reported() {
    Project::minimal()
        .regen()
        .args(&["demo"])
        .stdin("sideways\nquit\n")
        .passes()
        .stderr_has("unknown command: sideways");
}
