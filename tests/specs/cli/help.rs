//! CLI help specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    regen()
        .args(&["--help"])
        .passes()
        .stdout_has("sections")
        .stdout_has("show")
        .stdout_has("play")
        .stdout_has("demo")
        .stdout_has("completions");
}

#[test]
fn play_help_documents_interval() {
    regen()
        .args(&["play", "--help"])
        .passes()
        .stdout_has("--interval");
}

#[test]
fn completions_generate_for_bash() {
    regen()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("regen");
}
