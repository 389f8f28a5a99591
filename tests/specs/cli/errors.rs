//! CLI error reporting specs

use crate::prelude::*;

#[test]
fn missing_presentation_file_is_reported() {
    let project = Project::empty();

    project
        .regen()
        .args(&["sections"])
        .fails()
        .stderr_has("error: cannot load presentation")
        .stderr_has("presentation.toml")
        .stderr_has("suggestions:");
}

#[test]
fn duplicate_section_ids_are_reported() {
    let project = Project::empty();
    project.file(
        "presentation.toml",
        r#"
        title = "Dup"
        [[section]]
        id = "a"
        title = "One"
        [[section]]
        id = "a"
        title = "Two"
        "#,
    );

    project
        .regen()
        .args(&["sections"])
        .fails()
        .stderr_has("duplicate section id: a");
}

#[test]
fn unknown_subcommand_fails() {
    regen().args(&["rewind"]).fails();
}
