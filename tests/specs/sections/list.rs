//! Section listing specs

use crate::prelude::*;

#[test]
fn sections_list_in_page_order() {
    let project = Project::minimal();

    project
        .regen()
        .args(&["sections"])
        .passes()
        .stdout_eq("intro        Welcome\nprocess      The Process [demo]\n");
}

#[test]
fn sections_empty_presentation() {
    let project = Project::empty();
    project.file("presentation.toml", r#"title = "Nothing""#);

    project
        .regen()
        .args(&["sections"])
        .passes()
        .stdout_eq("No sections\n");
}

#[test]
fn sections_json_includes_animation_flag() {
    let project = Project::minimal();

    project
        .regen()
        .args(&["--format", "json", "sections"])
        .passes()
        .stdout_has("\"id\": \"process\"")
        .stdout_has("\"has_animation\": true");
}

#[test]
fn bundled_presentation_has_one_demo() {
    let run = regen().args(&["sections"]).passes();
    assert_eq!(run.stdout.matches("[demo]").count(), 1);
}
