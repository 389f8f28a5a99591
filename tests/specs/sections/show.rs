//! Section show specs

use crate::prelude::*;

#[test]
fn show_renders_all_parts() {
    let project = Project::minimal();

    project
        .regen()
        .args(&["show", "intro"])
        .passes()
        .stdout_eq(
            "Welcome\n  Start here\n\nFirst paragraph.\n\nSecond paragraph.\n\n[image: A cell]\n",
        );
}

#[test]
fn show_demo_section_points_at_the_demo() {
    let project = Project::minimal();

    project
        .regen()
        .args(&["show", "process"])
        .passes()
        .stdout_has("The Process")
        .stdout_has("[demo: run `regen play` or `regen demo`]")
        .stdout_lacks("[image:");
}

#[test]
fn show_not_found() {
    let project = Project::minimal();

    project
        .regen()
        .args(&["show", "nonexistent-id"])
        .fails()
        .stderr_has("error: section 'nonexistent-id' not found");
}
