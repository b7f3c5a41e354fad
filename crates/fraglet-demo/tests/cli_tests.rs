//! End-to-end tests for the `fraglet` binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

/// A command rooted at the crate directory so the default `templates` dir
/// resolves.
fn fraglet() -> Command {
    let mut cmd = Command::cargo_bin("fraglet").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_shows_help_and_exits_2() {
    fraglet()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    fraglet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn help_flag_succeeds_on_stdout() {
    fraglet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn render_block_writes_the_fragment_to_stdout() {
    fraglet()
        .args(["render", "simple_page.html.jinja2", "--block", "content"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<p>Hello from fraglet-demo! This is the content block.</p>",
        ))
        .stdout(predicate::str::contains("<html").not());
}

#[test]
fn full_render_writes_the_whole_document() {
    fraglet()
        .args(["render", "simple_page.html.jinja2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("This is the content block"));
}

#[test]
fn unknown_block_exits_with_not_found() {
    fraglet()
        .args(["render", "simple_page.html.jinja2", "--block", "sidebar"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "Block 'sidebar' not found on template 'simple_page.html.jinja2'",
        ));
}

#[test]
fn unknown_template_exits_with_not_found() {
    fraglet()
        .args(["render", "missing.html.jinja2", "--block", "content"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn unregistered_extension_exits_with_config_error() {
    fraglet()
        .args(["render", "page.html.tera"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No renderer registered"));
}

#[test]
fn malformed_var_exits_with_user_error() {
    fraglet()
        .args(["render", "simple_page.html.jinja2", "--var", "oops"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn missing_template_dir_exits_with_config_error() {
    fraglet()
        .args([
            "render",
            "simple_page.html.jinja2",
            "--templates",
            "/nonexistent/templates",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}
