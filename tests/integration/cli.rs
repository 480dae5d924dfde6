use crate::helpers::prelude::*;

#[test]
fn it_scaffolds_without_prompting_when_everything_is_given() {
    let template = tempdir().with_default_template().init_git().build();
    let dir = tempdir().build();
    let url = template.path().display().to_string();
    let config = write_config(dir.path(), &[("node", url.as_str())]);

    binary()
        .arg_config(&config)
        .arg_template("node")
        .arg_name("acme")
        .arg_destination("./out")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert_eq!(dir.read("out/README.md"), "Hello acme");
    assert_eq!(dir.read("out/node_modules/stale.md"), "[[ .ProjectName ]]");
}

#[test]
fn it_finds_butler_toml_in_a_parent_directory() {
    let template = tempdir().with_default_template().init_git().build();
    let dir = tempdir().file("work/.keep", "").build();
    let url = template.path().display().to_string();
    write_config(dir.path(), &[("node", url.as_str())]);

    binary()
        .arg_template("node")
        .arg_name("acme")
        .arg("--silent")
        .current_dir(dir.join("work"))
        .assert()
        .success();

    assert_eq!(dir.read("work/src/README.md"), "Hello acme");
}

#[test]
fn it_warns_about_an_invalid_template_and_exits_successfully() {
    let template = tempdir().file("README.md", "[[ .Bad").init_git().build();
    let dir = tempdir().build();
    let url = template.path().display().to_string();
    let config = write_config(dir.path(), &[("node", url.as_str())]);

    binary()
        .arg_config(&config)
        .arg_template("node")
        .arg_name("acme")
        .arg_destination("out")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("butler: File ")
                .and(predicates::str::contains("README.md recovered due to invalid template! Error: "))
                .from_utf8(),
        );

    assert_eq!(dir.read("out/README.md"), "[[ .Bad");
}

#[test]
fn it_reports_a_multi_line_template_error_on_a_single_line() {
    let template = tempdir().file("README.md", "[[ .Missing ]]").init_git().build();
    let dir = tempdir().build();
    let url = template.path().display().to_string();
    let config = write_config(dir.path(), &[("node", url.as_str())]);

    let output = binary()
        .arg_config(&config)
        .arg_template("node")
        .arg_name("acme")
        .arg_destination("out")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    let position = lines
        .iter()
        .position(|l| l.starts_with("butler: File "))
        .unwrap_or_else(|| panic!("no recovery line in {stdout:?}"));
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("butler: File ")).count(),
        1
    );
    assert!(lines[position].contains("README.md recovered due to invalid template! Error: "));
    assert!(lines[position].contains("Missing"));
    assert!(!stdout.contains("with:\n"), "{stdout:?}");
    assert!(
        lines
            .get(position + 1)
            .map_or(true, |next| !next.starts_with(' ') && !next.is_empty()),
        "{stdout:?}"
    );
    assert_eq!(dir.read("out/README.md"), "[[ .Missing ]]");
}

#[test]
fn it_prints_the_recovery_line_whatever_rust_log_says() {
    let template = tempdir().file("README.md", "[[ .Bad").init_git().build();
    let dir = tempdir().build();
    let url = template.path().display().to_string();
    let config = write_config(dir.path(), &[("node", url.as_str())]);

    for rust_log in ["error", "off"] {
        binary()
            .arg_config(&config)
            .arg_template("node")
            .arg_name("acme")
            .arg_destination(format!("out-{rust_log}"))
            .env("RUST_LOG", rust_log)
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(
                predicates::str::contains("README.md recovered due to invalid template! Error: ")
                    .from_utf8(),
            );
    }
}

#[test]
fn it_fails_for_an_unknown_template() {
    let dir = tempdir().build();
    let config = write_config(dir.path(), &[("node", "https://example.com/node-tpl.git")]);

    binary()
        .arg_config(&config)
        .arg_template("rails")
        .arg_name("acme")
        .arg_destination("out")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("⛔ butler: template rails could not be found").from_utf8())
        .stderr(predicates::str::contains("template rails could not be found").from_utf8());

    assert!(!dir.exists("out"));
}

#[test]
fn it_fails_when_a_required_value_is_missing_in_silent_mode() {
    let dir = tempdir().build();
    let config = write_config(dir.path(), &[("node", "https://example.com/node-tpl.git")]);

    binary()
        .arg_config(&config)
        .arg_template("node")
        .arg("--silent")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("a value for `Name` is required").from_utf8());

    assert!(!dir.exists("src"));
}

#[test]
fn it_fails_for_an_empty_name() {
    let dir = tempdir().build();
    let config = write_config(dir.path(), &[("node", "https://example.com/node-tpl.git")]);

    binary()
        .arg_config(&config)
        .arg_template("node")
        .arg_name("")
        .arg_destination("out")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("a value for `Name` is required").from_utf8());
}

#[test]
fn it_rejects_duplicate_template_names() {
    let dir = tempdir().build();
    let config = write_config(
        dir.path(),
        &[
            ("node", "https://example.com/a.git"),
            ("node", "https://example.com/b.git"),
        ],
    );

    binary()
        .arg_config(&config)
        .arg_template("node")
        .arg_name("acme")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("configured more than once").from_utf8());
}

#[test]
fn it_fails_to_clone_into_a_non_empty_destination() {
    let template = tempdir().with_default_template().init_git().build();
    let dir = tempdir().file("out/keep.txt", "mine").build();
    let url = template.path().display().to_string();
    let config = write_config(dir.path(), &[("node", url.as_str())]);

    binary()
        .arg_config(&config)
        .arg_template("node")
        .arg_name("acme")
        .arg_destination("out")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists and is not empty").from_utf8());

    assert_eq!(dir.read("out/keep.txt"), "mine");
}

#[test]
fn it_needs_a_terminal_to_prompt() {
    let dir = tempdir().build();
    let config = write_config(dir.path(), &[("node", "https://example.com/node-tpl.git")]);

    binary()
        .arg_config(&config)
        .current_dir(dir.path())
        .assert()
        .failure();

    assert!(!dir.exists("src"));
}
