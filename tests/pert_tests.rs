use assert_fs::prelude::*;
use predicates::prelude::*;

const TASKS_YAML: &str = "- id: T1
  name: Discovery
  optimistic: 3
  likely: 5
  pessimistic: 8
- id: T2
  name: Build
  optimistic: 10
  likely: 15
  pessimistic: 25
";

fn tasks_file(contents: &str) -> assert_fs::NamedTempFile {
    let file = assert_fs::NamedTempFile::new("tasks.yaml").unwrap();
    file.write_str(contents).unwrap();
    file
}

#[test]
fn pert_prints_estimates_and_totals() {
    let input = tasks_file(TASKS_YAML);

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["pert", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Discovery | 3.00 | 5.00 | 8.00 | 5.17 | 0.83"))
        .stdout(predicate::str::contains("Build | 10.00 | 15.00 | 25.00 | 15.83 | 2.50"))
        .stdout(predicate::str::contains("Total | 13.00 | 20.00 | 33.00 | 21.00"));
}

#[test]
fn pert_exports_csv_named_after_project() {
    let input = tasks_file(TASKS_YAML);
    let export_dir = assert_fs::TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "pert",
        "-i",
        input.path().to_str().unwrap(),
        "-p",
        "Website Relaunch (2026)",
        "-e",
        export_dir.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Estimate export written to"));

    export_dir
        .child("website-relaunch-2026--pert-estimate.csv")
        .assert(
            "Task,Optimistic,Most Likely,Pessimistic,PERT Estimate,Std Dev\n\
Discovery,3,5,8,5.17,0.83\n\
Build,10,15,25,15.83,2.50\n\
Total,13,,33,21.00,\n",
        );
}

#[test]
fn pert_handles_empty_task_list() {
    let input = tasks_file("[]");
    let export_dir = assert_fs::TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "pert",
        "-i",
        input.path().to_str().unwrap(),
        "-e",
        export_dir.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tasks: 0"));

    export_dir
        .child("project-pert-estimate.csv")
        .assert(predicate::str::ends_with("Total,0,,0,0.00,\n"));
}

#[test]
fn pert_runs_seeded_simulation() {
    let input = tasks_file(TASKS_YAML);

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "pert",
        "-i",
        input.path().to_str().unwrap(),
        "-n",
        "200",
        "--seed",
        "42",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Simulation Report"))
        .stdout(predicate::str::contains("Iterations: 200"))
        .stdout(predicate::str::contains("P85 | "));
}

#[test]
fn pert_simulation_rejects_inverted_task() {
    let input = tasks_file("- id: BAD\n  optimistic: 8\n  likely: 5\n  pessimistic: 3\n");

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["pert", "-i", input.path().to_str().unwrap(), "-n", "10"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot sample task BAD"));
}

#[test]
fn pert_reports_missing_input_file() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["pert", "-i", "does-not-exist.yaml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read task yaml"));
}

#[test]
fn pert_export_name_falls_back_for_symbol_only_project() {
    let input = tasks_file(TASKS_YAML);
    let export_dir = assert_fs::TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "pert",
        "-i",
        input.path().to_str().unwrap(),
        "-p",
        "!!!",
        "-e",
        export_dir.path().to_str().unwrap(),
    ]);
    cmd.assert().success();

    export_dir
        .child("project-pert-estimate.csv")
        .assert(predicate::path::exists());
    export_dir
        .child("--pert-estimate.csv")
        .assert(predicate::path::missing());
}
