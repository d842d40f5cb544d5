use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{init_repository_dir, read_ref, run_jot_command};
use common::file::read_to_string;

#[rstest]
fn checkout_switches_the_head_symref(init_repository_dir: TempDir) {
    run_jot_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_jot_command(init_repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'feature'"));

    assert_eq!(read_ref(init_repository_dir.path(), "HEAD"), "ref: feature");
}

#[rstest]
fn checkout_unknown_branch_fails_and_leaves_head_unchanged(init_repository_dir: TempDir) {
    run_jot_command(init_repository_dir.path(), &["checkout", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'nonexistent' does not exist"));

    assert_eq!(read_ref(init_repository_dir.path(), "HEAD"), "ref: master");
}

#[rstest]
fn checkout_does_not_touch_the_index_or_working_files(init_repository_dir: TempDir) {
    let index_before = read_to_string(&init_repository_dir.path().join(".jot").join("index"));
    let file_before = read_to_string(&init_repository_dir.path().join("1.txt"));

    run_jot_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_jot_command(init_repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    let index_after = read_to_string(&init_repository_dir.path().join(".jot").join("index"));
    let file_after = read_to_string(&init_repository_dir.path().join("1.txt"));
    assert_eq!(index_before, index_after);
    assert_eq!(file_before, file_after);
}

#[rstest]
fn branches_share_history_until_they_diverge(init_repository_dir: TempDir) {
    run_jot_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_jot_command(init_repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    // status on feature resolves to the same commit master pointed at
    let master_oid = read_ref(init_repository_dir.path(), "master");
    run_jot_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On branch feature"))
        .stdout(predicate::str::contains(&master_oid[..7]));
}
