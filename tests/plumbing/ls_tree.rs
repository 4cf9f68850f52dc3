use crate::common::command::{committed_repository, repository, run_bitstat_command};
use crate::common::repository::TestRepository;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_all_blobs_from_head_commit(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = format!(
        "100644 blob {}\t1.txt\n100644 blob {}\t2.txt\n",
        TestRepository::blob_oid("one"),
        TestRepository::blob_oid("two")
    );

    let assert = run_bitstat_command(committed_repository.path(), &["ls-tree"])
        .assert()
        .success();
    let actual_output = String::from_utf8(assert.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn list_blobs_of_an_earlier_commit(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = committed_repository.head_commit().expect("branch has a commit");
    committed_repository.commit(&[("3.txt", "three")], "Second commit");

    let expected_output = format!("100644 blob {}\t3.txt\n", TestRepository::blob_oid("three"));
    let assert = run_bitstat_command(committed_repository.path(), &["ls-tree"])
        .assert()
        .success();
    assert_eq!(String::from_utf8(assert.get_output().stdout.clone())?, expected_output);

    run_bitstat_command(committed_repository.path(), &["ls-tree", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t1.txt\n"))
        .stdout(predicate::str::contains("\t2.txt\n"));

    Ok(())
}

#[rstest]
fn fail_to_list_tree_without_commits(repository: TestRepository) {
    run_bitstat_command(repository.path(), &["ls-tree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refs/heads/master"));
}
