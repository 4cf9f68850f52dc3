use crate::common::command::{committed_repository, run_bitstat_command};
use crate::common::file::delete_path;
use crate::common::repository::TestRepository;
use bitstat::artifacts::objects::object_id::ObjectId;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_on_missing_head_commit_object(committed_repository: TestRepository) {
    let commit = committed_repository.head_commit().expect("branch has a commit");
    let commit_path = committed_repository
        .git_path()
        .join("objects")
        .join(ObjectId::try_parse(&commit).unwrap().to_path());
    delete_path(&commit_path);

    run_bitstat_command(committed_repository.path(), &["status"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Object not found"))
        .stderr(predicate::str::contains(commit));
}

#[rstest]
fn fail_on_corrupted_head_commit(committed_repository: TestRepository) {
    let commit = committed_repository.head_commit().expect("branch has a commit");
    let commit_path = committed_repository
        .git_path()
        .join("objects")
        .join(ObjectId::try_parse(&commit).unwrap().to_path());
    std::fs::write(&commit_path, b"not a zlib stream").unwrap();

    run_bitstat_command(committed_repository.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to decompress object"));
}

#[rstest]
fn fail_on_commit_without_tree(committed_repository: TestRepository) {
    let oid = ObjectId::try_parse("1111111111111111111111111111111111111111").unwrap();
    let text = "author nobody <nobody@example.com> 0 +0000\n\nno tree\n";
    committed_repository.write_raw_object(
        &oid,
        format!("commit {}\0{}", text.len(), text).as_bytes(),
    );
    committed_repository.set_branch(&oid);

    run_bitstat_command(committed_repository.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed commit"));
}
