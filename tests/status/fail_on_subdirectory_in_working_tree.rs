use crate::common::command::{repository, run_bitstat_command};
use crate::common::file::create_directory;
use crate::common::repository::TestRepository;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_on_subdirectory_in_working_tree(repository: TestRepository) {
    repository.write_file("a.txt", "alpha");
    create_directory(&repository.path().join("nested"));

    run_bitstat_command(repository.path(), &["status"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported subdirectory"))
        .stderr(predicate::str::contains("nested"));
}
