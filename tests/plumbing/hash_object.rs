use crate::common::command::{repository, run_bitstat_command};
use crate::common::repository::TestRepository;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_blob_id_of_file(repository: TestRepository) {
    repository.write_file("test.txt", "test content\n");

    run_bitstat_command(repository.path(), &["hash-object", "test.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("d670460b4b4aece5915caf5c68d12f560a9fe3e4\n"));
}

#[rstest]
fn hashing_never_writes_objects(repository: TestRepository) {
    repository.write_file("test.txt", "test content\n");

    run_bitstat_command(repository.path(), &["hash-object", "test.txt"])
        .assert()
        .success();

    let objects = std::fs::read_dir(repository.git_path().join("objects"))
        .expect("objects directory exists")
        .count();
    assert_eq!(objects, 0);
}

#[rstest]
fn resolve_relative_paths_from_the_repository_root(
    repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    repository.write_file("test.txt", "test content\n");
    let elsewhere = TempDir::new()?;
    let repository_path = repository.path().to_string_lossy().into_owned();

    run_bitstat_command(
        elsewhere.path(),
        &["-C", &repository_path, "hash-object", "test.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::eq("d670460b4b4aece5915caf5c68d12f560a9fe3e4\n"));

    Ok(())
}

#[rstest]
fn accept_absolute_paths(repository: TestRepository) {
    repository.write_file("test.txt", "test content\n");
    let file_path = repository.path().join("test.txt").to_string_lossy().into_owned();

    run_bitstat_command(repository.path(), &["hash-object", &file_path])
        .assert()
        .success()
        .stdout(predicate::eq("d670460b4b4aece5915caf5c68d12f560a9fe3e4\n"));
}
