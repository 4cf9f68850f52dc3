use crate::common::command::{committed_repository, status_output};
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    committed_repository.write_file("1.txt", "changed");
    committed_repository.write_file("2.txt", "modified");

    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(
        actual_output,
        "Changes not staged for commit:\nmodified:\t1.txt\nmodified:\t2.txt\n"
    );

    Ok(())
}

#[rstest]
fn report_modified_files_with_unchanged_size(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    committed_repository.write_file("2.txt", "owt");

    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(
        actual_output,
        "Changes not staged for commit:\nmodified:\t2.txt\n"
    );

    Ok(())
}
