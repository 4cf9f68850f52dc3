use crate::common::command::{CLEAN_OUTPUT, committed_repository, status_output};
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_clean_message_when_no_files_are_changed(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(actual_output, CLEAN_OUTPUT);

    Ok(())
}

#[rstest]
fn print_clean_message_when_a_file_is_rewritten_with_same_content(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    committed_repository.write_file("1.txt", "one");

    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(actual_output, CLEAN_OUTPUT);

    Ok(())
}
