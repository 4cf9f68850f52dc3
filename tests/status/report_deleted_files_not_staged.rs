use crate::common::command::{committed_repository, status_output};
use crate::common::file::delete_path;
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files_not_staged(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    delete_path(&committed_repository.path().join("1.txt"));

    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(
        actual_output,
        "Changes not staged for commit:\ndeleted:\t1.txt\n"
    );

    Ok(())
}
