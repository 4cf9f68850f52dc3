use crate::common::command::{committed_repository, status_output};
use crate::common::file::delete_path;
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_deletions_from_last_commit(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    delete_path(&committed_repository.path().join("1.txt"));
    committed_repository.stage(&[("2.txt", "two")]);

    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(actual_output, "Changes to be committed:\ndeleted:\t1.txt\n");

    Ok(())
}

#[rstest]
fn report_file_removed_from_index_but_kept_on_disk_as_untracked_only(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    committed_repository.stage(&[("2.txt", "two")]);

    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(actual_output, "Untracked files:\n\t1.txt\n");

    Ok(())
}
