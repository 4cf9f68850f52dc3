use crate::common::command::{committed_repository, status_output};
use crate::common::file::delete_path;
use crate::common::repository::TestRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_all_sections_in_fixed_order(
    committed_repository: TestRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    committed_repository.write_file("3.txt", "three");
    committed_repository.write_file("4.txt", "four");
    committed_repository.stage(&[("1.txt", "one"), ("2.txt", "two"), ("3.txt", "three")]);
    committed_repository.write_file("2.txt", "two, edited");
    delete_path(&committed_repository.path().join("1.txt"));

    let expected_output = "Changes to be committed:\n\
                           new file:\t3.txt\n\
                           \n\
                           Changes not staged for commit:\n\
                           deleted:\t1.txt\n\
                           modified:\t2.txt\n\
                           \n\
                           Untracked files:\n\
                           \t4.txt\n";
    let actual_output = status_output(committed_repository.path())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
