mod fail_on_subdirectory_in_working_tree;
mod fail_on_unreadable_head_objects;
mod print_clean_message_when_no_files_are_changed;
mod report_all_sections_in_fixed_order;
mod report_deleted_files_not_staged;
mod report_files_with_modified_contents;
mod report_staged_deletions_from_last_commit;
