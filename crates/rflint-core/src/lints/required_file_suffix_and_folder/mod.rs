pub(crate) mod required_file_suffix_and_folder;
