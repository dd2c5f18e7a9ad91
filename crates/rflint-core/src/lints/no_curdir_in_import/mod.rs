pub(crate) mod no_curdir_in_import;
