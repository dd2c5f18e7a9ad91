pub(crate) mod duplicate_test_names;
