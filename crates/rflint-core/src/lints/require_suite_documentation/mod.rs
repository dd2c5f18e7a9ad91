pub(crate) mod require_suite_documentation;
