pub(crate) mod duplicate_keyword_names;
