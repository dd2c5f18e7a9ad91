pub(crate) mod required_author_info;
