pub(crate) mod invalid_table;
