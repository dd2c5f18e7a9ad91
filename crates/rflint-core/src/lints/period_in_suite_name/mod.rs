pub(crate) mod period_in_suite_name;
