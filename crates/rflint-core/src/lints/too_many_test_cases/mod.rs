pub(crate) mod too_many_test_cases;
