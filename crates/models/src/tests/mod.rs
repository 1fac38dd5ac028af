/// Transaction handling tests (commit and rollback visibility)
pub mod transaction_tests;
