//! Standard values shared across test fixtures.

/// Display name used for regular user fixtures when the test doesn't care.
pub static TEST_USER_NAME: &str = "test_user";

/// Display name used for admin user fixtures when the test doesn't care.
pub static TEST_ADMIN_NAME: &str = "test_admin";
