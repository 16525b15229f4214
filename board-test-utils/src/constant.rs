//! Test configuration constants.
//!
//! Placeholder values used when building an application state for tests. None of them are
//! real credentials.

/// Cookie signing secret for test sessions, exactly the minimum accepted length.
pub static TEST_COOKIE_SECRET: &str =
    "test-cookie-secret-test-cookie-secret-test-cookie-secret-test-co";

/// Password used by user fixtures unless a test picks its own.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// URL prefix under which uploaded test images are served.
pub static TEST_UPLOAD_URL_PREFIX: &str = "/uploads";
