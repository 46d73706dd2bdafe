//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// `code` value of a successful `{code, msg, data}` envelope.
pub const ENVELOPE_SUCCESS_CODE: i64 = 200;
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed, please try again later";

pub const DEFAULT_CSRF_COOKIE_NAME: &str = "XSRF-TOKEN";
pub const DEFAULT_CSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";
pub const DEFAULT_CSRF_PATH: &str = "/api/auth/csrf";

pub const DEFAULT_NAV_PATH_PREFIX: &str = "/admin/";
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 4000;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
