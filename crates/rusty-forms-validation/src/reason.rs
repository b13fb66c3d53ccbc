//! Stable reason codes carried by issues

pub const TYPE_MISMATCH: &str = "type_mismatch";
pub const REQUIRED: &str = "required";

// String rules
pub const MIN_LENGTH: &str = "min_length";
pub const MAX_LENGTH: &str = "max_length";
pub const LENGTH: &str = "length";
pub const EMAIL: &str = "email";
pub const PUBLIC_DOMAIN: &str = "public_domain";
pub const URL: &str = "url";
pub const PATTERN: &str = "pattern";
pub const PASSWORD: &str = "password";
pub const ONE_OF: &str = "one_of";
pub const CUSTOM: &str = "custom";

// Number rules
pub const MIN_VALUE: &str = "min_value";
pub const MAX_VALUE: &str = "max_value";

// Collection rules
pub const MIN_ITEMS: &str = "min_items";
pub const MAX_ITEMS: &str = "max_items";
