//! Fixed validation messages surfaced to API clients.

/// Email field messages
pub mod email {
    pub const EMPTY: &str = "Provided string is empty";
    pub const NOT_VALID: &str = "Provided string is not a valid email address";
    pub const SAME_AS_OLD: &str = "New email address must differ from the old one";
}

/// Password policy messages
pub mod password {
    pub const MINIMUM_LENGTH: &str = "Password should be at least 8 letters length";
    pub const MAXIMUM_LENGTH: &str = "Password should be at most 64 letters length";
    pub const UPPERCASE_LETTER: &str = "Password should contain uppercase letter";
    pub const LOWERCASE_LETTER: &str = "Password should contain lowercase letter";
    pub const DIGIT: &str = "Password should contain at least one digit";
    pub const SPECIAL_CHARS: &str = "Password should contain a special char";
}

/// Name field messages
pub mod name {
    pub const EMPTY: &str = "Provided string is empty";
    pub const TOO_LONG: &str = "Provided string is longer than 64 characters";
}
