use std::fmt;

/// Reason a login attempt was rejected. All of them answer the caller with
/// the same 401; the reason only reaches logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    UnknownEmail,
    PasswordMismatch,
    MalformedHash,
}

impl LoginFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginFailure::UnknownEmail => "unknown_email",
            LoginFailure::PasswordMismatch => "password_mismatch",
            LoginFailure::MalformedHash => "malformed_hash",
        }
    }
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
