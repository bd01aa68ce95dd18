//! JWT claim set issued to authenticated users.

use serde::{Deserialize, Serialize};

/// Claims carried by an issued bearer token
///
/// The audience is set to the issuer value; tokens are only consumed by
/// the service that minted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's numeric id, as a string
    pub sub: String,

    /// Display name, "First Last"
    pub name: String,

    /// Account email address
    pub email: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued-at time (Unix timestamp, seconds)
    pub iat: i64,
}

impl Claims {
    /// The subject parsed back to a user id, if well-formed
    pub fn user_id(&self) -> Option<u64> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_numeric_subject() {
        let claims = Claims {
            sub: "17".to_string(),
            name: "Jan Kowalski".to_string(),
            email: "test@test.pl".to_string(),
            iss: "famhub".to_string(),
            aud: "famhub".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.user_id(), Some(17));
    }

    #[test]
    fn user_id_rejects_malformed_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            name: String::new(),
            email: String::new(),
            iss: String::new(),
            aud: String::new(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.user_id(), None);
    }
}
