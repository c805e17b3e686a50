use serde::Serialize;

/// The registered session identity. The email is the key joining a user to
/// their punch ledger and time-bank balance; re-registration overwrites the
/// whole record, it is never edited in place.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
}

impl UserIdentity {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
        }
    }
}
