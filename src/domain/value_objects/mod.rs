use std::fmt;

use serde::{Deserialize, Serialize};

/// Channel-qualified address, e.g. `whatsapp:+60189578888`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipient {
    address: String,
}

impl Recipient {
    pub(crate) fn new(address: String) -> Self {
        Self { address }
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Address safe for logs: keeps the prefix and last three digits.
    pub fn masked(&self) -> String {
        let (prefix, digits) = match self.address.rfind('+') {
            Some(idx) => self.address.split_at(idx + 1),
            None => ("", self.address.as_str()),
        };
        if digits.len() <= 7 {
            return format!("{prefix}****");
        }
        let head = &digits[..4];
        let tail = &digits[digits.len() - 3..];
        format!("{prefix}{head}****{tail}")
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
