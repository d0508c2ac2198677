use crate::domain::{errors::InvalidRecipientError, value_objects::Recipient};

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;
const TRUNK_PREFIX: char = '0';

#[derive(Debug, Clone)]
pub struct RecipientNormalizer {
    country_code: String,
    channel: String,
}

impl RecipientNormalizer {
    pub fn new(country_code: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            channel: channel.into(),
        }
    }

    /// Turns a kiosk-entered number into `<channel>:+<E.164 digits>`.
    ///
    /// Running the result through `normalize` again yields the same address.
    pub fn normalize(&self, raw: &str) -> Result<Recipient, InvalidRecipientError> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
            .collect();

        let scheme = format!("{}:", self.channel);
        let unscoped = if !self.channel.is_empty() && compact.starts_with(&scheme) {
            &compact[scheme.len()..]
        } else {
            compact.as_str()
        };

        if unscoped.is_empty() {
            return Err(InvalidRecipientError::Empty);
        }

        let (international, local) = match unscoped.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, unscoped),
        };

        if local.is_empty() {
            return Err(InvalidRecipientError::Empty);
        }
        if !local.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidRecipientError::NonNumeric(raw.trim().to_string()));
        }

        let digits = if international || local.starts_with(&self.country_code) {
            local.to_string()
        } else if let Some(national) = local.strip_prefix(TRUNK_PREFIX) {
            format!("{}{}", self.country_code, national)
        } else {
            format!("{}{}", self.country_code, local)
        };

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(InvalidRecipientError::Length(digits.len()));
        }

        let address = if self.channel.is_empty() {
            format!("+{digits}")
        } else {
            format!("{scheme}+{digits}")
        };
        Ok(Recipient::new(address))
    }
}
