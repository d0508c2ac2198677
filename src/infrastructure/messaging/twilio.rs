use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    application::services::messenger::{MessageProvider, ProviderFault, ProviderReceipt},
    domain::{errors::ConfigurationError, value_objects::Recipient},
};

#[derive(Clone, Default)]
pub struct TwilioSettings {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub api_base_url: String,
}

impl std::fmt::Debug for TwilioSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioSettings")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("from_number", &self.from_number)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Twilio Programmable Messaging client (WhatsApp sender).
pub struct TwilioClient {
    http: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl std::fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioClient")
            .field("base_url", &self.base_url)
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl TwilioClient {
    /// Fails with the names of every missing setting.
    pub fn new(
        settings: &TwilioSettings,
        channel: &str,
        timeout: Duration,
    ) -> Result<Self, ConfigurationError> {
        let required = [
            ("TWILIO_ACCOUNT_SID", &settings.account_sid),
            ("TWILIO_AUTH_TOKEN", &settings.auth_token),
            ("TWILIO_WHATSAPP_NUMBER", &settings.from_number),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigurationError::MissingSettings(missing));
        }

        let (Some(account_sid), Some(auth_token), Some(from_number)) = (
            settings.account_sid.clone(),
            settings.auth_token.clone(),
            settings.from_number.clone(),
        ) else {
            return Err(ConfigurationError::MissingSettings(
                required.iter().map(|(name, _)| *name).collect(),
            ));
        };

        let http = Client::builder()
            .user_agent("receipt-dispatch/twilio")
            .connect_timeout(timeout)
            .build()
            .map_err(|err| ConfigurationError::Client(err.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            account_sid: account_sid.trim().to_string(),
            auth_token: auth_token.trim().to_string(),
            from: channel_address(from_number.trim(), channel),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

// The gateway owns the request deadline; reqwest only bounds the connect.
fn transport_fault(err: reqwest::Error) -> ProviderFault {
    if err.is_timeout() {
        ProviderFault::TimedOut(err.to_string())
    } else {
        ProviderFault::Transport(err.to_string())
    }
}

fn channel_address(number: &str, channel: &str) -> String {
    if channel.is_empty() || number.starts_with(&format!("{channel}:")) {
        number.to_string()
    } else {
        format!("{channel}:{number}")
    }
}

#[async_trait]
impl MessageProvider for TwilioClient {
    fn name(&self) -> &'static str {
        "twilio"
    }

    async fn send(&self, to: &Recipient, body: &str) -> Result<ProviderReceipt, ProviderFault> {
        let response = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to.as_str()), ("From", self.from.as_str()), ("Body", body)])
            .send()
            .await
            .map_err(transport_fault)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(transport_fault)?;

        if status.is_success() {
            let message: TwilioMessage = serde_json::from_str(&text).map_err(|err| {
                ProviderFault::Transport(format!("unreadable twilio response: {err}"))
            })?;
            return Ok(ProviderReceipt {
                message_id: message.sid,
            });
        }

        let fault = match serde_json::from_str::<TwilioError>(&text) {
            Ok(error) => ProviderFault::Rejected {
                status: Some(status.as_u16()),
                code: error.code,
                message: error
                    .message
                    .unwrap_or_else(|| format!("twilio returned {status}")),
            },
            Err(_) => ProviderFault::Rejected {
                status: Some(status.as_u16()),
                code: None,
                message: format!("twilio returned {status}: {}", text.trim()),
            },
        };
        Err(fault)
    }
}

#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioError {
    code: Option<i64>,
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TwilioSettings {
        TwilioSettings {
            account_sid: Some("AC123".to_string()),
            auth_token: Some("secret".to_string()),
            from_number: Some("+14155238886".to_string()),
            api_base_url: "https://api.twilio.com/".to_string(),
        }
    }

    #[test]
    fn reports_every_missing_setting() {
        let settings = TwilioSettings {
            account_sid: None,
            auth_token: Some(" ".to_string()),
            ..settings()
        };

        let err = TwilioClient::new(&settings, "whatsapp", Duration::from_secs(1)).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingSettings(vec!["TWILIO_ACCOUNT_SID", "TWILIO_AUTH_TOKEN"])
        );
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn sender_gets_channel_prefix_once() {
        let client = TwilioClient::new(&settings(), "whatsapp", Duration::from_secs(1)).unwrap();
        assert_eq!(client.from, "whatsapp:+14155238886");
        assert_eq!(
            client.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );

        let prefixed = TwilioSettings {
            from_number: Some("whatsapp:+14155238886".to_string()),
            ..settings()
        };
        let client = TwilioClient::new(&prefixed, "whatsapp", Duration::from_secs(1)).unwrap();
        assert_eq!(client.from, "whatsapp:+14155238886");
    }

    #[test]
    fn debug_output_hides_credentials() {
        let client = TwilioClient::new(&settings(), "whatsapp", Duration::from_secs(1)).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret"));
    }
}
