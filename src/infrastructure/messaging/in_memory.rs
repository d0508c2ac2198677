use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::{
    application::services::messenger::{MessageProvider, ProviderFault, ProviderReceipt},
    domain::value_objects::Recipient,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
    pub message_id: String,
}

#[derive(Debug, Clone)]
enum Behaviour {
    Accept,
    Fail(ProviderFault),
    Stall(Duration),
}

/// Provider that never leaves the process. Backs the dry-run mode and stands
/// in for the real provider in tests.
#[derive(Debug)]
pub struct InMemoryProvider {
    behaviour: Behaviour,
    record: bool,
    attempts: RwLock<u32>,
    sent: RwLock<Vec<SentMessage>>,
}

impl InMemoryProvider {
    pub fn accepting() -> Self {
        Self::with_behaviour(Behaviour::Accept)
    }

    /// Accepts and logs every receipt without keeping it.
    pub fn dry_run() -> Self {
        Self {
            record: false,
            ..Self::accepting()
        }
    }

    pub fn failing(fault: ProviderFault) -> Self {
        Self::with_behaviour(Behaviour::Fail(fault))
    }

    /// Never answers before `delay` elapses.
    pub fn stalling(delay: Duration) -> Self {
        Self::with_behaviour(Behaviour::Stall(delay))
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            record: true,
            attempts: RwLock::new(0),
            sent: RwLock::new(Vec::new()),
        }
    }

    pub async fn attempts(&self) -> u32 {
        *self.attempts.read().await
    }

    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl MessageProvider for InMemoryProvider {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn send(&self, to: &Recipient, body: &str) -> Result<ProviderReceipt, ProviderFault> {
        *self.attempts.write().await += 1;

        match &self.behaviour {
            Behaviour::Accept => {}
            Behaviour::Fail(fault) => return Err(fault.clone()),
            Behaviour::Stall(delay) => tokio::time::sleep(*delay).await,
        }

        let message_id = format!("MM{}", Uuid::new_v4().simple());
        info!(recipient = %to.masked(), %message_id, "[in-memory] receipt accepted");

        if self.record {
            self.sent.write().await.push(SentMessage {
                to: to.as_str().to_string(),
                body: body.to_string(),
                message_id: message_id.clone(),
            });
        }

        Ok(ProviderReceipt { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> Recipient {
        Recipient::new("whatsapp:+60189578888".to_string())
    }

    #[tokio::test]
    async fn records_accepted_messages() {
        let provider = InMemoryProvider::accepting();

        let receipt = provider.send(&recipient(), "body").await.unwrap();

        let sent = provider.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message_id, receipt.message_id);
        assert_eq!(sent[0].body, "body");
        assert_eq!(provider.attempts().await, 1);
    }

    #[tokio::test]
    async fn dry_run_keeps_nothing() {
        let provider = InMemoryProvider::dry_run();

        let receipt = provider.send(&recipient(), "body").await.unwrap();

        assert!(receipt.message_id.starts_with("MM"));
        assert!(provider.sent().await.is_empty());
        assert_eq!(provider.attempts().await, 1);
    }

    #[tokio::test]
    async fn failing_provider_returns_its_fault() {
        let fault = ProviderFault::Transport("connection refused".to_string());
        let provider = InMemoryProvider::failing(fault.clone());

        assert_eq!(provider.send(&recipient(), "body").await, Err(fault));
        assert!(provider.sent().await.is_empty());
    }
}
