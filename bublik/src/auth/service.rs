use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::models::is_valid_email;

use super::is_complete_code;

/// Stand-in for the backend that mails and checks sign-in codes.
#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn send_code(&self, email: &str) -> Result<(), anyhow::Error>;

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), anyhow::Error>;
}

/// Local verification: waits a fixed delay and accepts any well-formed code.
pub struct SimulatedVerification {
    delay: Duration,
}

impl SimulatedVerification {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    async fn round_trip(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedVerification {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationService for SimulatedVerification {
    async fn send_code(&self, email: &str) -> Result<(), anyhow::Error> {
        if !is_valid_email(email) {
            return Err(anyhow!("Invalid email address: {email}"));
        }
        self.round_trip().await;
        tracing::info!(?email, "Verification code sent");
        Ok(())
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), anyhow::Error> {
        if !is_complete_code(code) {
            return Err(anyhow!("Verification code must have 6 digits"));
        }
        self.round_trip().await;
        tracing::info!(?email, "Verification code accepted");
        Ok(())
    }
}
