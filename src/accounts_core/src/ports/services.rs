use async_trait::async_trait;

/// Port trait for the anti-spam check run before an email is accepted.
///
/// Implementations decide for themselves what a failed check means; the
/// caller only ever sees a verdict.
#[async_trait]
pub trait AntiSpamService: Send + Sync {
    /// Returns `true` when the address must be rejected.
    async fn is_blocked(&self, email: &str) -> bool;
}

#[async_trait]
impl<T: AntiSpamService + ?Sized> AntiSpamService for std::sync::Arc<T> {
    async fn is_blocked(&self, email: &str) -> bool {
        (**self).is_blocked(email).await
    }
}
