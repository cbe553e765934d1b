use accounts_core::AntiSpamService;

const BLOCKED_DOMAINS: [&str; 3] = ["spam.com", "fake.com", "bot.net"];
const BLOCKED_PATTERNS: [&str; 2] = ["blocked@", "spam@"];

/// Deterministic anti-spam check for tests and local runs. No I/O.
///
/// Blocks addresses containing `blocked@` or `spam@`, and addresses whose
/// domain is `spam.com`, `fake.com` or `bot.net`.
#[derive(Debug, Clone, Default)]
pub struct MockAntiSpamClient;

impl MockAntiSpamClient {
    pub fn new() -> Self {
        Self
    }

    fn matches_rules(email: &str) -> bool {
        if BLOCKED_PATTERNS
            .iter()
            .any(|pattern| email.contains(pattern))
        {
            return true;
        }

        email
            .split('@')
            .nth(1)
            .is_some_and(|domain| BLOCKED_DOMAINS.contains(&domain))
    }
}

#[async_trait::async_trait]
impl AntiSpamService for MockAntiSpamClient {
    async fn is_blocked(&self, email: &str) -> bool {
        Self::matches_rules(email)
    }
}
