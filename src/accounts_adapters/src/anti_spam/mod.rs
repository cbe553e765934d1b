pub mod http_anti_spam_client;
pub mod mock_anti_spam_client;

pub use http_anti_spam_client::{AntiSpamClientError, FailurePolicy, HttpAntiSpamClient};
pub use mock_anti_spam_client::MockAntiSpamClient;
