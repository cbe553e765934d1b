use std::sync::Arc;

use accounts::{
    AntiSpamService, AntiSpamSettings, ChangeEmailUseCase, FailurePolicy, HashMapUserRepository,
    HttpAntiSpamClient, MockAntiSpamClient, RegisterUserError, RegisterUserUseCase,
    RenameUserUseCase, Secret, UserRepository, adapters::config::test,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn anti_spam_settings(base_url: String, failure_policy: FailurePolicy) -> AntiSpamSettings {
    AntiSpamSettings {
        base_url,
        api_key: Secret::new("integration-key".to_owned()),
        timeout_in_millis: test::anti_spam::TIMEOUT.as_millis() as u64,
        failure_policy,
    }
}

#[tokio::test]
async fn register_then_update_profile() -> color_eyre::Result<()> {
    let repository = HashMapUserRepository::new();
    let register = RegisterUserUseCase::new(repository.clone(), MockAntiSpamClient::new());

    let user = register.execute("Ada@Example.com", "ada lovelace").await?;
    assert_eq!(user.name().initials(), "AL");

    let change_email = ChangeEmailUseCase::new(repository.clone(), MockAntiSpamClient::new());
    let moved = change_email.execute(user.id(), "ada@analytical.org").await?;

    let rename = RenameUserUseCase::new(repository.clone());
    let renamed = rename.execute(user.id(), "Augusta Ada King").await?;

    assert_eq!(moved, user);
    assert_eq!(renamed.email().as_str(), "ada@analytical.org");
    assert_eq!(renamed.name().last_name(), "King");
    assert_eq!(renamed.created_at(), user.created_at());

    let all = repository.find_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(
        serde_json::to_value(&all[0])?["email"],
        json!("ada@analytical.org")
    );
    Ok(())
}

#[tokio::test]
async fn mock_anti_spam_rejects_blocked_domains() {
    let repository = HashMapUserRepository::new();
    let register = RegisterUserUseCase::new(repository.clone(), MockAntiSpamClient::new());

    let result = register.execute("someone@SPAM.com", "Someone").await;

    assert!(matches!(result, Err(RegisterUserError::EmailBlocked(_))));
    assert!(repository.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn anti_spam_adapters_are_interchangeable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "blocked": true })))
        .mount(&server)
        .await;

    let http = HttpAntiSpamClient::from_settings(&anti_spam_settings(
        server.uri(),
        FailurePolicy::Open,
    ))
    .unwrap();
    let mock: Arc<dyn AntiSpamService> = Arc::new(MockAntiSpamClient);
    let http: Arc<dyn AntiSpamService> = Arc::new(http);

    for anti_spam in [mock, http] {
        let register = RegisterUserUseCase::new(HashMapUserRepository::new(), anti_spam);
        let result = register.execute("spam@spam.com", "Spammer").await;
        assert!(matches!(result, Err(RegisterUserError::EmailBlocked(_))));
    }
}

#[tokio::test]
async fn registration_survives_anti_spam_outage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpAntiSpamClient::from_settings(&anti_spam_settings(
        server.uri(),
        FailurePolicy::Open,
    ))
    .unwrap();
    let repository = HashMapUserRepository::new();
    let register = RegisterUserUseCase::new(repository.clone(), http);

    let user = register.execute("ada@example.com", "Ada").await.unwrap();

    assert!(repository.exists(user.id()).await.unwrap());
}

#[tokio::test]
async fn fail_closed_policy_blocks_registration_during_outage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let http = HttpAntiSpamClient::from_settings(&anti_spam_settings(
        server.uri(),
        FailurePolicy::Closed,
    ))
    .unwrap();
    let register = RegisterUserUseCase::new(HashMapUserRepository::new(), http);

    let result = register.execute("ada@example.com", "Ada").await;

    assert!(matches!(result, Err(RegisterUserError::EmailBlocked(_))));
}
