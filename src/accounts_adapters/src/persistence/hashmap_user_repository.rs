use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use accounts_core::{Email, User, UserId, UserRepository, UserRepositoryError};

/// In-memory [`UserRepository`] keyed by user id.
#[derive(Debug, Default, Clone)]
pub struct HashMapUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        users.insert(user.id().clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|user| user.created_at());
        Ok(all)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &UserId) -> Result<bool, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use accounts_core::{UserName, UserProps};
    use chrono::{TimeZone, Utc};

    use super::*;

    fn user(email: &str, name: &str) -> User {
        User::create(
            Email::parse(email).unwrap(),
            UserName::parse(name).unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repository = HashMapUserRepository::new();
        let ada = user("ada@example.com", "Ada");

        let saved = repository.save(ada.clone()).await.unwrap();
        assert_eq!(saved, ada);

        let found = repository.find_by_id(ada.id()).await.unwrap();
        assert_eq!(found.unwrap().email(), ada.email());
    }

    #[tokio::test]
    async fn test_missing_user_is_none_not_error() {
        let repository = HashMapUserRepository::new();
        let id = UserId::generate();
        let email = Email::parse("ghost@example.com").unwrap();

        assert_eq!(repository.find_by_id(&id).await, Ok(None));
        assert_eq!(repository.find_by_email(&email).await, Ok(None));
        assert_eq!(repository.exists(&id).await, Ok(false));
    }

    #[tokio::test]
    async fn test_save_replaces_user_with_same_id() {
        let repository = HashMapUserRepository::new();
        let ada = user("ada@example.com", "Ada");
        repository.save(ada.clone()).await.unwrap();

        let renamed = ada.update_name(UserName::parse("Ada King").unwrap());
        repository.save(renamed).await.unwrap();

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name().as_str(), "Ada King");
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repository = HashMapUserRepository::new();
        let ada = user("ada@example.com", "Ada");
        repository.save(ada.clone()).await.unwrap();
        repository.save(user("bob@example.com", "Bob")).await.unwrap();

        let email = Email::parse("ADA@example.com").unwrap();
        let found = repository.find_by_email(&email).await.unwrap();
        assert_eq!(found, Some(ada));
    }

    #[tokio::test]
    async fn test_find_all_orders_by_creation_time() {
        let repository = HashMapUserRepository::new();
        for (day, email) in [(3, "c@example.com"), (1, "a@example.com"), (2, "b@example.com")] {
            let created_at = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
            let stored = User::reconstitute(UserProps {
                id: UserId::generate(),
                email: Email::parse(email).unwrap(),
                name: UserName::parse("Someone").unwrap(),
                created_at,
                updated_at: created_at,
            });
            repository.save(stored).await.unwrap();
        }

        let emails: Vec<String> = repository
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|user| user.email().to_string())
            .collect();
        assert_eq!(emails, ["a@example.com", "b@example.com", "c@example.com"]);
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repository = HashMapUserRepository::new();
        let ada = user("ada@example.com", "Ada");
        repository.save(ada.clone()).await.unwrap();
        assert!(repository.exists(ada.id()).await.unwrap());

        repository.delete(ada.id()).await.unwrap();
        assert!(!repository.exists(ada.id()).await.unwrap());

        // Deleting twice is fine.
        assert!(repository.delete(ada.id()).await.is_ok());
    }
}
