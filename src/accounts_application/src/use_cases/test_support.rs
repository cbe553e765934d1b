use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use accounts_core::{
    AntiSpamService, Email, User, UserId, UserName, UserRepository, UserRepositoryError,
};

// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    unavailable: bool,
}

impl MockUserRepository {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub async fn with_user(self, user: User) -> Self {
        self.users.write().await.insert(user.id().clone(), user);
        self
    }

    pub async fn stored(&self, id: &UserId) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    fn check(&self) -> Result<(), UserRepositoryError> {
        if self.unavailable {
            return Err(UserRepositoryError::Unavailable("connection refused".to_owned()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        self.check()?;
        self.users
            .write()
            .await
            .insert(user.id().clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        self.check()?;
        Ok(self.stored(id).await)
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserRepositoryError> {
        unimplemented!()
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        unimplemented!()
    }

    async fn delete(&self, _id: &UserId) -> Result<(), UserRepositoryError> {
        unimplemented!()
    }

    async fn exists(&self, _id: &UserId) -> Result<bool, UserRepositoryError> {
        unimplemented!()
    }
}

// Anti-spam stub returning a fixed verdict
#[derive(Clone)]
pub struct StubAntiSpam {
    pub blocked: bool,
}

#[async_trait::async_trait]
impl AntiSpamService for StubAntiSpam {
    async fn is_blocked(&self, _email: &str) -> bool {
        self.blocked
    }
}

pub fn existing_user() -> User {
    User::create(
        Email::parse("ada@example.com").unwrap(),
        UserName::parse("Ada Lovelace").unwrap(),
        None,
    )
}
