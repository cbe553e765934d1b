//! # Accounts - User Domain Library
//!
//! This is a facade crate that re-exports all public APIs from the accounts components.
//! Use this crate to get access to the user domain, its ports and adapters in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `UserId`, `UserName`, `User`
//! - **Ports**: `UserRepository`, `AntiSpamService`
//! - **Use cases**: `RegisterUserUseCase`, `ChangeEmailUseCase`, `RenameUserUseCase`
//! - **Adapters**: `HttpAntiSpamClient`, `MockAntiSpamClient`, `HashMapUserRepository`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

// Re-export most commonly used core types at the root level
pub use accounts_core::{
    Email, User, UserId, UserName, UserProps, UserView, ValidationError, ValueObject,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use accounts_core::{AntiSpamService, UserRepository, UserRepositoryError};
}

pub use ports::{AntiSpamService, UserRepository, UserRepositoryError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::*;
}

pub use accounts_application::{
    ChangeEmailError, ChangeEmailUseCase, RegisterUserError, RegisterUserUseCase,
    RenameUserError, RenameUserUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Anti-spam implementations
    pub mod anti_spam {
        pub use accounts_adapters::anti_spam::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }

    /// Logging setup
    pub mod telemetry {
        pub use accounts_adapters::telemetry::*;
    }
}

pub use accounts_adapters::{
    anti_spam::{AntiSpamClientError, FailurePolicy, HttpAntiSpamClient, MockAntiSpamClient},
    config::{AccountsSettings, AntiSpamSettings},
    persistence::HashMapUserRepository,
    telemetry::init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
