pub mod security;

use crate::error::SecretToolError;
use secrecy::SecretString;

pub type Result<T> = std::result::Result<T, SecretToolError>;

/// Identifies a keychain item. The keychain enforces uniqueness of the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    pub service: String,
    pub account: String,
}

/// Search modifiers carried from the command line to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub all: bool,
    pub unlock: bool,
}

/// Core abstraction over the OS credential store. Commands interact only with this trait.
pub trait CredentialBackend {
    fn find(&self, credential: &Credential, options: FindOptions) -> Result<SecretString>;
    /// Add a password, replacing any existing item for the same credential.
    fn add(&self, credential: &Credential, label: &str, password: &SecretString) -> Result<()>;
    fn delete(&self, credential: &Credential) -> Result<()>;
}
