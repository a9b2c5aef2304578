use crate::backend::CredentialBackend;
use crate::error::SecretToolError;

pub fn run(backend: &dyn CredentialBackend, attributes: &[String]) -> Result<(), SecretToolError> {
    let credential = super::credential_from(attributes)?;
    backend.delete(&credential)
}
