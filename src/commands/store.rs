use std::io;

use secrecy::SecretString;

use crate::backend::CredentialBackend;
use crate::error::SecretToolError;

const PROMPT: &str = "Password: ";

/// Store the password produced by `read_password` under `label`.
///
/// A failed read is reported and the item is still stored, with an empty password.
/// Input that is not UTF-8 aborts instead, leaving any existing item untouched.
pub fn run<F>(
    backend: &dyn CredentialBackend,
    attributes: &[String],
    label: Option<&str>,
    read_password: F,
) -> Result<(), SecretToolError>
where
    F: FnOnce(&str) -> io::Result<SecretString>,
{
    let credential = super::credential_from(attributes)?;
    let label = label.ok_or(SecretToolError::MissingLabel)?;

    let password = match read_password(PROMPT) {
        Ok(password) => password,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => return Err(e.into()),
        Err(e) => {
            eprintln!("Error: {}", e);
            SecretString::new(String::new())
        }
    };

    backend.add(&credential, label, &password)
}
