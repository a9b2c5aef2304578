pub mod clear;
pub mod lookup;
pub mod search;
pub mod store;

use std::io::Write;

use secrecy::ExposeSecret;

use crate::backend::{Credential, CredentialBackend, FindOptions};
use crate::error::SecretToolError;

/// Take `service account` from the positional attributes. Extra values are ignored.
pub fn credential_from(attributes: &[String]) -> Result<Credential, SecretToolError> {
    match attributes {
        [service, account, rest @ ..] => {
            if !rest.is_empty() {
                tracing::debug!(ignored = ?rest, "extra attributes ignored");
            }
            Ok(Credential {
                service: service.clone(),
                account: account.clone(),
            })
        }
        _ => Err(SecretToolError::MissingArguments),
    }
}

fn print_password(
    backend: &dyn CredentialBackend,
    attributes: &[String],
    options: FindOptions,
    out: &mut dyn Write,
) -> Result<(), SecretToolError> {
    let credential = credential_from(attributes)?;
    let password = backend.find(&credential, options)?;
    writeln!(out, "{}", password.expose_secret())?;
    Ok(())
}
