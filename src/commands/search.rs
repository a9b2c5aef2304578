use std::io::Write;

use crate::backend::{CredentialBackend, FindOptions};
use crate::error::SecretToolError;

/// Like lookup, with `--all`/`--unlock` passed to the backend as given.
pub fn run(
    backend: &dyn CredentialBackend,
    attributes: &[String],
    options: FindOptions,
    out: &mut dyn Write,
) -> Result<(), SecretToolError> {
    super::print_password(backend, attributes, options, out)
}
