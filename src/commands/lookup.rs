use std::io::Write;

use crate::backend::{CredentialBackend, FindOptions};
use crate::error::SecretToolError;

pub fn run(
    backend: &dyn CredentialBackend,
    attributes: &[String],
    out: &mut dyn Write,
) -> Result<(), SecretToolError> {
    let options = FindOptions {
        all: false,
        unlock: true,
    };
    super::print_password(backend, attributes, options, out)
}
