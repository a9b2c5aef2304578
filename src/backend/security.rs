use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use secrecy::{ExposeSecret, SecretString};

use crate::backend::{Credential, CredentialBackend, FindOptions, Result};
use crate::config::Config;
use crate::error::SecretToolError;

const PASSWORD_PREFIX: &str = "password:";

/// Backend driving the macOS `security` command, one subprocess per operation.
pub struct SecurityCli {
    program: PathBuf,
    keychain: Option<PathBuf>,
    full_errors: bool,
}

impl SecurityCli {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            keychain: None,
            full_errors: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            keychain: config.keychain.clone(),
            full_errors: config.full_errors,
            ..Self::new(config.security_path.clone())
        }
    }

    fn base_args(&self, subcommand: &str, credential: &Credential) -> Vec<OsString> {
        vec![
            subcommand.into(),
            "-a".into(),
            credential.account.clone().into(),
            "-s".into(),
            credential.service.clone().into(),
        ]
    }

    fn push_keychain(&self, args: &mut Vec<OsString>) {
        if let Some(keychain) = &self.keychain {
            args.push(keychain.clone().into_os_string());
        }
    }

    fn find_args(&self, credential: &Credential) -> Vec<OsString> {
        let mut args = self.base_args("find-generic-password", credential);
        args.push("-g".into());
        self.push_keychain(&mut args);
        args
    }

    fn add_args(
        &self,
        credential: &Credential,
        label: &str,
        password: &SecretString,
    ) -> Vec<OsString> {
        let mut args = self.base_args("add-generic-password", credential);
        args.push("-l".into());
        args.push(label.into());
        args.push("-w".into());
        args.push(password.expose_secret().into());
        args.push("-U".into());
        self.push_keychain(&mut args);
        args
    }

    fn delete_args(&self, credential: &Credential) -> Vec<OsString> {
        let mut args = self.base_args("delete-generic-password", credential);
        self.push_keychain(&mut args);
        args
    }

    /// Run `security` to completion. Returns its stderr on success.
    fn run(&self, args: &[OsString]) -> Result<Vec<u8>> {
        tracing::debug!(
            program = %self.program.display(),
            args = %redacted(args),
            "running security"
        );

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if output.status.success() {
            return Ok(output.stderr);
        }

        let status = output.status.code();
        tracing::debug!(?status, "security failed");
        Err(SecretToolError::ExternalTool {
            message: self.error_message(&output.stderr, status),
            status,
        })
    }

    fn error_message(&self, stderr: &[u8], status: Option<i32>) -> String {
        let text = String::from_utf8_lossy(stderr);
        let message = if self.full_errors {
            text.trim()
        } else {
            text.lines().next().unwrap_or("").trim_end()
        };

        if !message.is_empty() {
            return message.to_string();
        }
        match status {
            Some(code) => format!("security exited with status {}", code),
            None => "security was terminated by a signal".to_string(),
        }
    }
}

impl CredentialBackend for SecurityCli {
    fn find(&self, credential: &Credential, options: FindOptions) -> Result<SecretString> {
        if options.all || options.unlock {
            tracing::debug!(
                all = options.all,
                unlock = options.unlock,
                "find-generic-password has no equivalent, ignoring"
            );
        }
        let stderr = self.run(&self.find_args(credential))?;
        parse_password(&stderr)
    }

    fn add(&self, credential: &Credential, label: &str, password: &SecretString) -> Result<()> {
        self.run(&self.add_args(credential, label, password))?;
        Ok(())
    }

    fn delete(&self, credential: &Credential) -> Result<()> {
        self.run(&self.delete_args(credential))?;
        Ok(())
    }
}

/// Extract the password from `find-generic-password -g` output.
///
/// `security` prints either `password: "<value>"`, or `password: 0x<HEX>  "<escaped>"`
/// when the value holds non-printable bytes. A bare `password:` is an empty password.
pub fn parse_password(output: &[u8]) -> Result<SecretString> {
    let text =
        std::str::from_utf8(output).map_err(|_| unexpected("output is not valid UTF-8"))?;

    let value = text
        .lines()
        .find_map(|line| line.strip_prefix(PASSWORD_PREFIX))
        .ok_or_else(|| unexpected("no password line"))?;

    let value = match value.strip_prefix(' ') {
        Some(rest) => rest,
        None if value.is_empty() => value,
        None => return Err(unexpected("no password line")),
    };

    if value.is_empty() {
        return Ok(SecretString::new(String::new()));
    }

    if let Some(encoded) = value.strip_prefix("0x") {
        let digits = encoded.split_whitespace().next().unwrap_or("");
        let bytes = hex::decode(digits).map_err(|_| unexpected("malformed hex password"))?;
        let password =
            String::from_utf8(bytes).map_err(|_| unexpected("password is not valid UTF-8"))?;
        return Ok(SecretString::new(password));
    }

    match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(inner) => Ok(SecretString::new(inner.to_string())),
        None => Err(unexpected("password is not quoted")),
    }
}

fn unexpected(reason: &str) -> SecretToolError {
    SecretToolError::OutputFormatUnexpected(reason.to_string())
}

/// Render arguments for logging with the value after `-w` hidden.
fn redacted(args: &[OsString]) -> String {
    let mut out = Vec::with_capacity(args.len());
    let mut hide_next = false;
    for arg in args {
        if hide_next {
            out.push("<redacted>".to_string());
            hide_next = false;
            continue;
        }
        hide_next = arg == "-w";
        out.push(arg.to_string_lossy().into_owned());
    }
    out.join(" ")
}
