use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretToolError {
    #[error("Missing arguments")]
    MissingArguments,

    #[error("Missing flag label")]
    MissingLabel,

    /// `security` exited non-zero. `status` is `None` when it was killed by a signal.
    #[error("{message}")]
    ExternalTool { message: String, status: Option<i32> },

    #[error("Unexpected output from security: {0}")]
    OutputFormatUnexpected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SecretToolError {
    /// Process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SecretToolError::ExternalTool {
                status: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
