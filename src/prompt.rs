use std::io::{self, BufRead, IsTerminal};

use secrecy::SecretString;
use zeroize::Zeroize;

/// Read a password from stdin: hidden input on a terminal, one line otherwise.
pub fn read_password(prompt: &str) -> io::Result<SecretString> {
    if io::stdin().is_terminal() {
        // rpassword restores echo on drop, including on error.
        let password = rpassword::prompt_password(prompt)?;
        return Ok(SecretString::new(password));
    }

    read_line(&mut io::stdin().lock())
}

/// Read one terminated line and strip the terminator.
/// End of input before a `\n` is an `UnexpectedEof` error; a line that is not
/// UTF-8 is an `InvalidData` error.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<SecretString> {
    let mut line = Vec::new();
    if let Err(e) = reader.read_until(b'\n', &mut line) {
        line.zeroize();
        return Err(e);
    }

    if line.last() != Some(&b'\n') {
        line.zeroize();
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input before a line terminator",
        ));
    }

    line.pop();
    if line.last() == Some(&b'\r') {
        line.pop();
    }

    match String::from_utf8(line) {
        Ok(password) => Ok(SecretString::new(password)),
        Err(e) => {
            e.into_bytes().zeroize();
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "password is not valid UTF-8",
            ))
        }
    }
}
