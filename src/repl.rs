use crate::commands::{lookup, Flow, Session};
use crate::domain::constants::{FAREWELL, PROMPT, UNKNOWN_COMMAND, WELCOME};
use crate::services::input::normalize;
use std::io::{BufRead, Write};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The `exit` command ran.
    Exited,
    /// Input ran dry; treated like `exit`.
    EndOfInput,
}

/// Prompt, read, normalize, dispatch; until `exit` or end of input.
///
/// Fatal handler errors are returned as-is; the session is left exactly as
/// the failing handler left it.
pub fn run(
    session: &mut Session,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    writeln!(out, "{}", WELCOME)?;
    let mut buf = Vec::new();
    loop {
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", FAREWELL)?;
            tracing::info!("input closed, leaving");
            return Ok(Outcome::EndOfInput);
        }

        let verb = normalize(&String::from_utf8_lossy(&buf));
        match lookup(&verb) {
            Some(cmd) => {
                tracing::debug!(command = cmd.name, "dispatching");
                if (cmd.handler)(session, out)? == Flow::Exit {
                    return Ok(Outcome::Exited);
                }
            }
            None => writeln!(out, "{}", UNKNOWN_COMMAND)?,
        }
    }
}
