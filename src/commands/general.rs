use super::{commands, Flow, Session};
use crate::domain::constants::FAREWELL;
use crate::services::output::print_help;
use std::io::Write;

pub fn help(_session: &mut Session, out: &mut dyn Write) -> anyhow::Result<Flow> {
    print_help(out, commands())?;
    Ok(Flow::Continue)
}

pub fn exit(_session: &mut Session, out: &mut dyn Write) -> anyhow::Result<Flow> {
    writeln!(out, "{}", FAREWELL)?;
    Ok(Flow::Exit)
}
