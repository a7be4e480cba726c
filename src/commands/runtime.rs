use super::{Flow, Session};
use crate::domain::constants::AT_FIRST_PAGE;
use crate::services::output::print_page;
use std::io::Write;

pub fn map(session: &mut Session, out: &mut dyn Write) -> anyhow::Result<Flow> {
    let page = session.pager.advance();
    let printed = print_page(out, session.catalog.as_ref(), page)?;
    tracing::debug!(page, printed, "listed page");
    Ok(Flow::Continue)
}

pub fn map_back(session: &mut Session, out: &mut dyn Write) -> anyhow::Result<Flow> {
    let page = match session.pager.retreat() {
        Ok(page) => page,
        Err(_) => {
            writeln!(out, "{}", AT_FIRST_PAGE)?;
            return Ok(Flow::Continue);
        }
    };
    let printed = print_page(out, session.catalog.as_ref(), page)?;
    tracing::debug!(page, printed, "listed page");
    Ok(Flow::Continue)
}
