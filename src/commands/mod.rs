//! Command handler layer.
//!
//! This module owns the verb registry and the session state handlers work on.
//!
//! ## Files
//! - `general.rs` — help/exit.
//! - `runtime.rs` — map/mapb location paging.
//!
//! ## Principles
//! - Handlers receive the session and an output sink, nothing global.
//! - Ending the session is a returned `Flow::Exit`, never a process exit.
//! - Delegate paging and printing to `services/*`.

pub mod general;
pub mod runtime;

use crate::catalog::CatalogSource;
use crate::services::pager::Pager;
use std::io::Write;

/// What the driver should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub type Handler = fn(&mut Session, &mut dyn Write) -> anyhow::Result<Flow>;

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

/// Everything a handler may touch during one REPL run.
pub struct Session {
    pub pager: Pager,
    pub catalog: Box<dyn CatalogSource>,
}

impl Session {
    pub fn new(catalog: Box<dyn CatalogSource>) -> Self {
        Self {
            pager: Pager::new(),
            catalog,
        }
    }
}

static COMMANDS: [Command; 4] = [
    Command {
        name: "help",
        description: "Displays a help message",
        handler: general::help,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        handler: general::exit,
    },
    Command {
        name: "map",
        description: "Displays the names of 20 location areas in the Pokemon world. Each subsequent command displays the next 20 locations.",
        handler: runtime::map,
    },
    Command {
        name: "mapb",
        description: "Similar to the map command, but displays the previous 20 locations. If on the first page, it instead prints an error",
        handler: runtime::map_back,
    },
];

/// Registered commands in registration order.
pub fn commands() -> &'static [Command] {
    &COMMANDS
}

pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}
