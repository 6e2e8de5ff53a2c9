pub mod actions;
pub mod commands;
pub mod display;
pub mod prompt;

pub use actions::{Action, ListTarget};
pub use commands::{CliArgs, OrgType};
pub use prompt::{Confirmer, TerminalConfirmer};
