//! Interactive yes/no confirmation for mutating actions.

use inquire::Confirm;

/// Injectable confirmation capability, so dispatch can be exercised in
/// tests without a terminal.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Blocking terminal prompt backed by `inquire`.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        // An interrupted or unanswerable prompt counts as a refusal.
        Confirm::new(prompt).with_default(true).prompt().unwrap_or(false)
    }
}
