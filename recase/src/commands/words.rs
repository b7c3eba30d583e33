use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct WordsCommand {
    /// Text to split (reads lines from stdin when omitted)
    pub inputs: Vec<String>,
}

impl WordsCommand {
    pub fn run(&self) -> Result<()> {
        let inputs = super::read_inputs(&self.inputs)?;
        ops::words(&inputs).render(&mut TerminalOutput::new());
        Ok(())
    }
}
