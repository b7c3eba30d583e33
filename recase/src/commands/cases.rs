use clap::Args;
use eyre::Result;

use crate::{
    ops::{self, cases::DEFAULT_EXAMPLE},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CasesCommand {
    /// Sample text to convert in every case
    #[arg(default_value = DEFAULT_EXAMPLE)]
    pub example: String,
}

impl CasesCommand {
    pub fn run(&self) -> Result<()> {
        ops::cases(&self.example).render(&mut TerminalOutput::new());
        Ok(())
    }
}
