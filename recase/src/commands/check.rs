use clap::Args;
use eyre::Result;
use recase_core::Case;

use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Text to check (reads lines from stdin when omitted)
    pub inputs: Vec<String>,

    /// Expected case (defaults to the configured case)
    #[arg(short, long)]
    pub case: Option<Case>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, config: &Config) -> Result<()> {
        let case = self.case.unwrap_or(config.defaults.case);
        let inputs = super::read_inputs(&self.inputs)?;

        let report = ops::check(&inputs, case);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            tracing::debug!("{} input(s) failed the check", report.failures());
            std::process::exit(1);
        }

        Ok(())
    }
}
