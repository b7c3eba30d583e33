use clap::Args;
use eyre::Result;
use recase_core::Case;

use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Text to convert (reads lines from stdin when omitted)
    pub inputs: Vec<String>,

    /// Target case: camel, pascal, kebab or dot (defaults to the configured case)
    #[arg(short, long)]
    pub case: Option<Case>,

    /// Parse each input as a JSON value
    #[arg(long)]
    pub json: bool,
}

impl ConvertCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let case = self.case.unwrap_or(config.defaults.case);
        let json = self.json || config.defaults.json;
        let inputs = super::read_inputs(&self.inputs)?;

        let report = ops::convert(&inputs, case, json)?;
        tracing::debug!(
            "converted {} input(s) to {} case",
            report.outputs.len(),
            report.case
        );
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
