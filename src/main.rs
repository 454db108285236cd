use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use atm_ledger::{atm::Atm, bank::Bank, config::Config, logging, prompt::ConsolePrompt, summary};
use clap::Parser;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config.log_level);

    let stdin = io::stdin();
    let prompt = ConsolePrompt::new(stdin.lock(), io::stdout());

    let mut atm = Atm::new(Bank::new(), prompt);
    atm.run()?;

    if let Some(path) = config.summary {
        let bank = atm.into_bank();

        if path.as_os_str() == "-" {
            summary::write_summary(&bank, io::stdout()).context("Failed to write summary.")?;
        } else {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}.", path.display()))?;
            summary::write_summary(&bank, file).context("Failed to write summary.")?;
        }
    }

    Ok(())
}
