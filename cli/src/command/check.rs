use crate::util::registry;
use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug)]
/// Validate every known mapping table against its contract.
pub struct Check {}

impl Check {
    pub fn run(self) -> Result<()> {
        let mut failures = 0;
        for entry in registry() {
            let outcome = (entry.validate)().and_then(|_| (entry.expect_contract)());
            match outcome {
                Ok(()) => eprintln!("{} {}", "OK".green(), entry.table),
                Err(e) => {
                    failures += 1;
                    eprintln!("{} {}: {}", "FAILED".red(), entry.table, e);
                }
            }
        }
        if failures > 0 {
            bail!("{failures} mapping(s) failed validation");
        }
        Ok(())
    }
}
