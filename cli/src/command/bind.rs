use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use tinyorm::model::Entity;
use tinyorm::{bind_all, Config, Person, Row};

#[derive(Parser, Debug)]
/// Bind JSON rows (column name -> value) into `Person` records.
pub struct Bind {
    /// File holding a JSON object or an array of objects. Reads stdin if omitted.
    path: Option<PathBuf>,

    /// Print the bound records as JSON rows instead of debug output
    #[clap(long)]
    json: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<Row>),
    One(Row),
}

impl Input {
    fn into_rows(self) -> Vec<Row> {
        match self {
            Input::Many(rows) => rows,
            Input::One(row) => vec![row],
        }
    }
}

impl Bind {
    pub fn run(self, config: &Config) -> Result<()> {
        let buf = match &self.path {
            Some(path) => {
                std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
            }
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let people = parse_and_bind(&buf, config)?;
        tracing::debug!(count = people.len(), "Bound rows");
        for person in &people {
            if self.json {
                println!("{}", serde_json::to_string(&person.to_row())?);
            } else {
                println!("{person:?}");
            }
        }
        Ok(())
    }
}

fn parse_and_bind(buf: &str, config: &Config) -> Result<Vec<Person>> {
    let input: Input = serde_json::from_str(buf).context("Input is not a JSON row or array of rows")?;
    let rows = input.into_rows();
    Ok(bind_all(&rows, config)?)
}
