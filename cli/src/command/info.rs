use crate::util::registry;
use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use tinyorm_core::mapping::ColumnDescription;

#[derive(Parser, Debug)]
/// Print the field-to-column mapping of every known model.
pub struct Info {
    /// Only show this table
    #[clap(long, short)]
    table: Option<String>,

    /// Print the mappings as JSON
    #[clap(long)]
    json: bool,
}

impl Info {
    pub fn run(self) -> Result<()> {
        let mut tables = registry().into_iter().map(|r| (r.describe)()).collect::<Vec<_>>();
        if let Some(name) = &self.table {
            tables.retain(|t| t.table == name.as_str());
            if tables.is_empty() {
                bail!("No model is mapped to table {name}");
            }
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(&tables)?);
            return Ok(());
        }
        for table in tables {
            println!("Table: {}", table.table.bold());
            for column in table.columns {
                println!(
                    "  {} -> {}: {}",
                    column.field,
                    column.column.cyan(),
                    column_definition(&column)
                );
            }
        }
        Ok(())
    }
}

/// Type and constraints, e.g. `INTEGER NOT NULL PRIMARY KEY`.
fn column_definition(column: &ColumnDescription) -> String {
    let mut parts = vec![column.ty.to_string()];
    if !column.nullable {
        parts.push("NOT NULL".to_string());
    }
    if column.primary_key {
        parts.push("PRIMARY KEY".to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyorm::{describe, Person};

    #[test]
    fn test_column_definition() {
        let table = describe::<Person>();
        let defs = table.columns.iter().map(column_definition).collect::<Vec<_>>();
        assert_eq!(
            defs,
            ["INTEGER NOT NULL PRIMARY KEY", "TEXT NOT NULL", "TEXT NOT NULL", "INTEGER"]
        );
    }
}
