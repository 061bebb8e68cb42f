//! Command implementations for the Javelin CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cli::args::{Command, ExpandArgs, JavelinArgs, OutputFormat};
use crate::error::Result;
use crate::expansion::QueryExpander;

/// Execute a CLI command.
pub fn execute_command(args: JavelinArgs) -> Result<()> {
    match &args.command {
        Command::Expand(expand_args) => expand_query(expand_args.clone(), &args),
    }
}

/// Run one expansion round and print the result.
fn expand_query(args: ExpandArgs, cli_args: &JavelinArgs) -> Result<()> {
    let relevant = load_documents(&args.relevant)?;
    let irrelevant = match &args.irrelevant {
        Some(path) => load_documents(path)?,
        None => Vec::new(),
    };

    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} relevant and {} irrelevant documents",
            relevant.len(),
            irrelevant.len()
        );
    }

    let expander = QueryExpander::new(&args.query, &relevant, &irrelevant)?;
    let expansion = expander.expansion();

    match cli_args.output_format {
        OutputFormat::Json => {
            let json = if cli_args.pretty {
                serde_json::to_string_pretty(&expansion)?
            } else {
                serde_json::to_string(&expansion)?
            };
            println!("{json}");
        }
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!("Query:          {}", expansion.query);
                println!("Added terms:    {}", expansion.added_terms.join(" "));
                println!("Expanded query: {}", expansion.expanded_query);
                println!("Final query:    {}", expansion.final_query);
            } else {
                println!("{}", expansion.final_query);
            }
        }
    }

    Ok(())
}

/// Load documents from a file, one document per line.
///
/// Blank lines are skipped.
fn load_documents(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut documents = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            documents.push(line);
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_documents_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "machine learning tutorial").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  ").unwrap();
        writeln!(file, "learning machine basics").unwrap();

        let documents = load_documents(file.path()).unwrap();
        assert_eq!(
            documents,
            vec![
                "machine learning tutorial".to_string(),
                "learning machine basics".to_string(),
            ]
        );
    }

    #[test]
    fn test_load_documents_missing_file() {
        let result = load_documents(Path::new("/nonexistent/docs.txt"));
        assert!(result.is_err());
    }
}
