use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use joinfix::host::table::{TableOptions, process_table};
use joinfix::rewrite::rewriter::rewrite_with_fixed_join_order;

#[derive(Parser)]
#[command(author, version, about = "joinfix - rewrite SQL queries to a fixed join order")]
struct Cli {
    /// Field delimiter for table input/output
    #[arg(short, long, default_value_t = '|')]
    delimiter: char,

    /// Abort on the first failed row instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a delimited table, appending a fixed_query column
    File {
        /// Input table path
        input: PathBuf,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite a single join order / query pair and print the result
    Query {
        /// Join order description, e.g. (a,((b,c),d))
        join_order: String,

        /// Flat SQL query to rewrite
        query: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = TableOptions {
        delimiter: cli.delimiter,
        fail_fast: cli.fail_fast,
    };

    match cli.command {
        Commands::File { input, output } => {
            let file = File::open(&input)
                .with_context(|| format!("failed to open input table {}", input.display()))?;
            let reader = BufReader::new(file);

            let summary = match output {
                Some(path) => {
                    let out = File::create(&path).with_context(|| {
                        format!("failed to create output file {}", path.display())
                    })?;
                    process_table(reader, BufWriter::new(out), &options)
                }
                None => {
                    let stdout = io::stdout();
                    process_table(reader, BufWriter::new(stdout.lock()), &options)
                }
            }
            .with_context(|| format!("failed to process table {}", input.display()))?;

            log::info!(
                "rewrote {} rows, skipped {}",
                summary.rewritten,
                summary.skipped
            );
        }
        Commands::Query { join_order, query } => {
            let fixed_query = rewrite_with_fixed_join_order(&join_order, &query)
                .with_context(|| format!("failed to rewrite query for join order {join_order}"))?;
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", fixed_query)?;
        }
    }

    Ok(())
}
