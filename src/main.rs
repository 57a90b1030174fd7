use clap::{Parser as ClapParser, Subcommand};
use qfilter::Dialect;
use qfilter::cli::{self, BatchOptions, CliError, ConvertOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "qfilter")]
#[command(about = "qfilter - Compile filter expressions into document-database queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a filter expression into a query object
    Convert {
        /// The expression (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Operator spelling of the output
        #[arg(short, long, value_enum, default_value_t = Dialect::Plain)]
        dialect: Dialect,
    },

    /// Show the tokenized skeleton and token table of an expression
    Tokenize {
        /// The expression (reads from stdin if not provided)
        query: Option<String>,
    },

    /// Convert a JSON array of expressions
    Batch {
        /// JSON array input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Operator spelling of the output
        #[arg(short, long, value_enum, default_value_t = Dialect::Plain)]
        dialect: Dialect,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'qfilter docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            query,
            pretty,
            dialect,
        } => run_convert(query, pretty, dialect),
        Commands::Tokenize { query } => run_tokenize(query),
        Commands::Batch {
            input,
            pretty,
            dialect,
        } => run_batch(input, pretty, dialect),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Argument if given, else piped stdin, else nothing.
fn read_input(arg: Option<String>) -> Result<Option<String>, CliError> {
    match arg {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_string()))
        }
        None => Ok(None),
    }
}

fn run_convert(query: Option<String>, pretty: bool, dialect: Dialect) -> Result<(), CliError> {
    let query = read_input(query)?.ok_or(CliError::NoInput)?;
    let output = cli::execute_convert(&ConvertOptions { query, dialect });
    println!("{}", cli::render(&output, pretty));
    Ok(())
}

fn run_tokenize(query: Option<String>) -> Result<(), CliError> {
    let query = read_input(query)?.ok_or(CliError::NoInput)?;
    print!("{}", cli::execute_tokenize(&query));
    Ok(())
}

fn run_batch(input: Option<String>, pretty: bool, dialect: Dialect) -> Result<(), CliError> {
    let options = BatchOptions {
        input: read_input(input)?,
        dialect,
    };
    let output = cli::execute_batch(&options)?;
    println!("{}", cli::render(&output, pretty));
    Ok(())
}
