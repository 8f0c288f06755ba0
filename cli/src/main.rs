use anyhow::Result;
use bookrank_cli::{demo_books, load_books, rank_to_hits};
use bookrank_core::{build_index, rank_by_relevance, Book};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bookrank")]
#[command(about = "Build a word index over books and rank them by query relevance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the inverted index from input books and print it
    Index {
        /// Input path (JSON/JSONL file or directory)
        #[arg(long)]
        input: PathBuf,
    },
    /// Rank input books by relevance to a query
    Rank {
        /// Input path (JSON/JSONL file or directory)
        #[arg(long)]
        input: PathBuf,
        /// Query word to rank against
        #[arg(long)]
        query: String,
        /// Limit output to the top N books
        #[arg(long)]
        top: Option<usize>,
        /// Emit results as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the built-in three-book example
    Demo {
        /// Query word to rank against
        #[arg(long, default_value = "Epic")]
        query: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Index { input } => {
            let books = load_books(&input)?;
            let index = build_index(&books);
            print!("{}", index.render(&books));
        }
        Commands::Rank { input, query, top, json } => {
            let books = load_books(&input)?;
            print_ranked(&books, &query, top, json)?;
        }
        Commands::Demo { query } => {
            let books = demo_books();
            let index = build_index(&books);
            print!("{}", index.render(&books));
            println!();
            print_ranked(&books, &query, None, false)?;
        }
    }
    Ok(())
}

fn print_ranked(books: &[Book], query: &str, top: Option<usize>, json: bool) -> Result<()> {
    if json {
        let hits = rank_to_hits(books, query);
        let shown = top.unwrap_or(hits.len()).min(hits.len());
        println!("{}", serde_json::to_string_pretty(&hits[..shown])?);
        return Ok(());
    }
    let ranked = rank_by_relevance(books, query);
    let shown = top.unwrap_or(ranked.len()).min(ranked.len());
    for (rank, book) in ranked[..shown].iter().enumerate() {
        println!("{}. {} [{} matches]", rank + 1, book, book.term_count(query));
    }
    Ok(())
}
