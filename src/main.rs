use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use cfg_lab::paths::{self, Graph};
use cfg_lab::{Grammar, GrammarConfig};

/// Educational CFG toolset: interactive grammar session and a
/// shortest-path demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum expansion depth before generation is aborted
    #[arg(long, default_value_t = 100)]
    max_depth: usize,

    /// Number of sentences to generate after the membership check
    #[arg(long, default_value_t = 2)]
    count: usize,

    /// Save the entered grammar as JSON before exiting
    #[arg(long)]
    save: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the shortest path between two nodes of a JSON graph
    Route {
        /// Path to a JSON adjacency map, e.g. {"A": [["B", 1]]}
        graph_file: PathBuf,

        /// Start node
        start: String,

        /// End node
        end: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Route {
            graph_file,
            start,
            end,
        }) => run_route(graph_file, start, end),
        None => run_session(&cli),
    }
}

/// Interactive grammar session over stdin/stdout, in the fixed protocol
/// order: symbol declarations, start symbol, productions until `fin`, a
/// membership test string, then generated sentences.
fn run_session(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let non_terminal_line = prompt(
        &mut input,
        "Enter the non-terminal symbols separated by commas (example: S,A,B): ",
    )?;
    let terminal_line = prompt(
        &mut input,
        "Enter the terminal symbols separated by commas (example: a,b,c): ",
    )?;
    let start_line = prompt(&mut input, "Enter the start symbol: ")?;

    let config = GrammarConfig {
        max_expansion_depth: cli.max_depth,
    };
    let mut grammar = Grammar::with_config(start_line.trim(), config);
    grammar.declare_non_terminals(&non_terminal_line);
    grammar.declare_terminals(&terminal_line);

    println!("Enter the productions (format: NonTerminal->alternatives separated by '|'). Example: S->aS|bA|ε");
    println!("Type 'fin' when done.");

    loop {
        let line = read_line(&mut input)?;
        if line.trim().eq_ignore_ascii_case(cfg_lab::END_SENTINEL) {
            break;
        }
        grammar.add_production_line(&line)?;
    }

    let test_string = prompt(
        &mut input,
        "Enter a string to check against the grammar: ",
    )?;
    if grammar.is_terminal_string(test_string.trim()) {
        println!("The string belongs to the grammar.");
    } else {
        println!("The string does NOT belong to the grammar.");
    }

    println!("\nGenerating {} sentences:", cli.count);
    for _ in 0..cli.count {
        match grammar.generate() {
            Ok(sentence) => println!("{}", sentence),
            Err(err) => eprintln!("generation failed: {}", err),
        }
    }

    if let Some(path) = &cli.save {
        grammar.to_json_file(path)?;
        println!("Saved grammar to {}", path.display());
    }

    Ok(())
}

fn run_route(graph_file: &Path, start: &str, end: &str) -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::from_json_file(graph_file)?;
    let (distance, path) = paths::shortest_path(&graph, start, end);

    if distance == paths::INFINITY {
        println!("{} is unreachable from {}.", end, start);
        return Ok(());
    }

    println!("The shortest distance from {} to {} is {}.", start, end, distance);
    println!("The shortest path is: {}.", path.join(" -> "));
    Ok(())
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of input",
        ));
    }
    // Strip the trailing newline, keep interior whitespace
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
