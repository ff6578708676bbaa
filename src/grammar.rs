use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::{GrammarError, Result};

/// The distinguished empty-production alternative
pub const EPSILON: &str = "ε";

/// Sentinel line that ends the production section of the input protocol
pub const END_SENTINEL: &str = "fin";

/// Configuration options for grammar behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Maximum expansion depth before generation is aborted
    pub max_expansion_depth: usize,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        GrammarConfig {
            max_expansion_depth: 100,
        }
    }
}

/// A context-free grammar: declared symbol sets, a start symbol and a
/// production table mapping non-terminals to ordered alternative lists.
///
/// The model is populated once (by [`Grammar::from_reader`] or the
/// declaration methods) and is read-only afterwards; generation borrows
/// `&self` plus a caller-supplied RNG, so a fully loaded grammar can be
/// queried from several threads without further synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// Declared non-terminal symbols
    non_terminals: HashSet<String>,
    /// Declared terminal symbols
    terminals: HashSet<String>,
    /// The symbol generation starts from
    start_symbol: String,
    /// Ordered alternatives per non-terminal; re-declaration replaces
    productions: HashMap<String, Vec<String>>,
    /// Configuration options
    #[serde(default)]
    config: GrammarConfig,
}

impl Grammar {
    /// Create a new empty grammar with a specified start symbol
    pub fn new(start_symbol: &str) -> Self {
        Grammar::with_config(start_symbol, GrammarConfig::default())
    }

    /// Create a new grammar with custom configuration
    pub fn with_config(start_symbol: &str, config: GrammarConfig) -> Self {
        Grammar {
            non_terminals: HashSet::new(),
            terminals: HashSet::new(),
            start_symbol: start_symbol.to_string(),
            productions: HashMap::new(),
            config,
        }
    }

    /// Read a complete grammar from a line-oriented reader.
    ///
    /// The protocol, in strict order: a comma-separated non-terminal list,
    /// a comma-separated terminal list, the start symbol, then production
    /// lines `LHS->alt1|alt2|...` until a line whose trimmed, case-folded
    /// value is `fin`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, GrammarConfig::default())
    }

    /// Same as [`Grammar::from_reader`] with an explicit configuration
    pub fn from_reader_with_config<R: BufRead>(reader: R, config: GrammarConfig) -> Result<Self> {
        let mut lines = reader.lines();

        let non_terminal_line = next_line(&mut lines, "non-terminal symbols")?;
        let terminal_line = next_line(&mut lines, "terminal symbols")?;
        let start_line = next_line(&mut lines, "start symbol")?;

        let mut grammar = Grammar::with_config(start_line.trim(), config);
        grammar.declare_non_terminals(&non_terminal_line);
        grammar.declare_terminals(&terminal_line);

        loop {
            let line = next_line(&mut lines, "production lines")?;
            if line.trim().eq_ignore_ascii_case(END_SENTINEL) {
                break;
            }
            // A malformed line aborts the load; anything parsed so far
            // stays in place (no rollback).
            grammar.add_production_line(&line)?;
        }

        Ok(grammar)
    }

    /// Load a grammar previously saved as JSON
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let grammar = serde_json::from_reader(BufReader::new(file))?;
        Ok(grammar)
    }

    /// Save this grammar as JSON
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Declare non-terminal symbols from a comma-separated list.
    ///
    /// Elements are kept verbatim, matching the interactive protocol; no
    /// per-element trimming is applied.
    pub fn declare_non_terminals(&mut self, list: &str) {
        self.non_terminals
            .extend(list.split(',').map(str::to_string));
    }

    /// Declare terminal symbols from a comma-separated list
    pub fn declare_terminals(&mut self, list: &str) {
        self.terminals.extend(list.split(',').map(str::to_string));
    }

    /// Parse a production line of the form `LHS->alt1|alt2|...`.
    ///
    /// The line is split on the first `->`; the left-hand symbol is trimmed
    /// of surrounding whitespace and the right-hand side is split on `|`
    /// into an ordered alternative list. No validation is performed that
    /// any of the symbols involved were declared.
    pub fn parse_production_line(line: &str) -> Result<(String, Vec<String>)> {
        // Compiled once; the lazy `(.*?)` splits on the first `->`
        static PRODUCTION_REGEX: OnceLock<Regex> = OnceLock::new();
        let production_regex =
            PRODUCTION_REGEX.get_or_init(|| Regex::new(r"^(.*?)->(.*)$").unwrap());

        let captures = production_regex
            .captures(line)
            .ok_or_else(|| GrammarError::MalformedProduction(line.to_string()))?;

        let non_terminal = captures[1].trim().to_string();
        let alternatives = captures[2].split('|').map(str::to_string).collect();

        Ok((non_terminal, alternatives))
    }

    /// Parse a production line and install it in the table
    pub fn add_production_line(&mut self, line: &str) -> Result<()> {
        let (non_terminal, alternatives) = Self::parse_production_line(line)?;
        self.set_productions(&non_terminal, alternatives)
    }

    /// Set the alternative list for a non-terminal.
    ///
    /// Replace semantics: a later call for the same left-hand symbol
    /// overwrites the whole previous list, it does not merge.
    pub fn set_productions(&mut self, non_terminal: &str, alternatives: Vec<String>) -> Result<()> {
        if alternatives.is_empty() {
            return Err(GrammarError::EmptyProduction(non_terminal.to_string()));
        }
        self.productions
            .insert(non_terminal.to_string(), alternatives);
        Ok(())
    }

    /// Check whether every character of `s` is a declared terminal.
    ///
    /// This is character-wise set membership, not derivability from the
    /// start symbol: a terminal-only string no production sequence can
    /// actually derive still reports `true`. The empty string is vacuously
    /// a member.
    pub fn is_terminal_string(&self, s: &str) -> bool {
        s.chars().all(|c| self.terminals.contains(&c.to_string()))
    }

    /// Generate one sentence from the start symbol using a thread-local RNG
    pub fn generate(&self) -> Result<String> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate one sentence from the start symbol with a caller RNG
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        self.generate_from_with(&self.start_symbol, rng)
    }

    /// Generate one sentence starting from an arbitrary symbol
    pub fn generate_from(&self, symbol: &str) -> Result<String> {
        self.generate_from_with(symbol, &mut rand::thread_rng())
    }

    /// Generate one sentence starting from an arbitrary symbol with a
    /// caller RNG; a seeded RNG makes sampling deterministic
    pub fn generate_from_with<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R) -> Result<String> {
        self.expand(symbol, rng, 0)
    }

    /// Recursively expand a symbol into a terminal string
    fn expand<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R, depth: usize) -> Result<String> {
        // Base case: a symbol with no productions is emitted literally,
        // whether or not it was declared as a non-terminal.
        let Some(alternatives) = self.productions.get(symbol) else {
            return Ok(symbol.to_string());
        };

        if depth >= self.config.max_expansion_depth {
            return Err(GrammarError::ExpansionLimitExceeded {
                symbol: symbol.to_string(),
                limit: self.config.max_expansion_depth,
            });
        }

        // Uniform choice among the ordered alternatives
        let alternative = &alternatives[rng.gen_range(0..alternatives.len())];

        if alternative == EPSILON {
            return Ok(String::new());
        }

        // Character-wise scan: only single-character members of the
        // declared non-terminal set recurse; everything else is appended
        // literally. Multi-character symbols embedded in a right-hand side
        // are never recognized as units.
        let mut result = String::new();
        for c in alternative.chars() {
            let token = c.to_string();
            if self.non_terminals.contains(&token) {
                result.push_str(&self.expand(&token, rng, depth + 1)?);
            } else {
                result.push(c);
            }
        }

        Ok(result)
    }

    /// Check if the grammar has productions for a specific symbol
    pub fn has_productions(&self, symbol: &str) -> bool {
        self.productions.contains_key(symbol)
    }

    /// Get a reference to the production table
    pub fn productions(&self) -> &HashMap<String, Vec<String>> {
        &self.productions
    }

    /// Get the declared non-terminal set
    pub fn non_terminals(&self) -> &HashSet<String> {
        &self.non_terminals
    }

    /// Get the declared terminal set
    pub fn terminals(&self) -> &HashSet<String> {
        &self.terminals
    }

    /// Get the start symbol
    pub fn start_symbol(&self) -> &str {
        &self.start_symbol
    }

    /// Get a reference to the grammar's configuration
    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Set a new configuration
    pub fn set_config(&mut self, config: GrammarConfig) {
        self.config = config;
    }
}

fn next_line<I>(lines: &mut I, what: &'static str) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(GrammarError::UnexpectedEof(what)),
    }
}

/// Builder for constructing Grammar instances
pub struct GrammarBuilder {
    grammar: Grammar,
}

impl GrammarBuilder {
    /// Create a new grammar builder with default config
    pub fn new(start_symbol: &str) -> Self {
        GrammarBuilder {
            grammar: Grammar::new(start_symbol),
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: GrammarConfig) -> Self {
        self.grammar.config = config;
        self
    }

    /// Declare non-terminal symbols
    pub fn non_terminals(mut self, symbols: &[&str]) -> Self {
        self.grammar
            .non_terminals
            .extend(symbols.iter().map(|s| s.to_string()));
        self
    }

    /// Declare terminal symbols
    pub fn terminals(mut self, symbols: &[&str]) -> Self {
        self.grammar
            .terminals
            .extend(symbols.iter().map(|s| s.to_string()));
        self
    }

    /// Set the alternative list for a non-terminal (replace semantics)
    pub fn productions(mut self, non_terminal: &str, alternatives: &[&str]) -> Self {
        // Ignore errors in builder pattern for simplicity
        let _ = self.grammar.set_productions(
            non_terminal,
            alternatives.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Build the grammar
    pub fn build(self) -> Grammar {
        self.grammar
    }
}
