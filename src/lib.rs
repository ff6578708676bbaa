//! cfg-lab is a small educational context-free grammar toolset.
//!
//! A [`Grammar`] holds declared terminal and non-terminal symbol sets, a
//! start symbol and a production table. It can check whether a string is
//! composed only of terminal characters and can generate random sentences
//! by recursive expansion, with a configurable depth bound so recursive
//! grammars fail cleanly instead of overflowing the stack.
//!
//! The [`paths`] module carries the companion demonstration: textbook
//! Dijkstra shortest paths over a weighted directed graph.
//!
//! # Example
//!
//! ```rust
//! use cfg_lab::GrammarBuilder;
//!
//! // The language a*b
//! let grammar = GrammarBuilder::new("S")
//!     .non_terminals(&["S"])
//!     .terminals(&["a", "b"])
//!     .productions("S", &["aS", "b"])
//!     .build();
//!
//! assert!(grammar.is_terminal_string("aab"));
//! assert!(!grammar.is_terminal_string("aB"));
//!
//! let sentence = grammar.generate().unwrap();
//! assert!(sentence.ends_with('b'));
//! ```

pub mod grammar;
pub mod paths;
pub mod utils;

pub use grammar::{EPSILON, END_SENTINEL, Grammar, GrammarBuilder, GrammarConfig};
pub use paths::{Graph, INFINITY, shortest_path};
pub use utils::{GrammarError, GraphError, GraphResult, Result};
