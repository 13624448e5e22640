//! Declarative argv parsing with in-place token permutation.
//!
//! Options and operand slots are declared up front with occurrence bounds;
//! the parser then steps through the raw tokens, matches option names by
//! prefix, claims values and operands, and reorders references inside its
//! token table so every claimed group ends up contiguous. Declarations hold
//! index views into that table instead of copies.
//!
//! ```
//! use optview::{Bounds, Operand, Opt, Parser};
//!
//! let opts = vec![Opt::new()
//!     .short("v")
//!     .long("verbose")
//!     .bounds(Bounds::at_most(3))];
//! let opers = vec![Operand::new("file").bounds(Bounds::any())];
//!
//! let mut parser = Parser::new(opts, opers, ["-v", "input.txt"]);
//! parser.run()?;
//!
//! assert_eq!(parser.opts()[0].occurrences(), 1);
//! assert_eq!(parser.values(parser.opers()[0].view()), ["input.txt"]);
//! # Ok::<(), optview::Error>(())
//! ```

mod bounds;
mod decl;
mod error;
mod parser;
mod sink;
mod usage;

pub use bounds::Bounds;
pub use decl::{Form, Operand, Opt, View};
pub use error::{Error, Result};
pub use parser::Parser;
pub use sink::{BufSink, IoSink, Sink};
pub use usage::{put_usage, Format};

/// Split a `key=value` token at its first `=`.
pub fn keyval(s: &str) -> Option<(&str, &str)> {
    s.split_once('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyval_splits_at_the_first_equals() {
        assert_eq!(keyval("a=b"), Some(("a", "b")));
        assert_eq!(keyval("a=b=c"), Some(("a", "b=c")));
        assert_eq!(keyval("="), Some(("", "")));
        assert_eq!(keyval("plain"), None);
    }
}
