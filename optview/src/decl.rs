//! Option and operand declarations, and the index views the parser fills in.

use crate::bounds::Bounds;

/// The two name forms an option may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Short = 0,
    Long = 1,
}

/// An index span into the parser's shared token table.
///
/// `start` is `None` until the view claims its first token. A flag option
/// keeps `start == None` while `len` counts its occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct View {
    pub(crate) start: Option<usize>,
    pub(crate) len: usize,
}

impl View {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shift the view right by one if its start index lies in `[lo, hi]`.
    /// Called after a block move so the view keeps addressing the same
    /// logical tokens.
    pub(crate) fn bump(&mut self, lo: usize, hi: usize) {
        if let Some(s) = self.start {
            if s >= lo && s <= hi {
                self.start = Some(s + 1);
            }
        }
    }
}

/// A named option declaration: short/long name sets, whether a value must be
/// attached, bounds on the occurrence or claimed-value count, and the view of
/// the values claimed so far.
#[derive(Debug, Clone, Default)]
pub struct Opt {
    pub(crate) names: [Vec<String>; 2],
    pub(crate) req: bool,
    pub(crate) value_name: Option<String>,
    pub(crate) bounds: Bounds,
    pub(crate) val: View,
}

impl Opt {
    pub fn new() -> Self {
        Opt::default()
    }

    /// Add a short-form name (no leading dash).
    pub fn short(mut self, name: &str) -> Self {
        self.names[Form::Short as usize].push(name.to_string());
        self
    }

    /// Add a long-form name (no leading dashes).
    pub fn long(mut self, name: &str) -> Self {
        self.names[Form::Long as usize].push(name.to_string());
        self
    }

    /// The option requires a value.
    pub fn value(mut self) -> Self {
        self.req = true;
        self
    }

    /// The option requires a value; `name` is its placeholder in usage output.
    pub fn value_named(mut self, name: &str) -> Self {
        self.req = true;
        self.value_name = Some(name.to_string());
        self
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn names(&self, form: Form) -> &[String] {
        &self.names[form as usize]
    }

    pub fn takes_value(&self) -> bool {
        self.req
    }

    /// How often the option occurred. For value-taking options this equals
    /// the number of claimed values plus any occurrence whose value is still
    /// missing.
    pub fn occurrences(&self) -> usize {
        self.val.len
    }

    /// The claimed-values view; resolve it with [`crate::Parser::values`].
    pub fn view(&self) -> View {
        self.val
    }
}

/// A positional operand slot: a display name, bounds on how many tokens it
/// may consume, and the view the distributor assigns on completion.
#[derive(Debug, Clone, Default)]
pub struct Operand {
    pub(crate) name: String,
    pub(crate) bounds: Bounds,
    pub(crate) val: View,
}

impl Operand {
    pub fn new(name: &str) -> Self {
        Operand {
            name: name.to_string(),
            ..Operand::default()
        }
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many tokens the slot received.
    pub fn count(&self) -> usize {
        self.val.len
    }

    /// The claimed-tokens view; resolve it with [`crate::Parser::values`].
    pub fn view(&self) -> View {
        self.val
    }
}
