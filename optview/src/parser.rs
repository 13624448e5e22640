//! Token classification, name matching and the in-place permutation engine.
//!
//! The parser owns one table of borrowed tokens and reorders references in it
//! so that every claimed value and operand ends up in a contiguous region at
//! the front. Declarations record index spans into that table; token contents
//! are never copied.

use crate::decl::{Form, Opt, Operand, View};
use crate::error::{Error, Result};

/// The view a permutation step inserts into, so the step can skip it when
/// adjusting the starts of all the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Opt(usize),
    Accum,
}

pub struct Parser<'a> {
    opts: Vec<Opt>,
    opers: Vec<Operand>,
    args: Vec<&'a str>,
    /// Index of the token the next step classifies.
    cursor: usize,
    /// End of the claimed region. Everything at or past it is either
    /// unclassified or an already-consumed slot free to be overwritten.
    /// Never exceeds `cursor`.
    eoval: usize,
    /// Remainder of a grouped short-option token still being consumed.
    group: Option<&'a str>,
    /// Option waiting to claim the next whole token as its value.
    pending: Option<usize>,
    /// Operand tokens claimed but not yet distributed to a slot. Always the
    /// tail of the claimed region.
    accum: View,
    done: bool,
    err: Option<Error>,
}

impl<'a> Parser<'a> {
    /// `args` must exclude the program name.
    pub fn new(
        opts: Vec<Opt>,
        opers: Vec<Operand>,
        args: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Parser {
            opts,
            opers,
            args: args.into_iter().collect(),
            cursor: 0,
            eoval: 0,
            group: None,
            pending: None,
            accum: View::default(),
            done: false,
            err: None,
        }
    }

    /// Parse one token, or one position of a grouped short-option token.
    ///
    /// `Ok(true)` means there is more input; `Ok(false)` means parsing is
    /// complete, every bound has been checked and every view may be trusted.
    /// After an error the parser state is safe to inspect but stepping
    /// further is unsupported.
    pub fn step(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }

        if self.cursor >= self.args.len() {
            self.done = true;
            return match self.finish() {
                Ok(()) => Ok(false),
                Err(e) => Err(self.record(e)),
            };
        }

        if let Some(idx) = self.pending.take() {
            let val = self.args[self.cursor];
            let res = self.claim_value(idx, val);
            self.cursor += 1;
            return match res {
                Ok(()) => Ok(true),
                Err(e) => Err(self.record(e)),
            };
        }

        let res = self.classify();
        // A partially consumed group stays on the same token.
        if self.group.is_none() {
            self.cursor += 1;
        }
        match res {
            Ok(()) => Ok(true),
            Err(e) => Err(self.record(e)),
        }
    }

    /// Drain all remaining steps.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    /// The first error observed, if any.
    pub fn error(&self) -> Option<Error> {
        self.err
    }

    /// The (permuted) token table all views point into.
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    pub fn opts(&self) -> &[Opt] {
        &self.opts
    }

    pub fn opers(&self) -> &[Operand] {
        &self.opers
    }

    /// Find an option by one of its declared names.
    pub fn find(&self, form: Form, name: &str) -> Option<&Opt> {
        self.opts
            .iter()
            .find(|o| o.names(form).iter().any(|n| n == name))
    }

    /// Resolve a claimed view into the tokens it addresses. Only meaningful
    /// after parsing completed without error.
    pub fn values(&self, view: View) -> &[&'a str] {
        match view.start {
            Some(s) => &self.args[s..s + view.len],
            None => &[],
        }
    }

    fn record(&mut self, e: Error) -> Error {
        self.err.get_or_insert(e);
        e
    }

    /// End of input: a pending value is fatal, then every option's count is
    /// checked against its bounds, then the operand pool is distributed.
    fn finish(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::NoValue);
        }
        for opt in &self.opts {
            if !opt.bounds.contains(opt.val.len) {
                return Err(Error::OptionRange);
            }
        }
        self.distribute()
    }

    fn classify(&mut self) -> Result<()> {
        if let Some(group) = self.group.take() {
            return self.parse_short(group);
        }

        let arg = self.args[self.cursor];
        match arg.strip_prefix('-') {
            // Not dashed, or the literal "-": a single operand.
            None | Some("") => self.claim_operand(arg),
            Some(rest) => match rest.strip_prefix('-') {
                Some("") => self.end_of_options(),
                Some(long) => self.parse_long(long),
                None => self.parse_short(rest),
            },
        }
    }

    /// `--`: everything after it is operand material, moved in one block.
    fn end_of_options(&mut self) -> Result<()> {
        let first = self.cursor + 1;
        let n = self.args.len() - first;
        if n > 0 {
            self.args.copy_within(first.., self.eoval);
            if self.accum.start.is_none() {
                self.accum.start = Some(self.eoval);
            }
            self.accum.len += n;
            self.eoval += n;
        }
        // Put the cursor on the last slot so the unconditional advance in
        // `step` lands exactly at the end.
        self.cursor = self.args.len() - 1;
        Ok(())
    }

    fn parse_long(&mut self, fragment: &'a str) -> Result<()> {
        let Some((idx, rest)) = self.match_opt(Form::Long, fragment) else {
            return Err(Error::NotOption);
        };
        if rest.is_empty() {
            self.update_opt(idx, None)
        } else if let Some(attach) = rest.strip_prefix('=') {
            self.update_opt(idx, Some(attach))
        } else {
            // A trailing substring that is neither empty nor a value is not a
            // longer spelling of any declared name.
            Err(Error::NotOption)
        }
    }

    fn parse_short(&mut self, fragment: &'a str) -> Result<()> {
        let Some((idx, rest)) = self.match_opt(Form::Short, fragment) else {
            return Err(Error::NotOption);
        };
        if !self.opts[idx].req && !rest.is_empty() {
            // More grouped flags follow in the same token.
            self.group = Some(rest);
            self.update_opt(idx, None)
        } else {
            self.update_opt(idx, (!rest.is_empty()).then_some(rest))
        }
    }

    /// Resolve `fragment` against the declared names of `form`.
    ///
    /// A name matches when it is a prefix of the fragment. Consuming the
    /// whole fragment is an exact match, returned immediately. Otherwise the
    /// longest loose match wins; a strictly longer candidate is required to
    /// displace the current best, so among equal-length candidates the
    /// earliest declaration wins. Returns the matched option index and the
    /// unconsumed remainder of the fragment.
    fn match_opt(&self, form: Form, fragment: &'a str) -> Option<(usize, &'a str)> {
        let mut loose: Option<(usize, usize)> = None; // (consumed, option index)
        for (i, opt) in self.opts.iter().enumerate() {
            for name in opt.names(form) {
                if name.is_empty() || !fragment.starts_with(name.as_str()) {
                    continue;
                }
                if name.len() == fragment.len() {
                    return Some((i, &fragment[name.len()..]));
                }
                if loose.map_or(true, |(adv, _)| name.len() > adv) {
                    loose = Some((name.len(), i));
                }
            }
        }
        loose.map(|(adv, i)| (i, &fragment[adv..]))
    }

    /// Record a matched option. The occurrence counts immediately, even when
    /// the step ultimately fails with `NotRequired`.
    fn update_opt(&mut self, idx: usize, attach: Option<&'a str>) -> Result<()> {
        self.opts[idx].val.len += 1;
        if self.opts[idx].req {
            match attach {
                Some(val) => self.claim_value(idx, val),
                None => {
                    self.pending = Some(idx);
                    Ok(())
                }
            }
        } else if attach.is_some() {
            Err(Error::NotRequired)
        } else {
            Ok(())
        }
    }

    /// Claim `val` for an option whose occurrence was already counted. Only
    /// the upper bound is checked here; lower bounds are enforced by the
    /// final validation pass.
    fn claim_value(&mut self, idx: usize, val: &'a str) -> Result<()> {
        self.pending = None;
        if !self.opts[idx].bounds.admits(self.opts[idx].val.len) {
            return Err(Error::OptionRange);
        }
        self.permute(Target::Opt(idx), val, false);
        Ok(())
    }

    fn claim_operand(&mut self, arg: &'a str) -> Result<()> {
        self.accum.len += 1;
        self.permute(Target::Accum, arg, true);
        Ok(())
    }

    /// Move a newly claimed token so the claimed region stays contiguous at
    /// `[.., eoval)`: insert `val` at the end of the target view, shifting
    /// the block between it and the boundary one slot right, then bump every
    /// other view whose start index falls inside the shifted range.
    ///
    /// A view claiming its first token starts at the boundary (`at_end`) or
    /// just before the operand accumulator, which is always the tail of the
    /// claimed region.
    fn permute(&mut self, target: Target, val: &'a str, at_end: bool) {
        let fallback = if at_end {
            self.eoval
        } else {
            self.eoval - self.accum.len
        };
        let view = match target {
            Target::Opt(i) => &mut self.opts[i].val,
            Target::Accum => &mut self.accum,
        };
        let start = *view.start.get_or_insert(fallback);
        let pos = start + view.len - 1;

        debug_assert!(self.eoval <= self.cursor);
        debug_assert!(pos <= self.eoval);

        self.args.copy_within(pos..self.eoval, pos + 1);
        self.args[pos] = val;
        self.eoval += 1;

        for i in 0..self.opts.len() {
            if target != Target::Opt(i) {
                self.opts[i].val.bump(pos, self.eoval);
            }
        }
        if target != Target::Accum {
            self.accum.bump(pos, self.eoval);
        }
    }

    /// Distribute the accumulated operand pool across the declared slots in
    /// order: every slot first receives its required minimum, then its share
    /// of the surplus, capped by its upper bound; an unbounded slot absorbs
    /// all surplus still available when it is processed.
    fn distribute(&mut self) -> Result<()> {
        let count = self.accum.len;
        let total_lower: usize = self.opers.iter().map(|o| o.bounds.lower()).sum();
        if count < total_lower {
            return Err(Error::OperandRange);
        }

        let mut extra = count - total_lower;
        let mut required = total_lower;

        for oper in &mut self.opers {
            let consumed = count - (extra + required);
            oper.val.start = self.accum.start.map(|s| s + consumed);

            let share = required.min(oper.bounds.lower());
            oper.val.len += share;
            required -= share;

            let share = if oper.bounds.is_unbounded() {
                extra
            } else {
                extra.min(oper.bounds.upper().saturating_sub(oper.val.len))
            };
            oper.val.len += share;
            extra -= share;
        }

        if extra > 0 || required > 0 {
            return Err(Error::OperandRange);
        }
        Ok(())
    }
}
