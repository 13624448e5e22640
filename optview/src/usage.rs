//! Usage-line rendering from the declaration tables.
//!
//! Two output grammars share one walk: a plain single-line synopsis and mdoc
//! macro lines for man pages. Options are repeated once per permitted
//! occurrence and bracketed once the occurrence is past the lower bound;
//! operands print their required copies bare and their optional copies
//! bracketed, with `...` marking an unbounded tail.

use crate::decl::{Form, Operand, Opt};
use crate::parser::Parser;
use crate::sink::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    Mdoc,
}

/// Render the usage text for the parser's declarations into `sink`.
///
/// Returns `false` when the sink refused a write and rendering stopped early.
pub fn put_usage(parser: &Parser<'_>, fmt: Format, sink: &mut dyn Sink) -> bool {
    let mut r = Renderer { fmt, sink };
    let res = r.opts(parser.opts()).and_then(|()| r.opers(parser.opers()));
    res.is_ok()
}

/// Unit error unwinding the walk once the sink refuses.
struct Stop;

struct Renderer<'s> {
    fmt: Format,
    sink: &'s mut dyn Sink,
}

impl Renderer<'_> {
    fn put(&mut self, s: &str) -> Result<(), Stop> {
        if self.sink.put(s.as_bytes()) {
            Ok(())
        } else {
            Err(Stop)
        }
    }

    fn plain(&mut self, s: &str) -> Result<(), Stop> {
        match self.fmt {
            Format::Plain => self.put(s),
            Format::Mdoc => Ok(()),
        }
    }

    fn mdoc(&mut self, s: &str) -> Result<(), Stop> {
        match self.fmt {
            Format::Mdoc => self.put(s),
            Format::Plain => Ok(()),
        }
    }

    /// Mdoc text with every dash escaped, so names never read as macro
    /// arguments.
    fn mdoc_esc(&mut self, s: &str) -> Result<(), Stop> {
        if self.fmt != Format::Mdoc {
            return Ok(());
        }
        let mut buf = [0u8; 4];
        for ch in s.chars() {
            if ch == '-' {
                self.put("\\")?;
            }
            self.put(ch.encode_utf8(&mut buf))?;
        }
        Ok(())
    }

    fn opts(&mut self, opts: &[Opt]) -> Result<(), Stop> {
        for opt in opts {
            let lower = opt.bounds.lower();
            let upper = opt.bounds.upper();
            let inf = opt.bounds.is_unbounded();

            let reps = if upper > 0 { upper } else { usize::from(inf) };
            for j in 0..reps {
                self.mdoc(".")?;
                if j >= lower {
                    self.mdoc("Op ")?;
                    self.plain("[")?;
                }

                for form in [Form::Short, Form::Long] {
                    let names = opt.names(form);
                    let mut grouped = false;
                    for (l, name) in names.iter().enumerate() {
                        if !grouped {
                            self.mdoc("Fl \\&")?;
                            match form {
                                Form::Short => self.plain("-")?,
                                Form::Long => {
                                    self.mdoc("\\-")?;
                                    self.plain("--")?;
                                }
                            }
                        }
                        self.mdoc_esc(name)?;
                        self.plain(name)?;

                        if form == Form::Short {
                            // Further short names join the same dash group.
                            grouped = true;
                            if l + 1 == names.len() {
                                self.mdoc(" ")?;
                                self.put(", ")?;
                            }
                        } else if l + 1 < names.len() {
                            self.mdoc(" ")?;
                            self.put(", ")?;
                        } else if opt.req {
                            self.put(" ")?;
                            self.mdoc("Ar ")?;
                            match &opt.value_name {
                                Some(n) => {
                                    self.mdoc_esc(n)?;
                                    self.plain(n)?;
                                }
                                None => self.put("value")?,
                            }
                            if inf {
                                self.mdoc(" ")?;
                                self.put("...")?;
                            }
                        }
                    }
                }

                if j >= lower {
                    self.plain("]")?;
                }
                self.mdoc("\n")?;
                self.plain(" ")?;
            }
        }
        Ok(())
    }

    fn opers(&mut self, opers: &[Operand]) -> Result<(), Stop> {
        let mut it = opers.iter().peekable();
        while let Some(oper) = it.next() {
            let more = it.peek().is_some();
            let lower = oper.bounds.lower();
            let upper = oper.bounds.upper();
            let inf = oper.bounds.is_unbounded();

            for j in 0..lower {
                self.mdoc(".Ar \\&")?;
                self.mdoc_esc(&oper.name)?;
                self.plain(&oper.name)?;
                if inf && j + 1 == lower {
                    self.mdoc(" ")?;
                    self.put("...")?;
                }
                if more {
                    self.plain(" ")?;
                }
                self.mdoc("\n")?;
            }

            let amt = if upper > 0 {
                upper
            } else if inf {
                lower + 1
            } else {
                0
            };
            for j in lower..amt {
                self.mdoc(".Op Ar \\&")?;
                self.plain("[")?;
                self.mdoc_esc(&oper.name)?;
                self.plain(&oper.name)?;
                if inf && j + 1 == amt {
                    self.mdoc(" ")?;
                    self.put("...")?;
                }
                self.plain("]")?;
                if more {
                    self.plain(" ")?;
                }
                self.mdoc("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;

    fn sample() -> Parser<'static> {
        Parser::new(
            vec![Opt::new()
                .short("v")
                .long("verbose")
                .bounds(Bounds::at_most(1))],
            vec![
                Operand::new("pattern").bounds(Bounds::any()),
                Operand::new("file").bounds(Bounds::at_least(1)),
            ],
            [],
        )
    }

    fn render(p: &Parser<'_>, fmt: Format) -> String {
        let mut out = Vec::new();
        assert!(put_usage(p, fmt, &mut out));
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_synopsis() {
        assert_eq!(
            render(&sample(), Format::Plain),
            "[-v, --verbose] [pattern...] file..."
        );
    }

    #[test]
    fn mdoc_macro_lines() {
        assert_eq!(
            render(&sample(), Format::Mdoc),
            ".Op Fl \\&v , Fl \\&\\-verbose\n\
             .Op Ar \\&pattern ...\n\
             .Ar \\&file ...\n"
        );
    }

    #[test]
    fn required_value_uses_the_declared_placeholder() {
        let p = Parser::new(
            vec![Opt::new()
                .short("c")
                .long("config")
                .value_named("path")
                .bounds(Bounds::at_most(1))],
            vec![],
            [],
        );
        assert_eq!(render(&p, Format::Plain), "[-c, --config path] ");
        assert_eq!(render(&p, Format::Mdoc), ".Op Fl \\&c , Fl \\&\\-config Ar path\n");
    }

    #[test]
    fn unnamed_value_falls_back_to_a_generic_placeholder() {
        let p = Parser::new(
            vec![Opt::new().long("expr").value().bounds(Bounds::any())],
            vec![],
            [],
        );
        assert_eq!(render(&p, Format::Plain), "[--expr value...] ");
    }

    #[test]
    fn options_repeat_up_to_their_upper_bound() {
        let p = Parser::new(
            vec![Opt::new().short("x").long("xx").bounds(Bounds::new(1, 2))],
            vec![],
            [],
        );
        // The required occurrence is bare, the optional one bracketed.
        assert_eq!(render(&p, Format::Plain), "-x, --xx [-x, --xx] ");
    }

    #[test]
    fn required_operand_with_a_closed_bound_repeats_bare() {
        let p = Parser::new(
            vec![],
            vec![Operand::new("src").bounds(Bounds::exactly(2))],
            [],
        );
        // Copies of one slot carry no separator; a space is only written when
        // another operand follows.
        assert_eq!(render(&p, Format::Plain), "srcsrc");
    }

    #[test]
    fn a_refusing_sink_stops_rendering() {
        struct Refuse;
        impl Sink for Refuse {
            fn put(&mut self, _: &[u8]) -> bool {
                false
            }
        }
        assert!(!put_usage(&sample(), Format::Plain, &mut Refuse));
    }
}
