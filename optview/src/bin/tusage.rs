// Test binary: renders the usage line for a fixed declaration table, plain
// by default or as mdoc macros when invoked with "mdoc".

use std::io;
use std::process::ExitCode;

use optview::{put_usage, Bounds, Format, IoSink, Operand, Opt, Parser, Sink};

fn main() -> ExitCode {
    let fmt = match std::env::args().nth(1).as_deref() {
        Some("mdoc") => Format::Mdoc,
        _ => Format::Plain,
    };

    let opts = vec![
        Opt::new()
            .short("e")
            .short("x")
            .long("expr")
            .long("expression")
            .value()
            .bounds(Bounds::new(1, 4)),
        Opt::new()
            .short("c")
            .long("config")
            .value_named("file")
            .bounds(Bounds::at_most(2)),
        Opt::new()
            .short("v")
            .long("verbose")
            .bounds(Bounds::at_most(3)),
        Opt::new().long("help").bounds(Bounds::at_most(1)),
    ];

    let opers = vec![
        Operand::new("pattern").bounds(Bounds::any()),
        Operand::new("file").bounds(Bounds::at_least(1)),
    ];

    let parser = Parser::new(opts, opers, []);

    let stdout = io::stdout();
    let mut sink = IoSink::new(stdout.lock());
    let mut ok = put_usage(&parser, fmt, &mut sink);
    if ok && fmt == Format::Plain {
        ok = sink.put(b"\n");
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
