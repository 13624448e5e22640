// Test binary: parses its own argv against a fixed declaration table and
// dumps every view, so shell-level checks can diff the permuted results.

use std::process::ExitCode;

use optview::{Bounds, Form, Operand, Opt, Parser};

fn main() -> ExitCode {
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
            .short("i")
            .long("uri")
            .value()
            .bounds(Bounds::any()),
        Opt::new()
            .short("b")
            .long("backup")
            .long("backup-file")
            .value()
            .bounds(Bounds::any()),
        Opt::new()
            .short("v")
            .long("verbose")
            .bounds(Bounds::at_most(3)),
        Opt::new().short("s").long("sort").bounds(Bounds::any()),
        Opt::new().long("help").bounds(Bounds::at_most(1)),
        Opt::new()
            .short("V")
            .long("version")
            .bounds(Bounds::at_most(1)),
    ];

    let opers = vec![
        Operand::new("pattern").bounds(Bounds::any()),
        Operand::new("file").bounds(Bounds::at_least(1)),
        Operand::new("name").bounds(Bounds::at_least(1)),
    ];

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut parser = Parser::new(opts, opers, args.iter().map(String::as_str));

    match parser.run() {
        Ok(()) => eprintln!("status: success"),
        Err(e) => {
            eprintln!("status: {e}");
            return ExitCode::FAILURE;
        }
    }

    println!("opt:");
    for opt in parser.opts() {
        for form in [Form::Short, Form::Long] {
            for name in opt.names(form) {
                print!("{name} ");
            }
        }
        print!("{{ [{}] ", opt.occurrences());
        if opt.takes_value() {
            for val in parser.values(opt.view()) {
                print!("{val} ");
            }
        }
        println!("}}");
    }

    println!("oper:");
    for oper in parser.opers() {
        print!("{} {{ [{}] ", oper.name(), oper.count());
        for val in parser.values(oper.view()) {
            print!("{val} ");
        }
        println!("}}");
    }

    ExitCode::SUCCESS
}
