//! Command-line front end for lispcalc
//!
//! Usage: `lispcalc [--json] [script]`
//!
//! With a script path the file is read, the parsed tree printed as a
//! diagnostic, and the result evaluated. `--json` switches the tree dump to
//! pretty JSON. Without arguments an interactive prompt reads one
//! expression per line.

use anyhow::{Context, Result};
use lispcalc::{Evaluator, Node};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

enum TreeDump {
    Outline,
    Json,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let outcome = match args.len() {
        1 => repl(),
        2 if args[1] == "--json" => usage(),
        2 => run_file(&args[1], TreeDump::Outline),
        3 if args[1] == "--json" => run_file(&args[2], TreeDump::Json),
        _ => usage(),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn usage() -> Result<()> {
    eprintln!("Usage: lispcalc [--json] [script]");
    process::exit(64);
}

fn run_file(path: &str, dump: TreeDump) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading script '{}'", path))?;

    let tree = lispcalc::parse(&source)?;
    match dump {
        TreeDump::Outline => println!("{}", tree.render(0)),
        TreeDump::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    let result = lispcalc::evaluate(&tree)?;
    println!("= {}", result);
    Ok(())
}

fn repl() -> Result<()> {
    println!("lispcalc v{}", lispcalc::VERSION);
    println!("Type an expression and press Enter. Type 'exit' to quit.");

    let evaluator = Evaluator::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        match line {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        match eval_line(&evaluator, line) {
            Ok(value) => println!("= {}", value),
            Err(err) => eprintln!("Error: {}", err),
        }
    }

    Ok(())
}

fn eval_line(evaluator: &Evaluator, line: &str) -> lispcalc::Result<f64> {
    let tree: Node = lispcalc::parse(line)?;
    evaluator.evaluate(&tree)
}
