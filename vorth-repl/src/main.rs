use std::env;
use std::fs;
use std::process;

use error_chain::ChainedError;
use rustyline::Editor;

use vorth_core::errors::*;
use vorth_core::{Stack, State};
use vorth_std::stdlib;

fn main() {
    let state = &mut State::new();
    stdlib(state).unwrap();

    // an optional startup script runs before the console comes up
    if let Some(path) = env::args().nth(1) {
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("{}: {}", path, err);
                process::exit(1);
            }
        };
        if let Err(err) = state.run(&source) {
            report_error(&err);
            process::exit(1);
        }
    }

    let mut rl = Editor::<()>::new();

    while !state.is_halted() {
        println!();
        print_stack(&state.stack);

        match rl.readline(">> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                if let Err(err) = state.run(&line) {
                    report_error(&err);
                }
            }
            _ => break,
        }
    }
}

fn print_stack(stack: &Stack) {
    let items: Vec<String> = stack.iter().map(|object| object.to_string()).collect();
    println!("[{}]", items.join(", "));
}

fn report_error(err: &Error) {
    eprintln!("{}", err.display_chain());
}
