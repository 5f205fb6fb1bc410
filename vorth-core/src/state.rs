use std::io::{self, Write};
use std::rc::Rc;

use crate::errors::*;
use crate::object::{Builtin, NativeFn, Object};
use crate::parsing::LexerStack;
use crate::stack::Stack;
use crate::vocabulary::Vocabulary;

/// Execution status of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
}

/// The whole machine: nested tokenizer contexts, the shared data stack and
/// vocabulary, the execution status, and the diagnostic output channel.
pub struct State {
    lexers: LexerStack,
    pub stack: Stack,
    pub vocabulary: Vocabulary,
    status: Status,
    output: Box<dyn Write>,
}

impl State {
    pub fn new() -> Self {
        State::with_output(Box::new(io::stdout()))
    }

    /// Build a machine that renders diagnostics into the given sink.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        State {
            lexers: LexerStack::new(),
            stack: Stack::new("DATA"),
            vocabulary: Vocabulary::new("FORTH"),
            status: Status::Running,
            output,
        }
    }

    /// Interpret one source string. Reentrant: a word executed from here
    /// may call `run` again; the inner call opens and closes only its own
    /// tokenizer context while sharing the rest of the machine.
    pub fn run(&mut self, source: &str) -> Result<()> {
        self.lexers.open(source);
        let result = self.run_loop();
        self.lexers.close();
        result
    }

    fn run_loop(&mut self) -> Result<()> {
        while self.status == Status::Running {
            // WORD: the end of this context ends this loop, not any outer one
            let token = match self.lexers.next_token()? {
                Some(token) => token,
                None => break,
            };
            self.push(Object::symbol(&token));

            // FIND: the name is resolved before the symbol is replaced, so a
            // failed lookup leaves the symbol on the stack
            let word = self.vocabulary.lookup(&token)?;
            self.pop()?;
            self.push(Object::Builtin(word));

            // EXECUTE
            let word = self.pop()?;
            word.invoke(self)?;
        }
        Ok(())
    }

    /// Bind a native procedure under the given word name.
    pub fn add_native_word<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&mut State) -> Result<()> + 'static,
    {
        let func: NativeFn = Rc::new(func);
        self.vocabulary.define(name, Builtin::new(name, func));
    }

    pub fn push(&mut self, object: Object) {
        self.stack.push(object);
    }

    pub fn pop(&mut self) -> Result<Object> {
        self.stack.pop()
    }

    pub fn top(&self) -> Result<&Object> {
        self.stack.top()
    }

    /// Request a halt. Sticky: every loop up the chain stops before its
    /// next token, and further `run` calls return immediately.
    pub fn halt(&mut self) {
        self.status = Status::Halted;
    }

    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn print_stack(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.stack)?;
        Ok(())
    }

    pub fn print_vocabulary(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.vocabulary)?;
        Ok(())
    }
}

impl Default for State {
    fn default() -> Self {
        State::new()
    }
}
