#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;

pub mod errors;
mod object;
mod parsing;
mod stack;
mod state;
pub mod testing;
mod vocabulary;

pub use crate::errors::Result;
pub use crate::object::{Builtin, NativeFn, Object};
pub use crate::parsing::{Lexer, LexerStack};
pub use crate::stack::Stack;
pub use crate::state::{State, Status};
pub use crate::vocabulary::Vocabulary;
