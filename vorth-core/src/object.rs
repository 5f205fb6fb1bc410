use std::fmt;
use std::rc::Rc;

use crate::errors::*;
use crate::state::State;

/// Native procedure bound to a word name.
pub type NativeFn = Rc<dyn Fn(&mut State) -> Result<()>>;

/// An executable vocabulary entry: a host procedure and the name it was
/// bound under.
#[derive(Clone)]
pub struct Builtin {
    name: Rc<String>,
    func: NativeFn,
}

impl Builtin {
    pub fn new(name: &str, func: NativeFn) -> Self {
        Builtin {
            name: Rc::new(name.to_string()),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, state: &mut State) -> Result<()> {
        (self.func)(state)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<builtin:{}>", self.name)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Tagged runtime value. Symbols are produced by the tokenizer, builtins by
/// vocabulary lookup; a value never changes its kind.
#[derive(Clone)]
pub enum Object {
    Symbol(Rc<String>),
    Builtin(Rc<Builtin>),
}

impl Object {
    pub fn symbol(text: &str) -> Object {
        Object::Symbol(Rc::new(text.to_string()))
    }

    /// Execute the object against the machine. Only builtins are
    /// executable; the error names whatever else was found.
    pub fn invoke(self, state: &mut State) -> Result<()> {
        match self {
            Object::Builtin(word) => word.call(state),
            other => Err(ErrorKind::NotExecutable(other.to_string()).into()),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Symbol(text) => write!(f, "<symbol:{}>", text),
            Object::Builtin(word) => write!(f, "{}", word),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Symbol(a), Object::Symbol(b)) => a == b,
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Object {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Object::Symbol(text) => text.as_str() == *other,
            _ => false,
        }
    }
}
