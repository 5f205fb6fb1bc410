use std::cell::RefCell;
use std::fmt::Debug;
use std::io;
use std::rc::Rc;

use crate::object::Object;
use crate::state::State;

impl State {
    /// Assert the exact contents of the data stack, bottom first.
    pub fn assert_stack<T>(&self, expected: &[T])
    where
        Object: PartialEq<T>,
        T: Debug,
    {
        assert_eq!(
            self.stack.len(),
            expected.len(),
            "stack depth mismatch: {}",
            self.stack
        );
        for (object, expected) in self.stack.iter().zip(expected) {
            assert!(
                object == expected,
                "expected {:?} on the stack, found {:?}",
                expected,
                object
            );
        }
    }
}

/// Cloneable in-memory sink for capturing rendered diagnostics in tests.
#[derive(Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
