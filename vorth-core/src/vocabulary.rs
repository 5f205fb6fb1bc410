use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::errors::*;
use crate::object::Builtin;

/// The dispatch table: word name to executable definition. Lookup is exact
/// and case-sensitive; definitions are only ever added or replaced.
pub struct Vocabulary {
    name: String,
    words: HashMap<String, Rc<Builtin>>,
}

impl Vocabulary {
    pub fn new(name: &str) -> Self {
        Vocabulary {
            name: name.to_string(),
            words: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: &str, word: Builtin) {
        self.words.insert(name.to_string(), Rc::new(word));
    }

    pub fn lookup(&self, name: &str) -> Result<Rc<Builtin>> {
        self.words
            .get(name)
            .cloned()
            .ok_or_else(|| ErrorKind::UnknownWord(name.to_string()).into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<voc:{}>", self.name)?;
        let mut names: Vec<&String> = self.words.keys().collect();
        names.sort();
        for name in names {
            write!(f, "\n    {} = {}", name, self.words[name])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    fn nop(name: &str) -> Builtin {
        Builtin::new(name, Rc::new(|_: &mut State| Ok(())))
    }

    #[test]
    fn lookup_finds_defined_words() {
        let mut voc = Vocabulary::new("FORTH");
        voc.define("BYE", nop("BYE"));
        assert_eq!(voc.lookup("BYE").unwrap().name(), "BYE");
    }

    #[test]
    fn the_last_definition_wins() {
        let mut voc = Vocabulary::new("FORTH");
        voc.define("X", nop("first"));
        voc.define("X", nop("second"));
        assert_eq!(voc.lookup("X").unwrap().name(), "second");
        assert_eq!(voc.len(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut voc = Vocabulary::new("FORTH");
        voc.define("BYE", nop("BYE"));
        assert!(voc.lookup("bye").is_err());
    }

    #[test]
    fn unknown_words_are_reported_by_name() {
        let voc = Vocabulary::new("FORTH");
        match voc.lookup("nosuchword") {
            Err(err) => match err.kind() {
                ErrorKind::UnknownWord(word) => assert_eq!(word.as_str(), "nosuchword"),
                other => panic!("unexpected error: {:?}", other),
            },
            Ok(_) => panic!("expected an unknown word error"),
        }
    }

    #[test]
    fn rendering_lists_bindings_sorted_by_name() {
        let mut voc = Vocabulary::new("FORTH");
        voc.define("WORDS", nop("WORDS"));
        voc.define("BYE", nop("BYE"));
        voc.define("?", nop("?"));
        assert_eq!(
            voc.to_string(),
            "<voc:FORTH>\n    ? = <builtin:?>\n    BYE = <builtin:BYE>\n    WORDS = <builtin:WORDS>"
        );
    }
}
