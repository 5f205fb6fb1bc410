use crate::errors::*;

/// Comment marker; the rest of the line is discarded.
const COMMENT_CHAR: char = '#';

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '?' || ch == ':' || ch == ';'
}

/// A tokenizing cursor over one source string.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan the next word token. `Ok(None)` means the source is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            match self.peek() {
                None => return Ok(None),
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some(COMMENT_CHAR) => self.skip_comment(),
                Some(ch) if is_word_char(ch) => return Ok(Some(self.scan_word())),
                Some(ch) => return Err(ErrorKind::SyntaxError(ch, self.line).into()),
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let next = self.peek();
        if let Some(ch) = next {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
            }
        }
        next
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn scan_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !is_word_char(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

/// Nested tokenizer contexts. The top of the stack is the active context;
/// opening a new source suspends the current one until it is closed again.
#[derive(Default)]
pub struct LexerStack {
    lexers: Vec<Lexer>,
}

impl LexerStack {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn open(&mut self, source: &str) {
        self.lexers.push(Lexer::new(source));
    }

    pub fn close(&mut self) {
        let _ = self.lexers.pop();
    }

    pub fn depth(&self) -> usize {
        self.lexers.len()
    }

    /// Next token from the active context only; an exhausted context does
    /// not fall through to the one below it.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        match self.lexers.last_mut() {
            Some(lexer) => lexer.next_token(),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str) -> Vec<String> {
        let mut lexer = Lexer::new(source);
        let mut tokens = vec![];
        while let Some(token) = lexer.next_token().unwrap() {
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn words_are_separated_by_whitespace() {
        assert_eq!(collect("foo bar\tbaz\nquux"), ["foo", "bar", "baz", "quux"]);
    }

    #[test]
    fn punctuation_is_part_of_words() {
        assert_eq!(collect("? ?? foo:bar baz_9;"), ["?", "??", "foo:bar", "baz_9;"]);
    }

    #[test]
    fn comments_run_to_end_of_line() {
        assert_eq!(collect("foo # comment\nbar"), ["foo", "bar"]);
    }

    #[test]
    fn a_comment_terminates_the_word_before_it() {
        assert_eq!(collect("foo#bar\nbaz"), ["foo", "baz"]);
    }

    #[test]
    fn end_of_input_is_sticky() {
        let mut lexer = Lexer::new("foo");
        assert_eq!(lexer.next_token().unwrap(), Some("foo".to_string()));
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn newlines_increment_the_line_counter() {
        let mut lexer = Lexer::new("foo\nbar\nbaz");
        while lexer.next_token().unwrap().is_some() {}
        assert_eq!(lexer.line(), 3);
    }

    #[test]
    fn stray_characters_are_fatal() {
        let mut lexer = Lexer::new("foo\n@bar");
        assert_eq!(lexer.next_token().unwrap(), Some("foo".to_string()));
        match lexer.next_token() {
            Err(err) => match err.kind() {
                ErrorKind::SyntaxError(ch, line) => {
                    assert_eq!(*ch, '@');
                    assert_eq!(*line, 2);
                }
                other => panic!("unexpected error: {:?}", other),
            },
            ok => panic!("expected a syntax error, got {:?}", ok),
        }
    }

    #[test]
    fn contexts_nest_independently() {
        let mut lexers = LexerStack::new();
        lexers.open("outer_a outer_b");
        assert_eq!(lexers.next_token().unwrap(), Some("outer_a".to_string()));

        lexers.open("inner");
        assert_eq!(lexers.depth(), 2);
        assert_eq!(lexers.next_token().unwrap(), Some("inner".to_string()));
        // the inner context is exhausted; it must not pull from the outer one
        assert_eq!(lexers.next_token().unwrap(), None);
        lexers.close();

        assert_eq!(lexers.next_token().unwrap(), Some("outer_b".to_string()));
        assert_eq!(lexers.next_token().unwrap(), None);
    }
}
