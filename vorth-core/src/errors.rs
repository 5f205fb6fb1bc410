error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        // tokenizing errors
        SyntaxError(ch: char, line: usize) {
            display("Syntax Error: unexpected character {:?} on line {}", ch, line)
        }

        // language errors
        UnknownWord(word: String) {
            display("Unknown Word: {}", word)
        }
        StackUnderflow {
            display("Stack Underflow")
        }
        NotExecutable(obj: String) {
            display("Not Executable: {}", obj)
        }
    }
}
