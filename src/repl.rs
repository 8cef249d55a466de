//! A line-oriented shell around a `ReversibleDeque<String>`.
//!
//! | Tokens       | Action                                         |
//! |--------------|------------------------------------------------|
//! | `af <value>` | push `value` to the front, print the contents |
//! | `al <value>` | push `value` to the back, print the contents  |
//! | `rf`         | pop the front, print the contents             |
//! | `rl`         | pop the back, print the contents              |
//! | `rev`        | revert, print the contents                    |
//! | `reverted`   | print whether the deque is reverted           |
//! | `quit`       | leave                                          |
//!
//! Anything else, a blank line included, is reported as an unknown command.
//! Command words are case-insensitive. Popping an empty deque prints an error and keeps the
//! session going, every other error ends it.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use crate::{DequeError, ReversibleDeque};

pub const DEFAULT_PROMPT: &str = ">>> ";
const ERROR: &str = "ERROR: ";
const QUIT: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    AddFirst(&'a str),
    AddLast(&'a str),
    RemoveFirst,
    RemoveLast,
    Revert,
    IsReverted,
}

impl<'a> Command<'a> {
    /// Maps already split tokens onto a command. `Err` carries the message to show the user.
    pub fn parse(tokens: &[&'a str]) -> Result<Self, String> {
        match *tokens {
            [] => Err(": unknown command.".to_owned()),
            [word] => match word.to_lowercase().as_str() {
                "rf" => Ok(Command::RemoveFirst),
                "rl" => Ok(Command::RemoveLast),
                "rev" => Ok(Command::Revert),
                "reverted" => Ok(Command::IsReverted),
                other => Err(format!("{other}: unknown command.")),
            },
            [word, value] => match word.to_lowercase().as_str() {
                "af" => Ok(Command::AddFirst(value)),
                "al" => Ok(Command::AddLast(value)),
                other => Err(format!("{other}: unknown command.")),
            },
            _ => Err(format!("Unknown command: {}", tokens.join(" "))),
        }
    }
}

#[derive(Debug)]
pub enum ReplError {
    Io(io::Error),
    Deque(DequeError),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplError::Io(err) => write!(f, "i/o failure: {err}"),
            ReplError::Deque(err) => write!(f, "deque failure: {err}"),
        }
    }
}

impl std::error::Error for ReplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplError::Io(err) => Some(err),
            ReplError::Deque(err) => Some(err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        ReplError::Io(err)
    }
}

impl From<DequeError> for ReplError {
    fn from(err: DequeError) -> Self {
        ReplError::Deque(err)
    }
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    deque: ReversibleDeque<String>,
    prompt: Option<String>,
    echo: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            deque: ReversibleDeque::new(),
            prompt: Some(DEFAULT_PROMPT.to_owned()),
            echo: false,
        }
    }

    /// `None` turns the prompt off, e.g. when reading a script.
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Repeat every input line on the output, right after the prompt.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn deque(&self) -> &ReversibleDeque<String> {
        &self.deque
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads and executes lines until `quit` or end of input, then says goodbye.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let mut line = String::new();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{prompt}")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // end of input, finish the prompt's line
                if self.prompt.is_some() {
                    writeln!(self.output)?;
                }
                break;
            }

            if self.echo {
                writeln!(self.output, "{}", line.trim_end())?;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens
                .first()
                .is_some_and(|first| first.eq_ignore_ascii_case(QUIT))
            {
                break;
            }

            match self.process_command(&tokens) {
                Err(ReplError::Deque(err @ DequeError::EmptyCollection)) => {
                    writeln!(self.output, "{ERROR}{err}")?;
                }
                other => other?,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    /// Executes one line worth of tokens against the deque.
    pub fn process_command(&mut self, tokens: &[&str]) -> Result<(), ReplError> {
        let command = match Command::parse(tokens) {
            Ok(command) => command,
            Err(message) => {
                writeln!(self.output, "{message}")?;
                return Ok(());
            }
        };

        match command {
            Command::AddFirst(value) => self.deque.push_front(value.to_owned()),
            Command::AddLast(value) => self.deque.push_back(value.to_owned()),
            Command::RemoveFirst => {
                self.deque.pop_front()?;
            }
            Command::RemoveLast => {
                self.deque.pop_back()?;
            }
            Command::Revert => self.deque.revert(),
            Command::IsReverted => {
                writeln!(self.output, "{}", self.deque.is_reverted())?;
                return Ok(());
            }
        }

        writeln!(self.output, "{}", self.deque)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut repl = Repl::new(input.as_bytes(), Vec::new()).with_prompt(None);
        repl.run().unwrap();
        String::from_utf8(repl.into_output()).unwrap()
    }

    #[test]
    fn adds_and_prints_after_every_mutation() {
        let output = session("al 1\nal 2\naf 0\nrev\nrf\nrev\nquit\n");
        assert_eq!(
            output,
            "[1]\n[1, 2]\n[0, 1, 2]\n[2, 1, 0]\n[1, 0]\n[0, 1]\nBye!\n"
        );
    }

    #[test]
    fn reports_orientation() {
        let output = session("reverted\nrev\nREVERTED\nquit\n");
        assert_eq!(output, "false\n[]\ntrue\nBye!\n");
    }

    #[test]
    fn empty_deque_errors_keep_the_session_alive() {
        let output = session("rf\nrl\nal x\nrl\nquit\n");
        assert_eq!(
            output,
            "ERROR: accessing an empty deque\n\
             ERROR: accessing an empty deque\n\
             [x]\n\
             []\n\
             Bye!\n"
        );
    }

    #[test]
    fn unknown_commands_change_nothing() {
        let output = session("pop\nrf now\naf\nal a b\n\n   \nreverted\nquit\n");
        assert_eq!(
            output,
            "pop: unknown command.\n\
             rf: unknown command.\n\
             af: unknown command.\n\
             Unknown command: al a b\n\
             : unknown command.\n\
             : unknown command.\n\
             false\n\
             Bye!\n"
        );
    }

    #[test]
    fn command_words_ignore_case_but_values_do_not() {
        let output = session("AL Hello\n  aF  World \nQuit\n");
        assert_eq!(output, "[Hello]\n[World, Hello]\nBye!\n");
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let output = session("al 1\nal 2");
        assert_eq!(output, "[1]\n[1, 2]\nBye!\n");
    }

    #[test]
    fn prompt_and_echo() {
        let mut repl = Repl::new("al 7\nquit\n".as_bytes(), Vec::new())
            .with_prompt(Some("> ".to_owned()))
            .with_echo(true);
        repl.run().unwrap();
        assert_eq!(repl.deque().len(), 1);

        let output = String::from_utf8(repl.into_output()).unwrap();
        assert_eq!(output, "> al 7\n[7]\n> quit\nBye!\n");
    }

    #[test]
    fn parse_maps_tokens() {
        assert_eq!(Command::parse(&["af", "x"]), Ok(Command::AddFirst("x")));
        assert_eq!(Command::parse(&["AL", "X"]), Ok(Command::AddLast("X")));
        assert_eq!(Command::parse(&["Rf"]), Ok(Command::RemoveFirst));
        assert_eq!(Command::parse(&["rl"]), Ok(Command::RemoveLast));
        assert_eq!(Command::parse(&["rev"]), Ok(Command::Revert));
        assert_eq!(Command::parse(&["reverted"]), Ok(Command::IsReverted));
        assert_eq!(
            Command::parse(&["Nope"]),
            Err("nope: unknown command.".to_owned())
        );
        assert_eq!(Command::parse(&[]), Err(": unknown command.".to_owned()));
        assert_eq!(
            Command::parse(&["a", "b", "c"]),
            Err("Unknown command: a b c".to_owned())
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failures_end_the_session() {
        let input = "al 1\nal 2\nal 3\n";
        let mut repl = Repl::new(input.as_bytes(), BrokenPipe).with_prompt(None);

        let err = repl.run().unwrap_err();
        assert!(matches!(
            err,
            ReplError::Io(ref source) if source.kind() == io::ErrorKind::BrokenPipe
        ));
        // the first command ran, its printout failed, nothing after it was read
        assert_eq!(repl.deque().len(), 1);
    }
}
