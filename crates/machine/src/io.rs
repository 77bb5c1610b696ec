//! Console abstraction for `INP` and `OUT`.
//!
//! The engine never touches stdin/stdout directly. It talks to a [`Console`],
//! so a run can be driven from a terminal ([`StdConsole`]) or from a script
//! with captured output ([`ScriptedConsole`]).

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::common::constants::INPUT_PROMPT;

/// Text source and character sink for the machine.
pub trait Console: Send {
    /// Reads one line of input, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying source.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Emits one character.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying sink.
    fn write_char(&mut self, ch: char) -> io::Result<()>;
}

/// Terminal console: prompts with `-> ` and reads lines from stdin.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a terminal console.
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(INPUT_PROMPT.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        let mut buf = [0u8; 4];
        stdout.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        stdout.flush()
    }
}

/// Shared handle to the characters a [`ScriptedConsole`] has emitted.
#[derive(Debug, Clone, Default)]
pub struct OutputCapture(Arc<Mutex<String>>);

impl OutputCapture {
    /// Returns everything emitted so far.
    pub fn contents(&self) -> String {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn push(&self, ch: char) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(ch);
    }
}

/// Console fed from a fixed list of lines, capturing its output.
///
/// Reading past the last line reports end of input instead of blocking.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: OutputCapture,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: OutputCapture::default(),
        }
    }

    /// Handle to the captured output; stays valid after the console is moved into a machine.
    pub fn output(&self) -> OutputCapture {
        self.output.clone()
    }

    /// Number of input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl fmt::Debug for ScriptedConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedConsole")
            .field("pending", &self.input.len())
            .finish_non_exhaustive()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.output.push(ch);
        Ok(())
    }
}
