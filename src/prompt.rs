use log::info;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tokio::task;

// Unrecognized answers are re-asked this many times before giving up.
pub const MAX_ATTEMPTS: usize = 5;

pub trait Prompt {
    fn confirm(&mut self, message: &str) -> io::Result<bool>;
}

/* Reads answers from a line based input, stdin unless told otherwise. The read blocks, so it's moved out of the way of
 * the async runtime and must not be used from a current thread runtime.
 */
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for ConsolePrompt<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        task::block_in_place(|| confirm(&mut self.input, &mut self.output, message))
    }
}

// For unattended runs.
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        info!("{} Assuming yes.", message);
        Ok(true)
    }
}

/// Asks a yes/no question until it gets an answer. End of input and too many unrecognized answers both count as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<bool> {
    for _ in 0..MAX_ATTEMPTS {
        write!(output, "{} [y/n]: ", message)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }
        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "Please answer y or n.")?,
        }
    }
    Ok(false)
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
