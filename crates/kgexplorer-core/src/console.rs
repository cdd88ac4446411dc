use std::io::{self, BufRead, Write};

/// Blocking line-oriented interactive surface.
pub trait Console {
    /// Shows `prompt` and reads one line without its trailing newline.
    /// Returns `None` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn write_line(&mut self, line: &str);
}

/// Console on the process's stdin/stdout.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut out = self.stdout.lock();
        let _ = write!(out, "{}", prompt);
        let _ = out.flush();
        drop(out);

        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                tracing::error!("Failed to read from stdin: {}", e);
                None
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.stdout.lock(), "{}", line);
    }
}

/// Replays a fixed list of inputs and records everything written.
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
