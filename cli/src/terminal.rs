//! Terminal side of the prompt loops.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use skill_plotter_skills::{Console, Tone};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Wrap `message` in the ANSI color of `tone`.
#[must_use]
pub fn paint(tone: Tone, message: &str) -> String {
    let color = match tone {
        Tone::Plain => return message.to_string(),
        Tone::Info => BLUE,
        Tone::Success => GREEN,
        Tone::Failure => RED,
    };
    format!("{color}{message}{RESET}")
}

/// Console on stdin/stdout.
///
/// Reads keys in raw mode when attached to a terminal so that Esc and Ctrl+C
/// cancel a prompt; piped input is read line by line until it ends.
#[derive(Debug)]
pub struct TerminalConsole {
    interactive: bool,
    color: bool,
}

impl TerminalConsole {
    /// Console for the current process.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
            color: io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.interactive {
            read_line_raw(prompt)
        } else {
            read_line_piped(prompt)
        }
    }

    fn say(&mut self, tone: Tone, message: &str) {
        if self.color {
            println!("{}", paint(tone, message));
        } else {
            println!("{message}");
        }
    }
}

fn read_line_piped(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().lock().read_line(&mut buffer)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_line_raw(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    enable_raw_mode()?;
    let _guard = RawModeGuard;

    let mut buffer = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                print!("\r\n");
                io::stdout().flush().ok();
                return Ok(None);
            }
            KeyCode::Esc => {
                print!("\r\n");
                io::stdout().flush().ok();
                return Ok(None);
            }
            KeyCode::Enter => {
                print!("\r\n");
                io::stdout().flush().ok();
                return Ok(Some(buffer));
            }
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    print!("\u{8} \u{8}");
                    io::stdout().flush().ok();
                }
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                print!("{c}");
                io::stdout().flush().ok();
            }
            _ => {}
        }
    }
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_tones() {
        assert_eq!(paint(Tone::Plain, "row"), "row");
        assert_eq!(paint(Tone::Success, "ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(paint(Tone::Failure, "no"), "\x1b[31mno\x1b[0m");
        assert!(paint(Tone::Info, "hi").starts_with(BLUE));
    }
}
