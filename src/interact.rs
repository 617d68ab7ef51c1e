use std::io::Write;

/// Port for the blocking yes/no and information dialogs the command handlers
/// need (delete, clear-completed, import-replace, validation failures).
/// Handlers take this as a parameter so tests can script the answers.
pub trait Interaction {
    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;
    /// Show an informational message.
    fn notify(&mut self, message: &str);
}

/// Interaction over the terminal: `confirm` prompts `[y/n]` on stderr and
/// reads a line from stdin, `notify` prints to stdout.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{} [y/n] ", message);
        let _ = std::io::stderr().flush();
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Answers every confirmation with a fixed response without prompting.
/// Used for `--yes` flags and by tests.
#[derive(Debug)]
pub struct AutoConfirm {
    pub answer: bool,
    pub notices: Vec<String>,
}

impl AutoConfirm {
    pub fn yes() -> Self {
        AutoConfirm {
            answer: true,
            notices: Vec::new(),
        }
    }

    pub fn no() -> Self {
        AutoConfirm {
            answer: false,
            notices: Vec::new(),
        }
    }
}

impl Interaction for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
