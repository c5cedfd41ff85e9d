// Terminal prompt using editline
// Shows the prompt text on stdout and reads one edited line from stdin

use std::io::{self, Write};

use editline::{LineEditor, terminals::StdioTerminal};

use crate::prompt::Prompt;

pub struct StdioPrompt {
    editor: LineEditor,
    terminal: StdioTerminal,
}

impl StdioPrompt {
    pub fn new() -> Self {
        StdioPrompt {
            editor: LineEditor::new(1024, 50),
            terminal: StdioTerminal::new(),
        }
    }
}

impl Default for StdioPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for StdioPrompt {
    // RUST CONCEPT: A total call over a fallible terminal
    // End of input and Ctrl-C are the user cancelling, anything else is a
    // terminal failure; all of them answer with the empty string.
    fn ask(&mut self, message: &str) -> String {
        let mut stdout = io::stdout();
        if let Err(e) = write!(stdout, "{} ", message).and_then(|_| stdout.flush()) {
            tracing::warn!(error = %e, "failed to show prompt");
        }

        match self.editor.read_line(&mut self.terminal) {
            Ok(line) => line.as_str().to_string(),
            Err(editline::Error::Eof) | Err(editline::Error::Interrupted) => {
                tracing::debug!(prompt = message, "prompt cancelled");
                String::new()
            }
            Err(e) => {
                tracing::warn!(prompt = message, error = %e, "prompt input failed");
                String::new()
            }
        }
    }
}
