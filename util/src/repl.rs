use rustyline::{error::ReadlineError, Editor};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum Error<E> {
    #[error(transparent)]
    Readline(ReadlineError),
    #[error("Command failed: {0:?}")]
    Command(E),
}

pub trait Repl {
    type Error: std::fmt::Debug;
    const PROMPT: &'static str = ">> ";
    const HISTORY: Option<&'static str> = None;
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error>;
}

/// Joins lines ending in `\` into a single input.
#[derive(Default, Debug)]
struct Pending(Option<String>);

impl Pending {
    /// Returns the complete input once a line without a trailing `\` arrives.
    fn feed(&mut self, mut line: String) -> Option<String> {
        let continued = line.ends_with('\\');
        if continued {
            line.pop();
            line.push('\n');
        }
        let input = match self.0.take() {
            Some(mut input) => {
                input.push_str(&line);
                input
            }
            None => line,
        };
        if continued {
            self.0 = Some(input);
            None
        } else {
            Some(input)
        }
    }
}

pub fn start_repl<R: Repl>(mut repl: R) -> Result<(), Error<R::Error>> {
    let mut editor = Editor::<()>::new();
    if let Some(history) = R::HISTORY {
        if let Err(e) = editor.load_history(history) {
            debug!(history, "no history loaded: {e}");
        }
    }
    let mut pending = Pending::default();
    loop {
        match editor.readline(R::PROMPT) {
            Ok(line) => {
                let Some(input) = pending.feed(line) else {
                    continue;
                };
                editor.add_history_entry(input.as_str());
                debug!(len = input.len(), "evaluating input");
                repl.evaluate(input).map_err(Error::Command)?;
                if let Some(history) = R::HISTORY {
                    editor.save_history(history).map_err(Error::Readline)?;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break Ok(());
            }
            Err(e) => {
                warn!("readline failed: {e}");
                break Err(Error::Readline(e));
            }
        }
    }
}
