pub mod catalog;
pub mod sink;

use hoas::Naming;
use tracing::{debug, info};

use crate::{catalog::Example, sink::LineSink};

/// Renders every catalog example, in order, one line each. Returns the number of lines.
pub fn run<S: LineSink>(sink: &mut S) -> Result<usize, S::Error> {
    for example in Example::ALL {
        debug!(%example, start = %Naming::default(), "rendering");
        sink.write_line(&example.render())?;
    }
    info!(count = Example::ALL.len(), "rendered catalog");
    Ok(Example::ALL.len())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_run() {
        let mut lines = Vec::new();
        let count = match run(&mut lines) {
            Ok(count) => count,
            Err(never) => match never {},
        };
        assert_eq!(count, Example::ALL.len());
        assert_eq!(lines.len(), count);
        assert_eq!(lines[0], r"(\ a0 -> a0)");
        assert_eq!(
            lines.last().map(String::as_str),
            Some(r#"length "hello, world""#)
        );
    }

    #[test]
    fn test_run_is_repeatable() {
        let (mut first, mut second) = (Vec::new(), Vec::new());
        assert!(run(&mut first).is_ok());
        assert!(run(&mut second).is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn test_console_sink() {
        let mut console = sink::Console::new(Vec::new());
        assert!(console.write_line("True").is_ok());
        assert!(console.write_line("[]").is_ok());
        assert_eq!(String::from_utf8_lossy(&console.into_inner()), "True\n[]\n");
    }
}
