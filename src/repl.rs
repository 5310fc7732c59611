use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::interpreter::{session::Session, value::Value};

/// How the read-print loop renders its output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt written before each line is read. `None` for batch input.
    pub prompt:      Option<String>,
    /// Print the whole value stack after every line.
    pub print_stack: bool,
}

/// Reads lines from `input`, evaluates them and writes the results to
/// `output`.
///
/// For every line the loop prints the value stack (if enabled), then the
/// result in plain decimal notation or the failure text from
/// [`Session::describe`]. It stops when the session is no longer running or
/// the input is exhausted.
///
/// # Errors
/// Returns any I/O error raised while reading or writing.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::session::{Options, Session},
///     repl::{ReplConfig, run},
/// };
///
/// let mut session = Session::new(Options::default());
/// let mut output = Vec::new();
///
/// run(&mut session, "1 2 +\n3 *\nq\n4\n".as_bytes(), &mut output, &ReplConfig::default()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "3\n9\n9\n");
/// assert!(!session.is_running());
/// ```
pub fn run<R, W>(session: &mut Session,
                 mut input: R,
                 output: &mut W,
                 config: &ReplConfig)
                 -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut line = String::new();

    while session.is_running() {
        if let Some(prompt) = &config.prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }

        let expression = line.trim_end_matches(['\n', '\r']);
        let result = session.evaluate(expression);

        if config.print_stack {
            writeln!(output, "Number Stack: {}", format_stack(session.stack()))?;
        }

        match result {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(e) => writeln!(output, "{}", session.describe(&e))?,
        }
    }

    Ok(())
}

/// Formats a value stack bottom first, or `Empty` when it holds nothing.
///
/// # Example
/// ```
/// use rpncalc::{interpreter::value::Value, repl::format_stack};
///
/// assert_eq!(format_stack(&[]), "Empty");
/// assert_eq!(format_stack(&[Value::from(1), Value::from(-2)]), "[1, -2]");
/// ```
#[must_use]
pub fn format_stack(stack: &[Value]) -> String {
    if stack.is_empty() {
        return "Empty".to_string();
    }

    let items = stack.iter()
                     .map(ToString::to_string)
                     .collect::<Vec<_>>()
                     .join(", ");

    format!("[{items}]")
}
