//! Interactive disambiguation prompt
//!
//! When a package resolves to more than one source, the operator picks one
//! from a numbered list. The loop blocks on operator input with no timeout
//! and no retry limit; invalid input re-prompts silently. Input is read
//! through [`PromptInput`] so tests can script answers.

use std::io::{self, BufRead, Write};

use console::Style;

use crate::error::{GitpipError, Result};

/// Line-oriented input source for the prompt
pub trait PromptInput {
    /// Read one line, without the trailing newline; `None` on EOF
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Operator input from standard input
pub struct StdinInput;

impl PromptInput for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Present `candidates` as a numbered list and block until the operator
/// enters a valid 1-based index.
///
/// EOF on the input source means nobody is there to choose; that is the
/// one case where the ambiguity becomes a [`GitpipError::ConflictingSources`]
/// error instead of a selection.
pub fn choose<'a, T>(
    package: &str,
    candidates: &'a [T],
    render: impl Fn(&T) -> String,
    input: &mut dyn PromptInput,
) -> Result<&'a T> {
    let rendered: Vec<String> = candidates.iter().map(render).collect();

    println!(
        "Package '{}' was found on multiple sources:",
        Style::new().bold().apply_to(package)
    );
    for (i, desc) in rendered.iter().enumerate() {
        println!("  {}: {}", Style::new().bold().cyan().apply_to(i + 1), desc);
    }

    loop {
        print!("Select a source by entering its number: ");
        io::stdout().flush()?;

        let Some(line) = input.read_line()? else {
            return Err(GitpipError::ConflictingSources {
                package: package.to_string(),
                sources: rendered,
            });
        };

        if let Ok(n) = line.trim().parse::<usize>() {
            if (1..=candidates.len()).contains(&n) {
                return Ok(&candidates[n - 1]);
            }
        }
        // Silent re-prompt on anything else
    }
}
