use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin
pub fn prompt_with_confirmation(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), &mut io::stdout(), question)
}

/// Only an explicit "y" or "yes" counts as agreement
pub fn confirm_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} (y/n): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}
