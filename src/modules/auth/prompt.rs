use std::collections::VecDeque;
use std::io;

/// Source of secrets entered by a person, one per prompt label
pub trait SecretPrompt {
    fn read_secret(&mut self, label: &str) -> io::Result<String>;
}

impl<F> SecretPrompt for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn read_secret(&mut self, label: &str) -> io::Result<String> {
        self(label)
    }
}

/// Reads from the controlling terminal without echoing
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn read_secret(&mut self, label: &str) -> io::Result<String> {
        rpassword::prompt_password(label)
    }
}

/// Replays a fixed list of answers and remembers every label asked.
///
/// Once the answers run out, reading fails with `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    labels: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            labels: Vec::new(),
        }
    }

    /// Queue more answers behind the remaining ones
    pub fn push<S: Into<String>>(&mut self, answer: S) {
        self.answers.push_back(answer.into());
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn times_asked(&self) -> usize {
        self.labels.len()
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl SecretPrompt for ScriptedPrompt {
    fn read_secret(&mut self, label: &str) -> io::Result<String> {
        self.labels.push(label.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_in_order() {
        let mut prompt = ScriptedPrompt::new(["first", "second"]);
        assert_eq!(prompt.read_secret("A: ").unwrap(), "first");
        assert_eq!(prompt.read_secret("B: ").unwrap(), "second");
        assert_eq!(prompt.labels(), ["A: ", "B: "]);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_scripted_prompt_runs_dry() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        let err = prompt.read_secret("A: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(prompt.times_asked(), 1);

        prompt.push("late");
        assert_eq!(prompt.read_secret("A: ").unwrap(), "late");
    }

    #[test]
    fn test_closure_prompt() {
        let mut asked = Vec::new();
        let mut prompt = |label: &str| -> io::Result<String> {
            asked.push(label.to_string());
            Ok("secret".to_string())
        };
        assert_eq!(prompt.read_secret("Password: ").unwrap(), "secret");
        drop(prompt);
        assert_eq!(asked, vec!["Password: ".to_string()]);
    }
}
