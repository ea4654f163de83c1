//! Supported external CLI identifiers and their invocation flags.

/// An external CLI tool, identified by the program name the browser sent.
///
/// The set is open: the known tools get their auto-confirm flag appended,
/// anything else passes through with no extra flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliTool {
    program: String,
}

impl CliTool {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            program: identifier.into(),
        }
    }

    /// Program name to spawn.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Auto-confirm flag for the known tools, if any.
    pub fn auto_confirm_flag(&self) -> Option<&'static str> {
        match self.program.as_str() {
            "claude" => Some("--dangerously-skip-permissions"),
            "gemini" => Some("-y"),
            _ => None,
        }
    }

    /// Argument vector for one invocation with the given prompt.
    pub fn args(&self, prompt: &str) -> Vec<String> {
        let mut args = vec!["-p".to_string(), prompt.to_string()];
        if let Some(flag) = self.auto_confirm_flag() {
            args.push(flag.to_string());
        }
        args
    }

    /// Display form of the invocation, for logs and the UI preview. This is
    /// a join of the real argument vector, not a shell-escaped string; the
    /// process is spawned from the same vector.
    pub fn preview_line(&self, prompt: &str) -> String {
        let mut line = self.program.clone();
        for arg in self.args(prompt) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_auto_confirm_flag() {
        let cli = CliTool::new("claude");
        assert_eq!(cli.auto_confirm_flag(), Some("--dangerously-skip-permissions"));
        assert_eq!(
            cli.args("do it"),
            vec!["-p", "do it", "--dangerously-skip-permissions"]
        );
    }

    #[test]
    fn test_gemini_auto_confirm_flag() {
        let cli = CliTool::new("gemini");
        assert_eq!(cli.auto_confirm_flag(), Some("-y"));
        assert_eq!(cli.args("do it"), vec!["-p", "do it", "-y"]);
    }

    #[test]
    fn test_unknown_cli_passes_through() {
        let cli = CliTool::new("somefuturetool");
        assert_eq!(cli.auto_confirm_flag(), None);
        assert_eq!(cli.args("do it"), vec!["-p", "do it"]);
    }

    #[test]
    fn test_preview_line_matches_args() {
        let cli = CliTool::new("gemini");
        assert_eq!(cli.preview_line("fix header"), "gemini -p fix header -y");
    }
}
