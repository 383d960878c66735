use console::style;

/// Diagnostics handle for informational stderr messages. Constructed once in
/// `main` and passed to the operations that emit them; there is no global
/// logger state.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    enabled: bool,
}

impl Reporter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn info(&self, msg: &str) {
        if self.enabled {
            eprintln!("{} {}", style("info:").cyan().bold(), msg);
        }
    }
}
