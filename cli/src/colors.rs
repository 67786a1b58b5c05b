use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn band_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn rank(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
