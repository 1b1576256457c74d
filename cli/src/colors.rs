use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn airport(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn unit(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    /// Weather scores shaded by severity, formatted to two decimals.
    pub fn weather_score(&self, score: f64) -> ColoredString {
        format!("{:.2}", score).color(weather_severity(score))
    }
}

/// Calm (up to 3) is green, unsettled (up to 6) yellow, stormy red.
pub fn weather_severity(score: f64) -> Color {
    if score <= 3.0 {
        Color::Green
    } else if score <= 6.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
