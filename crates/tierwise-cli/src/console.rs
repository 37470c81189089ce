//! CLI console utilities

use colored::*;
use tierwise_core::TokenPrice;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose mode only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print a separator
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(50).dimmed());
    }
}

/// Format a USD amount with precision that suits its size
pub fn format_usd(amount: f64) -> String {
    if amount == 0.0 {
        "$0".to_string()
    } else if amount < 0.01 {
        format!("${:.6}", amount)
    } else if amount < 1.0 {
        format!("${:.4}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// One-line price summary
pub fn format_price(price: &TokenPrice) -> String {
    if price.is_free() {
        return "free".green().to_string();
    }
    format!(
        "{} in / {} out per 1M tokens",
        format_usd(price.input_cost_per_million_tokens),
        format_usd(price.output_cost_per_million_tokens)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(0.0021), "$0.002100");
        assert_eq!(format_usd(0.28), "$0.2800");
        assert_eq!(format_usd(15.0), "$15.00");
    }

    #[test]
    fn test_format_price() {
        colored::control::set_override(false);
        assert_eq!(format_price(&TokenPrice::free()), "free");
        assert_eq!(
            format_price(&TokenPrice::new(3.0, 15.0)),
            "$3.00 in / $15.00 out per 1M tokens"
        );
    }
}
