//! Formatting options for generated import statements

/// Quote style for module specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Single quotes: `'lib/A'`
    Single,
    /// Double quotes: `"lib/A"`
    #[default]
    Double,
}

impl std::str::FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(QuoteStyle::Single),
            "double" => Ok(QuoteStyle::Double),
            other => Err(format!("Invalid quote style: {}", other)),
        }
    }
}

/// Formatting options for code generation
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Quote style for module specifiers
    pub quote_style: QuoteStyle,
}

impl FormatOptions {
    pub fn with_quote_style(quote_style: QuoteStyle) -> Self {
        Self { quote_style }
    }
}
