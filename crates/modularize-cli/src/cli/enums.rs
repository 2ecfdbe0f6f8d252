use clap::ValueEnum;
use modularize_gen::QuoteStyle;

/// Quote style for generated module specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Quote {
    /// 'lib/Member'
    Single,
    /// "lib/Member"
    Double,
}

impl From<Quote> for QuoteStyle {
    fn from(quote: Quote) -> Self {
        match quote {
            Quote::Single => QuoteStyle::Single,
            Quote::Double => QuoteStyle::Double,
        }
    }
}
