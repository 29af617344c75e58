//! Instrument Identification
//!
//! Types for the upstream lookup key. The Upstox quote API addresses an
//! instrument as `<SEGMENT>|<SYMBOL>`, e.g. `NSE_EQ|INFY`.

/// Market segment prefix of an instrument key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketSegment {
    /// NSE equities - the only segment this gateway serves.
    #[default]
    NseEq,
}

impl MarketSegment {
    /// Get the segment identifier used in instrument keys.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NseEq => "NSE_EQ",
        }
    }
}

/// Upstream lookup key: a market segment plus a trading symbol.
///
/// The symbol is taken from the request path as-is; the gateway performs no
/// symbol validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentKey {
    segment: MarketSegment,
    symbol: String,
}

impl InstrumentKey {
    /// Create a key in the given segment.
    #[must_use]
    pub fn new(segment: MarketSegment, symbol: impl Into<String>) -> Self {
        Self {
            segment,
            symbol: symbol.into(),
        }
    }

    /// Create an NSE equity key.
    #[must_use]
    pub fn nse_equity(symbol: impl Into<String>) -> Self {
        Self::new(MarketSegment::NseEq, symbol)
    }

    /// Get the market segment.
    #[must_use]
    pub const fn segment(&self) -> MarketSegment {
        self.segment
    }

    /// Get the trading symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl std::fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.segment.as_str(), self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_identifier() {
        assert_eq!(MarketSegment::NseEq.as_str(), "NSE_EQ");
        assert_eq!(MarketSegment::default(), MarketSegment::NseEq);
    }

    #[test]
    fn key_renders_segment_and_symbol() {
        let key = InstrumentKey::nse_equity("INFY");
        assert_eq!(key.to_string(), "NSE_EQ|INFY");
        assert_eq!(key.symbol(), "INFY");
        assert_eq!(key.segment(), MarketSegment::NseEq);
    }

    #[test]
    fn symbol_is_not_validated() {
        // Whatever arrives in the path goes upstream untouched.
        let key = InstrumentKey::nse_equity("not a symbol");
        assert_eq!(key.to_string(), "NSE_EQ|not a symbol");

        let empty = InstrumentKey::nse_equity("");
        assert_eq!(empty.to_string(), "NSE_EQ|");
    }
}
