//! Criterion directionality and the impact vector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TopsisError;

/// Whether larger or smaller raw values are preferable for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Larger is better (`+`).
    Benefit,
    /// Smaller is better (`-`).
    Cost,
}

impl Impact {
    /// Returns the submission symbol for this impact.
    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    /// Parses `+` or `-`; position is reported as 0, use
    /// [`ImpactVector::parse`] for positional errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(TopsisError::InvalidImpactSymbol {
                position: 0,
                symbol: other.to_string(),
            }),
        }
    }
}

/// One impact per criterion, in criterion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    /// Wraps already-typed impacts.
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses a comma-separated list of `+` / `-` symbols.
    ///
    /// An empty string yields an empty vector; the scorer rejects it
    /// through its dimension check.
    pub fn parse(raw: &str) -> Result<Self, TopsisError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        raw.split(',')
            .enumerate()
            .map(|(position, symbol)| {
                symbol.parse::<Impact>().map_err(|_| TopsisError::InvalidImpactSymbol {
                    position,
                    symbol: symbol.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Impact> {
        self.0.iter()
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }
}

impl fmt::Display for ImpactVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.0.iter().map(|i| i.symbol().to_string()).collect();
        write!(f, "{}", symbols.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plus_and_minus() {
        let impacts = ImpactVector::parse("+,-,+").unwrap();
        assert_eq!(
            impacts.as_slice(),
            &[Impact::Benefit, Impact::Cost, Impact::Benefit]
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let impacts = ImpactVector::parse(" + , - ").unwrap();
        assert_eq!(impacts.as_slice(), &[Impact::Benefit, Impact::Cost]);
    }

    #[test]
    fn rejects_unknown_symbol_with_position() {
        let err = ImpactVector::parse("+,*").unwrap_err();
        assert_eq!(
            err,
            TopsisError::InvalidImpactSymbol {
                position: 1,
                symbol: "*".to_string(),
            }
        );
    }

    #[test]
    fn rejects_empty_entry() {
        let err = ImpactVector::parse("+,,-").unwrap_err();
        assert!(matches!(
            err,
            TopsisError::InvalidImpactSymbol { position: 1, .. }
        ));
    }

    #[test]
    fn rejects_words() {
        assert!(ImpactVector::parse("benefit,cost").is_err());
        assert!("++".parse::<Impact>().is_err());
    }

    #[test]
    fn empty_input_is_empty_vector() {
        assert!(ImpactVector::parse("  ").unwrap().is_empty());
    }

    #[test]
    fn displays_as_symbols() {
        let impacts = ImpactVector::new(vec![Impact::Cost, Impact::Benefit]);
        assert_eq!(impacts.to_string(), "-,+");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ImpactVector::new(vec![Impact::Benefit, Impact::Cost])).unwrap();
        assert_eq!(json, r#"["benefit","cost"]"#);
    }
}
