//! Knapsack instances and the line-oriented `.dat` file format.
//!
//! An instance file carries one instance per line, as whitespace-separated
//! integers: `id n capacity w1 v1 ... wn vn`. A solution file mirrors it
//! with one line per instance: `id n best_value  bits`, where `bits` is the
//! space-separated selection vector (`1` in position `i` iff item `i` is
//! packed).

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use fixedbitset::FixedBitSet;
use thiserror::Error;

/// A single item: what it weighs and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

/// One knapsack instance: an identifier, a capacity bound, and the items
/// competing for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub id: u64,
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Instance {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Error parsing one instance line.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Fewer than the three header tokens (id, item count, capacity).
    #[error("expected at least 3 header tokens (id, item count, capacity), found {0}")]
    TruncatedHeader(usize),

    /// A token that does not parse as a non-negative integer.
    #[error("invalid integer token {token:?}")]
    InvalidToken {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A weight token with no matching value token.
    #[error("weight token without a matching value token")]
    DanglingWeight,

    /// The declared item count disagrees with the pairs present on the line.
    #[error("declared {declared} items, line carries {found} (weight, value) pairs")]
    ItemCountMismatch { declared: usize, found: usize },
}

fn parse_token(token: &str) -> Result<u64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidToken {
        token: token.to_string(),
        source,
    })
}

impl FromStr for Instance {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(ParseError::TruncatedHeader(tokens.len()));
        }
        let id = parse_token(tokens[0])?;
        let declared = parse_token(tokens[1])? as usize;
        let capacity = parse_token(tokens[2])?;

        let mut items = Vec::with_capacity(declared);
        for pair in tokens[3..].chunks(2) {
            match pair {
                [weight, value] => items.push(Item {
                    weight: parse_token(weight)?,
                    value: parse_token(value)?,
                }),
                _ => return Err(ParseError::DanglingWeight),
            }
        }
        if items.len() != declared {
            return Err(ParseError::ItemCountMismatch {
                declared,
                found: items.len(),
            });
        }

        Ok(Instance {
            id,
            capacity,
            items,
        })
    }
}

/// One solved instance, ready to be written as a solution line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionRecord {
    pub id: u64,
    pub item_count: usize,
    pub best_value: u64,
    /// Bit `i` is set iff item `i` is packed.
    pub selection: FixedBitSet,
}

impl fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The double space between the value and the bit string matches the
        // historical solution-file layout, item-free instances included.
        write!(f, "{} {} {}  ", self.id, self.item_count, self.best_value)?;
        for i in 0..self.item_count {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", u8::from(self.selection.contains(i)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let instance: Instance = "9000 3 5 2 3 3 4 4 5".parse().unwrap();

        assert_eq!(instance.id, 9000);
        assert_eq!(instance.capacity, 5);
        assert_eq!(
            instance.items,
            vec![
                Item { weight: 2, value: 3 },
                Item { weight: 3, value: 4 },
                Item { weight: 4, value: 5 },
            ]
        );
    }

    #[test]
    fn test_parse_item_free_line() {
        let instance: Instance = "1 0 10".parse().unwrap();

        assert_eq!(instance.len(), 0);
        assert!(instance.is_empty());
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let instance: Instance = "  1  1   5\t 3 7 ".parse().unwrap();

        assert_eq!(instance.items, vec![Item { weight: 3, value: 7 }]);
    }

    #[test]
    fn test_parse_truncated_header() {
        let err = "1 2".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ParseError::TruncatedHeader(2)));
    }

    #[test]
    fn test_parse_non_integer_token() {
        let err = "1 1 5 3 x".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { ref token, .. } if token == "x"));
    }

    #[test]
    fn test_parse_negative_token_rejected() {
        let err = "1 1 5 -3 7".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { ref token, .. } if token == "-3"));
    }

    #[test]
    fn test_parse_dangling_weight() {
        let err = "1 2 5 3 7 4".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ParseError::DanglingWeight));
    }

    #[test]
    fn test_parse_item_count_mismatch() {
        let err = "1 3 5 3 7 4 2".parse::<Instance>().unwrap_err();
        assert!(matches!(
            err,
            ParseError::ItemCountMismatch {
                declared: 3,
                found: 2,
            }
        ));
    }

    #[test]
    fn test_solution_line_layout() {
        let mut selection = FixedBitSet::with_capacity(3);
        selection.insert(0);
        selection.insert(1);
        let record = SolutionRecord {
            id: 9000,
            item_count: 3,
            best_value: 7,
            selection,
        };

        assert_eq!(record.to_string(), "9000 3 7  1 1 0");
    }

    #[test]
    fn test_solution_line_item_free() {
        let record = SolutionRecord {
            id: 1,
            item_count: 0,
            best_value: 0,
            selection: FixedBitSet::with_capacity(0),
        };

        // Both spaces survive even with nothing after them.
        assert_eq!(record.to_string(), "1 0 0  ");
    }
}
