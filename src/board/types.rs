//! Storage strategy selection for the data board.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::flat::FlatBoard;
use super::partitioned::PartitionedBoard;
use super::traits::DataBoard;
use crate::Result;

/// How a board lays out its categories, friends and posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStrategy {
    /// One global feed, one global friend registry and a category map.
    #[default]
    Flat,
    /// Each category owns its own friends and feed.
    Partitioned,
}

impl StorageStrategy {
    /// Convert the strategy to its configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageStrategy::Flat => "flat",
            StorageStrategy::Partitioned => "partitioned",
        }
    }

    /// All strategies, in declaration order.
    pub fn all() -> [StorageStrategy; 2] {
        [StorageStrategy::Flat, StorageStrategy::Partitioned]
    }
}

impl fmt::Display for StorageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(StorageStrategy::Flat),
            "partitioned" => Ok(StorageStrategy::Partitioned),
            _ => Err(format!("unknown storage strategy: {s}")),
        }
    }
}

/// Open an empty board backed by the given strategy.
///
/// Fails with `EmptyField` if owner or password is blank.
pub fn open_board(
    strategy: StorageStrategy,
    owner: &str,
    password: &str,
) -> Result<Box<dyn DataBoard>> {
    Ok(match strategy {
        StorageStrategy::Flat => Box::new(FlatBoard::new(owner, password)?),
        StorageStrategy::Partitioned => Box::new(PartitionedBoard::new(owner, password)?),
    })
}
