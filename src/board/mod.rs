//! Board module for the data board.
//!
//! This module provides:
//! - The post model and its ranking order
//! - The `DataBoard` contract
//! - Two storage strategies implementing it (flat and partitioned)
//! - Read-only feed snapshots and a lock-guarded shared handle

mod category;
mod flat;
mod partitioned;
mod post;
mod shared;
mod snapshot;
mod traits;
mod types;

pub use category::Category;
pub use flat::FlatBoard;
pub use partitioned::PartitionedBoard;
pub use post::{rank_by_likes, Post};
pub use shared::SharedBoard;
pub use snapshot::FeedSnapshot;
pub use traits::DataBoard;
pub use types::{open_board, StorageStrategy};
