//! Data board - a single-owner content board.
//!
//! The owner shares posts into named categories and grants friends
//! visibility per category. Friends can toggle likes on posts they can see.
//! Two storage strategies implement the same [`DataBoard`] contract.

pub mod auth;
pub mod board;
pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;

pub use auth::Credentials;
pub use board::{
    open_board, rank_by_likes, Category, DataBoard, FeedSnapshot, FlatBoard, PartitionedBoard,
    Post, SharedBoard, StorageStrategy,
};
pub use config::Config;
pub use error::{BoardError, ErrorKind, Result};
