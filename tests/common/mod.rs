//! Test helpers for board integration tests.
//!
//! Provides credentials, board constructors for every storage strategy, and
//! post fixtures.

#![allow(dead_code)]

use databoard::{open_board, DataBoard, ErrorKind, Post, Result, StorageStrategy};

pub const OWNER: &str = "Luca";
pub const PASSWORD: &str = "un1c0rn1!";
pub const NEW_PASSWORD: &str = "gh0stbust3rs?";
pub const WRONG_PASSWORD: &str = "e@rthqu4k3";

/// Open an empty board for every storage strategy.
pub fn boards() -> Vec<(StorageStrategy, Box<dyn DataBoard>)> {
    StorageStrategy::all()
        .into_iter()
        .map(|s| (s, open_board(s, OWNER, PASSWORD).unwrap()))
        .collect()
}

/// Open a board for every strategy, pre-populated with the given categories.
pub fn boards_with(categories: &[&str]) -> Vec<(StorageStrategy, Box<dyn DataBoard>)> {
    let mut boards = boards();
    for (_, board) in boards.iter_mut() {
        for category in categories {
            board.create_category(category, PASSWORD).unwrap();
        }
    }
    boards
}

/// Post by the owner with a fixed timestamp.
pub fn post(content: &str, category: &str, created_at: i64) -> Post {
    Post::with_timestamp(OWNER, content, category, created_at).unwrap()
}

/// Kind of the error carried by `result`. Panics on success.
pub fn kind<T>(result: Result<T>) -> ErrorKind {
    match result {
        Ok(_) => panic!("expected an error"),
        Err(e) => e.kind(),
    }
}
