//! Thread-safe handle around a board.
//!
//! Boards themselves assume a single caller. `SharedBoard` serializes access
//! with one reader-writer lock per board: mutating operations take the write
//! lock, reads share the read lock. Every operation stays all-or-nothing.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::post::Post;
use super::snapshot::FeedSnapshot;
use super::traits::DataBoard;
use crate::Result;

/// Cloneable, lock-guarded handle to a [`DataBoard`].
///
/// # Example
///
/// ```
/// use databoard::{FlatBoard, SharedBoard};
///
/// let board = SharedBoard::new(FlatBoard::new("Luca", "un1c0rn1!").unwrap());
/// let handle = board.clone();
/// handle.create_category("Funny", "un1c0rn1!").unwrap();
/// assert!(board.get_data_category("un1c0rn1!", "Funny").unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct SharedBoard<B> {
    inner: Arc<RwLock<B>>,
}

impl<B> Clone for SharedBoard<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: DataBoard> SharedBoard<B> {
    /// Wrap a board for shared use.
    pub fn new(board: B) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    // Operations validate before mutating; a poisoned board is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, B> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, B> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Name of the board owner.
    pub fn owner(&self) -> String {
        self.read().owner().to_string()
    }

    /// Check the owner's password.
    pub fn authenticate(&self, password: &str) -> Result<bool> {
        self.read().authenticate(password)
    }

    /// Change the owner's password.
    pub fn reset_password(&self, current: &str, new: &str) -> Result<()> {
        self.write().reset_password(current, new)
    }

    /// See [`DataBoard::create_category`].
    pub fn create_category(&self, category: &str, password: &str) -> Result<()> {
        self.write().create_category(category, password)
    }

    /// See [`DataBoard::remove_category`].
    pub fn remove_category(&self, category: &str, password: &str) -> Result<()> {
        self.write().remove_category(category, password)
    }

    /// See [`DataBoard::add_friend`].
    pub fn add_friend(&self, category: &str, password: &str, friend: &str) -> Result<()> {
        self.write().add_friend(category, password, friend)
    }

    /// See [`DataBoard::remove_friend`].
    pub fn remove_friend(&self, category: &str, password: &str, friend: &str) -> Result<()> {
        self.write().remove_friend(category, password, friend)
    }

    /// See [`DataBoard::put`].
    pub fn put(&self, password: &str, post: Post, category: &str) -> Result<bool> {
        self.write().put(password, post, category)
    }

    /// See [`DataBoard::get`].
    pub fn get(&self, password: &str, post: &Post) -> Result<Post> {
        self.read().get(password, post)
    }

    /// See [`DataBoard::remove`].
    pub fn remove(&self, password: &str, post: &Post) -> Result<Post> {
        self.write().remove(password, post)
    }

    /// See [`DataBoard::insert_like`].
    pub fn insert_like(&self, friend: &str, post: &Post) -> Result<()> {
        self.write().insert_like(friend, post)
    }

    /// See [`DataBoard::get_data_category`].
    pub fn get_data_category(&self, password: &str, category: &str) -> Result<Vec<Post>> {
        self.read().get_data_category(password, category)
    }

    /// See [`DataBoard::get_all_by_likes`].
    pub fn get_all_by_likes(&self, password: &str) -> Result<FeedSnapshot> {
        self.read().get_all_by_likes(password)
    }

    /// See [`DataBoard::get_by_friend`].
    pub fn get_by_friend(&self, friend: &str) -> Result<FeedSnapshot> {
        self.read().get_by_friend(friend)
    }
}
