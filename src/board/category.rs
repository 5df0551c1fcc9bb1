//! Category model for the partitioned board.
//!
//! A category owns the friends allowed to see it and the posts shared into
//! it. Every post in a category's feed carries that category's name.

use std::collections::BTreeSet;

use super::post::Post;
use crate::{BoardError, Result};

/// A named visibility partition holding its own friends and feed.
#[derive(Debug, Clone, Default)]
pub struct Category {
    friends: BTreeSet<String>,
    feed: Vec<Post>,
}

impl Category {
    /// Create an empty category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Friends with visibility on this category (copy).
    pub fn friends(&self) -> BTreeSet<String> {
        self.friends.clone()
    }

    /// Posts shared into this category, in insertion order (copy).
    pub fn feed(&self) -> Vec<Post> {
        self.feed.clone()
    }

    /// Borrow the feed without copying. Callers outside the crate get copies.
    pub(crate) fn posts(&self) -> &[Post] {
        &self.feed
    }

    /// Number of posts in the feed.
    pub fn len(&self) -> usize {
        self.feed.len()
    }

    /// Check if the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.feed.is_empty()
    }

    /// Check whether a friend can see this category.
    pub fn has_friend(&self, friend: &str) -> bool {
        self.friends.contains(friend)
    }

    /// Grant visibility. Returns `false` if the friend was already present.
    pub fn add_friend(&mut self, friend: &str) -> bool {
        self.friends.insert(friend.to_string())
    }

    /// Revoke visibility. Returns `false` if the friend was not present.
    pub fn remove_friend(&mut self, friend: &str) -> bool {
        self.friends.remove(friend)
    }

    /// Append a post. Identical posts may be shared more than once.
    pub fn add_post(&mut self, post: Post) {
        self.feed.push(post);
    }

    /// Check whether a post with the same identity is in the feed.
    pub fn contains_post(&self, post: &Post) -> bool {
        self.position(post).is_some()
    }

    /// Copy of the first post matching `post`.
    pub fn get_post(&self, post: &Post) -> Result<Post> {
        self.feed
            .iter()
            .find(|p| p.same_identity(post))
            .cloned()
            .ok_or_else(BoardError::post_not_found)
    }

    /// Remove the first post matching `post` and return it.
    pub fn remove_post(&mut self, post: &Post) -> Result<Post> {
        let index = self.position(post).ok_or_else(BoardError::post_not_found)?;
        Ok(self.feed.remove(index))
    }

    /// Toggle `friend`'s like on the first post matching `post`.
    ///
    /// Returns `true` if the like was added. Visibility is checked by the
    /// caller; this only locates the post.
    pub fn toggle_like(&mut self, post: &Post, friend: &str) -> Result<bool> {
        let index = self.position(post).ok_or_else(BoardError::post_not_found)?;
        self.feed[index].toggle_like(friend)
    }

    fn position(&self, post: &Post) -> Option<usize> {
        self.feed.iter().position(|p| p.same_identity(post))
    }
}
