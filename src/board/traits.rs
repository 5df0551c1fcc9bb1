//! The board contract shared by every storage strategy.
//!
//! Both implementations validate input in the same order: blank fields
//! first, then owner authentication, then existence and visibility. Each
//! operation either succeeds completely or leaves the board untouched.

use super::post::Post;
use super::snapshot::FeedSnapshot;
use super::types::StorageStrategy;
use crate::auth::Credentials;
use crate::Result;

/// Operations offered by a single-owner data board.
///
/// Owner-only operations take the owner's password. Friends interact only
/// through [`insert_like`] and [`get_by_friend`], gated by category
/// visibility instead of a password.
///
/// Every read returns copies; no caller can reach the board's own posts.
///
/// [`insert_like`]: DataBoard::insert_like
/// [`get_by_friend`]: DataBoard::get_by_friend
pub trait DataBoard: Send + Sync {
    /// The embedded credential component.
    fn credentials(&self) -> &Credentials;

    /// Mutable access to the embedded credential component.
    fn credentials_mut(&mut self) -> &mut Credentials;

    /// Which storage strategy backs this board.
    fn strategy(&self) -> StorageStrategy;

    /// Name of the board owner.
    fn owner(&self) -> &str {
        self.credentials().owner()
    }

    /// Check the owner's password.
    fn authenticate(&self, password: &str) -> Result<bool> {
        self.credentials().authenticate(password)
    }

    /// Change the owner's password.
    fn reset_password(&mut self, current: &str, new: &str) -> Result<()> {
        self.credentials_mut().reset_password(current, new)
    }

    /// Create an empty category.
    ///
    /// Fails with `DuplicateItem` if it already exists.
    fn create_category(&mut self, category: &str, password: &str) -> Result<()>;

    /// Delete a category together with its posts and friend grants.
    fn remove_category(&mut self, category: &str, password: &str) -> Result<()>;

    /// Grant `friend` visibility on `category`. Granting twice is a no-op.
    fn add_friend(&mut self, category: &str, password: &str, friend: &str) -> Result<()>;

    /// Revoke `friend`'s visibility on `category`.
    fn remove_friend(&mut self, category: &str, password: &str, friend: &str) -> Result<()>;

    /// Share `post` into `category`. Identical posts may be shared repeatedly.
    fn put(&mut self, password: &str, post: Post, category: &str) -> Result<bool>;

    /// Copy of the stored post matching `post`.
    fn get(&self, password: &str, post: &Post) -> Result<Post>;

    /// Remove the first stored post matching `post` and return it.
    fn remove(&mut self, password: &str, post: &Post) -> Result<Post>;

    /// Toggle `friend`'s like on `post`.
    ///
    /// No password is needed; `friend` must be able to see the post's category.
    fn insert_like(&mut self, friend: &str, post: &Post) -> Result<()>;

    /// Copies of every post in `category`, in insertion order.
    fn get_data_category(&self, password: &str, category: &str) -> Result<Vec<Post>>;

    /// Every post on the board ranked by [`rank_by_likes`].
    ///
    /// [`rank_by_likes`]: super::post::rank_by_likes
    fn get_all_by_likes(&self, password: &str) -> Result<FeedSnapshot>;

    /// Every post in the categories `friend` can see.
    fn get_by_friend(&self, friend: &str) -> Result<FeedSnapshot>;
}
