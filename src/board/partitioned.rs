//! Partitioned board storage.
//!
//! Each category is an independent [`Category`] owning its friends and its
//! feed. Friend grants and revocations are strictly per category.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use super::category::Category;
use super::post::{rank_by_likes, Post};
use super::snapshot::FeedSnapshot;
use super::traits::DataBoard;
use super::types::StorageStrategy;
use crate::auth::{require_filled, Credentials};
use crate::{BoardError, Result};

/// Board that delegates all category-scoped state to [`Category`] values.
#[derive(Debug)]
pub struct PartitionedBoard {
    credentials: Credentials,
    categories: BTreeMap<String, Category>,
}

impl PartitionedBoard {
    /// Create an empty board for `owner`.
    pub fn new(owner: &str, password: &str) -> Result<Self> {
        Ok(Self {
            credentials: Credentials::new(owner, password)?,
            categories: BTreeMap::new(),
        })
    }

    /// Friends who can see `category`, if it exists (copy).
    pub fn category_friends(&self, category: &str) -> Option<BTreeSet<String>> {
        self.categories.get(category).map(Category::friends)
    }

    /// Names of all categories in ascending order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    fn category_mut(&mut self, category: &str) -> Result<&mut Category> {
        self.categories
            .get_mut(category)
            .ok_or_else(|| BoardError::category_not_found(category))
    }

    /// The category that holds `post`, or `ItemNotFound`.
    fn home_of(&self, post: &Post) -> Result<&Category> {
        self.categories
            .get(post.category())
            .ok_or_else(BoardError::post_not_found)
    }
}

impl DataBoard for PartitionedBoard {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Partitioned
    }

    fn create_category(&mut self, category: &str, password: &str) -> Result<()> {
        require_filled(&[category, password])?;
        self.authenticate(password)?;
        if self.categories.contains_key(category) {
            return Err(BoardError::DuplicateItem(format!("category {category}")));
        }
        self.categories.insert(category.to_string(), Category::new());
        info!("Category {} created", category);
        Ok(())
    }

    fn remove_category(&mut self, category: &str, password: &str) -> Result<()> {
        require_filled(&[category, password])?;
        self.authenticate(password)?;
        let removed = self
            .categories
            .remove(category)
            .ok_or_else(|| BoardError::category_not_found(category))?;
        info!("Category {} removed with {} posts", category, removed.len());
        Ok(())
    }

    fn add_friend(&mut self, category: &str, password: &str, friend: &str) -> Result<()> {
        require_filled(&[category, password, friend])?;
        self.authenticate(password)?;
        self.category_mut(category)?.add_friend(friend);
        info!("Friend {} can now see {}", friend, category);
        Ok(())
    }

    fn remove_friend(&mut self, category: &str, password: &str, friend: &str) -> Result<()> {
        require_filled(&[category, password, friend])?;
        self.authenticate(password)?;
        if self.category_mut(category)?.remove_friend(friend) {
            info!("Friend {} can no longer see {}", friend, category);
        }
        Ok(())
    }

    fn put(&mut self, password: &str, post: Post, category: &str) -> Result<bool> {
        require_filled(&[password, category])?;
        self.authenticate(password)?;
        let target = self.category_mut(category)?;
        if post.category() != category {
            return Err(BoardError::CategoryMismatch {
                post: post.category().to_string(),
                target: category.to_string(),
            });
        }
        info!("Post by {} filed under {}", post.author(), category);
        target.add_post(post);
        Ok(true)
    }

    fn get(&self, password: &str, post: &Post) -> Result<Post> {
        require_filled(&[password])?;
        self.authenticate(password)?;
        self.home_of(post)?.get_post(post)
    }

    fn remove(&mut self, password: &str, post: &Post) -> Result<Post> {
        require_filled(&[password])?;
        self.authenticate(password)?;
        let home = self
            .categories
            .get_mut(post.category())
            .ok_or_else(BoardError::post_not_found)?;
        let removed = home.remove_post(post)?;
        info!("Post by {} removed from {}", removed.author(), removed.category());
        Ok(removed)
    }

    fn insert_like(&mut self, friend: &str, post: &Post) -> Result<()> {
        require_filled(&[friend])?;
        let home = match self.categories.get_mut(post.category()) {
            Some(home) if home.contains_post(post) => home,
            _ => return Err(BoardError::post_not_found()),
        };
        if !home.has_friend(friend) {
            return Err(BoardError::NotAllowed {
                friend: friend.to_string(),
                category: post.category().to_string(),
            });
        }
        let added = home.toggle_like(post, friend)?;
        debug!(
            "Friend {} {} a post in {}",
            friend,
            if added { "liked" } else { "unliked" },
            post.category()
        );
        Ok(())
    }

    fn get_data_category(&self, password: &str, category: &str) -> Result<Vec<Post>> {
        require_filled(&[password, category])?;
        self.authenticate(password)?;
        self.categories
            .get(category)
            .map(Category::feed)
            .ok_or_else(|| BoardError::category_not_found(category))
    }

    fn get_all_by_likes(&self, password: &str) -> Result<FeedSnapshot> {
        require_filled(&[password])?;
        self.authenticate(password)?;
        let mut ranked: Vec<Post> = self
            .categories
            .values()
            .flat_map(|c| c.posts().iter().cloned())
            .collect();
        ranked.sort_by(rank_by_likes);
        Ok(FeedSnapshot::from(ranked))
    }

    fn get_by_friend(&self, friend: &str) -> Result<FeedSnapshot> {
        require_filled(&[friend])?;
        let visible: FeedSnapshot = self
            .categories
            .values()
            .filter(|c| c.has_friend(friend))
            .flat_map(|c| c.posts().iter().cloned())
            .collect();
        debug!("Friend {} can see {} posts", friend, visible.len());
        Ok(visible)
    }
}
