//! Flattened board storage.
//!
//! Posts live in one global feed, friends in one global registry, and each
//! category maps to the set of friends who can see it. The three structures
//! are kept consistent by every mutating operation:
//! - every friend in a category's set is also in the registry
//! - every post in the feed belongs to an existing category

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use super::post::{rank_by_likes, Post};
use super::snapshot::FeedSnapshot;
use super::traits::DataBoard;
use super::types::StorageStrategy;
use crate::auth::{require_filled, Credentials};
use crate::{BoardError, Result};

/// Board that keeps posts, friends and categories in three top-level collections.
#[derive(Debug)]
pub struct FlatBoard {
    credentials: Credentials,
    feed: Vec<Post>,
    friends: BTreeSet<String>,
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl FlatBoard {
    /// Create an empty board for `owner`.
    pub fn new(owner: &str, password: &str) -> Result<Self> {
        Ok(Self {
            credentials: Credentials::new(owner, password)?,
            feed: Vec::new(),
            friends: BTreeSet::new(),
            categories: BTreeMap::new(),
        })
    }

    /// Every friend granted visibility on at least one category (copy).
    pub fn friends(&self) -> BTreeSet<String> {
        self.friends.clone()
    }

    /// Friends who can see `category`, if it exists (copy).
    pub fn category_friends(&self, category: &str) -> Option<BTreeSet<String>> {
        self.categories.get(category).cloned()
    }

    /// Names of all categories in ascending order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    fn position(&self, post: &Post) -> Option<usize> {
        self.feed.iter().position(|p| p.same_identity(post))
    }

    fn can_see(&self, friend: &str, category: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|viewers| viewers.contains(friend))
    }
}

impl DataBoard for FlatBoard {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Flat
    }

    fn create_category(&mut self, category: &str, password: &str) -> Result<()> {
        require_filled(&[category, password])?;
        self.authenticate(password)?;
        if self.categories.contains_key(category) {
            return Err(BoardError::DuplicateItem(format!("category {category}")));
        }
        self.categories.insert(category.to_string(), BTreeSet::new());
        info!("Category {} created", category);
        Ok(())
    }

    fn remove_category(&mut self, category: &str, password: &str) -> Result<()> {
        require_filled(&[category, password])?;
        self.authenticate(password)?;
        if self.categories.remove(category).is_none() {
            return Err(BoardError::category_not_found(category));
        }
        let before = self.feed.len();
        self.feed.retain(|p| p.category() != category);
        info!(
            "Category {} removed with {} posts",
            category,
            before - self.feed.len()
        );
        Ok(())
    }

    fn add_friend(&mut self, category: &str, password: &str, friend: &str) -> Result<()> {
        require_filled(&[category, password, friend])?;
        self.authenticate(password)?;
        let viewers = self
            .categories
            .get_mut(category)
            .ok_or_else(|| BoardError::category_not_found(category))?;
        viewers.insert(friend.to_string());
        self.friends.insert(friend.to_string());
        info!("Friend {} can now see {}", friend, category);
        Ok(())
    }

    /// Revoke `friend` from the whole board.
    ///
    /// The flattened layout tracks friends globally: removal is keyed on the
    /// registry, and a successful call drops the friend from the registry and
    /// from every category, not only the one named. The partitioned board
    /// only touches the named category.
    fn remove_friend(&mut self, category: &str, password: &str, friend: &str) -> Result<()> {
        require_filled(&[category, password, friend])?;
        self.authenticate(password)?;
        if !self.categories.contains_key(category) {
            return Err(BoardError::category_not_found(category));
        }
        if !self.friends.remove(friend) {
            return Err(BoardError::ItemNotFound(format!("friend {friend}")));
        }
        for viewers in self.categories.values_mut() {
            viewers.remove(friend);
        }
        info!("Friend {} removed from every category", friend);
        Ok(())
    }

    fn put(&mut self, password: &str, post: Post, category: &str) -> Result<bool> {
        require_filled(&[password, category])?;
        self.authenticate(password)?;
        if !self.categories.contains_key(category) {
            return Err(BoardError::category_not_found(category));
        }
        if post.category() != category {
            return Err(BoardError::CategoryMismatch {
                post: post.category().to_string(),
                target: category.to_string(),
            });
        }
        info!("Post by {} filed under {}", post.author(), category);
        self.feed.push(post);
        Ok(true)
    }

    fn get(&self, password: &str, post: &Post) -> Result<Post> {
        require_filled(&[password])?;
        self.authenticate(password)?;
        self.feed
            .iter()
            .find(|p| p.same_identity(post))
            .cloned()
            .ok_or_else(BoardError::post_not_found)
    }

    fn remove(&mut self, password: &str, post: &Post) -> Result<Post> {
        require_filled(&[password])?;
        self.authenticate(password)?;
        let index = self.position(post).ok_or_else(BoardError::post_not_found)?;
        let removed = self.feed.remove(index);
        info!("Post by {} removed from {}", removed.author(), removed.category());
        Ok(removed)
    }

    fn insert_like(&mut self, friend: &str, post: &Post) -> Result<()> {
        require_filled(&[friend])?;
        let index = match self.position(post) {
            Some(index) if self.categories.contains_key(post.category()) => index,
            _ => return Err(BoardError::post_not_found()),
        };
        if !self.can_see(friend, post.category()) {
            return Err(BoardError::NotAllowed {
                friend: friend.to_string(),
                category: post.category().to_string(),
            });
        }
        let added = self.feed[index].toggle_like(friend)?;
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
        if !self.categories.contains_key(category) {
            return Err(BoardError::category_not_found(category));
        }
        Ok(self
            .feed
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect())
    }

    fn get_all_by_likes(&self, password: &str) -> Result<FeedSnapshot> {
        require_filled(&[password])?;
        self.authenticate(password)?;
        let mut ranked = self.feed.clone();
        ranked.sort_by(rank_by_likes);
        Ok(FeedSnapshot::from(ranked))
    }

    fn get_by_friend(&self, friend: &str) -> Result<FeedSnapshot> {
        require_filled(&[friend])?;
        let visible: FeedSnapshot = self
            .feed
            .iter()
            .filter(|p| self.can_see(friend, p.category()))
            .cloned()
            .collect();
        debug!("Friend {} can see {} posts", friend, visible.len());
        Ok(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PW: &str = "un1c0rn1!";

    fn board() -> FlatBoard {
        let mut board = FlatBoard::new("Luca", PW).unwrap();
        board.create_category("Funny", PW).unwrap();
        board.create_category("Pets", PW).unwrap();
        board
    }

    fn post(content: &str, category: &str, ts: i64) -> Post {
        Post::with_timestamp("Luca", content, category, ts).unwrap()
    }

    #[test]
    fn test_add_friend_registers_globally() {
        let mut board = board();
        board.add_friend("Funny", PW, "Sofia").unwrap();
        board.add_friend("Pets", PW, "Sofia").unwrap();
        assert_eq!(board.friends().len(), 1);
        assert!(board.category_friends("Funny").unwrap().contains("Sofia"));
        assert!(board.category_friends("Pets").unwrap().contains("Sofia"));
    }

    #[test]
    fn test_remove_friend_purges_every_category() {
        let mut board = board();
        board.add_friend("Funny", PW, "Danila").unwrap();
        board.add_friend("Pets", PW, "Danila").unwrap();

        board.remove_friend("Pets", PW, "Danila").unwrap();

        assert!(board.friends().is_empty());
        assert!(!board.category_friends("Funny").unwrap().contains("Danila"));
        assert!(!board.category_friends("Pets").unwrap().contains("Danila"));
    }

    #[test]
    fn test_remove_friend_via_other_category() {
        let mut board = board();
        board.add_friend("Funny", PW, "Sofia").unwrap();

        // Sofia was never granted Pets, but she is in the registry.
        board.remove_friend("Pets", PW, "Sofia").unwrap();
        assert!(!board.category_friends("Funny").unwrap().contains("Sofia"));
    }

    #[test]
    fn test_remove_friend_unknown() {
        let mut board = board();
        assert!(matches!(
            board.remove_friend("Funny", PW, "Leonardo"),
            Err(BoardError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_remove_friend_missing_category() {
        let mut board = board();
        board.add_friend("Funny", PW, "Sofia").unwrap();
        assert!(matches!(
            board.remove_friend("Flowers", PW, "Sofia"),
            Err(BoardError::ItemNotFound(_))
        ));
        // Nothing was removed.
        assert!(board.friends().contains("Sofia"));
    }

    #[test]
    fn test_remove_category_drops_posts() {
        let mut board = board();
        let funny = post("<A>", "Funny", 1);
        let pets = post("<C>", "Pets", 2);
        board.put(PW, funny.clone(), "Funny").unwrap();
        board.put(PW, pets.clone(), "Pets").unwrap();

        board.remove_category("Funny", PW).unwrap();

        assert!(matches!(board.get(PW, &funny), Err(BoardError::ItemNotFound(_))));
        assert!(board.get(PW, &pets).is_ok());
        assert_eq!(board.category_names(), vec!["Pets".to_string()]);
    }

    #[test]
    fn test_get_by_friend_uses_feed_order() {
        let mut board = board();
        board.add_friend("Funny", PW, "Danila").unwrap();
        board.add_friend("Pets", PW, "Danila").unwrap();
        board.put(PW, post("<C>", "Pets", 1), "Pets").unwrap();
        board.put(PW, post("<A>", "Funny", 2), "Funny").unwrap();
        board.put(PW, post("<D>", "Pets", 3), "Pets").unwrap();

        let seen = board.get_by_friend("Danila").unwrap();
        assert_eq!(seen.contents(), vec!["<C>", "<A>", "<D>"]);
    }
}
