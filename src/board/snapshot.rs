//! Read-only feed snapshots returned by the iteration operations.

use std::slice;
use std::vec;

use super::post::Post;

/// An immutable, detached copy of a sequence of posts.
///
/// The snapshot owns its posts, so later changes to the board never show up
/// here. It exposes no way to insert or remove entries; the only mutation
/// possible is on posts the caller has taken ownership of via `into_iter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    posts: Vec<Post>,
}

impl FeedSnapshot {
    /// Number of posts in the snapshot.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Post at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// First post, if any.
    pub fn first(&self) -> Option<&Post> {
        self.posts.first()
    }

    /// Iterate the posts in snapshot order.
    pub fn iter(&self) -> slice::Iter<'_, Post> {
        self.posts.iter()
    }

    /// View the posts as a slice.
    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    /// Contents of every post, in order.
    pub fn contents(&self) -> Vec<&str> {
        self.posts.iter().map(Post::content).collect()
    }
}

impl From<Vec<Post>> for FeedSnapshot {
    fn from(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

impl FromIterator<Post> for FeedSnapshot {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self {
            posts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FeedSnapshot {
    type Item = &'a Post;
    type IntoIter = slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

impl IntoIterator for FeedSnapshot {
    type Item = Post;
    type IntoIter = vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FeedSnapshot {
        ["<A>", "<B>"]
            .iter()
            .map(|c| Post::with_timestamp("Luca", *c, "Funny", 1).unwrap())
            .collect()
    }

    #[test]
    fn test_accessors() {
        let snap = snapshot();
        assert_eq!(snap.len(), 2);
        assert!(!snap.is_empty());
        assert_eq!(snap.first().unwrap().content(), "<A>");
        assert_eq!(snap.get(1).unwrap().content(), "<B>");
        assert!(snap.get(2).is_none());
        assert_eq!(snap.contents(), vec!["<A>", "<B>"]);
    }

    #[test]
    fn test_iteration_by_reference() {
        let snap = snapshot();
        let mut count = 0;
        for post in &snap {
            assert_eq!(post.author(), "Luca");
            count += 1;
        }
        assert_eq!(count, 2);
        assert_eq!(snap.iter().count(), 2);
    }

    #[test]
    fn test_owned_iteration_is_detached() {
        let snap = snapshot();
        let kept = snap.clone();
        for mut post in snap {
            post.toggle_like("Sofia").unwrap();
        }
        assert!(kept.iter().all(|p| p.like_count() == 0));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FeedSnapshot::default().is_empty());
    }
}
