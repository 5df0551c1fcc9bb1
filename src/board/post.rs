//! Post model for the data board.
//!
//! A post carries immutable content and a mutable set of likers. Identity is
//! the value of (author, content, category, created_at); the like state is
//! ignored when matching, so a caller's stale copy still finds the stored post.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::validation::{is_blank, require_filled};
use crate::datetime;
use crate::{BoardError, Result};

/// Post entity shared into a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPost")]
pub struct Post {
    author: String,
    content: String,
    category: String,
    created_at: i64,
    likers: Vec<String>,
}

impl Post {
    /// Create a new post stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use databoard::Post;
    ///
    /// let post = Post::new("Luca", "<A>", "Funny").unwrap();
    /// assert_eq!(post.like_count(), 0);
    /// assert!(Post::new("Luca", "", "Funny").is_err());
    /// ```
    pub fn new(
        author: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self> {
        Self::with_timestamp(author, content, category, datetime::now_timestamp())
    }

    /// Create a post with an explicit creation time (seconds since epoch).
    pub fn with_timestamp(
        author: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        created_at: i64,
    ) -> Result<Self> {
        let author = author.into();
        let content = content.into();
        let category = category.into();
        require_filled(&[&author, &content, &category])?;
        if created_at <= 0 {
            return Err(BoardError::InvalidTimestamp(created_at));
        }
        Ok(Self {
            author,
            content,
            category,
            created_at,
            likers: Vec::new(),
        })
    }

    /// Name of the owner who published the post.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Post body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Category the post is shared into.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Creation time in seconds since the Unix epoch.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Number of friends who currently like the post.
    pub fn like_count(&self) -> usize {
        self.likers.len()
    }

    /// Friends who like the post, in the order they liked it.
    pub fn likers(&self) -> Vec<String> {
        self.likers.clone()
    }

    /// Check whether a friend currently likes the post.
    pub fn has_liked(&self, friend: &str) -> bool {
        self.likers.iter().any(|l| l == friend)
    }

    /// Toggle a friend's like.
    ///
    /// Returns `true` if the like was added, `false` if it was removed.
    pub fn toggle_like(&mut self, friend: &str) -> Result<bool> {
        if is_blank(friend) {
            return Err(BoardError::EmptyField);
        }
        match self.likers.iter().position(|l| l == friend) {
            Some(index) => {
                self.likers.remove(index);
                Ok(false)
            }
            None => {
                self.likers.push(friend.to_string());
                Ok(true)
            }
        }
    }

    /// Check whether `other` refers to the same post, ignoring likes.
    pub fn same_identity(&self, other: &Post) -> bool {
        self.created_at == other.created_at
            && self.author == other.author
            && self.content == other.content
            && self.category == other.category
    }

    /// Render the post with its timestamp formatted in the given timezone.
    pub fn render(&self, timezone: &str, format: &str) -> String {
        format!(
            "[{}] {} in {}: {} ({} likes)",
            datetime::format_timestamp(self.created_at, timezone, format),
            self.author,
            self.category,
            self.content,
            self.like_count()
        )
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Post {}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{author: {}, content: {}, timestamp: {}, category: {}, likes: {}, likers: [{}]}}",
            self.author,
            self.content,
            self.created_at,
            self.category,
            self.like_count(),
            self.likers.join(", ")
        )
    }
}

/// Unchecked wire form of a [`Post`].
#[derive(Deserialize)]
struct RawPost {
    author: String,
    content: String,
    category: String,
    created_at: i64,
    #[serde(default)]
    likers: Vec<String>,
}

impl TryFrom<RawPost> for Post {
    type Error = BoardError;

    fn try_from(raw: RawPost) -> Result<Self> {
        let mut post =
            Post::with_timestamp(raw.author, raw.content, raw.category, raw.created_at)?;
        for friend in raw.likers {
            require_filled(&[&friend])?;
            if !post.has_liked(&friend) {
                post.likers.push(friend);
            }
        }
        Ok(post)
    }
}

/// Ranking order for feeds: most liked first.
///
/// Ties on like count put the lexicographically greater content first.
pub fn rank_by_likes(a: &Post, b: &Post) -> Ordering {
    b.like_count()
        .cmp(&a.like_count())
        .then_with(|| b.content.cmp(&a.content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str) -> Post {
        Post::with_timestamp("Luca", content, "Funny", 1_700_000_000).unwrap()
    }

    #[test]
    fn test_new_post_rejects_blank_fields() {
        assert!(matches!(
            Post::new("", "<A>", "Funny"),
            Err(BoardError::EmptyField)
        ));
        assert!(matches!(
            Post::new("Luca", "  ", "Funny"),
            Err(BoardError::EmptyField)
        ));
        assert!(matches!(
            Post::new("Luca", "<A>", ""),
            Err(BoardError::EmptyField)
        ));
    }

    #[test]
    fn test_with_timestamp_rejects_non_positive() {
        assert!(matches!(
            Post::with_timestamp("Luca", "<A>", "Funny", 0),
            Err(BoardError::InvalidTimestamp(0))
        ));
        assert!(matches!(
            Post::with_timestamp("Luca", "<A>", "Funny", -5),
            Err(BoardError::InvalidTimestamp(-5))
        ));
    }

    #[test]
    fn test_new_post_has_timestamp() {
        let post = Post::new("Luca", "<A>", "Funny").unwrap();
        assert!(post.created_at() > 0);
        assert_eq!(post.author(), "Luca");
        assert_eq!(post.content(), "<A>");
        assert_eq!(post.category(), "Funny");
    }

    #[test]
    fn test_toggle_like() {
        let mut post = post("<A>");
        assert!(post.toggle_like("Sofia").unwrap());
        assert_eq!(post.like_count(), 1);
        assert!(post.has_liked("Sofia"));

        assert!(!post.toggle_like("Sofia").unwrap());
        assert_eq!(post.like_count(), 0);

        assert!(post.toggle_like("Sofia").unwrap());
        assert!(post.toggle_like("Danila").unwrap());
        assert_eq!(post.likers(), vec!["Sofia".to_string(), "Danila".to_string()]);
    }

    #[test]
    fn test_toggle_like_blank() {
        let mut post = post("<A>");
        assert!(matches!(post.toggle_like(" "), Err(BoardError::EmptyField)));
    }

    #[test]
    fn test_likers_is_copy() {
        let mut post = post("<A>");
        post.toggle_like("Sofia").unwrap();
        let mut likers = post.likers();
        likers.push("Mallory".to_string());
        assert_eq!(post.like_count(), 1);
    }

    #[test]
    fn test_equality_ignores_likes() {
        let a = post("<A>");
        let mut b = a.clone();
        b.toggle_like("Sofia").unwrap();
        assert_eq!(a, b);

        let c = Post::with_timestamp("Luca", "<A>", "Funny", 1_700_000_001).unwrap();
        assert_ne!(a, c);
        let d = Post::with_timestamp("Luca", "<A>", "Pets", 1_700_000_000).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_rank_by_likes_descending() {
        let mut popular = post("<A>");
        popular.toggle_like("Sofia").unwrap();
        let quiet = post("<Z>");
        assert_eq!(rank_by_likes(&popular, &quiet), Ordering::Less);
        assert_eq!(rank_by_likes(&quiet, &popular), Ordering::Greater);
    }

    #[test]
    fn test_rank_by_likes_tie_break_on_content() {
        let a = post("A");
        let b = post("B");
        let mut posts = vec![a, b];
        posts.sort_by(rank_by_likes);
        assert_eq!(posts[0].content(), "B");
        assert_eq!(posts[1].content(), "A");
    }

    #[test]
    fn test_display() {
        let mut post = post("<A>");
        post.toggle_like("Sofia").unwrap();
        assert_eq!(
            post.to_string(),
            "{author: Luca, content: <A>, timestamp: 1700000000, category: Funny, likes: 1, likers: [Sofia]}"
        );
    }

    #[test]
    fn test_deserialize_valid() {
        let json = r#"{"author":"Luca","content":"<A>","category":"Funny","created_at":1700000000,"likers":["Sofia","Danila","Sofia"]}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post, self::post("<A>"));
        assert_eq!(post.likers(), vec!["Sofia".to_string(), "Danila".to_string()]);
    }

    #[test]
    fn test_deserialize_without_likers() {
        let json = r#"{"author":"Luca","content":"<A>","category":"Funny","created_at":1700000000}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.like_count(), 0);
    }

    #[test]
    fn test_deserialize_rejects_blank_fields() {
        let json = r#"{"author":"","content":" ","category":"Funny","created_at":1700000000,"likers":[]}"#;
        let err = serde_json::from_str::<Post>(json).unwrap_err();
        assert!(err.to_string().contains("required field is empty"));

        let json = r#"{"author":"Luca","content":"<A>","category":"Funny","created_at":1700000000,"likers":[" "]}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_positive_timestamp() {
        let json = r#"{"author":"Luca","content":"<A>","category":"Funny","created_at":0,"likers":[]}"#;
        let err = serde_json::from_str::<Post>(json).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp: 0"));
    }

    #[test]
    fn test_deserialized_likes_toggle_off() {
        let json = r#"{"author":"Luca","content":"<A>","category":"Funny","created_at":1700000000,"likers":["Sofia","Sofia"]}"#;
        let mut post: Post = serde_json::from_str(json).unwrap();
        assert!(!post.toggle_like("Sofia").unwrap());
        assert!(!post.has_liked("Sofia"));
        assert_eq!(post.like_count(), 0);
    }

    #[test]
    fn test_render_in_timezone() {
        let post = Post::with_timestamp("Luca", "<A>", "Funny", 1_705_314_600).unwrap();
        assert_eq!(
            post.render("Asia/Tokyo", "%Y/%m/%d %H:%M"),
            "[2024/01/15 19:30] Luca in Funny: <A> (0 likes)"
        );
    }
}
