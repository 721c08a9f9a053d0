//! # Resource Catalog
//!
//! Filtering over the catalog listing. Everything here is a pure function of
//! the posts it is handed; ordering always follows the input.

use crate::model::{Category, Post, PostId, UnknownCategory, User};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

/// Category selector of the browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    /// Accepts `all` / `全部` or anything [`Category`] parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "全部" {
            return Ok(CategoryFilter::All);
        }
        trimmed.parse().map(CategoryFilter::Only)
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("全部"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

/// Posts in `posts` that match `category` and contain `keyword` in their
/// title or content, case-insensitively. An empty keyword matches everything.
///
/// The result is a subsequence of the input: relative order is preserved.
pub fn filter<'a>(
    posts: impl IntoIterator<Item = &'a Post>,
    category: CategoryFilter,
    keyword: &str,
) -> Vec<&'a Post> {
    let needle = keyword.to_lowercase();
    posts
        .into_iter()
        .filter(|post| category.matches(post.category))
        .filter(|post| {
            needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The three lists on a user's profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileTab {
    #[default]
    Shared,
    Purchased,
    Favorite,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Shared, ProfileTab::Purchased, ProfileTab::Favorite];

    fn ids(self, user: &User) -> &BTreeSet<PostId> {
        match self {
            ProfileTab::Shared => &user.shared_ids,
            ProfileTab::Purchased => &user.purchased_ids,
            ProfileTab::Favorite => &user.favorite_ids,
        }
    }
}

/// Catalog posts listed under `tab` for `user`, in catalog order.
/// Ids that name no catalog post are skipped.
pub fn profile_posts<'a>(
    posts: impl IntoIterator<Item = &'a Post>,
    user: &User,
    tab: ProfileTab,
) -> Vec<&'a Post> {
    let ids = tab.ids(user);
    posts.into_iter().filter(|post| ids.contains(&post.id)).collect()
}
