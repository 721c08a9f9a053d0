//! Closed enumerations shared by posts and links.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Subject-matter tag applied to every post.
///
/// Each category has a service-facing label (the string the metadata
/// suggestion service is asked to answer with) and an English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mathematics,
    Science,
    Programming,
    Languages,
    Design,
    Exams,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mathematics,
        Category::Science,
        Category::Programming,
        Category::Languages,
        Category::Design,
        Category::Exams,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Mathematics => "数学",
            Category::Science => "理化生",
            Category::Programming => "编程开发",
            Category::Languages => "语言学习",
            Category::Design => "设计艺术",
            Category::Exams => "考证考研",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Mathematics => "mathematics",
            Category::Science => "science",
            Category::Programming => "programming",
            Category::Languages => "languages",
            Category::Design => "design",
            Category::Exams => "exams",
        }
    }

    /// Finds the first category whose label (or English name) is contained in
    /// free text returned by the suggestion service.
    ///
    /// The service is not held to an exact-match contract, so `"分类：编程开发"`
    /// and `"Programming & tools"` both resolve to [`Category::Programming`].
    pub fn find_in(text: &str) -> Option<Category> {
        let lowered = text.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| text.contains(c.label()) || lowered.contains(c.name()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact match on the label or the (case-insensitive) English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == trimmed || c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Storage backend hosting a download link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProvider {
    Baidu,
    Quark,
    Aliyun,
    GoogleDrive,
    Mega,
}

impl Display for StorageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StorageProvider::Baidu => "百度网盘",
            StorageProvider::Quark => "夸克网盘",
            StorageProvider::Aliyun => "阿里云盘",
            StorageProvider::GoogleDrive => "Google Drive",
            StorageProvider::Mega => "MEGA",
        };
        f.write_str(label)
    }
}
