//! Fixed data the hub starts with: one signed-in student and three posts.

use crate::model::{Category, Post, PostId, ResourceLink, StorageProvider, User, UserId};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeSet;

pub const DEMO_USER_ID: &str = "user_99";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn ids(items: &[&str]) -> BTreeSet<PostId> {
    items.iter().map(|id| PostId::from(*id)).collect()
}

pub fn users() -> Vec<User> {
    vec![User {
        id: UserId::from(DEMO_USER_ID),
        name: "王小智".to_string(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".to_string(),
        college: "计算机学院".to_string(),
        credits: 500,
        shared_ids: ids(&["1"]),
        purchased_ids: ids(&["2"]),
        favorite_ids: ids(&["3"]),
    }]
}

/// Catalog order: newest first.
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId::from("1"),
            title: "【内部资料】2024操作系统复习精要与历年期末真题".to_string(),
            author: "王小智".to_string(),
            author_id: UserId::from(DEMO_USER_ID),
            content: "涵盖了进程管理、内存分配、文件系统等核心考点。本资料由高分学长整理，附带三套历年期末真题及其详解，祝大家不挂科！".to_string(),
            category: Category::Exams,
            created_at: at(2024, 5, 20, 10, 30),
            views: 1240,
            replies: 45,
            is_pinned: true,
            price: 0,
            links: vec![ResourceLink::new(StorageProvider::Baidu, "https://pan.baidu.com/s/os_res")
                .with_password("os24")],
            thumbnail: Some("https://picsum.photos/seed/os/400/250".to_string()),
        },
        Post {
            id: PostId::from("2"),
            title: "雅思 IELTS 8.5分 听力/口语满分笔记 (最新同步)".to_string(),
            author: "雅思战神".to_string(),
            author_id: UserId::from("user_102"),
            content: "这份笔记详细记录了我备考期间的语料库和模考心得。特别适合短期提分的同学，资料包含2GB的听力模拟音频。".to_string(),
            category: Category::Languages,
            created_at: at(2024, 5, 19, 14, 15),
            views: 890,
            replies: 12,
            is_pinned: false,
            price: 50,
            links: vec![ResourceLink::new(StorageProvider::Quark, "https://pan.quark.cn/s/ielts_full")
                .with_password("win")],
            thumbnail: Some("https://picsum.photos/seed/ielts/400/250".to_string()),
        },
        Post {
            id: PostId::from("3"),
            title: "React + Node.js 全栈电商实战项目源码及视频".to_string(),
            author: "码农老李".to_string(),
            author_id: UserId::from("user_105"),
            content: "一个完整的电商项目，包含JWT认证、支付接口模拟、Redux状态管理等。适合毕设参考或简历加分。".to_string(),
            category: Category::Programming,
            created_at: at(2024, 5, 18, 9, 0),
            views: 450,
            replies: 8,
            is_pinned: false,
            price: 20,
            links: vec![ResourceLink::new(StorageProvider::Aliyun, "https://www.aliyundrive.com/s/coding")],
            thumbnail: Some("https://picsum.photos/seed/code/400/250".to_string()),
        },
    ]
}
