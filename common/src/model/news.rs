use serde::{Deserialize, Serialize};

/// Categories an article can be filed under, in display order.
pub const NEWS_CATEGORIES: [&str; 3] = ["公司新闻", "行业动态", "装修知识"];

/// Filter label that matches every category.
pub const ALL_CATEGORIES: &str = "全部";

/// A news article as served by `GET /news/{id}` and `GET /news/`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    /// Body text with inline `![alt](url)` image markers.
    pub content: String,
    pub cover_image: Option<String>,
    /// Urls of the inline images, in body order, as last saved.
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    #[serde(default = "published")]
    pub is_published: bool,
    pub view_count: u64,
    pub created_at: Option<String>,
}

fn published() -> bool {
    true
}

impl News {
    /// Publication date (`YYYY-MM-DD`) taken from the ISO timestamp.
    pub fn published_on(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .map(|ts| ts.split('T').next().unwrap_or(ts))
    }

    /// Image shown for the article in lists: the cover, else the first
    /// inline image.
    pub fn thumbnail(&self) -> Option<&str> {
        self.cover_image
            .as_deref()
            .filter(|cover| !cover.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_published { "已发布" } else { "草稿" }
    }
}

/// Client-side list filter: a category (or [`ALL_CATEGORIES`]) and a title
/// substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsFilter {
    pub category: String,
    pub search: String,
}

impl Default for NewsFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl NewsFilter {
    pub fn matches(&self, news: &News) -> bool {
        let in_category = self.category == ALL_CATEGORIES || news.category == self.category;
        in_category && news.title.contains(self.search.trim())
    }

    /// The matching articles, in their original order.
    pub fn apply<'a>(&'a self, list: &'a [News]) -> impl Iterator<Item = &'a News> + 'a {
        list.iter().filter(move |news| self.matches(news))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> News {
        serde_json::from_str(
            r#"{
                "id": 7,
                "title": "旧房翻新一日完工",
                "summary": "当天入住",
                "content": "施工前![图片](http://localhost:8000/uploads/a.jpg)",
                "cover_image": null,
                "category": "公司新闻",
                "view_count": 12,
                "created_at": "2024-05-01T08:30:00"
            }"#,
        )
        .unwrap()
    }

    fn article(id: i64, title: &str, category: &str) -> News {
        News {
            id,
            title: title.to_string(),
            category: category.to_string(),
            ..sample()
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let news = sample();
        assert!(news.images.is_empty());
        assert!(news.is_published);
        assert_eq!(news.published_on(), Some("2024-05-01"));
        assert_eq!(news.status_label(), "已发布");
    }

    #[test]
    fn thumbnail_prefers_cover_then_first_image() {
        let mut news = sample();
        assert_eq!(news.thumbnail(), None);

        news.images = vec!["/uploads/a.jpg".into(), "/uploads/b.jpg".into()];
        assert_eq!(news.thumbnail(), Some("/uploads/a.jpg"));

        news.cover_image = Some(String::new());
        assert_eq!(news.thumbnail(), Some("/uploads/a.jpg"));

        news.cover_image = Some("/uploads/cover.jpg".into());
        assert_eq!(news.thumbnail(), Some("/uploads/cover.jpg"));
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = NewsFilter::default();
        assert!(filter.matches(&article(1, "开业", "公司新闻")));
        assert!(filter.matches(&article(2, "瓷砖选购", "装修知识")));
    }

    #[test]
    fn filter_by_category_and_title() {
        let list = vec![
            article(1, "宜然焕新开业", "公司新闻"),
            article(2, "旧房翻新趋势", "行业动态"),
            article(3, "翻新前必看", "装修知识"),
            article(4, "翻新补贴政策", "行业动态"),
        ];

        let filter = NewsFilter {
            category: "行业动态".into(),
            search: String::new(),
        };
        let ids: Vec<i64> = filter.apply(&list).map(|news| news.id).collect();
        assert_eq!(ids, vec![2, 4]);

        let filter = NewsFilter {
            category: ALL_CATEGORIES.into(),
            search: " 翻新 ".into(),
        };
        let ids: Vec<i64> = filter.apply(&list).map(|news| news.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);

        let filter = NewsFilter {
            category: "公司新闻".into(),
            search: "翻新".into(),
        };
        assert_eq!(filter.apply(&list).count(), 0);
    }

    #[test]
    fn every_category_is_filterable() {
        for category in NEWS_CATEGORIES {
            let filter = NewsFilter {
                category: category.to_string(),
                search: String::new(),
            };
            assert!(filter.matches(&article(1, "x", category)));
        }
    }
}
