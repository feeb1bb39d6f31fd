use serde::{Deserialize, Serialize};

use crate::content::image_urls;
use crate::model::news::{News, NEWS_CATEGORIES};

/// Default category for new articles.
pub const DEFAULT_NEWS_CATEGORY: &str = NEWS_CATEGORIES[0];

/// Request payload for creating (`POST /news/`) or updating (`PUT /news/{id}`)
/// an article.
///
/// `content` carries the article body including any inline `![alt](url)`
/// image markers inserted by the editor.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct NewsDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    pub is_published: bool,
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            content: String::new(),
            cover_image: String::new(),
            images: Vec::new(),
            category: DEFAULT_NEWS_CATEGORY.to_string(),
            is_published: true,
        }
    }
}

impl NewsDraft {
    /// Rebuilds `images` from the markers currently in `content`.
    pub fn sync_images(&mut self) {
        self.images = image_urls(&self.content)
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    /// Whether `category` is one the editor offers.
    pub fn has_known_category(&self) -> bool {
        NEWS_CATEGORIES.contains(&self.category.as_str())
    }
}

impl From<&News> for NewsDraft {
    fn from(news: &News) -> Self {
        Self {
            title: news.title.clone(),
            summary: news.summary.clone().unwrap_or_default(),
            content: news.content.clone(),
            cover_image: news.cover_image.clone().unwrap_or_default(),
            images: news.images.clone(),
            category: news.category.clone(),
            is_published: news.is_published,
        }
    }
}

/// Partial update flipping an article's visibility (`PUT /news/{id}`).
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublishUpdate {
    pub is_published: bool,
}

/// Partial update of the company profile (`PUT /company/`). Absent fields are
/// left untouched by the server.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_images: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news(category: &str) -> News {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "开业",
            "summary": null,
            "content": "x![图片](/uploads/a.jpg)",
            "cover_image": null,
            "images": ["/uploads/a.jpg"],
            "category": category,
            "is_published": false,
            "view_count": 0
        }))
        .unwrap()
    }

    #[test]
    fn new_draft_is_published_company_news() {
        let draft = NewsDraft::default();
        assert_eq!(draft.category, "公司新闻");
        assert!(draft.is_published);
        assert!(draft.has_known_category());
    }

    #[test]
    fn draft_from_article_flattens_optionals() {
        let draft = NewsDraft::from(&news("公司新闻"));
        assert_eq!(draft.summary, "");
        assert_eq!(draft.cover_image, "");
        assert_eq!(draft.images, vec!["/uploads/a.jpg"]);
        assert!(!draft.is_published);
    }

    #[test]
    fn industry_articles_keep_a_selectable_category() {
        let draft = NewsDraft::from(&news("行业动态"));
        assert_eq!(draft.category, "行业动态");
        assert!(draft.has_known_category());
        assert!(!NewsDraft::from(&news("行业资讯")).has_known_category());
    }

    #[test]
    fn sync_images_follows_content() {
        let mut draft = NewsDraft::from(&news("公司新闻"));
        draft.content = "![门头](/1.jpg) 中间 ![图片](/2.jpg)".into();
        draft.sync_images();
        assert_eq!(draft.images, vec!["/1.jpg", "/2.jpg"]);

        draft.content.clear();
        draft.sync_images();
        assert!(draft.images.is_empty());
    }

    #[test]
    fn partial_updates_serialize_only_their_fields() {
        let body = serde_json::to_value(PublishUpdate { is_published: true }).unwrap();
        assert_eq!(body, serde_json::json!({ "is_published": true }));

        assert_eq!(
            serde_json::to_value(CompanyUpdate::default()).unwrap(),
            serde_json::json!({})
        );
        let body = serde_json::to_value(CompanyUpdate {
            banner_images: Some(vec!["/b1.jpg".into()]),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "banner_images": ["/b1.jpg"] }));
    }
}
