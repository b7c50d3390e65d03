use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, json};
use std::{io::ErrorKind, path::PathBuf, str::FromStr};
use uuid::Uuid;

use sonic_admin_types::{
    collections::CollectionSummary,
    content::{ContentItem, ContentStatus},
    dashboard::{ActivityItem, ActivityKind, DashboardStats},
    faq::Faq,
    fields::ContentModel,
    logs::{LogCategory, LogConfig, LogLevel},
    testimonial::Testimonial,
    user::AdminUser,
};
use sonic_admin_web::{
    CollectionsListPageData, ContentEditPageData, ContentNewPageData, DashboardPageData,
    FaqFormData, FaqListData, LogConfigPageData, LoginPageData, RegisterPageData,
    TestimonialFormData, TestimonialsListData, render_collections_list_page,
    render_content_edit_page, render_content_new_page, render_dashboard_page, render_faq_form,
    render_faq_list, render_log_config_page, render_login_page, render_register_page,
    render_testimonials_form, render_testimonials_list,
};

use crate::{config::Config, errors::PreviewError};

const DEMO_FAQ_TOTAL: u64 = 42;
const DEMO_TESTIMONIAL_TOTAL: u64 = 7;

/// Every page the preview server knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPage {
    Collections,
    ContentNew,
    ContentEdit,
    Dashboard,
    FaqList,
    FaqForm,
    TestimonialsList,
    TestimonialsForm,
    Login,
    Register,
    LogConfig,
}

impl PreviewPage {
    pub const ALL: [PreviewPage; 11] = [
        PreviewPage::Dashboard,
        PreviewPage::Collections,
        PreviewPage::ContentNew,
        PreviewPage::ContentEdit,
        PreviewPage::FaqList,
        PreviewPage::FaqForm,
        PreviewPage::TestimonialsList,
        PreviewPage::TestimonialsForm,
        PreviewPage::Login,
        PreviewPage::Register,
        PreviewPage::LogConfig,
    ];

    /// URL segment, also the fixture file stem.
    pub fn slug(&self) -> &'static str {
        match self {
            PreviewPage::Collections => "collections",
            PreviewPage::ContentNew => "content-new",
            PreviewPage::ContentEdit => "content-edit",
            PreviewPage::Dashboard => "dashboard",
            PreviewPage::FaqList => "faq-list",
            PreviewPage::FaqForm => "faq-form",
            PreviewPage::TestimonialsList => "testimonials-list",
            PreviewPage::TestimonialsForm => "testimonials-form",
            PreviewPage::Login => "login",
            PreviewPage::Register => "register",
            PreviewPage::LogConfig => "log-config",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PreviewPage::Collections => "Collections",
            PreviewPage::ContentNew => "New content",
            PreviewPage::ContentEdit => "Edit content",
            PreviewPage::Dashboard => "Dashboard",
            PreviewPage::FaqList => "FAQ list",
            PreviewPage::FaqForm => "FAQ form",
            PreviewPage::TestimonialsList => "Testimonials list",
            PreviewPage::TestimonialsForm => "Testimonial form",
            PreviewPage::Login => "Login",
            PreviewPage::Register => "Register",
            PreviewPage::LogConfig => "Log configuration",
        }
    }
}

impl FromStr for PreviewPage {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreviewPage::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| PreviewError::UnknownPage(s.to_string()))
    }
}

/// Page data source: JSON files from the fixtures directory, falling back to built-in demo data.
#[derive(Debug, Clone)]
pub struct Fixtures {
    dir: Option<PathBuf>,
    version: String,
    page_size: u32,
}

impl Fixtures {
    pub fn new(config: &Config) -> Self {
        Self {
            dir: config.fixtures_dir.clone(),
            version: config.version.clone(),
            page_size: config.page_size,
        }
    }

    /// Renders `page`; `list_page` selects the page of demo list data (1-based).
    pub async fn render(&self, page: PreviewPage, list_page: u32) -> Result<String, PreviewError> {
        let slug = page.slug();
        let html = match page {
            PreviewPage::Collections => {
                let data = self
                    .page_data(slug, || CollectionsListPageData {
                        collections: demo_collections(),
                        user: Some(demo_user()),
                        version: Some(self.version.clone()),
                    })
                    .await?;
                render_collections_list_page(&data)
            }
            PreviewPage::ContentNew => {
                let models = self.models().await?;
                let data = self
                    .page_data(slug, || ContentNewPageData {
                        models,
                        user: Some(demo_user()),
                        version: Some(self.version.clone()),
                        ..Default::default()
                    })
                    .await?;
                render_content_new_page(&data)
            }
            PreviewPage::ContentEdit => {
                let models = self.models().await?;
                let data = self
                    .page_data(slug, || ContentEditPageData {
                        content: demo_content_item(),
                        models,
                        selected_model: None,
                        error: None,
                        user: Some(demo_user()),
                        version: Some(self.version.clone()),
                    })
                    .await?;
                render_content_edit_page(&data)
            }
            PreviewPage::Dashboard => {
                let stats = self.stats().await?;
                let data = self
                    .page_data(slug, || DashboardPageData {
                        user: Some(demo_user()),
                        stats: Some(stats),
                        version: Some(self.version.clone()),
                    })
                    .await?;
                render_dashboard_page(&data)
            }
            PreviewPage::FaqList => {
                let data = self.page_data(slug, || self.demo_faq_list(list_page)).await?;
                render_faq_list(&data)
            }
            PreviewPage::FaqForm => {
                let data = self
                    .page_data(slug, || FaqFormData {
                        faq: Some(demo_faq(1)),
                        is_edit: true,
                        user: Some(demo_user()),
                        version: Some(self.version.clone()),
                        ..Default::default()
                    })
                    .await?;
                render_faq_form(&data)
            }
            PreviewPage::TestimonialsList => {
                let data = self
                    .page_data(slug, || self.demo_testimonials_list(list_page))
                    .await?;
                render_testimonials_list(&data)
            }
            PreviewPage::TestimonialsForm => {
                let data = self
                    .page_data(slug, || TestimonialFormData {
                        user: Some(demo_user()),
                        version: Some(self.version.clone()),
                        ..Default::default()
                    })
                    .await?;
                render_testimonials_form(&data)
            }
            PreviewPage::Login => {
                let data = self.page_data(slug, LoginPageData::default).await?;
                render_login_page(&data)
            }
            PreviewPage::Register => {
                let data = self.page_data(slug, RegisterPageData::default).await?;
                render_register_page(&data)
            }
            PreviewPage::LogConfig => {
                let data = self
                    .page_data(slug, || LogConfigPageData {
                        configs: demo_log_configs(),
                        user: Some(demo_user()),
                        version: Some(self.version.clone()),
                    })
                    .await?;
                render_log_config_page(&data)
            }
        };

        tracing::debug!(page = slug, bytes = html.len(), "Rendered preview");
        Ok(html)
    }

    /// Content models shared by the content pages and the form-fields fragment.
    pub async fn models(&self) -> Result<Vec<ContentModel>, PreviewError> {
        match self.load("models").await? {
            Some(models) => Ok(models),
            None => Ok(demo_models()),
        }
    }

    /// Dashboard numbers shared by the dashboard page and its fragments.
    pub async fn stats(&self) -> Result<DashboardStats, PreviewError> {
        match self.load("stats").await? {
            Some(stats) => Ok(stats),
            None => Ok(demo_stats(Utc::now())),
        }
    }

    async fn page_data<T, F>(&self, name: &str, demo: F) -> Result<T, PreviewError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        Ok(self.load(name).await?.unwrap_or_else(demo))
    }

    /// Reads `{dir}/{name}.json`. A missing directory setting or file is not an error.
    async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, PreviewError> {
        let Some(dir) = &self.dir else {
            return Ok(None);
        };
        let path = dir.join(format!("{name}.json"));

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PreviewError::FixtureRead { path, source }),
        };
        tracing::debug!(path = %path.display(), "Loaded fixture");

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PreviewError::FixtureDecode { path, source })
    }

    fn demo_faq_list(&self, list_page: u32) -> FaqListData {
        let (current_page, total_pages, range) = page_window(DEMO_FAQ_TOTAL, self.page_size, list_page);
        FaqListData {
            faqs: range.map(demo_faq).collect(),
            total_count: DEMO_FAQ_TOTAL,
            current_page,
            total_pages,
            items_per_page: Some(self.page_size),
            user: Some(demo_user()),
            version: Some(self.version.clone()),
            message: None,
        }
    }

    fn demo_testimonials_list(&self, list_page: u32) -> TestimonialsListData {
        let (current_page, total_pages, range) =
            page_window(DEMO_TESTIMONIAL_TOTAL, self.page_size, list_page);
        TestimonialsListData {
            testimonials: range.map(demo_testimonial).collect(),
            total_count: DEMO_TESTIMONIAL_TOTAL,
            current_page,
            total_pages,
            items_per_page: Some(self.page_size),
            user: Some(demo_user()),
            version: Some(self.version.clone()),
            message: None,
        }
    }
}

/// Clamps `page` into range and returns (page, total pages, 1-based record ids on that page).
fn page_window(total: u64, page_size: u32, page: u32) -> (u32, u32, std::ops::RangeInclusive<i64>) {
    let size = u64::from(page_size.max(1));
    let total_pages = total.div_ceil(size).max(1) as u32;
    let current = page.clamp(1, total_pages);
    let first = (u64::from(current) - 1) * size + 1;
    let last = (first + size - 1).min(total);
    (current, total_pages, first as i64..=last as i64)
}

fn demo_user() -> AdminUser {
    AdminUser::new("Ada Lovelace", "ada@sonicjs.test", "admin")
}

fn demo_collections() -> Vec<CollectionSummary> {
    let created = Utc::now() - Duration::days(30);
    [
        ("blog_posts", "Blog Posts", Some("Articles for the public blog")),
        ("pages", "Pages", Some("Static marketing pages")),
        ("products", "Products", None),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, display_name, description))| CollectionSummary {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: description.map(str::to_string),
        created_at: created + Duration::days(i as i64 * 3),
    })
    .collect()
}

fn demo_models() -> Vec<ContentModel> {
    let blog = json!({
        "title": { "type": "text", "required": true, "ui": { "position": 1, "placeholder": "Post title" } },
        "excerpt": { "type": "textarea", "ui": { "position": 2, "helpText": "Shown on listing pages" } },
        "body": { "type": "rich_text", "ui": { "position": 3 } },
        "category": {
            "type": "select",
            "validation": { "options": ["news", "guides", "releases"] },
            "ui": { "position": 4 }
        },
        "publishDate": { "type": "date", "ui": { "position": 5 } },
        "featured": { "type": "boolean", "ui": { "position": 6 } }
    });
    let product = json!({
        "name": { "type": "text", "required": true },
        "price": { "type": "number", "validation": { "min": 0 } },
        "image": { "type": "file" }
    });

    [
        ("blog_posts", "Blog Posts", blog),
        ("products", "Products", product),
    ]
    .into_iter()
    .filter_map(|(name, display_name, schema)| {
        ContentModel::from_schema(name, display_name, schema)
            .inspect_err(|e| tracing::error!("Invalid demo model {name}: {e}"))
            .ok()
    })
    .collect()
}

fn demo_content_item() -> ContentItem {
    let mut data = Map::new();
    data.insert("excerpt".to_string(), json!("What changed in this release."));
    data.insert("body".to_string(), json!("<p>Release notes go here.</p>"));
    data.insert("category".to_string(), json!("releases"));
    data.insert("featured".to_string(), json!(true));

    let created = Utc::now() - Duration::days(2);
    ContentItem {
        id: Uuid::new_v4().to_string(),
        title: "Release 2.0".to_string(),
        slug: "release-2-0".to_string(),
        status: ContentStatus::Review,
        data,
        collection_id: "blog_posts".to_string(),
        created_at: created,
        updated_at: created + Duration::hours(5),
    }
}

fn demo_stats(now: DateTime<Utc>) -> DashboardStats {
    let activity = [
        (ActivityKind::Content, "created", "Published \"Release 2.0\"", 4),
        (ActivityKind::Media, "uploaded", "Uploaded hero-banner.png", 95),
        (ActivityKind::User, "registered", "New editor account: grace", 60 * 26),
        (ActivityKind::Collection, "updated", "Added a field to Products", 60 * 24 * 3),
    ];

    DashboardStats {
        collections: 3,
        content_items: 128,
        media_files: 56,
        users: 4,
        database_size: Some(734_003_200),
        media_size: Some(2_147_483_648),
        recent_activity: activity
            .into_iter()
            .map(|(kind, action, description, minutes)| ActivityItem {
                id: Uuid::new_v4().to_string(),
                kind,
                action: action.to_string(),
                description: description.to_string(),
                timestamp: now - Duration::minutes(minutes),
                user: "Ada Lovelace".to_string(),
            })
            .collect(),
    }
}

const FAQ_SAMPLES: [(&str, &str, &str); 4] = [
    ("How do I reset my password?", "Use the forgot password link on the login page.", "account"),
    ("Which plans include the API?", "Every plan includes API access.", "billing"),
    ("Can I import content?", "Yes, from JSON or CSV exports.", "features"),
    ("Where are uploads stored?", "Media files are stored in R2.", "technical"),
];

fn demo_faq(id: i64) -> Faq {
    let (question, answer, category) = FAQ_SAMPLES[(id as usize - 1) % FAQ_SAMPLES.len()];
    let created = Utc::now() - Duration::days(id);
    Faq {
        id: Some(id),
        question: question.to_string(),
        answer: answer.to_string(),
        category: Some(category.to_string()),
        tags: Some(format!("{category}, help")),
        is_published: id % 3 != 0,
        sort_order: id,
        created_at: Some(created),
        updated_at: Some(created),
    }
}

const TESTIMONIAL_SAMPLES: [(&str, Option<&str>, Option<&str>, &str); 3] = [
    ("Grace Hopper", Some("Rear Admiral"), Some("US Navy"), "Setting up collections took minutes."),
    ("Alan Turing", None, Some("Bletchley Park"), "The API is a pleasure to work with."),
    ("Katherine Johnson", Some("Mathematician"), None, "Publishing workflows finally make sense."),
];

fn demo_testimonial(id: i64) -> Testimonial {
    let (author, title, company, text) =
        TESTIMONIAL_SAMPLES[(id as usize - 1) % TESTIMONIAL_SAMPLES.len()];
    let created = Utc::now() - Duration::days(id * 2);
    Testimonial {
        id: Some(id),
        author_name: author.to_string(),
        author_title: title.map(str::to_string),
        author_company: company.map(str::to_string),
        testimonial_text: text.to_string(),
        rating: Some(5 - (id % 3) as u8),
        is_published: id != 2,
        sort_order: id,
        created_at: Some(created),
        updated_at: Some(created),
    }
}

fn demo_log_configs() -> Vec<LogConfig> {
    let created = Utc::now() - Duration::days(90);
    LogCategory::ALL
        .into_iter()
        .map(|category| {
            let (level, retention, max_size) = match category {
                LogCategory::Security | LogCategory::Error => (LogLevel::Warn, 365, Some(100_000)),
                LogCategory::Auth => (LogLevel::Info, 90, Some(10_000)),
                LogCategory::Api => (LogLevel::Info, 30, Some(50_000)),
                _ => (LogLevel::Info, 30, None),
            };
            LogConfig {
                category,
                enabled: category != LogCategory::Plugin,
                level,
                retention,
                max_size,
                created_at: created,
                updated_at: created + Duration::days(7),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures(dir: Option<PathBuf>) -> Fixtures {
        Fixtures::new(&Config {
            fixtures_dir: dir,
            page_size: 20,
            ..Default::default()
        })
    }

    #[test]
    fn test_page_slugs_round_trip() {
        for page in PreviewPage::ALL {
            assert_eq!(page.slug().parse::<PreviewPage>().unwrap(), page);
        }
        assert!(matches!(
            "nope".parse::<PreviewPage>(),
            Err(PreviewError::UnknownPage(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_page_window() {
        let (page, total, range) = page_window(42, 20, 1);
        assert_eq!((page, total), (1, 3));
        assert_eq!(range, 1..=20);

        let (page, _, range) = page_window(42, 20, 9);
        assert_eq!(page, 3);
        assert_eq!(range, 41..=42);

        let (page, total, range) = page_window(7, 100, 0);
        assert_eq!((page, total), (1, 1));
        assert_eq!(range, 1..=7);
    }

    #[test]
    fn test_demo_models_parse() {
        let models = demo_models();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].ordered_fields()[0].name, "title");
    }

    #[tokio::test]
    async fn test_demo_data_without_fixtures_dir() {
        let fixtures = fixtures(None);
        let html = fixtures.render(PreviewPage::FaqList, 2).await.unwrap();
        assert!(html.contains("FAQ"));
        assert_eq!(fixtures.models().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fixture_file_overrides_demo() {
        let dir = std::env::temp_dir().join(format!("sonic-admin-fixtures-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("login.json"), r#"{"error":"Fixture says no"}"#)
            .await
            .unwrap();
        tokio::fs::write(dir.join("register.json"), r#"{"error": 5}"#)
            .await
            .unwrap();

        let fixtures = fixtures(Some(dir.clone()));
        let login = fixtures.render(PreviewPage::Login, 1).await.unwrap();
        assert!(login.contains("Fixture says no"));

        let register = fixtures.render(PreviewPage::Register, 1).await;
        assert!(matches!(register, Err(PreviewError::FixtureDecode { .. })));

        let dashboard = fixtures.render(PreviewPage::Dashboard, 1).await.unwrap();
        assert!(dashboard.contains("Ada Lovelace"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
