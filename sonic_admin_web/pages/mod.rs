mod auth;
mod collections;
pub(crate) mod common;
mod content_edit;
mod content_new;
mod dashboard;
mod faq_form;
mod faq_list;
mod log_config;
mod testimonials_form;
mod testimonials_list;

pub use auth::{LoginPageData, RegisterPageData, render_login_page, render_register_page};
pub use collections::{CollectionsListPageData, render_collections_list_page};
pub use common::{FieldErrorMap, FlashMessage};
pub use content_edit::{ContentEditPageData, render_content_edit_page};
pub use content_new::{ContentNewPageData, render_content_form_fields, render_content_new_page};
pub use dashboard::{
    DashboardPageData, database_usage_percent, render_dashboard_page, render_recent_activity,
    render_stats_cards, render_storage_usage,
};
pub use faq_form::{ANSWER_MAX_LENGTH, FaqFormData, QUESTION_MAX_LENGTH, render_faq_form};
pub use faq_list::{FaqListData, render_faq_list};
pub use log_config::{
    LogConfigPageData, MAX_SIZE_MAX, MAX_SIZE_MIN, RETENTION_DAYS_MAX, RETENTION_DAYS_MIN,
    render_log_config_page,
};
pub use testimonials_form::{
    AUTHOR_MAX_LENGTH, TESTIMONIAL_MAX_LENGTH, TestimonialFormData, render_testimonials_form,
};
pub use testimonials_list::{TestimonialsListData, render_testimonials_list};
