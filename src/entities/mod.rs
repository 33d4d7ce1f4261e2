//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod admin;
pub mod document;
pub mod event;
pub mod gallery;
pub mod news;
pub mod organization;
pub mod service;
pub mod settings;
pub mod submission;
pub mod website_content;
pub mod website_section;

// Re-export specific types to avoid conflicts
pub use admin::{Column as AdminColumn, Entity as Admin, Model as AdminModel};
pub use document::{Column as DocumentColumn, Entity as Document, Model as DocumentModel};
pub use event::{Column as EventColumn, Entity as Event, Model as EventModel};
pub use gallery::{Column as GalleryColumn, Entity as Gallery, Model as GalleryModel};
pub use news::{Column as NewsColumn, Entity as News, Model as NewsModel};
pub use organization::{
    Column as OrganizationColumn, Entity as Organization, Model as OrganizationModel,
};
pub use service::{Column as ServiceColumn, Entity as Service, Model as ServiceModel};
pub use settings::{Column as SettingsColumn, Entity as Settings, Model as SettingsModel};
pub use submission::{Column as SubmissionColumn, Entity as Submission, Model as SubmissionModel};
pub use website_content::{
    Column as WebsiteContentColumn, Entity as WebsiteContent, Model as WebsiteContentModel,
};
pub use website_section::{
    Column as WebsiteSectionColumn, Entity as WebsiteSection, Model as WebsiteSectionModel,
};
