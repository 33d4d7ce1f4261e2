//! Content store, section registry, reader and editor views.
//!
//! This is the generic key-value CMS layered over the relational store. The
//! store (`website_content`) and the registry (`website_sections`) are
//! persisted independently; grouping happens by key convention, not by an
//! enforced join. Public pages consume the reader, which resolves placeholder
//! tokens against the current village profile; the admin editor works on raw
//! rows through the CRUD functions plus the pure filter/group views.

use crate::{
    config::content::ContentCatalog,
    core::placeholder,
    entities::{
        WebsiteContent, WebsiteSection, website_content,
        website_content::{ContentStatus, ContentType},
        website_section,
    },
    errors::{Error, Result},
};
use indexmap::IndexMap;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// Nested `page -> section -> key -> value` mapping for public rendering.
/// `IndexMap` keeps the order the store returned the rows in.
pub type ContentByPage = IndexMap<String, PageContent>;

/// Nested `section -> key -> value` mapping for one page.
pub type PageContent = IndexMap<String, IndexMap<String, String>>;

// ---------------------------------------------------------------------------
// Store CRUD
// ---------------------------------------------------------------------------

/// Retrieves all content entries ordered by page, section and sort order.
///
/// This is the admin editor's raw listing; inactive entries are included and
/// filtered client-side via [`filter_entries`].
pub async fn list_content(db: &DatabaseConnection) -> Result<Vec<website_content::Model>> {
    WebsiteContent::find()
        .order_by_asc(website_content::Column::Page)
        .order_by_asc(website_content::Column::Section)
        .order_by_asc(website_content::Column::SortOrder)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a content entry by its unique ID.
pub async fn get_content_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<website_content::Model>> {
    WebsiteContent::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Arguments for creating a content entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentArgs {
    /// Lookup key within the section
    pub content_key: String,
    /// Initial value
    pub content_value: String,
    /// Editor widget hint
    #[serde(default = "default_content_type")]
    pub content_type: ContentType,
    /// Page grouping key
    pub page: String,
    /// Section grouping key
    pub section: String,
    /// Label shown in the editor
    pub label: String,
    /// Help text shown in the editor
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the editor requires a non-empty value
    #[serde(default)]
    pub is_required: bool,
    /// Maximum value length hint
    #[serde(default)]
    pub max_length: Option<i32>,
    /// Display ordering within the section
    #[serde(default)]
    pub sort_order: i32,
}

const fn default_content_type() -> ContentType {
    ContentType::Text
}

/// Creates a content entry after validating it at the application boundary:
/// the key and label must be non-empty, the value must fit `max_length`, and
/// the target section must be registered and active for the page.
pub async fn create_content(
    db: &DatabaseConnection,
    args: CreateContentArgs,
) -> Result<website_content::Model> {
    if args.content_key.trim().is_empty() {
        return Err(Error::Validation {
            message: "content_key cannot be empty".to_string(),
        });
    }
    if args.label.trim().is_empty() {
        return Err(Error::Validation {
            message: "label cannot be empty".to_string(),
        });
    }
    check_max_length(&args.content_value, args.max_length)?;

    // The storage layer has no FK between entries and sections; reject
    // unregistered sections here instead.
    let section = WebsiteSection::find()
        .filter(website_section::Column::Page.eq(args.page.as_str()))
        .filter(website_section::Column::SectionKey.eq(args.section.as_str()))
        .filter(website_section::Column::Status.eq(ContentStatus::Active))
        .one(db)
        .await?;
    if section.is_none() {
        return Err(Error::SectionNotFound {
            page: args.page,
            section: args.section,
        });
    }

    let now = chrono::Utc::now();
    let entry = website_content::ActiveModel {
        content_key: Set(args.content_key.trim().to_string()),
        content_value: Set(args.content_value),
        content_type: Set(args.content_type),
        page: Set(args.page),
        section: Set(args.section),
        label: Set(args.label.trim().to_string()),
        description: Set(args.description),
        is_required: Set(args.is_required),
        max_length: Set(args.max_length),
        sort_order: Set(args.sort_order),
        status: Set(ContentStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = entry.insert(db).await?;
    Ok(created)
}

/// Fields the editor's save path may change; everything else is fixed at
/// creation time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContentArgs {
    /// New value
    pub content_value: Option<String>,
    /// New visibility status
    pub status: Option<ContentStatus>,
}

/// Applies a per-row save from the editor. Last write wins; there is no
/// optimistic-concurrency check against the stored version.
pub async fn update_content(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateContentArgs,
) -> Result<website_content::Model> {
    let entry = WebsiteContent::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::ContentNotFound { id })?;

    if let Some(value) = &args.content_value {
        check_max_length(value, entry.max_length)?;
    }

    let mut active: website_content::ActiveModel = entry.into();
    if let Some(value) = args.content_value {
        active.content_value = Set(value);
    }
    if let Some(status) = args.status {
        active.status = Set(status);
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a content entry. Exposed for completeness; the editor flow never
/// calls it, so nothing in the reader depends on deletion.
pub async fn delete_content(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = WebsiteContent::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ContentNotFound { id });
    }
    Ok(())
}

fn check_max_length(value: &str, max_length: Option<i32>) -> Result<()> {
    if let Some(max) = max_length {
        let max = usize::try_from(max).unwrap_or(0);
        if value.chars().count() > max {
            return Err(Error::Validation {
                message: format!("content_value exceeds maximum length of {max} characters"),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Section registry
// ---------------------------------------------------------------------------

/// Retrieves all section descriptors ordered by page and sort order.
pub async fn list_sections(db: &DatabaseConnection) -> Result<Vec<website_section::Model>> {
    WebsiteSection::find()
        .order_by_asc(website_section::Column::Page)
        .order_by_asc(website_section::Column::SortOrder)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Arguments for registering a section descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSectionArgs {
    /// Key content entries reference
    pub section_key: String,
    /// Display label
    pub section_name: String,
    /// Page the section belongs to
    pub page: String,
    /// Help text for the editor
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name for the editor UI
    #[serde(default)]
    pub icon: Option<String>,
    /// Display ordering within the page
    #[serde(default)]
    pub sort_order: i32,
}

/// Registers a section descriptor.
pub async fn create_section(
    db: &DatabaseConnection,
    args: CreateSectionArgs,
) -> Result<website_section::Model> {
    if args.section_key.trim().is_empty() {
        return Err(Error::Validation {
            message: "section_key cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let section = website_section::ActiveModel {
        section_key: Set(args.section_key.trim().to_string()),
        section_name: Set(args.section_name),
        page: Set(args.page),
        description: Set(args.description),
        icon: Set(args.icon),
        sort_order: Set(args.sort_order),
        status: Set(ContentStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = section.insert(db).await?;
    Ok(created)
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Assembles the full `page -> section -> key -> value` mapping for public
/// rendering. Only active entries are included and every value is run through
/// the placeholder processor with the current village profile tokens.
pub async fn read_all(db: &DatabaseConnection) -> Result<ContentByPage> {
    let profile = crate::core::settings::get_settings(db).await?;
    let replacements = placeholder::profile_replacements(&profile);

    let entries = WebsiteContent::find()
        .filter(website_content::Column::Status.eq(ContentStatus::Active))
        .order_by_asc(website_content::Column::Page)
        .order_by_asc(website_content::Column::Section)
        .order_by_asc(website_content::Column::SortOrder)
        .all(db)
        .await?;

    let mut content = ContentByPage::new();
    for entry in entries {
        let value = placeholder::process_content_value(&entry.content_value, &replacements);
        content
            .entry(entry.page)
            .or_default()
            .entry(entry.section)
            .or_default()
            .insert(entry.content_key, value);
    }
    Ok(content)
}

/// Assembles the `section -> key -> value` mapping for one page. A page with
/// no stored content yields an empty mapping, never an error; missing keys are
/// resolved by callers with their own defaults.
pub async fn read_page(db: &DatabaseConnection, page: &str) -> Result<PageContent> {
    let profile = crate::core::settings::get_settings(db).await?;
    let replacements = placeholder::profile_replacements(&profile);

    let entries = WebsiteContent::find()
        .filter(website_content::Column::Page.eq(page))
        .filter(website_content::Column::Status.eq(ContentStatus::Active))
        .order_by_asc(website_content::Column::Section)
        .order_by_asc(website_content::Column::SortOrder)
        .all(db)
        .await?;

    let mut content = PageContent::new();
    for entry in entries {
        let value = placeholder::process_content_value(&entry.content_value, &replacements);
        content
            .entry(entry.section)
            .or_default()
            .insert(entry.content_key, value);
    }
    Ok(content)
}

// ---------------------------------------------------------------------------
// Editor views (pure)
// ---------------------------------------------------------------------------

/// Filter state of the admin editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentFilter {
    /// Case-insensitive substring matched against label, key and value
    pub search: Option<String>,
    /// Exact page match
    pub page: Option<String>,
    /// Exact section match
    pub section: Option<String>,
    /// Include inactive entries (hidden by default)
    #[serde(default)]
    pub show_inactive: bool,
}

/// Applies the editor's filter to a raw entry list.
#[must_use]
pub fn filter_entries(
    entries: &[website_content::Model],
    filter: &ContentFilter,
) -> Vec<website_content::Model> {
    let search = filter.search.as_deref().map(str::to_lowercase);

    entries
        .iter()
        .filter(|entry| {
            let matches_search = search.as_deref().is_none_or(|term| {
                entry.label.to_lowercase().contains(term)
                    || entry.content_key.to_lowercase().contains(term)
                    || entry.content_value.to_lowercase().contains(term)
            });
            let matches_page = filter
                .page
                .as_deref()
                .is_none_or(|page| entry.page == page);
            let matches_section = filter
                .section
                .as_deref()
                .is_none_or(|section| entry.section == section);
            let matches_status =
                filter.show_inactive || entry.status == ContentStatus::Active;

            matches_search && matches_page && matches_section && matches_status
        })
        .cloned()
        .collect()
}

/// Groups filtered entries by page, then by section, for display.
#[must_use]
pub fn group_entries(
    entries: Vec<website_content::Model>,
) -> IndexMap<String, IndexMap<String, Vec<website_content::Model>>> {
    let mut grouped: IndexMap<String, IndexMap<String, Vec<website_content::Model>>> =
        IndexMap::new();
    for entry in entries {
        grouped
            .entry(entry.page.clone())
            .or_default()
            .entry(entry.section.clone())
            .or_default()
            .push(entry);
    }
    grouped
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Installs catalog sections and entries that are not yet present. Existing
/// rows are left alone so operator edits survive restarts.
pub async fn seed_initial_content(
    db: &DatabaseConnection,
    catalog: &ContentCatalog,
) -> Result<()> {
    let mut seeded_sections = 0_usize;
    for seed in &catalog.sections {
        let existing = WebsiteSection::find()
            .filter(website_section::Column::Page.eq(seed.page.as_str()))
            .filter(website_section::Column::SectionKey.eq(seed.section_key.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        create_section(
            db,
            CreateSectionArgs {
                section_key: seed.section_key.clone(),
                section_name: seed.section_name.clone(),
                page: seed.page.clone(),
                description: seed.description.clone(),
                icon: seed.icon.clone(),
                sort_order: seed.sort_order,
            },
        )
        .await?;
        seeded_sections += 1;
    }

    let mut seeded_entries = 0_usize;
    for seed in &catalog.entries {
        let existing = WebsiteContent::find()
            .filter(website_content::Column::Page.eq(seed.page.as_str()))
            .filter(website_content::Column::Section.eq(seed.section.as_str()))
            .filter(website_content::Column::ContentKey.eq(seed.content_key.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        create_content(
            db,
            CreateContentArgs {
                content_key: seed.content_key.clone(),
                content_value: seed.content_value.clone(),
                content_type: seed.content_type,
                page: seed.page.clone(),
                section: seed.section.clone(),
                label: seed.label.clone(),
                description: seed.description.clone(),
                is_required: seed.is_required,
                max_length: seed.max_length,
                sort_order: seed.sort_order,
            },
        )
        .await?;
        seeded_entries += 1;
    }

    if seeded_sections > 0 || seeded_entries > 0 {
        info!(
            sections = seeded_sections,
            entries = seeded_entries,
            "Seeded initial website content"
        );
    }
    Ok(())
}
