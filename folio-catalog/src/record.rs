use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum::{Display, EnumString};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

use crate::{
    error::{CatalogError, MalformedReason},
    Category, ProjectId,
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Whether a project is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

/// A catalog entry exactly as written in the static configuration.
///
/// Nothing is checked here; [`RawProjectRecord::validate`] turns it into a
/// [`ProjectRecord`] or rejects it. The fields only the search box reads are
/// read leniently: a value of the wrong shape becomes `None` instead of
/// failing the whole catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProjectRecord {
    pub id: ProjectId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub technologies: Option<Vec<String>>,
    /// Kept as raw JSON so a missing or mistyped category is reported
    /// against its record.
    #[serde(default)]
    pub category: Option<Value>,
    pub featured: Option<bool>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp. Null or blank means in progress.
    pub completion_date: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
    pub repo_link: Option<String>,
    pub live_link: Option<String>,
}

/// A validated, immutable catalog entry.
///
/// `title`, `description` and `technologies` stay optional: a record missing
/// any of them loads fine but never matches a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub category: Category,
    pub featured: bool,
    #[serde(with = "iso_date::option")]
    pub completion_date: Option<Date>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
}

impl ProjectRecord {
    /// True when every field the search predicate reads is present.
    pub fn is_searchable(&self) -> bool {
        self.title.is_some() && self.description.is_some() && self.technologies.is_some()
    }
}

impl RawProjectRecord {
    /// Check the structural invariants of one record.
    ///
    /// `position` is the record's index in the catalog and only feeds the
    /// error message.
    pub fn validate(self, position: usize) -> Result<ProjectRecord, CatalogError> {
        let id_label = self.id.to_string();
        let malformed =
            |reason: MalformedReason| CatalogError::malformed(position, id_label.as_str(), reason);

        let category = match &self.category {
            None => return Err(malformed(MalformedReason::MissingCategory)),
            Some(Value::String(raw)) => Category::from_str(raw)
                .map_err(|_| malformed(MalformedReason::UnknownCategory(raw.clone())))?,
            Some(other) => {
                return Err(malformed(MalformedReason::UnknownCategory(other.to_string())));
            }
        };
        if category.is_wildcard() {
            return Err(malformed(MalformedReason::WildcardCategory));
        }

        let completion_date = match self.completion_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_completion_date(raw).ok_or_else(|| {
                malformed(MalformedReason::InvalidCompletionDate(raw.to_string()))
            })?),
        };

        let declared_status = match self.status.as_deref() {
            None => None,
            Some(raw) => Some(
                ProjectStatus::from_str(raw)
                    .map_err(|_| malformed(MalformedReason::UnknownStatus(raw.to_string())))?,
            ),
        };

        let status = match (declared_status, completion_date) {
            (Some(ProjectStatus::Completed), None) => {
                return Err(malformed(MalformedReason::CompletedWithoutDate));
            }
            (Some(ProjectStatus::InProgress), Some(_)) => {
                return Err(malformed(MalformedReason::InProgressWithDate));
            }
            (Some(status), _) => status,
            (None, Some(_)) => ProjectStatus::Completed,
            (None, None) => ProjectStatus::InProgress,
        };

        Ok(ProjectRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            category,
            featured: self.featured.unwrap_or(false),
            completion_date,
            status,
            image: self.image,
            repo_link: self.repo_link,
            live_link: self.live_link,
        })
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Some(value),
        _ => None,
    })
}

// Any non-string element spoils the whole list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect(),
        _ => None,
    })
}

fn parse_completion_date(raw: &str) -> Option<Date> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| OffsetDateTime::parse(raw, &Rfc3339).ok().map(|dt| dt.date()))
}
