//! Project entity model and DTOs.
//!
//! Field names serialize in camelCase to match the JSON document the site
//! reads (`longDescription`, `liveDemo`, `createdAt`, ...). Keys the model
//! does not name are carried in `extra` so a load/save cycle never loses
//! data written by other tools.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{ProjectId, Timestamp};

/// Image used when a project is created without one.
pub const DEFAULT_IMAGE: &str = "/project-images/default-project.png";

/// Gradient applied when a project is created without one.
pub const DEFAULT_GRADIENT: &str = "from-blue-500 to-cyan-500";

/// Keys only the catalog may set. Dropped from client-supplied extras.
const RESERVED_KEYS: &[&str] = &["id", "createdAt", "updatedAt"];

/// Fields required on create, in the order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &["title", "description", "longDescription", "github"];

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Delivery status shown on a project card.
///
/// Serialized as its label. A stored label outside the known set loads as
/// [`ProjectStatus::Other`] and is written back unchanged; only create and
/// update reject it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planning,
    Other(String),
}

impl ProjectStatus {
    /// Statuses a client may assign.
    pub const KNOWN: [ProjectStatus; 3] = [Self::Completed, Self::InProgress, Self::Planning];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planning => "Planning",
            Self::Other(raw) => raw,
        }
    }

    fn from_label(label: String) -> Self {
        match label.as_str() {
            "Completed" => Self::Completed,
            "In Progress" => Self::InProgress,
            "Planning" => Self::Planning,
            _ => Self::Other(label),
        }
    }

    /// Reject labels a client may not assign.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Other(raw) => Err(CoreError::Validation(format!(
                "Invalid status '{raw}'. Must be one of: {}",
                Self::KNOWN
                    .iter()
                    .map(Self::label)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
            _ => Ok(()),
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `null` reads as the default, like a missing key.
        Ok(Option::<String>::deserialize(deserializer)?
            .map(Self::from_label)
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// One showcased work item, as stored in the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_demo: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_gradient")]
    pub gradient: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Fields not modelled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_gradient() -> String {
    DEFAULT_GRADIENT.to_string()
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new project.
///
/// Required fields are optional here so a missing one is reported as a
/// validation error naming the field rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub live_demo: Option<String>,
    pub gradient: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewProject {
    /// Check that every required field is present and non-blank.
    ///
    /// Reports the first missing field in [`REQUIRED_FIELDS`] order.
    pub fn validate(&self) -> Result<(), CoreError> {
        let values = [
            &self.title,
            &self.description,
            &self.long_description,
            &self.github,
        ];
        for (field, value) in REQUIRED_FIELDS.iter().zip(values) {
            if is_blank(value) {
                return Err(CoreError::Validation(format!(
                    "Missing required field: {field}"
                )));
            }
        }
        if let Some(status) = &self.status {
            status.validate()?;
        }
        Ok(())
    }

    /// Build the stored record. Call [`validate`](Self::validate) first.
    pub fn into_project(self, id: ProjectId, created_at: Timestamp) -> Project {
        let image = match self.image {
            Some(image) if !image.trim().is_empty() => image,
            _ => DEFAULT_IMAGE.to_string(),
        };
        let gradient = match self.gradient {
            Some(gradient) if !gradient.trim().is_empty() => gradient,
            _ => default_gradient(),
        };

        Project {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            long_description: self.long_description.unwrap_or_default(),
            image,
            technologies: self.technologies,
            live_demo: self.live_demo.unwrap_or_default(),
            github: self.github.unwrap_or_default(),
            features: self.features,
            gradient,
            status: self.status.unwrap_or_default(),
            created_at: Some(created_at),
            updated_at: None,
            extra: strip_reserved(self.extra),
        }
    }
}

/// DTO for updating an existing project. All fields are optional.
///
/// Applied as a shallow overwrite: a provided list replaces the stored list
/// wholesale. The id and timestamps cannot be changed through this DTO.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_demo: Option<String>,
    pub github: Option<String>,
    pub features: Option<Vec<String>>,
    pub gradient: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectPatch {
    /// Only the status is checked; other fields overwrite as given.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.status {
            Some(status) => status.validate(),
            None => Ok(()),
        }
    }

    /// Merge the provided fields onto `project` and stamp `updated_at`.
    pub fn apply(self, project: &mut Project, updated_at: Timestamp) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(long_description) = self.long_description {
            project.long_description = long_description;
        }
        if let Some(image) = self.image {
            project.image = image;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(live_demo) = self.live_demo {
            project.live_demo = live_demo;
        }
        if let Some(github) = self.github {
            project.github = github;
        }
        if let Some(features) = self.features {
            project.features = features;
        }
        if let Some(gradient) = self.gradient {
            project.gradient = gradient;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        project.extra.extend(strip_reserved(self.extra));
        project.updated_at = Some(updated_at);
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn strip_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        extra.remove(*key);
    }
    extra
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
