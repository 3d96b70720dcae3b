//! Wire-schema DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON entities so serde round-trips stay
//! lossless. Responses are what the server returns (full nested entities);
//! payloads are what the client sends (id lists for nested collections).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sentinel id meaning "not yet persisted": a GET with this id returns a
/// blank template instead of a lookup, and a POST with it creates a record.
pub const NEW_ID: &str = "new";

/// Whether an entity id is the creation sentinel.
pub fn is_new(id: &str) -> bool {
    id == NEW_ID
}

/// An authenticated user as returned by the session and account endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Account email, omitted on embedded creator references.
    #[serde(default)]
    pub email: Option<String>,
}

/// Account mutation payload; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_new: Option<String>,
}

/// Per-world settings blob.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSettings {
    /// Whether the world is visible to other users.
    #[serde(default)]
    pub is_public: bool,
}

/// The closed set of blueprint field kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form single-line text.
    #[default]
    Text,
    /// Numeric value, stored as its string rendering.
    Number,
    /// True/false flag, stored as `"true"`/`"false"`.
    Boolean,
    /// One of a fixed set of option strings.
    Select,
    /// Reference to another blueprint by id.
    Blueprint,
}

impl FieldKind {
    /// Every kind, in display order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Boolean,
        FieldKind::Select,
        FieldKind::Blueprint,
    ];

    /// Wire tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Select => "select",
            FieldKind::Blueprint => "blueprint",
        }
    }

    /// Parse a wire tag back into a kind.
    pub fn parse(tag: &str) -> Option<FieldKind> {
        FieldKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

/// A typed field definition on a blueprint, or a field instance on an
/// object. Values are strings for every kind; `options` is only meaningful
/// for [`FieldKind::Select`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Field name shown as the input label.
    pub name: String,
    /// Field kind from the closed enumeration.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Default value (blueprint) or instance value (object).
    #[serde(default)]
    pub value: String,
    /// Allowed option strings for select fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Default for CustomField {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: FieldKind::Text,
            value: String::new(),
            options: Vec::new(),
        }
    }
}

/// A reusable schema for creating objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlueprintResponse {
    /// Unique blueprint identifier, or [`NEW_ID`] for an unsaved template.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the blueprint is visible to other users.
    #[serde(default)]
    pub is_public: bool,
    /// Ordered field definitions with default values.
    #[serde(default)]
    pub fields: Vec<CustomField>,
    /// User who created the blueprint, if known.
    #[serde(default)]
    pub creator: Option<UserResponse>,
    /// ISO 8601 creation timestamp, if persisted.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Blueprint mutation payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlueprintPayload {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub fields: Vec<CustomField>,
}

/// A named free-text note attached to a world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContextResponse {
    /// Unique context identifier, or [`NEW_ID`] / a local draft id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text content blob (rendered as markdown).
    #[serde(default)]
    pub content: String,
    /// ISO 8601 creation timestamp, if persisted.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Context mutation payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPayload {
    pub name: String,
    pub content: String,
}

/// A concrete instance of a blueprint with field values.
///
/// `fields` is a structural copy of the blueprint's field definitions taken
/// at object-creation time; editing the blueprint afterwards never changes
/// an existing object's fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectResponse {
    /// Unique object identifier, or [`NEW_ID`] / a local draft id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// The blueprint this object was instantiated from.
    pub blueprint: BlueprintResponse,
    /// Materialized field instances.
    #[serde(default)]
    pub fields: Vec<CustomField>,
    /// ISO 8601 creation timestamp, if persisted.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Object mutation payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectPayload {
    pub name: String,
    pub description: String,
    pub blueprint_id: String,
    pub fields: Vec<CustomField>,
}

/// Top-level authored aggregate: contexts, blueprints, and objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldResponse {
    /// Unique world identifier, or [`NEW_ID`] for an unsaved template.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Per-world settings.
    #[serde(default)]
    pub settings: WorldSettings,
    /// Blueprints attached to this world.
    #[serde(default)]
    pub blueprints: Vec<BlueprintResponse>,
    /// Contexts owned by this world.
    #[serde(default)]
    pub contexts: Vec<ContextResponse>,
    /// Objects owned by this world.
    #[serde(default)]
    pub objects: Vec<ObjectResponse>,
    /// User who created the world, if known.
    #[serde(default)]
    pub creator: Option<UserResponse>,
    /// ISO 8601 creation timestamp, if persisted.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// World mutation payload. Nested collections travel as id lists; the
/// server resolves them back into full entities in the response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPayload {
    pub name: String,
    pub description: String,
    pub settings: WorldSettings,
    pub blueprint_ids: Vec<String>,
    pub context_ids: Vec<String>,
    pub object_ids: Vec<String>,
}

/// A campaign summary shown on the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCard {
    /// Unique campaign identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the campaign is visible to other users.
    #[serde(default)]
    pub is_public: bool,
}

/// Landing-page aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeResponse {
    /// The current user.
    pub user: UserResponse,
    /// Campaign summaries for the current user.
    #[serde(default)]
    pub campaigns: Vec<CampaignCard>,
}
