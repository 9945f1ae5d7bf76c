//! # User record and its mutation inputs
//!
//! Three representations of a user cross the store boundary:
//!
//! - [`User`]: the full record as it appears on the wire and in view state.
//!   Serialized camelCase to match the user-service contract
//!   (`{id, firstName, lastName, email, password?, birthday, avatarUrl?,
//!   createdAt?, updatedAt?}`). The `password` field is write-only: it is
//!   accepted on create/update and never present on read, so it is skipped
//!   whenever it is `None`.
//! - [`NewUser`]: creation input. Has no id (ids are assigned by the owning
//!   store) and keeps `birthday` optional so a missing value surfaces as a
//!   validation error rather than a type error at the form boundary.
//! - [`UserPatch`]: partial update. Every field is optional; `None` means
//!   unchanged. Patches shallow-merge, later fields winning.
//!
//! The live service returns numeric ids, the mock store string tokens;
//! deserialization accepts both and normalizes to `String`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A user record as modeled by this application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the owning store; immutable after creation.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Write-only: sent to the service on mutation, never round-tripped back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub birthday: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// `"First Last"`, the form the search filter matches against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overlay a partial update onto this record in place.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(first_name) = &patch.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(password) = &patch.password {
            self.password = Some(password.clone());
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(avatar_url) = &patch.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
    }
}

/// Input for creating a user. The owning store assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserPatch {
    /// Shallow-merge `later` over this patch: fields present in `later`
    /// replace the ones recorded earlier.
    pub fn merge(&mut self, later: UserPatch) {
        if later.first_name.is_some() {
            self.first_name = later.first_name;
        }
        if later.last_name.is_some() {
            self.last_name = later.last_name;
        }
        if later.email.is_some() {
            self.email = later.email;
        }
        if later.password.is_some() {
            self.password = later.password;
        }
        if later.birthday.is_some() {
            self.birthday = later.birthday;
        }
        if later.avatar_url.is_some() {
            self.avatar_url = later.avatar_url;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.birthday.is_none()
            && self.avatar_url.is_none()
    }
}

/// Accept `"42"` or `42` for the id field and normalize to a string.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Num(i64),
        Str(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Num(n) => n.to_string(),
        Id::Str(s) => s,
    })
}
