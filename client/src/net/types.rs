//! Wire DTOs for the publishing REST API.
//!
//! DESIGN
//! ======
//! The API is not ours and is loose about shapes: references arrive embedded
//! or as bare ids, scalars arrive as strings or numbers, collections arrive as
//! `null`. Decoding is lenient so one odd record never blanks a whole list;
//! interpretation (fallbacks, labels) happens in `state`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

// =============================================================================
// ENVELOPES
// =============================================================================

/// A list response: either a bare JSON array or `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Enveloped { data: Option<Vec<T>> },
}

impl<T> ListPayload<T> {
    /// Unwrap to the contained records; a missing `data` field is empty.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Enveloped { data } => data.unwrap_or_default(),
        }
    }
}

/// A single-record response: either `{ "data": {...} }` or the bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemPayload<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> ItemPayload<T> {
    pub fn into_item(self) -> T {
        match self {
            Self::Enveloped { data } | Self::Bare(data) => data,
        }
    }
}

/// JSON body the API sends alongside error statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// PACKAGES
// =============================================================================

/// A publishing package from the `/api/packages` catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub price: Option<f64>,
}

/// The `packageId` field of a payment, in whichever shape the server sent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PackageRef {
    /// Populated (`{_id, title, price}`) or id-only (`{_id}`) object.
    Object(PackageStub),
    /// Bare package id.
    Id(String),
    /// Any other JSON value; resolves to the unknown package.
    Other(IgnoredAny),
}

/// Object form of a package reference; any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PackageStub {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub price: Option<f64>,
}

// =============================================================================
// USERS
// =============================================================================

/// The `userId` field of a payment or manuscript.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Object(UserStub),
    Id(String),
    /// Any other JSON value; reads as an unknown user.
    Other(IgnoredAny),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserStub {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub fullname: Option<String>,
}

impl UserRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Object(user) => user.id.as_deref(),
            Self::Id(id) => Some(id),
            Self::Other(_) => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Object(user) => user.email.as_deref().filter(|s| !s.is_empty()),
            Self::Id(_) | Self::Other(_) => None,
        }
    }

    pub fn fullname(&self) -> Option<&str> {
        match self {
            Self::Object(user) => user.fullname.as_deref().filter(|s| !s.is_empty()),
            Self::Id(_) | Self::Other(_) => None,
        }
    }
}

// =============================================================================
// PAYMENTS
// =============================================================================

/// Review state of a payment. Unrecognized server values read as `Pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum PaymentStatus {
    Approved,
    #[default]
    #[serde(other)]
    Pending,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
        }
    }

    /// Parse a `<select>` option value.
    pub fn from_option_value(value: &str) -> Option<Self> {
        match value {
            "Approved" => Some(Self::Approved),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// A payment as listed for admins.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user: Option<UserRef>,
    #[serde(rename = "packageId", default)]
    pub package: Option<PackageRef>,
    #[serde(default)]
    pub payment_proof_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
}

// =============================================================================
// MANUSCRIPTS
// =============================================================================

/// One uploaded file (manuscript version or cover image).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptFiles {
    /// Version history, oldest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub manuscripts: Vec<StoredFile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover_front: Vec<StoredFile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover_back: Vec<StoredFile>,
}

/// A manuscript owned by the signed-in author.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manuscript {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_label: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_count")]
    pub revision_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: ManuscriptFiles,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub publish_year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub status_step: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "userId", default)]
    pub author: Option<UserRef>,
    #[serde(default)]
    pub revision_note: Option<String>,
    #[serde(default)]
    pub revision_file_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_uploaded_to_perpusnas: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_illustration: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string, number, or boolean as text; anything else is absent.
fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

/// Accept a number or numeric string as a money amount.
fn deserialize_opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Accept a non-negative integer or integer string as a count.
fn deserialize_opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    })
}
