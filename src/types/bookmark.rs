use serde::{Deserialize, Deserializer, Serialize};

/// A bookmark record as held by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Creation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Partial update body. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl BookmarkPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Raw text fields of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkForm {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Comma-separated tags, as typed.
    pub tags: String,
}

impl BookmarkForm {
    /// True when both URL and title carry something other than whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.url.trim().is_empty() && !self.title.trim().is_empty()
    }

    pub fn to_new_bookmark(&self) -> NewBookmark {
        NewBookmark {
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tags: normalize_tags(&self.tags),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Splits a comma-separated tag field into trimmed, lowercased tags.
///
/// Empty pieces are dropped and later duplicates are removed, keeping the
/// order in which tags were first entered.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let tag = piece.trim().to_lowercase();
        if tag.is_empty() || tags.contains(&tag) {
            continue;
        }
        tags.push(tag);
    }
    tags
}

/// Case-insensitive substring match against title or URL only.
pub fn matches_search(bookmark: &Bookmark, query: &str) -> bool {
    let needle = query.to_lowercase();
    bookmark.title.to_lowercase().contains(&needle) || bookmark.url.to_lowercase().contains(&needle)
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
