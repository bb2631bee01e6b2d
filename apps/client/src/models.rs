use serde::{Deserialize, Serialize};

/// A fetched fictional resume.
///
/// The generation service makes no hard guarantees about field presence, so
/// every field the renderer can default around deserializes permissively:
/// absent strings become empty, absent sequences become empty vectors.
/// `contact` is the one exception — an absent contact object is a
/// render-time fault, not something to silently paper over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub contact: Option<Contact>,
    #[serde(default)]
    pub experience: Vec<JobEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

/// One experience-section entry. No entry is rejected for missing fields;
/// they render as empty text instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// Lifecycle of one logical resume request. Exactly one variant is active
/// at a time; the view renders from this alone, there is no secondary flag
/// duplicating loading or error status.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Loaded(Resume),
    Failed(String),
}
