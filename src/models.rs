use serde::{Serialize, Deserialize};

/// Body of `POST /generate-story`. Every field is optional; `null` and a missing key mean the same thing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    #[serde(default, rename = "type")]
    pub kind: Option<String>, // "start" or "theme" from the form
    #[serde(default)]
    pub story_start: Option<String>,
    #[serde(default)]
    pub image_style: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl StoryRequest {
    /// Text the user typed to open the story, if the request is a "start" request and it is non-empty.
    pub fn user_opening(&self) -> Option<&str> {
        match (self.kind.as_deref(), self.story_start.as_deref()) {
            (Some("start"), Some(start)) if !start.is_empty() => Some(start),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorySegment {
    pub text: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoryResponse {
    pub title: Option<String>, // serialized as null, never skipped
    pub segments: Vec<StorySegment>,
}
