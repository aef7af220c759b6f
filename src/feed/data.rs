use serde::Deserialize;

/// One entry of the video feed
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    pub items: Item,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub snippet: Snippet,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    // missing and null both mean no tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub thumbnails: Thumbnails,
    pub localized: Localized,
    pub channel_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnails {
    pub high: Thumbnail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Localized {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(deserialize_with = "crate::util::string_or_number")]
    pub view_count: String,
}
