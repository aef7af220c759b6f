use crate::feed::VideoRecord;

/// Where a video id is watched
pub const WATCH_BASE: &str = "https://youtube.com/watch?v=";

/// The displayable form of one record
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCard {
    pub id: String,
    pub watch_url: String,
    pub thumbnail: String,
    pub title: String,
    pub channel: String,
    pub views: String,
    /// The record's tags joined with `", "`, empty if it had none
    pub tags: String,
}

impl From<VideoRecord> for VideoCard {
    fn from(record: VideoRecord) -> Self {
        let item = record.items;
        let snippet = item.snippet;
        Self {
            watch_url: watch_url(&item.id),
            id: item.id,
            thumbnail: snippet.thumbnails.high.url,
            title: snippet.localized.title,
            channel: snippet.channel_title,
            views: format!("{} views", item.statistics.view_count),
            tags: snippet.tags.map(|tags| tags.join(", ")).unwrap_or_default(),
        }
    }
}

pub fn watch_url(id: &str) -> String {
    let id = url::form_urlencoded::byte_serialize(id.as_bytes()).collect::<String>();
    format!("{}{}", WATCH_BASE, id)
}
