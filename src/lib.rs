/*!
vidcards. a video card list, fetched from a feed and filtered by title or tag

Start-up fetches the feed once and renders every record as a card. After that a
search term shows only the cards whose title or tags contain it, and a reset
shows them all again.
*/

/// Configuration
pub mod config;
pub use config::Config;

/// Fetching the video feed
pub mod feed;
pub use feed::FeedClient;

pub mod card;

/// The cards and their visibility
pub mod gallery;

/// Render targets and input sources
pub mod view;

pub mod notice;
pub use notice::Notice;

pub mod session;
pub use session::Session;

pub mod util;

mod http;


pub static DEFAULT_CONFIG: &str = include_str!("../default.toml");
