use crate::{card::VideoCard, util::escape_html};

/// Something cards can be drawn on
pub trait RenderTarget {
    /// Removes every card
    fn clear(&mut self);
    /// Adds a visible card after the existing ones
    fn append(&mut self, card: &VideoCard);
    /// Shows or hides the card at `index`
    fn set_visible(&mut self, index: usize, visible: bool);
    /// Shows or hides the control that resets a search
    fn set_clear_control(&mut self, visible: bool);
}

/// Where the search term is typed
pub trait InputSource {
    fn value(&self) -> String;
    fn clear(&mut self);
}

/// A plain text box
#[derive(Debug, Default, Clone)]
pub struct TextInput(String);

impl TextInput {
    pub fn set(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }
}

impl InputSource for TextInput {
    fn value(&self) -> String {
        self.0.clone()
    }

    fn clear(&mut self) {
        self.0.clear()
    }
}

/// Renders the cards as an html page
#[derive(Debug, Default, Clone)]
pub struct HtmlPage {
    cards: Vec<(VideoCard, bool)>,
    clear_control: bool,
}

impl HtmlPage {
    pub fn cards(&self) -> &[(VideoCard, bool)] {
        &self.cards
    }

    pub fn clear_control(&self) -> bool {
        self.clear_control
    }

    pub fn to_html(&self) -> String {
        let cards = self
            .cards
            .iter()
            .map(|(card, visible)| card_markup(card, *visible))
            .collect::<Vec<_>>()
            .join("\n");

        let clear_class = if self.clear_control { "" } else { r#" class="hidden""# };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Videos</title>
<style>.hidden {{ display: none; }}</style>
</head>
<body>
<div class="search">
<input id="search-input" type="text" placeholder="Search by title or tag">
<button id="search-button">Search</button>
<button id="clear-search"{clear_class}>Clear</button>
</div>
<div id="video-cards-container">
{cards}
</div>
</body>
</html>
"#,
            clear_class = clear_class,
            cards = cards,
        )
    }
}

impl RenderTarget for HtmlPage {
    fn clear(&mut self) {
        self.cards.clear()
    }

    fn append(&mut self, card: &VideoCard) {
        self.cards.push((card.clone(), true))
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        match self.cards.get_mut(index) {
            Some((_, shown)) => *shown = visible,
            None => log::warn!("no card at {} to show/hide", index),
        }
    }

    fn set_clear_control(&mut self, visible: bool) {
        self.clear_control = visible
    }
}

/// The markup for a single card
pub fn card_markup(card: &VideoCard, visible: bool) -> String {
    format!(
        r#"<div class="video-card-single" tags="{tags}" style="display: {display}">
  <div class="video-content">
    <a href="{url}" target="_blank"><img src="{thumbnail}" alt="{title}"></a>
    <div class="h2-container">
      <a href="{url}" target="_blank"><h2 class="video-title">{title}</h2></a>
    </div>
  </div>
  <div class="other-details">
    <p class="channel-title">{channel}</p>
    <p class="views">{views}</p>
  </div>
</div>"#,
        tags = escape_html(&card.tags),
        display = if visible { "block" } else { "none" },
        url = escape_html(&card.watch_url),
        thumbnail = escape_html(&card.thumbnail),
        title = escape_html(&card.title),
        channel = escape_html(&card.channel),
        views = escape_html(&card.views),
    )
}
