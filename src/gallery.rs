/*!
The in-memory list of cards, and the search over it.

Every card keeps a lowercased copy of its searchable text (title and tags) and
its visibility. Render targets only mirror what's in here.
*/
use crate::{card::VideoCard, config::BadRecord, feed::VideoRecord};
use serde::Deserialize as _;
use serde_json::Value;

/// A record in the feed didn't have the fields a card needs
#[derive(Debug, thiserror::Error)]
#[error("record {index} is malformed")]
pub struct RenderError {
    pub index: usize,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("the search term must be at least {min} characters")]
    InputTooShort { min: usize },

    #[error("no matches found")]
    NoMatches,
}

/// The result of a search that matched something
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FilterOutcome {
    pub matched: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct Entry {
    card: VideoCard,
    title: String,
    tags: String,
    visible: bool,
}

impl Entry {
    fn new(card: VideoCard) -> Self {
        Self {
            title: card.title.to_lowercase(),
            tags: card.tags.to_lowercase(),
            card,
            visible: true,
        }
    }

    pub fn card(&self) -> &VideoCard {
        &self.card
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `term` must already be lowercased
    fn matches(&self, term: &str) -> bool {
        self.tags.contains(term) || self.title.contains(term)
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    entries: Vec<Entry>,
    clear_control: bool,
    min_length: usize,
}

impl Gallery {
    pub fn new(min_length: usize) -> Self {
        Self {
            entries: Vec::new(),
            clear_control: false,
            min_length,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn visible(&self) -> impl Iterator<Item = &VideoCard> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(Entry::card)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the control that resets a search should be offered
    pub fn clear_control(&self) -> bool {
        self.clear_control
    }

    /// Replaces all cards with ones built from `records`, in order.
    ///
    /// With [`BadRecord::Abort`] the first malformed record ends the batch and
    /// the cards built before it are kept.
    pub fn render(&mut self, records: &[Value], policy: BadRecord) -> Result<usize, RenderError> {
        self.entries.clear();

        for (index, record) in records.iter().enumerate() {
            match VideoRecord::deserialize(record) {
                Ok(record) => self.entries.push(Entry::new(record.into())),
                Err(source) if policy == BadRecord::Skip => {
                    log::warn!("skipping malformed record {}: {}", index, source)
                }
                Err(source) => return Err(RenderError { index, source }),
            }
        }

        log::debug!("rendered {} cards", self.entries.len());
        Ok(self.entries.len())
    }

    /// Shows only the cards whose title or tags contain `input`, ignoring case.
    ///
    /// A term that's too short changes nothing. When nothing matches, every
    /// card is hidden and [`SearchError::NoMatches`] is returned.
    pub fn filter(&mut self, input: &str) -> Result<FilterOutcome, SearchError> {
        let term = input.trim().to_lowercase();
        // measured in utf-16 units, like a browser's string length
        if term.encode_utf16().count() < self.min_length {
            return Err(SearchError::InputTooShort {
                min: self.min_length,
            });
        }

        let mut matched = 0;
        for entry in &mut self.entries {
            entry.visible = entry.matches(&term);
            matched += entry.visible as usize;
        }

        self.clear_control = matched > 0;
        log::debug!(
            "search for '{}' matched {}/{}",
            term,
            matched,
            self.entries.len()
        );

        if matched == 0 {
            return Err(SearchError::NoMatches);
        }

        Ok(FilterOutcome {
            matched,
            total: self.entries.len(),
        })
    }

    /// Makes every card visible again and hides the clear control
    pub fn reset(&mut self) {
        self.entries.iter_mut().for_each(|entry| entry.visible = true);
        self.clear_control = false;
    }
}
