use crate::{
    config::{BadRecord, Config},
    feed::{FeedClient, FetchError},
    gallery::{FilterOutcome, Gallery, RenderError, SearchError},
    view::{InputSource, RenderTarget},
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Ties the gallery to a render target and an input source.
///
/// Every change to the gallery is pushed to the target.
pub struct Session<T, I> {
    gallery: Gallery,
    target: T,
    input: I,
    on_bad_record: BadRecord,
}

impl<T, I> Session<T, I>
where
    T: RenderTarget,
    I: InputSource,
{
    pub fn new(target: T, input: I, config: &Config) -> Self {
        Self {
            gallery: Gallery::new(config.search.min_length),
            target,
            input,
            on_bad_record: config.render.on_bad_record,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Fetches the feed and renders it. Failures are logged before they're returned.
    ///
    /// Nothing is rendered if the fetch fails. A malformed record may leave a
    /// partial list behind, see [`BadRecord`].
    pub async fn load(&mut self, client: &FeedClient) -> Result<usize, LoadError> {
        let result = match client.fetch_videos().await {
            Ok(records) => self.show(&records).map_err(LoadError::from),
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(n) => log::info!("loaded {} videos from {}", n, client.endpoint()),
            Err(err) => crate::util::inspect_err(err, || {
                format!("cannot load videos from {}", client.endpoint())
            }),
        }
        result
    }

    /// Replaces the cards with `records`
    pub fn show(&mut self, records: &[Value]) -> Result<usize, RenderError> {
        let result = self.gallery.render(records, self.on_bad_record);

        self.target.clear();
        for entry in self.gallery.entries() {
            self.target.append(entry.card());
        }
        result
    }

    /// Filters the cards by what's currently in the input
    pub fn search(&mut self) -> Result<FilterOutcome, SearchError> {
        let result = self.gallery.filter(&self.input.value());
        if let Err(SearchError::InputTooShort { .. }) = result {
            return result;
        }
        self.sync_visibility();
        result
    }

    /// Clears the input and shows every card
    pub fn reset(&mut self) {
        self.input.clear();
        self.gallery.reset();
        self.sync_visibility();
    }

    fn sync_visibility(&mut self) {
        for (index, entry) in self.gallery.entries().iter().enumerate() {
            self.target.set_visible(index, entry.is_visible());
        }
        self.target.set_clear_control(self.gallery.clear_control());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        notice::Notice,
        test::*,
        view::{HtmlPage, TextInput},
    };
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn new_session(config: &Config) -> Session<HtmlPage, TextInput> {
        Session::new(HtmlPage::default(), TextInput::default(), config)
    }

    fn serve(server: &Server, body: String) -> FeedClient {
        server.expect(
            Expectation::matching(request::method_path("GET", "/videos"))
                .respond_with(status_code(200).body(body)),
        );
        FeedClient::new(server.url_str("/videos"))
    }

    fn shown(session: &Session<HtmlPage, TextInput>) -> Vec<bool> {
        session
            .target()
            .cards()
            .iter()
            .map(|(_, visible)| *visible)
            .collect()
    }

    #[tokio::test]
    async fn funny_cats_scenario() {
        let server = Server::run();
        let client = serve(&server, envelope(vec![funny_cats()]));

        let mut session = new_session(&Config::default());
        assert_eq!(session.load(&client).await.unwrap(), 1);

        let cards = session.target().cards();
        assert_eq!(cards.len(), 1);
        let (card, visible) = &cards[0];
        assert!(*visible);
        assert_eq!(card.title, "Funny Cats");
        assert_eq!(card.watch_url, "https://youtube.com/watch?v=abc");
        assert_eq!(card.tags, "cats, funny");
        assert_eq!(card.views, "10 views");

        session.input_mut().set("funny");
        assert_eq!(
            session.search().unwrap(),
            FilterOutcome {
                matched: 1,
                total: 1
            }
        );
        assert_eq!(shown(&session), vec![true]);
        assert!(session.target().clear_control());

        session.input_mut().set("doggos");
        let err = session.search().unwrap_err();
        assert_eq!(err, SearchError::NoMatches);
        assert_eq!(Notice::from(&err), Notice::NoMatches);
        assert_eq!(shown(&session), vec![false]);
        assert!(!session.target().clear_control());

        // four characters never reach the matching step
        session.input_mut().set("dogs");
        let err = session.search().unwrap_err();
        assert_eq!(err, SearchError::InputTooShort { min: 5 });
        assert_eq!(Notice::from(&err), Notice::InputTooShort { min: 5 });
        assert_eq!(shown(&session), vec![false]);

        session.reset();
        assert_eq!(shown(&session), vec![true]);
        assert_eq!(session.input_mut().value(), "");
        assert!(!session.target().clear_control());
    }

    #[tokio::test]
    async fn feed_fixture() {
        let server = Server::run();
        let client = serve(&server, read_input("videos"));

        let mut session = new_session(&Config::default());
        assert_eq!(session.load(&client).await.unwrap(), 3);

        let titles = session
            .target()
            .cards()
            .iter()
            .map(|(card, _)| card.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Funny Cats",
                "Rick Astley - Never Gonna Give You Up (Official Music Video)",
                "Learning Rust in One Video",
            ]
        );
        assert_eq!(session.target().cards()[2].0.tags, "");

        session.input_mut().set("never gonna");
        session.search().unwrap();
        assert_eq!(shown(&session), vec![false, true, false]);
    }

    #[tokio::test]
    async fn missing_data_renders_nothing() {
        let server = Server::run();
        let client = serve(
            &server,
            serde_json::json!({ "data": { "page": 1 } }).to_string(),
        );

        let mut session = new_session(&Config::default());
        let err = session.load(&client).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Fetch(FetchError::InvalidResponse(..))
        ));
        assert_eq!(Notice::from(&err), Notice::LoadFailed);
        assert!(session.target().cards().is_empty());
        assert!(session.gallery().is_empty());
    }

    #[tokio::test]
    async fn malformed_record_keeps_earlier_cards() {
        let server = Server::run();
        let client = serve(
            &server,
            envelope(vec![
                funny_cats(),
                broken_record("bad"),
                untagged_record("after", "After"),
            ]),
        );

        let mut session = new_session(&Config::default());
        let err = session.load(&client).await.unwrap_err();
        match &err {
            LoadError::Render(err) => assert_eq!(err.index, 1),
            err => panic!("expected a render error, got {}", err),
        }
        assert_eq!(Notice::from(&err), Notice::LoadFailed);
        assert_eq!(session.target().cards().len(), 1);
    }

    #[tokio::test]
    async fn malformed_record_is_skipped() {
        let server = Server::run();
        let client = serve(
            &server,
            envelope(vec![
                funny_cats(),
                broken_record("bad"),
                untagged_record("after", "After"),
            ]),
        );

        let mut config = Config::default();
        config.render.on_bad_record = BadRecord::Skip;

        let mut session = new_session(&config);
        assert_eq!(session.load(&client).await.unwrap(), 2);
        assert_eq!(session.target().cards().len(), 2);
    }

    #[test]
    fn min_length_from_config() {
        let mut config = Config::default();
        config.search.min_length = 3;

        let mut session = new_session(&config);
        session.show(&[funny_cats()]).unwrap();

        session.input_mut().set("cat");
        assert!(session.search().is_ok());

        session.input_mut().set("ca");
        assert_eq!(
            session.search(),
            Err(SearchError::InputTooShort { min: 3 })
        );
    }

    #[test]
    fn show_replaces_cards() {
        let mut session = new_session(&Config::default());
        session
            .show(&[funny_cats(), untagged_record("t1", "Learning Rust")])
            .unwrap();
        assert_eq!(session.target().cards().len(), 2);

        session.show(&[untagged_record("t2", "Other")]).unwrap();
        assert_eq!(session.target().cards().len(), 1);
        assert_eq!(session.target().cards()[0].0.id, "t2");
    }
}
