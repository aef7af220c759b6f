use anyhow::Context as _;
use tokio::io::{AsyncBufReadExt as _, BufReader};
use vidcards::{
    view::{HtmlPage, TextInput},
    Config, FeedClient, Notice, Session,
};

const CONFIG_LOCATION: &str = "vidcards.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--print-config") {
        Config::print_default();
        return Ok(());
    }

    let config = Config::load(CONFIG_LOCATION).await?;

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", format!("vidcards={}", config.log_level));
    }
    let logger = alto_logger::TermLogger::new(alto_logger::Options::default())?;
    alto_logger::init(logger).expect("init logger");

    let client = FeedClient::new(&config.feed.endpoint);
    let mut session = Session::new(HtmlPage::default(), TextInput::default(), &config);

    if let Err(err) = session.load(&client).await {
        eprintln!("{}", Notice::from(&err));
    }
    publish(&session, &config).await?;

    eprintln!("type a search term and press enter. ':clear' shows everything, ':quit' exits");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" => break,
            ":clear" => session.reset(),
            _ => {
                session.input_mut().set(line.as_str());
                if let Err(err) = session.search() {
                    eprintln!("{}", Notice::from(&err));
                }
            }
        }
        publish(&session, &config).await?;
    }

    Ok(())
}

/// Lists the visible cards and writes the html page, if one is configured
async fn publish(session: &Session<HtmlPage, TextInput>, config: &Config) -> anyhow::Result<()> {
    for card in session.gallery().visible() {
        println!(
            "{} | {} | {} | {}",
            card.title, card.channel, card.views, card.watch_url
        );
    }

    if let Some(path) = &config.render.page {
        tokio::fs::write(path, session.target().to_html())
            .await
            .with_context(|| format!("cannot write page to '{}'", path.display()))?;
        log::trace!("wrote page to {}", path.display());
    }
    Ok(())
}
