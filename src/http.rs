pub fn new_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// GETs `url` and returns the body as text.
///
/// The status code is not checked; an error page is still a body and the caller decides what it means.
pub async fn get_body(
    client: &reqwest::Client,
    url: &str,
    headers: &[(&'static str, &str)],
) -> reqwest::Result<String> {
    let mut req = client.get(url);
    for &(k, v) in headers {
        req = req.header(k, v);
    }

    let resp = client.execute(req.build()?).await?;
    log::trace!("GET {} -> {}", url, resp.status());
    resp.text().await
}
