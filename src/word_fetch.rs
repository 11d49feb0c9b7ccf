use gloo::net::http::Request;

/// Raw text of the word list. The caller parses it so that the exact bytes
/// can be compared with the previous visit.
pub(crate) async fn fetch_word_source(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("{} {}", response.status(), response.status_text()));
    }
    response.text().await.map_err(|err| err.to_string())
}
