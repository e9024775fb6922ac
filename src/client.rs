use color_eyre::eyre::Result;
use reqwest::{blocking::Client, StatusCode};
use url::Url;

/// A resource retrieved over HTTP: the status code and the raw body.
pub struct Fetched {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Fetched {
    /// Returns the body as UTF-8 text.
    pub fn text(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.body)?)
    }
}

/// Blocking retrieval of a single URL. The pipeline stages are generic
/// over this so tests can substitute canned responses for the network.
pub trait Fetch {
    fn get(&self, url: &Url) -> Result<Fetched>;
}

/// The live HTTP(S) client used for the listing page and every flag image.
pub struct Web {
    client: Client,
}

impl Web {
    pub fn new() -> Self {
        Web {
            client: Client::new(),
        }
    }
}

impl Fetch for Web {
    fn get(&self, url: &Url) -> Result<Fetched> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        Ok(Fetched { status, body })
    }
}
