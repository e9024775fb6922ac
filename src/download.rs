use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use indexmap::IndexMap;
use log::{error, info, warn};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::Fetch;
use crate::scrape::{Countries, CountryRecord};

/// One successfully downloaded flag: the country and where its image
/// landed on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub name: String,
    pub flag_src: String,
}

/// Download results keyed by country name, in download order.
pub type Downloads = IndexMap<String, DownloadRecord>;

pub struct Downloader<'a, F> {
    fetcher: &'a F,
    images: PathBuf,
}

impl<'a, F: Fetch> Downloader<'a, F> {
    pub fn new(fetcher: &'a F, images: PathBuf) -> Self {
        Downloader { fetcher, images }
    }

    /// Downloads every flag in extraction order, one request at a time.
    ///
    /// Entries whose fetch returns a non-200 status or whose write fails
    /// are logged and left out of the result; the rest still go through.
    pub fn run(&self, countries: &Countries) -> Downloads {
        if let Err(e) = fs::create_dir_all(&self.images) {
            error!(
                "could not create image directory {}: {e}",
                self.images.display()
            );
        }
        if countries.is_empty() {
            warn!("no countries to download");
        }

        let mut downloads = Downloads::new();
        for (name, record) in countries {
            match self.download(name, record) {
                Ok(Some(entry)) => {
                    downloads.insert(name.clone(), entry);
                }
                Ok(None) => {}
                Err(e) => error!("image for {name} was not saved: {e}"),
            }
        }
        downloads
    }

    /// Fetches one flag image and writes it under the image directory.
    /// Returns None when the remote answered with anything but 200.
    fn download(&self, name: &str, record: &CountryRecord) -> Result<Option<DownloadRecord>> {
        let url: Url = record.flag_web_address.parse()?;
        let fetched = self.fetcher.get(&url)?;
        if fetched.status != StatusCode::OK {
            warn!(
                "failed to download image for {name}: status code {}",
                fetched.status
            );
            return Ok(None);
        }

        let img_name = format!("{name}_flag.gif");
        fs::write(self.images.join(&img_name), &fetched.body)?;
        info!("image for {name} downloaded as {img_name}");

        Ok(Some(DownloadRecord {
            name: record.name.clone(),
            flag_src: format!("{}/{img_name}", self.images.display()),
        }))
    }
}
