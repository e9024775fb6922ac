mod args;
mod client;
mod download;
mod logging;
mod persist;
mod scrape;

use color_eyre::eyre::Result;
use log::{error, info, warn};
use soup::Soup;
use url::Url;

use client::{Fetch, Web};
use download::Downloader;
use scrape::Countries;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = args::parse();
    logging::init(args.verbose)?;

    let web = Web::new();
    let countries = match fetch_page(&web, &args.url) {
        Some(page) => scrape::extract(&page),
        None => {
            warn!("no page to scrape");
            Countries::new()
        }
    };

    let downloads = Downloader::new(&web, args.images.clone()).run(&countries);
    persist::write_records(&args, &downloads, &countries);
    Ok(())
}

/// Fetches the listing page and parses it into a queryable document.
/// Every failure is logged and collapses to an absent page; the rest of
/// the pipeline degrades to no-ops on empty input rather than aborting.
fn fetch_page(web: &impl Fetch, url: &Url) -> Option<Soup> {
    let page = match web.get(url) {
        Ok(page) => page,
        Err(e) => {
            match e.downcast_ref::<reqwest::Error>() {
                Some(e) if e.is_connect() => error!("connection error while fetching {url}: {e}"),
                Some(e) if e.is_timeout() => error!("request for {url} timed out: {e}"),
                _ => error!("request for {url} failed: {e}"),
            }
            return None;
        }
    };
    if !page.status.is_success() {
        error!("{url} responded with status code {}", page.status);
        return None;
    }
    match page.text() {
        Ok(text) => {
            info!("page successfully parsed");
            Some(Soup::new(text))
        }
        Err(e) => {
            error!("page body was not valid text: {e}");
            None
        }
    }
}
