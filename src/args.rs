use clap::{ArgAction::Count, Parser};
use std::path::PathBuf;
use url::Url;

/// The listing page this scraper understands.
pub const FLAGS_PAGE: &str = "https://www.worldometers.info/geography/flags-of-the-world";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// URL of the flag listing page
    #[arg(long, default_value = FLAGS_PAGE)]
    pub url: Url,

    /// Directory to store the downloaded flag images
    #[arg(long, default_value = "flags_images", value_name = "DIR")]
    pub images: PathBuf,

    /// Where to write the display record (country name to local image path)
    #[arg(long, default_value = "flags_data.json", value_name = "FILE")]
    pub flags_data: PathBuf,

    /// Where to write the audit record (country name to scraped URLs)
    #[arg(long, default_value = "scrap_record.json", value_name = "FILE")]
    pub scrap_record: PathBuf,

    /// Turn debugging information on
    #[arg(short, long, action = Count)]
    pub verbose: u8,
}

pub fn parse() -> Args {
    Args::parse()
}
