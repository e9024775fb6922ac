use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use soup::prelude::*;

/// Origin prepended to the scraped relative image paths.
pub const SITE_ORIGIN: &str = "https://www.worldometers.info";

// The listing page carries no ids or semantic classes around the flag
// table, so the lookups match inline style attributes verbatim. The
// trailing space in the wrapper style is present in the page's markup.
const CONTAINER_STYLE: &str = "width:95%; text-align:left";
const ITEM_CLASS: &str = "col-md-4";
const WRAPPER_STYLE: &str = "margin-top:10px ";
const NAME_STYLE: &str = "font-weight:bold; padding-top:10px";

/// Thumbnail path segment swapped out to address the full-size asset.
const THUMBNAIL_SEGMENT: &str = "/small/tn_";

/// One scraped country: its display name and the rewritten flag URLs,
/// both the site-relative path and the absolute download address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub flag_img_url: String,
    pub flag_web_address: String,
}

/// Countries keyed by display name, in document order. A name appearing
/// twice on the page keeps only its last entry.
pub type Countries = IndexMap<String, CountryRecord>;

/// Pulls every country out of the parsed listing page.
///
/// Items missing their wrapper, name or image are logged and skipped;
/// a page without the flag container yields an empty map.
pub fn extract(page: &Soup) -> Countries {
    let mut countries = Countries::new();
    let container = match page.attr("style", CONTAINER_STYLE).find() {
        Some(container) => container,
        None => {
            warn!("no flag container found on the page");
            return countries;
        }
    };

    for item in container.tag("div").class(ITEM_CLASS).find_all() {
        let wrapper = match item.attr("style", WRAPPER_STYLE).find() {
            Some(wrapper) => wrapper,
            None => {
                warn!("flag item without a country wrapper, skipping");
                continue;
            }
        };
        let name = wrapper.attr("style", NAME_STYLE).find().map(|n| n.text());
        let src = wrapper.tag("img").find().and_then(|img| img.get("src"));
        let (name, src) = match (name, src) {
            (Some(name), Some(src)) if !name.is_empty() && !src.is_empty() => (name, src),
            _ => {
                warn!("country wrapper missing its name or flag image, skipping");
                continue;
            }
        };

        let flag_img_url = src.replace(THUMBNAIL_SEGMENT, "/");
        let record = CountryRecord {
            name: name.clone(),
            flag_web_address: format!("{SITE_ORIGIN}{flag_img_url}"),
            flag_img_url,
        };
        countries.insert(name, record);
    }
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, src: &str) -> String {
        format!(
            r#"<div class="col-md-4">
                 <div style="margin-top:10px ">
                   <div style="font-weight:bold; padding-top:10px">{name}</div>
                   <div><img src="{src}" alt="{name} flag"></div>
                 </div>
               </div>"#
        )
    }

    fn page(items: &[String]) -> Soup {
        Soup::new(&format!(
            r#"<html><body>
                 <div style="width:95%; text-align:left">{}</div>
               </body></html>"#,
            items.join("\n")
        ))
    }

    #[test]
    fn extracts_every_country_with_rewritten_urls() {
        let countries = extract(&page(&[
            item("Afghanistan", "/img/flags/small/tn_af-flag.gif"),
            item("Albania", "/img/flags/small/tn_al-flag.gif"),
        ]));

        assert_eq!(countries.len(), 2);
        let afghanistan = &countries["Afghanistan"];
        assert_eq!(afghanistan.name, "Afghanistan");
        assert_eq!(afghanistan.flag_img_url, "/img/flags/af-flag.gif");
        assert_eq!(
            afghanistan.flag_web_address,
            "https://www.worldometers.info/img/flags/af-flag.gif"
        );
        assert_eq!(
            countries["Albania"].flag_web_address,
            "https://www.worldometers.info/img/flags/al-flag.gif"
        );
    }

    #[test]
    fn keys_follow_document_order() {
        let countries = extract(&page(&[
            item("Zimbabwe", "/img/flags/small/tn_zw-flag.gif"),
            item("Albania", "/img/flags/small/tn_al-flag.gif"),
            item("Mexico", "/img/flags/small/tn_mx-flag.gif"),
        ]));

        let keys: Vec<&String> = countries.keys().collect();
        assert_eq!(keys, ["Zimbabwe", "Albania", "Mexico"]);
    }

    #[test]
    fn missing_container_yields_empty_map() {
        let soup = Soup::new("<html><body><div>no flags here</div></body></html>");
        assert!(extract(&soup).is_empty());
    }

    #[test]
    fn item_without_image_is_skipped_but_others_survive() {
        let broken = r#"<div class="col-md-4">
                          <div style="margin-top:10px ">
                            <div style="font-weight:bold; padding-top:10px">Atlantis</div>
                          </div>
                        </div>"#
            .to_string();
        let countries = extract(&page(&[
            item("Afghanistan", "/img/flags/small/tn_af-flag.gif"),
            broken,
            item("Albania", "/img/flags/small/tn_al-flag.gif"),
        ]));

        assert_eq!(countries.len(), 2);
        assert!(!countries.contains_key("Atlantis"));
        assert!(countries.contains_key("Afghanistan"));
        assert!(countries.contains_key("Albania"));
    }

    #[test]
    fn item_without_wrapper_is_skipped() {
        let bare = r#"<div class="col-md-4"><p>nothing nested</p></div>"#.to_string();
        let countries = extract(&page(&[
            bare,
            item("Albania", "/img/flags/small/tn_al-flag.gif"),
        ]));

        assert_eq!(countries.len(), 1);
        assert!(countries.contains_key("Albania"));
    }

    #[test]
    fn duplicate_names_keep_the_last_entry() {
        let countries = extract(&page(&[
            item("Albania", "/img/flags/small/tn_old-flag.gif"),
            item("Albania", "/img/flags/small/tn_new-flag.gif"),
        ]));

        assert_eq!(countries.len(), 1);
        assert_eq!(countries["Albania"].flag_img_url, "/img/flags/new-flag.gif");
    }

    #[test]
    fn url_without_thumbnail_segment_is_left_alone() {
        let countries = extract(&page(&[item("Albania", "/img/flags/al-flag.gif")]));
        assert_eq!(countries["Albania"].flag_img_url, "/img/flags/al-flag.gif");
    }
}
