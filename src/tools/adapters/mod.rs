pub mod crawl;
pub mod extract;
pub mod map;
pub mod research;
pub mod scrape;
pub mod search;
pub mod status;

use crate::tools::definition::ToolDefinition;
use crate::tools::schema::ToolSchema;

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        scrape::definition(),
        search::definition(),
        map::definition(),
        extract::definition(),
        research::definition(),
        crawl::definition(),
        status::definition(),
    ]
}

pub fn schema_for(name: &str) -> Option<ToolSchema> {
    match name {
        scrape::NAME => Some(scrape::schema()),
        search::NAME => Some(search::schema()),
        map::NAME => Some(map::schema()),
        extract::NAME => Some(extract::schema()),
        research::NAME => Some(research::schema()),
        crawl::NAME => Some(crawl::schema()),
        status::NAME => Some(status::schema()),
        _ => None,
    }
}
