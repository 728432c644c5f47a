//! Sitemap discovery

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashSet;

/// Fetch a sitemap and return the page URLs whose path contains `filter`
pub async fn discover(
    client: &reqwest::Client,
    sitemap_url: &str,
    filter: Option<&str>,
) -> Result<Vec<String>> {
    let sitemap_error = |reason: String| Error::Sitemap {
        url: sitemap_url.to_string(),
        reason,
    };

    tracing::info!("Fetching sitemap: {}", sitemap_url);
    let response = client
        .get(sitemap_url)
        .send()
        .await
        .map_err(|e| sitemap_error(e.to_string()))?;

    if !response.status().is_success() {
        return Err(sitemap_error(format!("HTTP {}", response.status())));
    }

    let xml = response
        .text()
        .await
        .map_err(|e| sitemap_error(e.to_string()))?;

    let all_urls = parse_locations(&xml).map_err(sitemap_error)?;
    tracing::info!("Total URLs in sitemap: {}", all_urls.len());

    let filtered = filter_urls(all_urls, filter);
    tracing::info!("Pages after filtering: {}", filtered.len());

    Ok(filtered)
}

/// Collect every `<loc>` value in document order, without duplicates
pub fn parse_locations(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => in_loc = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Ok(Event::Text(e)) if in_loc => {
                let url = e.unescape().map_err(|e| e.to_string())?.trim().to_string();
                if !url.is_empty() && seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
            Ok(Event::CData(e)) if in_loc => {
                let url = String::from_utf8_lossy(&e.into_inner()).trim().to_string();
                if !url.is_empty() && seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {}",
                    reader.error_position(),
                    e
                ))
            }
            _ => {}
        }
    }

    Ok(urls)
}

/// Keep the URLs whose path contains `filter`
pub fn filter_urls(urls: Vec<String>, filter: Option<&str>) -> Vec<String> {
    let Some(filter) = filter else {
        return urls;
    };

    urls.into_iter()
        .filter(|url| url_path(url).contains(filter))
        .collect()
}

/// Path component of a URL, or the whole string if it has no scheme
fn url_path(url: &str) -> &str {
    let Some((_, rest)) = url.split_once("://") else {
        return url;
    };
    let path = match rest.find('/') {
        Some(slash) => &rest[slash..],
        None => "/",
    };
    path.split(['?', '#']).next().unwrap_or(path)
}
