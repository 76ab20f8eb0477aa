// Fetching the raw spreadsheets from the public bucket.
//
// The bucket is read anonymously over HTTPS, either by direct object URL or
// through the ListObjectsV2 listing. There are no retries: a failed download
// is reported and the file is simply absent afterwards.

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::blocking::Client;

use crate::etl::*;

pub fn http_client() -> EtlResult<Client> {
    Client::builder().build().context(HttpSnafu {
        url: "(client setup)".to_string(),
    })
}

pub fn object_url(config: &EtlConfig, key: &str) -> String {
    format!("{}/{}", config.bucket_url(), key)
}

fn send(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> EtlResult<reqwest::blocking::Response> {
    debug!("GET {} {:?}", url, query);
    let resp = client
        .get(url)
        .query(query)
        .send()
        .context(HttpSnafu { url })?;
    let status = resp.status();
    ensure!(
        status.is_success(),
        HttpStatusSnafu {
            status: status.as_u16(),
            url
        }
    );
    Ok(resp)
}

/// Downloads one object of the bucket to the given file. Returns the number of bytes written.
pub fn download_object(
    client: &Client,
    config: &EtlConfig,
    key: &str,
    dest: &Path,
) -> EtlResult<u64> {
    let url = object_url(config, key);
    let body = send(client, &url, &[])?
        .bytes()
        .context(HttpSnafu { url: url.clone() })?;
    fs::write(dest, &body).context(WritingFileSnafu {
        path: dest.display().to_string(),
    })?;
    Ok(body.len() as u64)
}

/// Downloads the spreadsheet of every configured year into the raw data directory.
///
/// Returns the files that were downloaded. A failed download does not stop
/// the other ones.
pub fn download_direct(config: &EtlConfig) -> EtlResult<BTreeMap<ElectionYear, PathBuf>> {
    fs::create_dir_all(&config.raw_data_dir).context(CreatingDirSnafu {
        path: config.raw_data_dir.display().to_string(),
    })?;
    let client = http_client()?;
    info!(
        "Downloading {} election files from {}",
        config.years.len(),
        config.bucket_url()
    );

    let mut downloaded: BTreeMap<ElectionYear, PathBuf> = BTreeMap::new();
    for year in config.years.iter() {
        let file_name = year.file_name();
        let local_path = config.raw_file_path(*year);
        info!("Downloading {}...", file_name);
        match download_object(&client, config, &file_name, &local_path) {
            Ok(size) => {
                info!(
                    "Downloaded: {} ({:.1} KB)",
                    file_name,
                    size as f64 / 1024.0
                );
                downloaded.insert(*year, local_path);
            }
            Err(e) => {
                error!("Failed to download {}: {}", file_name, describe_error(&e));
            }
        }
    }
    if downloaded.is_empty() {
        warn!("No files were downloaded successfully");
    } else {
        info!("Successfully downloaded {} files", downloaded.len());
    }
    Ok(downloaded)
}

/// One page of a ListObjectsV2 answer.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ListingPage {
    pub keys: Vec<String>,
    /// Set only if the listing is truncated.
    pub next_token: Option<String>,
}

pub fn parse_listing(xml: &str) -> EtlResult<ListingPage> {
    let mut reader = Reader::from_str(xml);
    let mut page = ListingPage::default();
    let mut truncated = false;
    let mut text = String::new();
    loop {
        match reader.read_event().context(ParsingXmlSnafu {})? {
            Event::Start(_) => text.clear(),
            Event::Text(t) => text.push_str(&t.xml_content().context(DecodingXmlSnafu {})?),
            Event::CData(t) => text.push_str(&t.xml_content().context(DecodingXmlSnafu {})?),
            Event::GeneralRef(r) => {
                let raw = r.xml_content().context(DecodingXmlSnafu {})?;
                push_reference(&mut text, &raw);
            }
            Event::End(e) => {
                let value = std::mem::take(&mut text);
                match e.name().as_ref() {
                    b"Key" => page.keys.push(value),
                    b"NextContinuationToken" => page.next_token = Some(value),
                    b"IsTruncated" => truncated = value.trim() == "true",
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if !truncated {
        page.next_token = None;
    }
    Ok(page)
}

fn push_reference(text: &mut String, raw: &str) {
    let code = match raw.strip_prefix("#x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => raw.strip_prefix('#').and_then(|d| d.parse::<u32>().ok()),
    };
    if let Some(c) = code.and_then(std::char::from_u32) {
        text.push(c);
    } else if let Some(entity) = resolve_xml_entity(raw) {
        text.push_str(entity);
    } else {
        text.push('&');
        text.push_str(raw);
        text.push(';');
    }
}

/// Lists all the keys of the bucket, following the continuation tokens.
pub fn list_bucket(client: &Client, config: &EtlConfig) -> EtlResult<Vec<String>> {
    let url = format!("{}/", config.bucket_url());
    let mut keys: Vec<String> = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let mut query: Vec<(&str, &str)> = vec![("list-type", "2")];
        if let Some(t) = token.as_deref() {
            query.push(("continuation-token", t));
        }
        let body = send(client, &url, &query)?
            .text()
            .context(HttpSnafu { url: url.clone() })?;
        let page = parse_listing(&body)?;
        debug!(
            "list_bucket: {} keys, next: {:?}",
            page.keys.len(),
            page.next_token
        );
        keys.extend(page.keys);
        match page.next_token {
            Some(t) => token = Some(t),
            None => break,
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>sa-political-prediction</Name>
  <Prefix></Prefix>
  <KeyCount>3</KeyCount>
  <MaxKeys>1000</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>1ueGcxLPRx1Tr/XYExHnhbYLgveDs2J/wm36Hy4vbOwM=</NextContinuationToken>
  <Contents>
    <Key>National_2009.xls</Key>
    <LastModified>2025-01-10T09:12:44.000Z</LastModified>
    <Size>118272</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>notes/R&amp;D &#x41;.txt</Key>
    <Size>12</Size>
  </Contents>
  <Contents>
    <Key>National_2024.xls</Key>
    <Size>93184</Size>
  </Contents>
</ListBucketResult>"#;

    #[test]
    fn listing() {
        let page = parse_listing(LISTING).unwrap();
        assert_eq!(
            page.keys,
            vec!["National_2009.xls", "notes/R&D A.txt", "National_2024.xls"]
        );
        assert_eq!(
            page.next_token.as_deref(),
            Some("1ueGcxLPRx1Tr/XYExHnhbYLgveDs2J/wm36Hy4vbOwM=")
        );
    }

    #[test]
    fn last_page() {
        let xml = LISTING.replace(
            "<IsTruncated>true</IsTruncated>",
            "<IsTruncated>false</IsTruncated>",
        );
        let page = parse_listing(&xml).unwrap();
        assert_eq!(page.keys.len(), 3);
        assert_eq!(page.next_token, None);

        let empty =
            parse_listing("<ListBucketResult><KeyCount>0</KeyCount></ListBucketResult>").unwrap();
        assert_eq!(empty, ListingPage::default());
    }

    #[test]
    fn malformed_listing() {
        assert!(parse_listing("<ListBucketResult><Key>a</Name>").is_err());
    }

    #[test]
    fn urls() {
        let config = EtlConfig {
            bucket: "results".to_string(),
            region: "af-south-1".to_string(),
            ..EtlConfig::default()
        };
        assert_eq!(
            object_url(&config, "National_2019.xls"),
            "https://results.s3.af-south-1.amazonaws.com/National_2019.xls"
        );
    }
}
