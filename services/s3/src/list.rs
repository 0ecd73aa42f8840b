use objsign_core::{Error, Result};
use quick_xml::de;
use serde::Deserialize;

/// One entry of a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    /// Object key.
    pub key: String,
    /// `LastModified` exactly as returned by the service.
    pub last_modified: String,
    /// Object size in bytes.
    pub size: u64,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ListBucketResult {
    contents: Vec<ListObjectsContents>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ListObjectsContents {
    key: String,
    last_modified: String,
    size: u64,
}

/// Parse a `ListBucketResult` document into summaries, keeping the service's order.
pub(crate) fn parse_list_objects(body: &[u8]) -> Result<Vec<ObjectSummary>> {
    let body = std::str::from_utf8(body)
        .map_err(|e| Error::unexpected("list response is not valid utf-8").with_source(e))?;
    let result: ListBucketResult = de::from_str(body)
        .map_err(|e| Error::unexpected("failed to parse list response").with_source(e))?;

    Ok(result
        .contents
        .into_iter()
        .map(|c| ObjectSummary {
            key: c.key,
            last_modified: c.last_modified,
            size: c.size,
        })
        .collect())
}
