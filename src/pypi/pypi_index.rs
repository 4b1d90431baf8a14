use super::IndexConfig;
use super::wire::{ProjectDocument, ReleaseDocument};
use crate::Result;
use crate::names::NameRegistry;
use crate::pairs::by_two;
use crate::releases::{FileDescriptor, ReleaseMetadata, ReleaseRecord, ReleaseSource, Releases};
use core::iter;
use ohno::{IntoAppError, app_err, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::vec;
use url::Url;

const LOG_TARGET: &str = "      pypi";

/// A package index reached over the PyPI JSON API.
#[derive(Debug, Clone)]
pub struct PypiIndex {
    client: Client,
    base_url: Url,
}

impl PypiIndex {
    /// Creates an index client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be created
    pub fn new(config: &IndexConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
        })
    }

    /// The API root this index talks to
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| app_err!("'{}' cannot be used as a base URL", self.base_url))?;
            let _ = path.pop_if_empty().extend(segments).push("json");
        }

        Ok(url)
    }

    /// Fetches and decodes a JSON document. A 404 yields `None`.
    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<Option<T>> {
        log::debug!(target: LOG_TARGET, "Querying {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .into_app_err_with(|| format!("could not reach {url}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::debug!(target: LOG_TARGET, "{url} was not found");
            return Ok(None);
        }

        if !status.is_success() {
            bail!("could not query {url}: HTTP {status}");
        }

        let doc = response
            .json::<T>()
            .into_app_err_with(|| format!("could not decode the response from {url}"))?;

        Ok(Some(doc))
    }

    fn project(&self, package: &str) -> Result<Option<ProjectDocument>> {
        let url = self.endpoint(&[package])?;
        self.get_json(&url)
    }

    fn release(&self, package: &str, version: &str) -> Result<ReleaseDocument> {
        let url = self.endpoint(&[package, version])?;
        self.get_json(&url)?
            .ok_or_else(|| app_err!("release {version} of '{package}' is listed, but {url} was not found"))
    }
}

impl NameRegistry for PypiIndex {
    fn canonical_name(&self, name: &str) -> Option<String> {
        match self.project(name) {
            Ok(project) => project.map(|p| p.info.name),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Could not look up the registered name of '{name}': {e}");
                None
            }
        }
    }
}

impl ReleaseSource for PypiIndex {
    fn release_info(&self, package: &str) -> Result<Releases<'_>> {
        let Some(project) = self.project(package)? else {
            log::info!(target: LOG_TARGET, "Package '{package}' does not exist on {}", self.base_url);
            return Ok(Box::new(iter::empty()));
        };

        let versions: Vec<String> = project.releases.into_keys().collect();
        log::debug!(target: LOG_TARGET, "Package '{package}' has {} releases", versions.len());

        let replies = IndexReplies {
            index: self,
            package: package.to_string(),
            versions: versions.into_iter(),
            pending: None,
        };

        Ok(Box::new(by_two(replies).map(|(files, metadata)| assemble(files, metadata))))
    }
}

/// One half of the index's answer about a release.
#[derive(Debug)]
enum IndexReply {
    Files(Vec<FileDescriptor>),
    Metadata(ReleaseMetadata),
}

/// Yields two replies per version, the file list and then the release data.
///
/// A version is fetched when its file list is pulled. A failed fetch takes the file list slot
/// and is still followed by release data, so replies stay paired.
struct IndexReplies<'a> {
    index: &'a PypiIndex,
    package: String,
    versions: vec::IntoIter<String>,
    pending: Option<IndexReply>,
}

impl Iterator for IndexReplies<'_> {
    type Item = Result<IndexReply>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(reply) = self.pending.take() {
            return Some(Ok(reply));
        }

        let version = self.versions.next()?;
        match self.index.release(&self.package, &version) {
            Ok(doc) => {
                self.pending = Some(IndexReply::Metadata(doc.info.into()));
                Some(Ok(IndexReply::Files(doc.urls.into_iter().map(FileDescriptor::from).collect())))
            }
            Err(e) => {
                self.pending = Some(IndexReply::Metadata(ReleaseMetadata::new(version)));
                Some(Err(e))
            }
        }
    }
}

fn assemble(files: Result<IndexReply>, metadata: Result<IndexReply>) -> Result<ReleaseRecord> {
    match (files?, metadata?) {
        (IndexReply::Files(files), IndexReply::Metadata(metadata)) => Ok(ReleaseRecord::new(files, metadata)),
        _ => Err(app_err!("index replies arrived out of order")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn index(base_url: &str) -> PypiIndex {
        PypiIndex::new(&IndexConfig::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(PypiIndex::new(&IndexConfig::with_base_url("file:///tmp/pypi")).is_err());
    }

    #[test]
    fn test_endpoint_for_project() {
        let index = index("https://pypi.org/pypi");
        let url = index.endpoint(&["Django"]).unwrap();

        assert_eq!(url.as_str(), "https://pypi.org/pypi/Django/json");
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let index = index("https://pypi.org/pypi/");
        let url = index.endpoint(&["Django", "1.0"]).unwrap();

        assert_eq!(url.as_str(), "https://pypi.org/pypi/Django/1.0/json");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let index = index("https://pypi.org/pypi");
        let url = index.endpoint(&["fake package", "1.0/../2.0"]).unwrap();

        assert_eq!(url.as_str(), "https://pypi.org/pypi/fake%20package/1.0%2F..%2F2.0/json");
    }

    #[test]
    fn test_assemble_pair() {
        let date = NaiveDate::from_ymd_opt(2016, 10, 13).unwrap();
        let files = Ok(IndexReply::Files(vec![FileDescriptor::new("a", 1, date)]));
        let metadata = Ok(IndexReply::Metadata(ReleaseMetadata::new("1.0")));

        let record = assemble(files, metadata).unwrap();

        assert_eq!(record.version(), "1.0");
        assert_eq!(record.files().len(), 1);
    }

    #[test]
    fn test_assemble_propagates_fetch_error() {
        let files = Err(app_err!("HTTP 503"));
        let metadata = Ok(IndexReply::Metadata(ReleaseMetadata::new("1.0")));

        let err = assemble(files, metadata).unwrap_err();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_assemble_rejects_swapped_replies() {
        let files = Ok(IndexReply::Metadata(ReleaseMetadata::new("1.0")));
        let metadata = Ok(IndexReply::Files(Vec::new()));

        assert!(assemble(files, metadata).is_err());
    }
}
