use super::{CountOptions, Diagnostics, DownloadReport, TallyError};
use crate::names::{NameRegistry, normalize};
use crate::releases::ReleaseSource;
use regex::Regex;

/// Counts the downloads of every distribution file of `package` that passes the filters in `options`.
///
/// The package name is canonicalized through `index` first. A package with no releases
/// counts as zero downloads.
///
/// # Errors
///
/// Fails if the name is invalid, if the filename pattern doesn't compile, if the index
/// fails while listing releases, or if the total exceeds `u64::MAX`. Index failures are
/// returned as-is.
pub fn count_downloads<I>(index: &I, package: Option<&str>, options: &CountOptions, diagnostics: &dyn Diagnostics) -> Result<u64, TallyError>
where
    I: NameRegistry + ReleaseSource + ?Sized,
{
    tally_downloads(index, package, options, diagnostics).map(|report| report.total())
}

/// Like [`count_downloads`], but returns the files that contributed to the count.
///
/// # Errors
///
/// Same as [`count_downloads`].
pub fn tally_downloads<I>(
    index: &I,
    package: Option<&str>,
    options: &CountOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<DownloadReport, TallyError>
where
    I: NameRegistry + ReleaseSource + ?Sized,
{
    let package = normalize(package, index)?;
    let pattern = options.pattern.as_deref().map(compile_pattern).transpose()?;

    let mut report = DownloadReport::new(package);
    let releases = index.release_info(report.package()).map_err(TallyError::Source)?;

    for record in releases {
        let (files, metadata) = record.map_err(TallyError::Source)?.into_parts();

        if options.version.as_deref().is_some_and(|version| version != metadata.version) {
            continue;
        }

        for file in &files {
            if pattern.as_ref().is_some_and(|pattern| !pattern.is_match(&file.filename)) {
                continue;
            }

            if options.verbose {
                diagnostics.debug(&file.to_string());
            }

            report.record(&metadata.version, file)?;
        }
    }

    Ok(report)
}

fn compile_pattern(pattern: &str) -> Result<Regex, TallyError> {
    Regex::new(pattern).map_err(|source| TallyError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
