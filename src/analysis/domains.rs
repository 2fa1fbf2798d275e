//! Source domain extraction.
//!
//! Domains are derived from source URLs: the hostname with a leading `www.`
//! and a trailing `.com` removed. Only `.com` is stripped; other suffixes
//! such as `.org` or `.co.uk` are kept as-is.

use crate::error::{AggregationError, Result};
use crate::models::Claim;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// What to do when a source URL cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicy {
    /// Fail the whole aggregation.
    #[default]
    Abort,
    /// Leave the source out and report it in [`DomainAggregate::skipped`].
    Skip,
}

/// Result of aggregating domains under an explicit [`UrlPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainAggregate {
    /// Unique domains in first-seen order.
    pub domains: Vec<String>,
    /// URLs that failed to parse under [`UrlPolicy::Skip`].
    pub skipped: Vec<String>,
}

fn host_of(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|e| AggregationError::MalformedUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    // fully qualified hosts end in a root dot
    parsed
        .host_str()
        .map(|host| host.trim_end_matches('.'))
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AggregationError::MalformedUrl {
            url: raw.to_string(),
            reason: "URL has no host".to_string(),
        })
}

/// Hostname with a leading `www.` removed.
pub fn display_host(raw: &str) -> Result<String> {
    let host = host_of(raw)?;
    Ok(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Normalized domain of a URL: no leading `www.`, no trailing `.com`.
pub fn normalize_domain(raw: &str) -> Result<String> {
    let host = display_host(raw)?;
    Ok(host.strip_suffix(".com").unwrap_or(&host).to_string())
}

/// Unique domains cited across all claims, in first-seen order.
///
/// Fails on the first source URL that cannot be parsed.
pub fn aggregate_domains(claims: &[Claim]) -> Result<Vec<String>> {
    aggregate_domains_with(claims, UrlPolicy::Abort).map(|agg| agg.domains)
}

/// Unique domains cited across all claims under the given policy.
pub fn aggregate_domains_with(claims: &[Claim], policy: UrlPolicy) -> Result<DomainAggregate> {
    let mut aggregate = DomainAggregate::default();

    for source in claims.iter().flat_map(|c| &c.sources) {
        match normalize_domain(&source.url) {
            Ok(domain) => {
                if !aggregate.domains.contains(&domain) {
                    aggregate.domains.push(domain);
                }
            }
            Err(e) => match policy {
                UrlPolicy::Abort => return Err(e),
                UrlPolicy::Skip => {
                    warn!("Skipping source: {}", e);
                    aggregate.skipped.push(source.url.clone());
                }
            },
        }
    }

    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    fn claim_citing(urls: &[&str]) -> Claim {
        Claim::new("claim", "True")
            .with_sources(urls.iter().map(|u| Source::new(*u, 1)).collect())
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("https://www.example.com/a").unwrap(), "example");
        assert_eq!(normalize_domain("https://example.com/b?q=1").unwrap(), "example");
        assert_eq!(normalize_domain("http://news.bbc.co.uk/x").unwrap(), "news.bbc.co.uk");
        assert_eq!(normalize_domain("https://www.who.int/news").unwrap(), "who.int");
        assert_eq!(normalize_domain("https://WWW.Reuters.COM").unwrap(), "reuters");
    }

    #[test]
    fn test_only_edges_are_stripped() {
        assert_eq!(
            normalize_domain("https://api.www.example.com").unwrap(),
            "api.www.example"
        );
        assert_eq!(
            normalize_domain("https://example.com.au").unwrap(),
            "example.com.au"
        );
    }

    #[test]
    fn test_display_host_keeps_tld() {
        assert_eq!(display_host("https://www.nytimes.com/2024").unwrap(), "nytimes.com");
    }

    #[test]
    fn test_root_dot_is_ignored() {
        assert_eq!(normalize_domain("https://example.com./x").unwrap(), "example");
        assert_eq!(normalize_domain("https://www.example.com./y").unwrap(), "example");
        assert_eq!(display_host("https://www.nytimes.com./a").unwrap(), "nytimes.com");

        let claims = vec![claim_citing(&["https://example.com./x", "https://example.com/y"])];
        assert_eq!(aggregate_domains(&claims).unwrap(), vec!["example"]);
    }

    #[test]
    fn test_aggregate_deduplicates_in_first_seen_order() {
        let claims = vec![
            claim_citing(&["https://www.example.com/a", "https://nature.com/x"]),
            claim_citing(&[]),
            claim_citing(&["https://example.com/b", "https://www.cdc.gov/y"]),
        ];

        let domains = aggregate_domains(&claims).unwrap();
        assert_eq!(domains, vec!["example", "nature", "cdc.gov"]);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_domains(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_url_aborts() {
        let claims = vec![claim_citing(&["https://example.com", "not a url"])];
        let err = aggregate_domains(&claims).unwrap_err();
        assert!(matches!(
            err,
            AggregationError::MalformedUrl { ref url, .. } if url == "not a url"
        ));
    }

    #[test]
    fn test_url_without_host_is_malformed() {
        assert!(normalize_domain("mailto:desk@example.com").is_err());
    }

    #[test]
    fn test_skip_policy_reports_skipped_urls() {
        let claims = vec![
            claim_citing(&["::garbage::", "https://www.example.com"]),
            claim_citing(&["https://example.com/other", "also bad"]),
        ];

        let aggregate = aggregate_domains_with(&claims, UrlPolicy::Skip).unwrap();
        assert_eq!(aggregate.domains, vec!["example"]);
        assert_eq!(aggregate.skipped, vec!["::garbage::", "also bad"]);
    }
}
