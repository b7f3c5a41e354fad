//! Renderer-identifier value object.
//!
//! A renderer name is either a plain template path (`simple_page.html.jinja2`)
//! or an asset specification qualified by a package namespace
//! (`shop:widgets/cart.html.jinja2`). Packages let several template trees
//! share one registry without name collisions.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A parsed renderer identifier: optional package plus relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    package: Option<String>,
    path: String,
}

impl AssetSpec {
    /// Parse a renderer name.
    ///
    /// Accepts `path` or `package:path`. Empty paths, empty packages and more
    /// than one `:` are rejected.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidAssetSpec {
            spec: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("empty renderer name"));
        }

        let mut parts = raw.splitn(3, ':');
        let first = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Ok(Self {
                package: None,
                path: first.to_string(),
            }),
            (Some(_), Some(_)) => Err(invalid("more than one ':'")),
            (Some(path), None) => {
                if first.is_empty() {
                    return Err(invalid("empty package before ':'"));
                }
                if path.is_empty() {
                    return Err(invalid("empty path after ':'"));
                }
                Ok(Self {
                    package: Some(first.to_string()),
                    path: path.to_string(),
                })
            }
        }
    }

    /// The package named in the spec itself, if any.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// The relative template path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The template-name extension used for renderer lookup (`jinja2` for
    /// `simple_page.html.jinja2`).
    pub fn extension(&self) -> Option<&str> {
        let (_, ext) = self.path.rsplit_once('.')?;
        if ext.is_empty() { None } else { Some(ext) }
    }

    /// The engine-facing template name.
    ///
    /// The effective package is the first of: the spec's own package, the
    /// caller-supplied `package`, the registry's `default_package`. The
    /// default package names the loader root and is never prefixed; any
    /// other package becomes a `package/` path prefix.
    pub fn qualified(&self, package: Option<&str>, default_package: Option<&str>) -> String {
        let pkg = self.package.as_deref().or(package).or(default_package);
        match pkg {
            Some(p) if default_package != Some(p) => format!("{}/{}", p, self.path),
            _ => self.path.clone(),
        }
    }
}

impl FromStr for AssetSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AssetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(pkg) => write!(f, "{}:{}", pkg, self.path),
            None => f.write_str(&self.path),
        }
    }
}
