use std::fmt;

use roxmltree::{Document, Node};
use thiserror::Error;

/// Groups outside these prefixes are ignored entirely.
pub const VENDOR_PREFIXES: &[&str] = &["org.mule", "com.mulesoft"];

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed manifest: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// A resolved `groupId:artifactId:version` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gav {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Gav {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

pub fn is_vendor(group: &str) -> bool {
    VENDOR_PREFIXES
        .iter()
        .any(|prefix| group.starts_with(prefix))
}

/// The vendor-filtered view of one `pom.xml`.
#[derive(Debug, Clone)]
pub struct Pom {
    pub identity: Option<Gav>,
    pub dependencies: Vec<Gav>,
}

impl Pom {
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let doc = Document::parse(text)?;
        let root = doc.root_element();
        Ok(Self {
            identity: extract_identity(root),
            dependencies: extract_dependencies(root),
        })
    }
}

/// Reads the project's own coordinate, falling back to the `<parent>` block
/// for groupId and version when the project omits them. Returns `None` for
/// non-vendor groups before completeness is even considered, so a manifest
/// with a foreign group never becomes a node.
pub fn extract_identity(root: Node<'_, '_>) -> Option<Gav> {
    let mut group = child_text(root, "groupId");
    let artifact = child_text(root, "artifactId");
    let mut version = child_text(root, "version");
    if let Some(parent) = child(root, "parent") {
        group = group.or_else(|| child_text(parent, "groupId"));
        version = version.or_else(|| child_text(parent, "version"));
    }
    let group = group.filter(|g| is_vendor(g))?;
    Some(Gav {
        group,
        artifact: artifact?,
        version: version?,
    })
}

/// Returns declared dependencies in document order, keeping only entries
/// with a vendor group and all three fields. Deduplication is left to the
/// graph layer.
pub fn extract_dependencies(root: Node<'_, '_>) -> Vec<Gav> {
    let Some(container) = child(root, "dependencies") else {
        return Vec::new();
    };
    container
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "dependency")
        .filter_map(|dep| {
            let group = child_text(dep, "groupId")?;
            if !is_vendor(&group) {
                return None;
            }
            let artifact = child_text(dep, "artifactId")?;
            let version = child_text(dep, "version")?;
            Some(Gav {
                group,
                artifact,
                version,
            })
        })
        .collect()
}

// Elements are matched on local name so both namespaced POMs and the common
// namespace-free ones resolve the same way.
fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == tag)
}

fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child(node, tag)
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
