use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::graph::DepGraph;
use crate::manifest::{ManifestError, Pom};

const MANIFEST_NAME: &str = "pom.xml";
const ARCHIVE_EXTENSION: &str = "jar";
const EMBEDDED_METADATA_SEGMENT: &str = "META-INF/maven/";

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanStats {
    /// Manifests that yielded a vendor identity and entered the graph.
    pub accepted: usize,
    pub poms_visited: usize,
    pub jars_visited: usize,
}

/// Two-pass sequential walk of a Maven repository tree. Loose `pom.xml`
/// files first; archives are only opened if the quota is still unmet.
/// Unreadable files, corrupt archives, and malformed manifests are skipped
/// without a log line; the scan is best-effort by design.
#[derive(Debug)]
pub struct Scanner {
    quota: usize,
}

impl Scanner {
    pub fn new(quota: usize) -> Self {
        Self { quota }
    }

    pub fn scan(&self, root: &Path, graph: &mut DepGraph) -> Result<ScanStats> {
        let mut stats = ScanStats::default();
        self.scan_loose_manifests(root, graph, &mut stats);
        if stats.accepted < self.quota {
            self.scan_archives(root, graph, &mut stats);
        }
        Ok(stats)
    }

    fn scan_loose_manifests(&self, root: &Path, graph: &mut DepGraph, stats: &mut ScanStats) {
        for entry in WalkDir::new(root) {
            if stats.accepted >= self.quota {
                break;
            }
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            if !entry.file_type().is_file()
                || entry.file_name().to_str() != Some(MANIFEST_NAME)
            {
                continue;
            }
            stats.poms_visited += 1;
            let text = match fs::read_to_string(entry.path()) {
                Ok(text) => text,
                Err(_) => continue,
            };
            if accept_manifest(&text, graph) {
                stats.accepted += 1;
            }
        }
    }

    fn scan_archives(&self, root: &Path, graph: &mut DepGraph, stats: &mut ScanStats) {
        for entry in WalkDir::new(root) {
            if stats.accepted >= self.quota {
                break;
            }
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            if !entry.file_type().is_file()
                || entry.path().extension().and_then(|ext| ext.to_str())
                    != Some(ARCHIVE_EXTENSION)
            {
                continue;
            }
            stats.jars_visited += 1;
            if let Some(text) = read_embedded_manifest(entry.path()) {
                if accept_manifest(&text, graph) {
                    stats.accepted += 1;
                }
            }
        }
    }
}

/// Parses the manifest text and, on a vendor identity, inserts the node and
/// one edge per declared vendor dependency. Returns whether the manifest
/// counted against the quota.
fn accept_manifest(text: &str, graph: &mut DepGraph) -> bool {
    let pom = match Pom::parse(text) {
        Ok(pom) => pom,
        Err(ManifestError::Xml(_)) => return false,
    };
    let Some(identity) = pom.identity else {
        return false;
    };
    graph.add_node(identity.clone());
    for dep in pom.dependencies {
        graph.add_edge(identity.clone(), dep);
    }
    true
}

/// Reads the first archive entry under `META-INF/maven/` ending in the
/// manifest filename. At most one manifest is read per archive, matching
/// the Maven convention of one embedded descriptor per artifact. Open,
/// read, and decode failures all resolve to `None`.
fn read_embedded_manifest(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut archive = zip::ZipArchive::new(file).ok()?;
    let name = archive
        .file_names()
        .find(|name| name.contains(EMBEDDED_METADATA_SEGMENT) && name.ends_with(MANIFEST_NAME))
        .map(str::to_string)?;
    let mut entry = archive.by_name(&name).ok()?;
    let mut text = String::new();
    entry.read_to_string(&mut text).ok()?;
    Some(text)
}
