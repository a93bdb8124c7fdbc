//!
//! The report discovery on the results index pages.
//!


pub mod target;

use std::collections::HashSet;
use std::path::Path;

use spec_analyzer::corpus::index::Index;

use self::target::Target;

lazy_static::lazy_static! {
    /// A hyperlink reference with its quoted value.
    static ref HREF: regex::Regex =
        regex::Regex::new(r#"(?i)href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Always valid");
}

///
/// Lists the files linked from an index page that are worth fetching.
///
/// A link is kept if its extension is one of the index link extensions,
/// compared case-insensitively. Each file is cached in `directory` under
/// the last segment of its link. Links resolving to an already listed cache
/// path are dropped.
///
pub fn discover(index: &Index, directory: &Path, page: &str) -> Vec<Target> {
    let extensions: Vec<String> = index
        .link_extensions
        .iter()
        .map(|extension| format!(".{}", extension.to_lowercase()))
        .collect();

    let mut paths = HashSet::new();
    let mut targets = Vec::new();
    for captures in HREF.captures_iter(page) {
        let Some(link) = captures.get(1).or_else(|| captures.get(2)) else {
            continue;
        };
        let link = link.as_str().trim();
        let lowercase = link.to_lowercase();
        if !extensions
            .iter()
            .any(|extension| lowercase.ends_with(extension.as_str()))
        {
            continue;
        }
        let Some(file_name) = link.rsplit('/').next().filter(|name| !name.is_empty()) else {
            continue;
        };

        let path = directory.join(file_name);
        if !paths.insert(path.clone()) {
            continue;
        }
        targets.push(Target::new(format!("{}{}", index.link_prefix, link), path));
    }
    targets
}
