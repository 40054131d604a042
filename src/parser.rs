//! Parser for `apt list --upgradable` output

use crate::domain::UpgradablePackage;

/// Marker apt prints in front of the installed version
const UPGRADABLE_MARKER: &str = "[upgradable from";

/// Extracts upgradable packages from the raw output of `apt list --upgradable`
///
/// Only lines containing both a `/` and the `[upgradable from` marker are kept;
/// headers such as `Listing...` and warnings are dropped. Order follows the input.
pub fn extract_upgradable_packages(raw: &str) -> Vec<UpgradablePackage> {
    raw.split('\n')
        .filter(|line| line.contains('/') && line.contains(UPGRADABLE_MARKER))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<UpgradablePackage> {
    let (name, _) = line.split_once('/')?;
    let (_, after_marker) = line.split_once(UPGRADABLE_MARKER)?;
    let transition = after_marker
        .split_once(']')
        .map_or(after_marker, |(inside, _)| inside);

    Some(UpgradablePackage::new(name.trim(), transition.trim()))
}
