/// Parser for the `/Get-WimInfo` text report.
///
/// The report is localised, so every field is recognised by a small set of
/// labels (English and Korean DISM builds). A typical block looks like:
///
/// ```text
/// Index : 1
/// Name : Windows 11 Pro
/// Description : Windows 11 Pro
/// Version : 10.0.22631
/// ```
///
/// Only the first image (index 1) is read. Parsing never fails: whatever
/// cannot be found stays at [`UNKNOWN`](crate::model::UNKNOWN).
use crate::model::ImageInfo;
use compact_str::CompactString;

const INDEX_LABELS: &[&str] = &["Index", "인덱스"];
const NAME_LABELS: &[&str] = &["Name", "이름"];
const VERSION_LABELS: &[&str] = &["Version", "버전"];

/// Index of the image whose metadata is reported.
const FIRST_INDEX: &str = "1";

/// Extract edition name, version and build of image 1 from `output`.
pub fn parse_wim_info(output: &str) -> ImageInfo {
    let mut info = ImageInfo::default();

    let lines: Vec<&str> = output.lines().collect();
    let Some(start) = lines
        .iter()
        .position(|line| field_value(line, INDEX_LABELS) == Some(FIRST_INDEX))
    else {
        return info;
    };

    let mut name_found = false;
    for line in &lines[start..] {
        if !name_found {
            if let Some(name) = field_value(line, NAME_LABELS).filter(|v| !v.is_empty()) {
                info.name = CompactString::new(name);
                name_found = true;
                continue;
            }
        }
        if let Some(raw) = field_value(line, VERSION_LABELS) {
            if let Some((version, build)) = split_version(raw) {
                info.version = version;
                info.build = build;
            }
            // The first version line ends the block, usable or not.
            break;
        }
    }

    info
}

/// Return the trimmed value of a `Label : value` line if the label matches.
fn field_value<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let line = line.trim();
    labels.iter().find_map(|label| {
        let rest = line.strip_prefix(label)?;
        let value = rest.trim_start().strip_prefix(':')?;
        Some(value.trim())
    })
}

/// `"10.0.22631.1.0"` → `("10.0", "22631")`. Needs at least three parts.
fn split_version(raw: &str) -> Option<(CompactString, CompactString)> {
    let parts: Vec<&str> = raw.split('.').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }
    let version = CompactString::new(format!("{}.{}", parts[0], parts[1]));
    Some((version, CompactString::new(parts[2])))
}
