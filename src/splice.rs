//! In-place replacement of the owned region in the target document.
//!
//! The target page contains exactly one region delimited by the
//! configured open and close markers. Only that region's interior is
//! rewritten; every byte before the opening marker and after the
//! closing marker is preserved exactly. The rest of the target is
//! never parsed.

use regex::Regex;

use crate::error::{Error, Result};
use crate::parser::Markers;

/// Locates and rewrites the marked region of the target document.
pub struct RegionSplicer {
    region_re: Regex,
    open_marker: String,
}

impl RegionSplicer {
    /// Compile the splicer from a marker table.
    pub fn new(markers: &Markers) -> Self {
        let open = regex::escape(&markers.region_open);
        let close = regex::escape(&markers.region_close);
        Self {
            region_re: Regex::new(&format!(r"(?s)({open})\s*\n(.*?)\n(\s*{close})")).unwrap(),
            open_marker: markers.region_open.clone(),
        }
    }

    /// Replace the region's interior with `fragment`.
    ///
    /// The region must match exactly once: a missing region fails with
    /// [`Error::RegionNotFound`], and multiple candidate regions fail
    /// with [`Error::AmbiguousRegion`] rather than silently taking the
    /// first match.
    pub fn splice(&self, target: &str, fragment: &str) -> Result<String> {
        let mut matches = self.region_re.captures_iter(target);
        let caps = matches
            .next()
            .ok_or_else(|| Error::RegionNotFound(self.open_marker.clone()))?;

        let extra = matches.count();
        if extra > 0 {
            return Err(Error::AmbiguousRegion {
                marker: self.open_marker.clone(),
                count: extra + 1,
            });
        }

        let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);

        let mut result = String::with_capacity(target.len() + fragment.len());
        result.push_str(&target[..whole.start]);
        result.push_str(&caps[1]);
        result.push('\n');
        result.push_str(fragment);
        result.push('\n');
        result.push_str(&caps[3]);
        result.push_str(&target[whole.end..]);

        Ok(result)
    }
}
