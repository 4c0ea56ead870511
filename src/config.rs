//! Fixed settings for a collection run.
//!
//! The matched suffix and the output location are deliberately not
//! user-configurable; everything that shapes the output lives here.

/// Name of the bundle written into the traversal root.
pub const OUTPUT_FILE_NAME: &str = "copy-code.txt";

/// File name suffix a traversal entry must carry to be collected.
pub const MATCHED_SUFFIX: &str = ".tsx";

/// Width of the `=` and `-` rules framing each entry.
pub const RULE_WIDTH: usize = 80;

/// Returns true if `file_name` ends with [`MATCHED_SUFFIX`].
///
/// This is a plain suffix check on the name, so a file literally called
/// `.tsx` matches while `app.TSX` does not.
pub fn is_matched_name(file_name: &str) -> bool {
    file_name.ends_with(MATCHED_SUFFIX)
}
