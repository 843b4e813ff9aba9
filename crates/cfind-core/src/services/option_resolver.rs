//! Merging of `baseOptions` and `options` into one invocation string.

/// Merge base and compiler options.
///
/// Present, non-empty parts are joined with a single space, base first. The
/// result is opaque: no trimming, de-duplication or flag parsing happens here.
pub fn merge_options(base_options: Option<&str>, options: Option<&str>) -> String {
    [base_options, options]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
