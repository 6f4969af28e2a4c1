mod load;
mod meta;
mod write;

/// Filesystem access for line-range edits.
///
/// All operations are synchronous and scoped to a single file.
pub struct LinecutFS;
