use std::path::Path;

use infer::MatcherType;

/// Bytes inspected when sniffing for a binary format.
const SNIFF_LEN: usize = 8192;

impl crate::LinecutFS {
    pub fn exists<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().exists()
    }

    /// Sniffs the start of `content` for a known binary format.
    ///
    /// Returns `(is_text, file_type)`, where `file_type` is the detected MIME
    /// type or `"text/plain"` when nothing matched.
    pub fn is_binary(content: &[u8]) -> (bool, String) {
        let head = &content[..content.len().min(SNIFF_LEN)];
        match infer::get(head) {
            Some(kind) => (kind.matcher_type() == MatcherType::Text, kind.mime_type().to_string()),
            None => (true, "text/plain".to_string()),
        }
    }
}
