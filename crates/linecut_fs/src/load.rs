use std::io;
use std::path::Path;

use anyhow::Result;
use linecut_domain::{Document, Error};

impl crate::LinecutFS {
    /// Reads a whole text file into a [`Document`].
    ///
    /// Line terminators are preserved, so writing the document back without
    /// changes reproduces the file exactly.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if `path` does not exist
    /// - [`Error::Read`] if the file cannot be read or is not valid UTF-8
    /// - [`Error::BinaryFileNotSupported`] if the content looks binary
    pub fn load_document<T: AsRef<Path>>(path: T) -> Result<Document> {
        let path_ref = path.as_ref();

        if !Self::exists(path_ref) {
            return Err(Error::NotFound { path: path_ref.to_path_buf() }.into());
        }

        let bytes = std::fs::read(path_ref)
            .map_err(|source| Error::Read { path: path_ref.to_path_buf(), source })?;

        let (is_text, file_type) = Self::is_binary(&bytes);
        if !is_text {
            return Err(
                Error::BinaryFileNotSupported { path: path_ref.to_path_buf(), kind: file_type }
                    .into(),
            );
        }

        let content = String::from_utf8(bytes).map_err(|e| Error::Read {
            path: path_ref.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        let document = Document::parse(&content);
        tracing::debug!(path = %path_ref.display(), lines = document.len(), "Loaded document");

        Ok(document)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use linecut_domain::Error;
    use pretty_assertions::assert_eq;

    use crate::LinecutFS;

    // Helper to create a temporary file with test content
    fn create_test_file(content: &[u8]) -> Result<tempfile::NamedTempFile> {
        let file = tempfile::NamedTempFile::new()?;
        std::fs::write(file.path(), content)?;
        Ok(file)
    }

    #[test]
    fn test_load_document() -> Result<()> {
        let file = create_test_file(b"Line 1\nLine 2\nLine 3\nLine 4\nLine 5\n")?;

        let actual = LinecutFS::load_document(file.path())?;

        assert_eq!(actual.len(), 5);
        assert_eq!(actual.line(1)?, "Line 1\n");
        assert_eq!(actual.line(5)?, "Line 5\n");
        Ok(())
    }

    #[test]
    fn test_load_preserves_crlf_and_missing_final_newline() -> Result<()> {
        let content = "first\r\nsecond\r\nthird";
        let file = create_test_file(content.as_bytes())?;

        let actual = LinecutFS::load_document(file.path())?;

        assert_eq!(actual.len(), 3);
        assert_eq!(actual.to_content(), content);
        Ok(())
    }

    #[test]
    fn test_load_utf8_multi_byte() -> Result<()> {
        let file = create_test_file("Hello world!\nこんにちは 世界!\nПривет мир!\n".as_bytes())?;

        let actual = LinecutFS::load_document(file.path())?;

        assert_eq!(actual.line(2)?, "こんにちは 世界!\n");
        Ok(())
    }

    #[test]
    fn test_load_empty_file() -> Result<()> {
        let file = create_test_file(b"")?;
        let actual = LinecutFS::load_document(file.path())?;
        assert!(actual.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let actual = LinecutFS::load_document(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(actual.downcast_ref::<Error>(), Some(Error::NotFound { .. })));
        Ok(())
    }

    #[test]
    fn test_load_directory_is_read_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let actual = LinecutFS::load_document(dir.path()).unwrap_err();
        assert!(matches!(actual.downcast_ref::<Error>(), Some(Error::Read { .. })));
        Ok(())
    }

    #[test]
    fn test_load_invalid_utf8() -> Result<()> {
        let file = create_test_file(&[b'o', b'k', b'\n', 0xff, 0xfe, 0xfd, b'\n'])?;
        let actual = LinecutFS::load_document(file.path()).unwrap_err();
        assert!(matches!(actual.downcast_ref::<Error>(), Some(Error::Read { .. })));
        Ok(())
    }

    #[test]
    fn test_load_binary_file() -> Result<()> {
        let file = create_test_file(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0])?;
        let actual = LinecutFS::load_document(file.path()).unwrap_err();
        assert!(matches!(
            actual.downcast_ref::<Error>(),
            Some(Error::BinaryFileNotSupported { .. })
        ));
        Ok(())
    }
}
