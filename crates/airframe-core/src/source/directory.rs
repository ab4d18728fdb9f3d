use crate::error::AirframeError;
use crate::source::DocumentSource;
use std::path::PathBuf;

/// Reads saved articles from `<dir>/<document>.html`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, document: &str) -> PathBuf {
        self.root.join(format!("{document}.html"))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, document: &str) -> Result<String, AirframeError> {
        let path = self.path_for(document);
        std::fs::read_to_string(&path).map_err(|e| AirframeError::DocumentUnavailable {
            document: document.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_saved_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Airbus_A380.html"), "<p>A380</p>").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch("Airbus_A380").unwrap(), "<p>A380</p>");
    }

    #[test]
    fn test_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.fetch("Airbus_A380"),
            Err(AirframeError::DocumentUnavailable { .. })
        ));
    }
}
