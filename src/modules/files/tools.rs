use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::modules::utils::logging::{ConsoleSink, LogLevel, LogSink};

/// Small filesystem helpers that report what they did
pub struct FileTools<S = ConsoleSink> {
    sink: S,
}

impl Default for FileTools<ConsoleSink> {
    fn default() -> Self {
        Self::new(ConsoleSink::new("[FileTools] ", false))
    }
}

impl<S: LogSink> FileTools<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Create a folder and its parents unless it is already there
    pub fn create_folder(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        if path.exists() {
            self.sink.emit(
                LogLevel::Info,
                &format!("Folder already exists: {}", path.display()),
            );
            return Ok(());
        }

        if let Err(e) = fs::create_dir_all(path) {
            self.sink.emit(
                LogLevel::Error,
                &format!("Failed to create folder {}: {}", path.display(), e),
            );
            return Err(e);
        }
        self.sink.emit(
            LogLevel::Success,
            &format!("Folder created: {}", path.display()),
        );
        Ok(())
    }

    /// Delete a regular file; returns whether anything was removed
    pub fn delete_file(&self, path: impl AsRef<Path>) -> io::Result<bool> {
        let path = path.as_ref();
        if !path.is_file() {
            self.sink.emit(
                LogLevel::Warning,
                &format!("File not found: {}", path.display()),
            );
            return Ok(false);
        }

        if let Err(e) = fs::remove_file(path) {
            self.sink.emit(
                LogLevel::Error,
                &format!("Failed to delete {}: {}", path.display(), e),
            );
            return Err(e);
        }
        self.sink.emit(
            LogLevel::Success,
            &format!("File deleted: {}", path.display()),
        );
        Ok(true)
    }

    /// Copy content, permissions and modification time.
    ///
    /// A destination that is a directory receives the file under its
    /// original name. Returns the path written.
    pub fn copy_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> io::Result<PathBuf> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        match copy_with_metadata(source, destination) {
            Ok(target) => {
                self.sink.emit(
                    LogLevel::Success,
                    &format!("File copied: {} -> {}", source.display(), target.display()),
                );
                Ok(target)
            }
            Err(e) => {
                self.sink
                    .emit(LogLevel::Error, &format!("Copy failed: {}", e));
                Err(e)
            }
        }
    }

    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    pub fn folder_exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_dir()
    }
}

fn copy_with_metadata(source: &Path, destination: &Path) -> io::Result<PathBuf> {
    let target = if destination.is_dir() {
        let name = source.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", source.display()),
            )
        })?;
        destination.join(name)
    } else {
        destination.to_path_buf()
    };

    if is_same_file(source, &target)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }

    // fs::copy carries the permission bits over
    fs::copy(source, &target)?;

    let modified = fs::metadata(source)?.modified()?;
    File::options().write(true).open(&target)?.set_modified(modified)?;

    Ok(target)
}

/// A target that does not exist yet is never the source
fn is_same_file(source: &Path, target: &Path) -> io::Result<bool> {
    let target = match fs::canonicalize(target) {
        Ok(target) => target,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    Ok(fs::canonicalize(source)? == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::utils::logging::MemorySink;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn setup_test_tools() -> (FileTools<MemorySink>, TempDir) {
        (FileTools::new(MemorySink::new()), TempDir::new().unwrap())
    }

    #[test]
    fn test_create_folder() {
        let (tools, dir) = setup_test_tools();
        let nested = dir.path().join("a").join("b");

        tools.create_folder(&nested).unwrap();
        assert!(tools.folder_exists(&nested));
        assert_eq!(tools.sink().last().unwrap().0, LogLevel::Success);

        tools.create_folder(&nested).unwrap();
        let (level, message) = tools.sink().last().unwrap();
        assert_eq!(level, LogLevel::Info);
        assert!(message.starts_with("Folder already exists"));
    }

    #[test]
    fn test_delete_file() {
        let (tools, dir) = setup_test_tools();
        let file = dir.path().join("note.txt");
        fs::write(&file, "hello").unwrap();

        assert!(tools.delete_file(&file).unwrap());
        assert!(!tools.file_exists(&file));

        assert!(!tools.delete_file(&file).unwrap());
        assert_eq!(tools.sink().last().unwrap().0, LogLevel::Warning);
    }

    #[test]
    fn test_delete_file_ignores_directories() {
        let (tools, dir) = setup_test_tools();
        assert!(!tools.delete_file(dir.path()).unwrap());
        assert!(tools.folder_exists(dir.path()));
    }

    #[test]
    fn test_copy_file_keeps_content_and_mtime() {
        let (tools, dir) = setup_test_tools();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target.txt");
        fs::write(&source, "payload").unwrap();

        let past = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let written = tools.copy_file(&source, &target).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "payload");
        assert_eq!(
            fs::metadata(&target).unwrap().modified().unwrap(),
            fs::metadata(&source).unwrap().modified().unwrap()
        );
    }

    #[test]
    fn test_copy_into_directory() {
        let (tools, dir) = setup_test_tools();
        let source = dir.path().join("source.txt");
        let target_dir = dir.path().join("backup");
        fs::write(&source, "payload").unwrap();
        fs::create_dir(&target_dir).unwrap();

        let written = tools.copy_file(&source, &target_dir).unwrap();
        assert_eq!(written, target_dir.join("source.txt"));
        assert!(tools.file_exists(&written));
    }

    #[test]
    fn test_copy_onto_itself() {
        let (tools, dir) = setup_test_tools();
        let source = dir.path().join("source.txt");
        fs::write(&source, "payload").unwrap();

        let result = tools.copy_file(&source, &source);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
        assert_eq!(tools.sink().last().unwrap().0, LogLevel::Error);
        assert_eq!(fs::read_to_string(&source).unwrap(), "payload");
    }

    #[test]
    fn test_copy_into_own_directory() {
        let (tools, dir) = setup_test_tools();
        let source = dir.path().join("source.txt");
        fs::write(&source, "payload").unwrap();

        assert!(tools.copy_file(&source, dir.path()).is_err());
        let (level, message) = tools.sink().last().unwrap();
        assert_eq!(level, LogLevel::Error);
        assert!(message.contains("same file"));
        assert_eq!(fs::read_to_string(&source).unwrap(), "payload");
    }

    #[test]
    fn test_copy_missing_source() {
        let (tools, dir) = setup_test_tools();
        let result = tools.copy_file(dir.path().join("missing"), dir.path().join("out"));
        assert!(result.is_err());
        assert_eq!(tools.sink().last().unwrap().0, LogLevel::Error);
        assert!(!tools.file_exists(dir.path().join("out")));
    }

    #[test]
    fn test_existence_checks() {
        let (tools, dir) = setup_test_tools();
        let file = dir.path().join("f");
        fs::write(&file, "").unwrap();

        assert!(tools.file_exists(&file));
        assert!(!tools.folder_exists(&file));
        assert!(tools.folder_exists(dir.path()));
        assert!(!tools.file_exists(dir.path()));
    }
}
