//! Path utilities: output naming and source discovery

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{SplitXError, SplitXResult};

/// Extensions offered by the source picker
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv"];

/// Output path for one part: `<dir>/<stem>_<file_label>.<extension>`.
///
/// `dir` defaults to the directory of `source`.
pub fn derive_output_path(
    source: &Path,
    file_label: &str,
    output_dir: Option<&Path>,
    extension: &str,
) -> SplitXResult<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| SplitXError::InvalidPath {
            path: source.display().to_string(),
        })?
        .to_string_lossy();

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let extension = extension.trim_start_matches('.');
    Ok(dir.join(format!("{}_{}.{}", stem, file_label, extension)))
}

/// Whether the path carries one of [`VIDEO_EXTENSIONS`] (case-insensitive)
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Resolve the sources to split.
///
/// A file is returned as-is; a directory is walked (without following
/// symlinks) for video files, sorted by path so runs are repeatable.
pub fn discover_sources(input: &Path, recursive: bool) -> SplitXResult<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(SplitXError::InputFileNotFound {
            path: input.display().to_string(),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut sources = Vec::new();
    for entry in WalkDir::new(input).max_depth(max_depth) {
        let entry = entry.map_err(|e| SplitXError::Io(e.into()))?;
        if entry.file_type().is_file() && is_video_file(entry.path()) {
            debug!(path = %entry.path().display(), "Discovered source video");
            sources.push(entry.into_path());
        }
    }
    sources.sort();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_sits_next_to_source() {
        let path = derive_output_path(Path::new("/videos/holiday.mov"), "Part_One", None, "mp4")
            .unwrap();
        assert_eq!(path, PathBuf::from("/videos/holiday_Part_One.mp4"));
    }

    #[test]
    fn output_path_honours_output_dir_and_dotted_extension() {
        let path = derive_output_path(
            Path::new("/videos/holiday.mov"),
            "Part_Twenty_One",
            Some(Path::new("/out")),
            ".mkv",
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/out/holiday_Part_Twenty_One.mkv"));
    }

    #[test]
    fn relative_source_without_parent() {
        let path = derive_output_path(Path::new("clip.mp4"), "Part_Two", None, "mp4").unwrap();
        assert_eq!(path, PathBuf::from("clip_Part_Two.mp4"));
    }

    #[test]
    fn root_has_no_stem() {
        assert!(derive_output_path(Path::new("/"), "Part_One", None, "mp4").is_err());
    }

    #[test]
    fn recognises_video_extensions() {
        assert!(is_video_file(Path::new("a.MP4")));
        assert!(is_video_file(Path::new("dir/b.flv")));
        assert!(!is_video_file(Path::new("notes.txt")));
        assert!(!is_video_file(Path::new("noext")));
    }

    #[test]
    fn discovers_videos_in_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.mkv"), b"x").unwrap();
        std::fs::write(dir.path().join("a.mp4"), b"x").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.mov"), b"x").unwrap();

        let flat = discover_sources(dir.path(), false).unwrap();
        let names: Vec<String> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.mp4", "b.mkv"]);

        let deep = discover_sources(dir.path(), true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = discover_sources(Path::new("/definitely/not/here.mp4"), false).unwrap_err();
        assert!(matches!(err, SplitXError::InputFileNotFound { .. }));
    }
}
