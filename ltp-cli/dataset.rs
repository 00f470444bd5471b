use crate::{load_luma, LtpError, LtpResult};
use image::GrayImage;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions picked up when scanning directories
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff"];

/// Indexed collection of instances with an optional string identity
pub trait ListDataset {
    type Instance;
    type Error;

    fn num_instances(&self) -> usize;

    fn instance(&self, index: usize) -> Result<Self::Instance, Self::Error>;

    /// Identifier of the instance at `index`, the index itself unless overridden
    fn id(&self, index: usize) -> String {
        index.to_string()
    }

    /// Index of the first instance whose id equals `id`
    fn index_of_id(&self, id: &str) -> Option<usize> {
        (0..self.num_instances()).find(|&i| self.id(i) == id)
    }

    fn ids(&self) -> Vec<String> {
        (0..self.num_instances()).map(|i| self.id(i)).collect()
    }

    fn is_empty(&self) -> bool {
        self.num_instances() == 0
    }
}

/// Grayscale images on disk, decoded lazily when an instance is requested
#[derive(Debug, Clone, Default)]
pub struct ImageListDataset {
    paths: Vec<PathBuf>,
}

impl ImageListDataset {
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Collect image files from a mix of files and directories.
    ///
    /// Files are taken as given. Directories contribute their image files in
    /// file name order, descending into subdirectories when `recursive`.
    pub fn from_inputs<P: AsRef<Path>>(inputs: &[P], recursive: bool) -> LtpResult<Self> {
        let mut paths = Vec::new();
        for input in inputs {
            let input = input.as_ref();
            if input.is_dir() {
                let walker = WalkDir::new(input)
                    .max_depth(if recursive { usize::MAX } else { 1 })
                    .sort_by_file_name();
                for entry in walker {
                    let entry = entry.map_err(|e| LtpError::Io(e.into()))?;
                    if entry.file_type().is_file() && is_image_file(entry.path()) {
                        paths.push(entry.into_path());
                    }
                }
            } else if input.is_file() {
                paths.push(input.to_path_buf());
            } else {
                return Err(LtpError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file or directory: {}", input.display()),
                )));
            }
        }
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }
}

impl ListDataset for ImageListDataset {
    type Instance = GrayImage;
    type Error = LtpError;

    fn num_instances(&self) -> usize {
        self.paths.len()
    }

    fn instance(&self, index: usize) -> LtpResult<GrayImage> {
        let path = self.path(index).ok_or(LtpError::IndexOutOfRange {
            index,
            len: self.paths.len(),
        })?;
        load_luma(path)
    }

    /// File stem, falling back to the index for paths without one
    fn id(&self, index: usize) -> String {
        self.path(index)
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| index.to_string())
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
