/// File categorization by extension.
///
/// This module maps file extensions to the broad categories used as folder
/// names (Images, Videos, Documents, Audio, Archives, Code, Others).
///
/// # Examples
///
/// ```
/// use organizer::category::{Category, CategoryMap};
///
/// let map = CategoryMap::default();
/// assert_eq!(map.classify("photo.jpg"), Category::Images);
/// assert_eq!(map.classify("notes.txt"), Category::Documents);
/// assert_eq!(map.classify("mystery.xyz"), Category::Others);
/// ```
use std::collections::HashMap;
use std::path::Path;

/// Represents a broad file category.
///
/// Each category corresponds to one subfolder of the organized directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, GIF, etc.)
    Images,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Audio files (MP3, WAV, OGG, etc.)
    Audio,
    /// Archive files (ZIP, RAR, TAR, etc.)
    Archives,
    /// Source code files (Python, Java, JavaScript, etc.)
    Code,
    /// Everything without a recognized extension.
    Others,
}

impl Category {
    /// Returns the folder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use organizer::category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Documents => "Documents",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Others => "Others",
        }
    }
}

/// Maps file extensions to categories.
///
/// Extensions are stored lowercase with their leading dot, so lookups are
/// case-insensitive. The map can be extended with custom mappings.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    extension_map: HashMap<String, Category>,
}

impl CategoryMap {
    /// Creates a new `CategoryMap` with all standard mappings.
    pub fn new() -> Self {
        let mut map = Self {
            extension_map: HashMap::new(),
        };
        map.populate_standard_mappings();
        map
    }

    fn populate_standard_mappings(&mut self) {
        // Image extensions
        self.add_extension(".jpg", Category::Images);
        self.add_extension(".jpeg", Category::Images);
        self.add_extension(".png", Category::Images);
        self.add_extension(".gif", Category::Images);
        self.add_extension(".bmp", Category::Images);
        self.add_extension(".webp", Category::Images);

        // Video extensions
        self.add_extension(".mp4", Category::Videos);
        self.add_extension(".mkv", Category::Videos);
        self.add_extension(".flv", Category::Videos);
        self.add_extension(".mov", Category::Videos);
        self.add_extension(".avi", Category::Videos);

        // Document extensions
        self.add_extension(".pdf", Category::Documents);
        self.add_extension(".docx", Category::Documents);
        self.add_extension(".doc", Category::Documents);
        self.add_extension(".txt", Category::Documents);
        self.add_extension(".pptx", Category::Documents);
        self.add_extension(".xlsx", Category::Documents);

        // Audio extensions
        self.add_extension(".mp3", Category::Audio);
        self.add_extension(".wav", Category::Audio);
        self.add_extension(".aac", Category::Audio);
        self.add_extension(".ogg", Category::Audio);

        // Archive extensions
        self.add_extension(".zip", Category::Archives);
        self.add_extension(".rar", Category::Archives);
        self.add_extension(".tar", Category::Archives);
        self.add_extension(".gz", Category::Archives);

        // Code extensions
        self.add_extension(".py", Category::Code);
        self.add_extension(".cpp", Category::Code);
        self.add_extension(".java", Category::Code);
        self.add_extension(".html", Category::Code);
        self.add_extension(".css", Category::Code);
        self.add_extension(".js", Category::Code);
    }

    /// Adds an extension to category mapping.
    ///
    /// The leading dot is optional; `".jpg"` and `"jpg"` register the same
    /// mapping.
    pub fn add_extension(&mut self, ext: &str, category: Category) {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.extension_map
            .insert(format!(".{}", ext.to_lowercase()), category);
    }

    /// Determines the category for a file name.
    ///
    /// The extension is matched case-insensitively. Files without an
    /// extension (including dotfiles such as `.bashrc`) and files with an
    /// unrecognized extension fall back to `Category::Others`.
    ///
    /// # Examples
    ///
    /// ```
    /// use organizer::category::{Category, CategoryMap};
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(map.classify("PHOTO.JPG"), Category::Images);
    /// assert_eq!(map.classify("archive.tar.gz"), Category::Archives);
    /// assert_eq!(map.classify("README"), Category::Others);
    /// ```
    pub fn classify(&self, file_name: &str) -> Category {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extension_map.get(&format!(".{}", ext.to_lowercase())))
            .copied()
            .unwrap_or(Category::Others)
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new()
    }
}
