//! Pipeline configuration.
//!
//! Compiled-in defaults with builder-style overrides; there are no
//! configuration files.

use crate::constants;

/// Tunables for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pixel width of the generated placeholder images
    pub image_width: u32,

    /// Pixel height of the generated placeholder images
    pub image_height: u32,

    /// Name of the image directory under the output root
    pub dummy_dir_name: String,

    /// Executable invoked for metadata embedding
    pub exiftool_program: String,

    /// Write CSV and images but do not invoke the embedding tool
    pub skip_embed: bool,

    /// Parse and report statistics only; write nothing to disk
    pub parse_only: bool,

    /// Show progress bars during image creation
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_width: constants::PLACEHOLDER_WIDTH,
            image_height: constants::PLACEHOLDER_HEIGHT,
            dummy_dir_name: constants::DUMMY_DIR_NAME.to_string(),
            exiftool_program: constants::DEFAULT_EXIFTOOL.to_string(),
            skip_embed: false,
            parse_only: false,
            show_progress: true,
        }
    }
}

impl PipelineConfig {
    /// Use a specific embedding executable
    pub fn with_exiftool(mut self, program: impl Into<String>) -> Self {
        self.exiftool_program = program.into();
        self
    }

    /// Override the placeholder image dimensions
    pub fn with_image_dimensions(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Override the image directory name
    pub fn with_dummy_dir_name(mut self, name: impl Into<String>) -> Self {
        self.dummy_dir_name = name.into();
        self
    }

    /// Stop after writing the CSV and images
    pub fn with_skip_embed(mut self) -> Self {
        self.skip_embed = true;
        self
    }

    /// Parse and report only; skip all filesystem output
    pub fn with_parse_only(mut self) -> Self {
        self.parse_only = true;
        self
    }

    /// Suppress progress bars (quiet mode)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }
}
