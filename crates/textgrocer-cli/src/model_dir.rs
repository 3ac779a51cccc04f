use std::path::PathBuf;

use textgrocer::{ConverterOptions, TextConverter};

/// Snapshot directory argument group.
#[derive(clap::Args, Debug)]
pub struct ModelDirArgs {
    /// Directory holding the converter snapshot.
    #[clap(long)]
    pub model_dir: PathBuf,

    /// Lowercase text before tokenizing.
    #[clap(long)]
    pub lowercase: bool,
}

impl ModelDirArgs {
    /// Build a fresh converter.
    pub fn new_converter(&self) -> Result<TextConverter, Box<dyn std::error::Error>> {
        let options = ConverterOptions::default().with_lowercase(self.lowercase);
        Ok(TextConverter::from_options(options)?)
    }

    /// Build a converter and load the snapshot into it.
    pub fn load_converter(&self) -> Result<TextConverter, Box<dyn std::error::Error>> {
        let mut converter = self.new_converter()?;
        converter.load(&self.model_dir)?;
        Ok(converter)
    }
}
