use std::io::Write;

use textgrocer::io::{DEFAULT_DELIMITER, write_svmlight};

use crate::{
    input_output::{InputArgs, OutputArgs},
    model_dir::ModelDirArgs,
};

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    model_dir: ModelDirArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Field delimiter between label and text.
    #[clap(long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,
}

impl ConvertArgs {
    /// Run the convert command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut converter = self.model_dir.new_converter()?;

        let reader = self.input.open_reader()?;
        let corpus = converter.convert_text(reader, &self.delimiter)?;

        let mut writer = self.output.open_writer()?;
        write_svmlight(&corpus.matrix, &corpus.labels, &mut writer)?;
        writer.flush()?;

        converter.save(&self.model_dir.model_dir)?;

        log::info!(
            "{} rows; {} skipped; snapshot saved to {}",
            corpus.report.accepted,
            corpus.report.skipped,
            self.model_dir.model_dir.display()
        );
        Ok(())
    }
}
