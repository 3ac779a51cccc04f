use std::io::{BufRead, Write};

use textgrocer::{TextConverter, io::svmlight::write_svmlight_row};

use crate::{
    input_output::{InputArgs, OutputArgs},
    model_dir::ModelDirArgs,
};

/// Args for the transform command.
#[derive(clap::Args, Debug)]
pub struct TransformArgs {
    #[command(flatten)]
    model_dir: ModelDirArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TransformArgs {
    /// Run the transform command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut converter = self.model_dir.load_converter()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let count = run_transform(&mut converter, &mut reader, &mut writer)?;
        writer.flush()?;

        log::info!("transformed {count} line(s)");
        Ok(())
    }
}

/// Write one ``0 col:count ...`` line per input line.
fn run_transform(
    converter: &mut TextConverter,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut count = 0;
    for line in reader.lines() {
        let feat = converter.text_to_features(&line?);

        let mut entries: Vec<(usize, u32)> =
            feat.into_iter().map(|(id, c)| (id as usize, c)).collect();
        entries.sort_unstable();

        write_svmlight_row(writer, 0, entries)?;
        count += 1;
    }
    Ok(count)
}
