use crate::model_dir::ModelDirArgs;

/// Args for the class-name command.
#[derive(clap::Args, Debug)]
pub struct ClassNameArgs {
    #[command(flatten)]
    model_dir: ModelDirArgs,

    /// The class id; `-1` is the not-in-training sentinel.
    #[clap(allow_negative_numbers = true)]
    id: i64,
}

impl ClassNameArgs {
    /// Run the class-name command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let converter = self.model_dir.load_converter()?;
        println!("{}", converter.get_class_name(self.id)?);
        Ok(())
    }
}
