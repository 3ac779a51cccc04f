use crate::commands::{class_name::ClassNameArgs, convert::ConvertArgs, transform::TransformArgs};

pub mod class_name;
pub mod convert;
pub mod transform;

/// Subcommands for grocer
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert a labeled corpus; write svmlight rows and save the snapshot.
    Convert(ConvertArgs),

    /// Convert unlabeled lines against a saved snapshot.
    Transform(TransformArgs),

    /// Look up the label of a class id.
    ClassName(ClassNameArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Convert(cmd) => cmd.run(),
            Commands::Transform(cmd) => cmd.run(),
            Commands::ClassName(cmd) => cmd.run(),
        }
    }
}
