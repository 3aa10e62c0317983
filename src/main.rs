use clap::{Parser, ValueEnum};
use skyedoc::{Content, PipelineBuilder, PipelineError, Preset, brand};
use std::env;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Wide,
    Book,
    All,
}

impl PresetArg {
    fn presets(self) -> Vec<Preset> {
        match self {
            PresetArg::Wide => vec![Preset::Wide],
            PresetArg::Book => vec![Preset::Book],
            PresetArg::All => Preset::ALL.to_vec(),
        }
    }
}

/// Generates the SkyeTrain guide as .docx documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Page preset to generate
    #[arg(long, value_enum, default_value_t = PresetArg::All)]
    preset: PresetArg,

    /// Logo image (PNG, JPEG or GIF)
    #[arg(long, default_value = brand::DEFAULT_LOGO_PATH)]
    logo: PathBuf,

    /// Directory the documents are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file to use instead of the built-in guide content
    #[arg(long)]
    content: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "skyedoc=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let content = match &args.content {
        Some(path) => Content::from_file(path)?,
        None => brand::content(),
    };
    let logo = args.logo.to_string_lossy().into_owned();

    for preset in args.preset.presets() {
        let pipeline = PipelineBuilder::new()
            .with_preset(preset)
            .with_logo_path(logo.clone())
            .build()?;

        let output_path = args.out_dir.join(brand::output_file_name(preset));
        pipeline.generate_to_file(&content, &output_path).await?;
        println!("Created {}", output_path.display());
    }
    Ok(())
}
