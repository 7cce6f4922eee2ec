mod clipboard;
mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use passgen::{
    CharacterClass, ClassSet, GenerationRequest, KeystreamSource, OsSource, assess, generate,
    parse_length,
};

#[derive(Parser)]
#[command(
    name = "passgen",
    version,
    about = "Random password generator with a composition-based strength score"
)]
struct Cli {
    /// Password length (1-1000)
    #[arg(short, long, env = "PASSGEN_LENGTH", default_value = "12")]
    length: String,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_digits: bool,

    /// Include symbols (!@#$%^&* ...)
    #[arg(short, long)]
    symbols: bool,

    #[arg(long, value_enum, default_value = "os")]
    source: Source,

    /// Copy the password to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Print only the password
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Source {
    Os,
    Chacha20,
}

impl Source {
    fn name(self) -> &'static str {
        match self {
            Source::Os => "OS CSPRNG",
            Source::Chacha20 => "ChaCha20 (OS-seeded)",
        }
    }
}

impl Cli {
    fn request(&self) -> Result<GenerationRequest> {
        let length = parse_length(&self.length)?;

        let toggles = [
            (CharacterClass::Uppercase, !self.no_uppercase),
            (CharacterClass::Lowercase, !self.no_lowercase),
            (CharacterClass::Digit, !self.no_digits),
            (CharacterClass::Symbol, self.symbols),
        ];
        let classes: ClassSet = toggles
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(class, _)| class)
            .collect();

        Ok(GenerationRequest::new(length, classes))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let request = cli.request()?;

    let password = match cli.source {
        Source::Os => generate(&request, &mut OsSource)?,
        Source::Chacha20 => generate(&request, &mut KeystreamSource::from_entropy())?,
    };

    let (score, strength) = assess(&password);
    log::info!("Generated {} character password, score {}/8", request.length, score);

    if cli.copy {
        clipboard::copy_to_clipboard(&password)?;
    }

    let report = ui::Report {
        score,
        strength,
        source: cli.source.name(),
        copied: cli.copy,
    };

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    ui::display_output(&password, &request, &report, &options);

    Ok(())
}
