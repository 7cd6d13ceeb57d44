use clap::{Parser, Subcommand};

use wordtags_cli::commands::{config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "tagtool", about = "Wordtags dictionary build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a dictionary from a flat lexicon file or directory
    Compile {
        /// Compile config TOML (defaults to the embedded config)
        #[arg(long)]
        config: Option<String>,
        /// Lexicon file, or directory of *.tsv / *.dat files
        input: String,
        /// Output file
        output_file: String,
    },
    /// Show dictionary info
    Info {
        /// Dictionary (.wtags) file
        file: String,
    },
    /// Look up the tag-sets of a word form
    Lookup {
        /// Dictionary file
        dict_file: String,
        /// Word form to look up
        word: String,
    },
    /// Export default compile config as TOML
    ConfigExport,
    /// Validate a custom compile config TOML file
    ConfigValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            config,
            input,
            output_file,
        } => dict_ops::compile(&input, &output_file, config.as_deref()),
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup { dict_file, word } => dict_ops::lookup(&dict_file, &word),
        Command::ConfigExport => config_ops::config_export(),
        Command::ConfigValidate { file } => config_ops::config_validate(&file),
    }
}
