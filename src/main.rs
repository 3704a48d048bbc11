use clap::{Parser, Subcommand};
use romforge::cli::{
    concat_banked, concat_files, concat_words, file_info, flip_file, merge_files,
    merge_files_quad, pad_file, parse_fill_byte, patch_file, split_file, swap_file, SplitMode,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ROMFORGE_VERSION");
const BUILD: &str = env!("ROMFORGE_BUILD");
const PROFILE: &str = env!("ROMFORGE_PROFILE");
const GIT_HASH: &str = env!("ROMFORGE_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "romforge")]
#[command(author, about = "ROM image bank and interleave toolkit", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a file in half into two files
    #[command(alias = "h")]
    SplitHalf {
        input: PathBuf,
        out_a: PathBuf,
        out_b: PathBuf,
    },

    /// Split a file into two files, alternating bytes
    #[command(alias = "b")]
    SplitBytes {
        input: PathBuf,
        out_a: PathBuf,
        out_b: PathBuf,
    },

    /// Split a file into two files, alternating 16-bit words
    #[command(alias = "w")]
    SplitWords {
        input: PathBuf,
        out_a: PathBuf,
        out_b: PathBuf,
    },

    /// Flip the low/high bytes of a file (in place unless OUTPUT is given)
    #[command(alias = "f")]
    Flip {
        input: PathBuf,
        output: Option<PathBuf>,
    },

    /// Swap the top and bottom halves of a file (in place unless OUTPUT is given)
    #[command(alias = "s")]
    Swap {
        input: PathBuf,
        output: Option<PathBuf>,
    },

    /// Byte merge two files
    #[command(alias = "m")]
    Merge {
        in_low: PathBuf,
        in_high: PathBuf,
        output: PathBuf,
    },

    /// Byte merge four files
    #[command(alias = "q")]
    Merge4 {
        in_1: PathBuf,
        in_2: PathBuf,
        in_3: PathBuf,
        in_4: PathBuf,
        output: PathBuf,
    },

    /// Concatenate two files
    #[command(alias = "c")]
    Concat {
        in_a: PathBuf,
        in_b: PathBuf,
        output: PathBuf,
    },

    /// Concatenate two files, alternating 16-bit words (crom layout)
    #[command(alias = "d")]
    ConcatWords {
        in_a: PathBuf,
        in_b: PathBuf,
        output: PathBuf,
    },

    /// Concatenate two files into 8 MiB prom banks under OUT_DIR
    #[command(alias = "e")]
    ConcatBanked {
        in_a: PathBuf,
        in_b: PathBuf,
        out_dir: PathBuf,
    },

    /// Overwrite the first SIZE bytes of BASE with PATCH's prefix
    #[command(alias = "u")]
    Patch {
        patch: PathBuf,
        base: PathBuf,
        output: PathBuf,
        size: usize,
    },

    /// Pad a file to SIZE_KIB kilobytes with FILL
    #[command(alias = "p")]
    Pad {
        input: PathBuf,
        output: PathBuf,
        size_kib: usize,

        /// Fill byte, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_fill)]
        fill: u8,
    },

    /// Report a file's size and crc32 (optionally to a text file)
    #[command(alias = "i")]
    Info {
        input: PathBuf,
        output: Option<PathBuf>,
    },
}

fn parse_fill(s: &str) -> Result<u8, String> {
    parse_fill_byte(s).map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("romforge {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::SplitHalf { input, out_a, out_b } => {
            split_file(&input, &out_a, &out_b, SplitMode::Half).map(|bytes| {
                println!(
                    "Split {} into {} and {} ({} bytes each)",
                    input.display(),
                    out_a.display(),
                    out_b.display(),
                    bytes
                );
            })
        }

        Commands::SplitBytes { input, out_a, out_b } => {
            split_file(&input, &out_a, &out_b, SplitMode::Bytes).map(|bytes| {
                println!(
                    "Split bytes of {} into {} and {} ({} bytes each)",
                    input.display(),
                    out_a.display(),
                    out_b.display(),
                    bytes
                );
            })
        }

        Commands::SplitWords { input, out_a, out_b } => {
            split_file(&input, &out_a, &out_b, SplitMode::Words).map(|bytes| {
                println!(
                    "Split words of {} into {} and {} ({} bytes each)",
                    input.display(),
                    out_a.display(),
                    out_b.display(),
                    bytes
                );
            })
        }

        Commands::Flip { input, output } => {
            flip_file(&input, output.as_deref()).map(|written| {
                println!("Flipped bytes of {} into {}", input.display(), written.display());
            })
        }

        Commands::Swap { input, output } => {
            swap_file(&input, output.as_deref()).map(|written| {
                println!("Swapped halves of {} into {}", input.display(), written.display());
            })
        }

        Commands::Merge { in_low, in_high, output } => {
            merge_files(&in_low, &in_high, &output).map(|bytes| {
                println!(
                    "Merged {} and {} into {} ({} bytes)",
                    in_low.display(),
                    in_high.display(),
                    output.display(),
                    bytes
                );
            })
        }

        Commands::Merge4 { in_1, in_2, in_3, in_4, output } => {
            merge_files_quad(&in_1, &in_2, &in_3, &in_4, &output).map(|bytes| {
                println!("Merged four files into {} ({} bytes)", output.display(), bytes);
            })
        }

        Commands::Concat { in_a, in_b, output } => {
            concat_files(&in_a, &in_b, &output).map(|bytes| {
                println!(
                    "Concatenated {} and {} into {} ({} bytes)",
                    in_a.display(),
                    in_b.display(),
                    output.display(),
                    bytes
                );
            })
        }

        Commands::ConcatWords { in_a, in_b, output } => {
            concat_words(&in_a, &in_b, &output).map(|bytes| {
                println!(
                    "Word-concatenated {} and {} into {} ({} bytes)",
                    in_a.display(),
                    in_b.display(),
                    output.display(),
                    bytes
                );
            })
        }

        Commands::ConcatBanked { in_a, in_b, out_dir } => {
            concat_banked(&in_a, &in_b, &out_dir).map(|written| {
                for path in &written {
                    println!("Bank {} saved", path.display());
                }
            })
        }

        Commands::Patch { patch, base, output, size } => {
            patch_file(&patch, &base, &output, size).map(|bytes| {
                println!(
                    "Patched first {} bytes of {} into {} ({} bytes)",
                    size,
                    base.display(),
                    output.display(),
                    bytes
                );
            })
        }

        Commands::Pad { input, output, size_kib, fill } => {
            pad_file(&input, &output, size_kib, fill).map(|bytes| {
                println!(
                    "Padded {} to {} KiB with 0x{:02X} into {} ({} bytes)",
                    input.display(),
                    size_kib,
                    fill,
                    output.display(),
                    bytes
                );
            })
        }

        Commands::Info { input, output } => {
            file_info(&input, output.as_deref()).map(|line| {
                println!("{}", line);
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
