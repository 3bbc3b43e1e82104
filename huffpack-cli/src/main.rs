//! Huffpack CLI
//!
//! File-level Huffman compression plus inspection helpers for the code
//! table and byte-frequency histograms.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use huffpack_codec::{FrequencyTable, HuffmanTree, compress, count_frequencies, decompress};
use huffpack_core::Result;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(author, version, about = "Byte-oriented Huffman compression")]
#[command(long_about = "
Huffpack compresses files with an optimal prefix-free Huffman code and
stores the code's tree shape inside the compressed container, so no
side-channel is needed to decompress.

Examples:
  huffpack compress input.txt
  huffpack compress input.txt -o input.huf
  huffpack decompress input.huf -o restored.txt
  huffpack table input.txt
  huffpack table histogram.json --freqs --json
  huffpack freq input.txt -o histogram.json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a huffpack container
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to the input with `.huf` appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decompress a huffpack container
    #[command(alias = "d")]
    Decompress {
        /// Container file to decompress
        input: PathBuf,

        /// Output file (defaults to the input without its `.huf`
        /// extension, or with `.out` appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the Huffman code table for a file
    #[command(alias = "t")]
    Table {
        /// File to derive the table from
        input: PathBuf,

        /// Treat the input as a frequency-histogram JSON file instead of
        /// raw data
        #[arg(long)]
        freqs: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Write the byte-frequency histogram of a file as JSON
    #[command(alias = "f")]
    Freq {
        /// File to count
        input: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => cmd_compress(&input, output),
        Commands::Decompress { input, output } => cmd_decompress(&input, output),
        Commands::Table { input, freqs, json } => cmd_table(&input, freqs, json),
        Commands::Freq { input, output } => cmd_freq(&input, output),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "huffpack", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let data = fs::read(input)?;
    let compressed = compress(&data)?;

    let output = output.unwrap_or_else(|| compressed_name(input));
    fs::write(&output, &compressed)?;

    println!(
        "{} -> {} ({} -> {} bytes, {:.1}%)",
        input.display(),
        output.display(),
        data.len(),
        compressed.len(),
        compressed.len() as f64 / data.len() as f64 * 100.0
    );
    Ok(())
}

fn cmd_decompress(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let data = fs::read(input)?;
    let decompressed = decompress(&data)?;

    let output = output.unwrap_or_else(|| decompressed_name(input));
    fs::write(&output, &decompressed)?;

    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        data.len(),
        decompressed.len()
    );
    Ok(())
}

/// One row of `table --json` output.
#[derive(Serialize)]
struct TableEntry {
    byte: u8,
    char: Option<char>,
    code: String,
}

fn cmd_table(input: &Path, freqs: bool, json: bool) -> Result<()> {
    let mut tree = HuffmanTree::new();
    if freqs {
        tree.build_from_frequencies(&load_frequencies(input)?)?;
    } else {
        tree.build_from_data(&fs::read(input)?)?;
    }

    let entries: Vec<TableEntry> = tree
        .code_table()
        .iter()
        .map(|(byte, code)| TableEntry {
            byte,
            char: printable(byte),
            code: code_string(code),
        })
        .collect();

    if json {
        println!("{}", to_json(&entries)?);
        return Ok(());
    }

    println!("Huffman code table:");
    println!("{}", "-".repeat(40));
    for entry in entries {
        println!(
            "Byte {:3} ('{}') -> {}",
            entry.byte,
            entry.char.unwrap_or('?'),
            entry.code
        );
    }
    Ok(())
}

fn cmd_freq(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let data = fs::read(input)?;
    let freqs = count_frequencies(&data);
    let json = to_json(&freqs)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!(
                "{} -> {} ({} distinct byte values)",
                input.display(),
                path.display(),
                freqs.len()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Load a frequency histogram from JSON, keeping only positive counts.
fn load_frequencies(path: &Path) -> Result<FrequencyTable> {
    let text = fs::read_to_string(path)?;
    let raw: FrequencyTable = serde_json::from_str(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(raw.into_iter().filter(|&(_, count)| count > 0).collect())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn compressed_name(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".huf");
    PathBuf::from(name)
}

fn decompressed_name(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "huf") {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_os_string();
        name.push(".out");
        PathBuf::from(name)
    }
}

fn printable(byte: u8) -> Option<char> {
    (32..=126).contains(&byte).then(|| char::from(byte))
}

fn code_string(code: &[u8]) -> String {
    code.iter().map(|&bit| char::from(b'0' + bit)).collect()
}
