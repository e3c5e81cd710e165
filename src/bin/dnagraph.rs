use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use dnagraph::bench::{verify_roundtrips, write_sample_report};
use dnagraph::codec::Natural;
use dnagraph::{CodecStrategy, GraphCodec};

/// DNAGraph: encode graphs as DNA sequences
///
/// Converts between the natural form `G=({a,b},{(a,b)})` and DNA strings
/// over `A,C,G,T`, using one of several codec strategies.
#[derive(Parser, Debug)]
#[command(name = "dnagraph")]
#[command(author, version, about = "Encodes graphs as DNA sequences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a natural-form graph into a DNA sequence.
    Encode {
        /// Graph in natural form, e.g. "G=({a,b},{(a,b)})"
        graph: String,

        /// Codec strategy (natural, sum, fixed-length, huffman)
        #[arg(short, long, default_value = "huffman")]
        codec: String,

        /// Renumber vertices densely instead of preserving their order
        #[arg(long)]
        discard_order: bool,
    },

    /// Decode a DNA sequence back into natural form.
    Decode {
        /// DNA sequence over A,C,G,T
        sequence: String,

        /// Codec strategy (natural, sum, fixed-length, huffman)
        #[arg(short, long, default_value = "huffman")]
        codec: String,
    },

    /// Verify round trips over random graphs for every codec strategy.
    Verify {
        /// Check a single strategy instead of all of them
        #[arg(short, long)]
        codec: Option<String>,

        /// Random seed (default: from entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a CSV comparing encoded lengths across strategies.
    Sample {
        /// Destination file
        #[arg(short, long, default_value = "dna-sequence-lengths.csv")]
        output: PathBuf,

        /// Largest vertex count to sample
        #[arg(long, default_value_t = 20)]
        max_vertices: usize,

        /// Random seed (default: from entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_codec(name: &str) -> Result<CodecStrategy> {
    name.parse::<CodecStrategy>().map_err(|e| anyhow!(e))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            graph,
            codec,
            discard_order,
        } => {
            let strategy = parse_codec(&codec)?;
            let graph = Natural.decode(&graph)?;
            println!("{}", strategy.encode(&graph, !discard_order)?);
        }
        Commands::Decode { sequence, codec } => {
            let strategy = parse_codec(&codec)?;
            println!("{}", strategy.decode(&sequence)?);
        }
        Commands::Verify { codec, seed } => {
            let strategies = match codec {
                Some(name) => vec![parse_codec(&name)?],
                None => CodecStrategy::ALL.to_vec(),
            };
            let mut rng = make_rng(seed);
            let mut all_ok = true;
            for strategy in strategies {
                let ok = verify_roundtrips(strategy, &mut rng)?;
                println!("{strategy}: {}", if ok { "ok" } else { "FAILED" });
                all_ok &= ok;
            }
            if !all_ok {
                return Err(anyhow!("round-trip verification failed"));
            }
        }
        Commands::Sample {
            output,
            max_vertices,
            seed,
        } => {
            let mut rng = make_rng(seed);
            write_sample_report(&output, &CodecStrategy::ALL, max_vertices, &mut rng)?;
            println!("wrote {}", output.display());
        }
    }

    Ok(())
}
