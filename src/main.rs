use anyhow::{bail, Context, Result};
use barcode_ecc::{CorrectionConfig, DecodeError, Element, FieldKind, ReedSolomonDecoder};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gf-tool", about = "Inspect barcode Galois fields and run Reed-Solomon correction")]
struct Cli {
    /// Log decoder steps (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the exp/log tables of a catalog field.
    Tables {
        /// Field name, e.g. qr-code, data-matrix, aztec-param.
        field: FieldKind,
    },
    /// Print the syndromes of a codeword block.
    Syndromes {
        /// Field name.
        field: FieldKind,
        /// Number of error-correction codewords at the end of the block.
        #[arg(long)]
        ec: usize,
        /// Codewords, decimal or 0x-prefixed hex.
        #[arg(required = true, value_parser = parse_codeword)]
        codewords: Vec<Element>,
    },
    /// Correct a codeword block and print the result.
    Correct {
        /// Field name.
        field: FieldKind,
        /// Number of error-correction codewords at the end of the block.
        #[arg(long)]
        ec: usize,
        /// Codewords, decimal or 0x-prefixed hex.
        #[arg(required = true, value_parser = parse_codeword)]
        codewords: Vec<Element>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tables { field } => run_tables(field),
        Commands::Syndromes {
            field,
            ec,
            codewords,
        } => run_syndromes(field, ec, &codewords)?,
        Commands::Correct {
            field,
            ec,
            codewords,
        } => run_correct(CorrectionConfig::new(field, ec), codewords)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "barcode_ecc=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_tables(kind: FieldKind) {
    let field = kind.field();
    println!("{kind}: {field}");
    println!("i\texp(i)\tlog(i)");
    for i in 0..field.size() {
        let log = field
            .log(i as Element)
            .map(|l| l.to_string())
            .unwrap_or_else(|_| "-".to_string());
        println!("{i}\t{}\t{log}", field.exp(i));
    }
}

fn run_syndromes(kind: FieldKind, ec: usize, codewords: &[Element]) -> Result<()> {
    let decoder = ReedSolomonDecoder::new(kind.field());
    let syndromes = decoder
        .syndromes(codewords, ec)
        .with_context(|| format!("failed to compute syndromes over {kind}"))?;

    for i in 0..ec {
        println!("S{i}\t{}", syndromes.coefficient(i));
    }
    if syndromes.is_zero() {
        println!("no errors detected");
    } else {
        println!("syndrome polynomial: {syndromes}");
    }
    Ok(())
}

fn run_correct(config: CorrectionConfig, mut codewords: Vec<Element>) -> Result<()> {
    match barcode_ecc::correct(&config, &mut codewords) {
        Ok(corrected) => {
            let rendered: Vec<String> = codewords.iter().map(|c| c.to_string()).collect();
            println!("{}", rendered.join(" "));
            println!("corrected {corrected} of {} codewords", codewords.len());
            Ok(())
        }
        Err(DecodeError::Uncorrectable(reason)) => {
            bail!(
                "symbol unreadable: {reason} (capacity {} errors)",
                config.correction_capacity()
            )
        }
        Err(err) => Err(err).context("invalid codeword block"),
    }
}

fn parse_codeword(value: &str) -> Result<Element, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => Element::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid codeword `{value}`: {e}"))
}
