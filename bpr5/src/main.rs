use std::fs;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use anyhow::{Context, Result};
use bpr5::{decode_bytes, encode_text, looks_like_container, ExitCode, Report};
use clap::Parser;
use tempfile::NamedTempFile;

#[derive(Parser)]
#[command(name = "bpr5")]
#[command(author = "NellowTCS")]
#[command(version = "0.1.0")]
#[command(about = "lossless codec for 2D grids of integer sea-level heights", long_about = None)]
struct Cli {
    /// input file: a text grid to encode, or a BPR5 container to decode
    input: PathBuf,
    /// output file
    output: PathBuf,
    /// after writing, decode the output back and compare it byte-for-byte
    /// against the input (encode direction) or re-encode and compare
    /// against the input (decode direction)
    #[arg(long)]
    verify: bool,
}

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process_exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<std::io::Error>()
                .map(|_| ExitCode::Io)
                .unwrap_or(ExitCode::Malformed);
            process_exit(code)
        }
    }
}

fn process_exit(code: ExitCode) -> ProcessExitCode {
    ProcessExitCode::from(code.code() as u8)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let input_bytes = fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    if looks_like_container(&input_bytes) {
        run_decode(&cli, &input_bytes)
    } else {
        run_encode(&cli, &input_bytes)
    }
}

fn run_encode(cli: &Cli, input_bytes: &[u8]) -> Result<ExitCode> {
    let text = String::from_utf8(input_bytes.to_vec()).context("input is not valid UTF-8")?;
    let (bytes, report) = encode_text(&text)?;

    fs::write(&cli.output, &bytes)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    print_report("Encoded", &cli.output, &report);

    if cli.verify {
        let roundtripped = stage_and_decode(&bytes)?;
        if roundtripped != text {
            eprintln!("verify failed: decoded grid does not match the original input");
            return Ok(ExitCode::VerifyMismatch);
        }
        println!("Verify: ok");
    }

    Ok(ExitCode::Success)
}

fn run_decode(cli: &Cli, input_bytes: &[u8]) -> Result<ExitCode> {
    let (text, report) = decode_bytes(input_bytes)?;

    fs::write(&cli.output, &text)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    print_report("Decoded", &cli.output, &report);

    if cli.verify {
        let reencoded = stage_and_encode(&text)?;
        if reencoded != input_bytes {
            eprintln!(
                "verify failed: re-encoding the decoded grid did not reproduce the original bytes"
            );
            return Ok(ExitCode::VerifyMismatch);
        }
        println!("Verify: ok");
    }

    Ok(ExitCode::Success)
}

/// write `bytes` to a scratch file and decode it back, the way a user's own
/// round trip through disk would exercise the container rather than just the
/// in-memory buffer.
fn stage_and_decode(bytes: &[u8]) -> Result<String> {
    let scratch = NamedTempFile::new().context("creating verify scratch file")?;
    fs::write(scratch.path(), bytes).context("writing verify scratch file")?;
    let staged = fs::read(scratch.path()).context("reading verify scratch file")?;
    let (text, _) = decode_bytes(&staged)?;
    Ok(text)
}

/// write `text` to a scratch file, re-read it, and encode it, mirroring
/// [`stage_and_decode`] for the decode direction's verify pass.
fn stage_and_encode(text: &str) -> Result<Vec<u8>> {
    let scratch = NamedTempFile::new().context("creating verify scratch file")?;
    fs::write(scratch.path(), text).context("writing verify scratch file")?;
    let staged = fs::read_to_string(scratch.path()).context("reading verify scratch file")?;
    let (bytes, _) = encode_text(&staged)?;
    Ok(bytes)
}

fn print_report(verb: &str, output: &PathBuf, report: &Report) {
    println!("{verb} {}", output.display());
    println!(
        "  {} -> {} bytes ({:.2}x, {:.1} kB/s)",
        report.input_bytes,
        report.output_bytes,
        report.ratio(),
        report.throughput_kb_per_sec()
    );
}
