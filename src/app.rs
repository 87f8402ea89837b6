use std::io::{stdout, BufWriter, Read, Write};

use clap::Parser;
use tracing::debug;

use crate::{
    common::error::AppError,
    domain::account::Account,
    io::{
        reader,
        writer::{self, OperationReport},
    },
    worker::processor::Processor,
};

#[derive(Parser, Debug)]
#[command(name = "credit_card", version, about = "Replay card operations against one account")]
struct Cli {
    /// CSV file with `op,day,month,amount,country` rows
    input: String,

    /// Print the final account state after the results
    #[arg(long)]
    snapshot: bool,
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let cli = Cli::try_parse_from(args)?;

    let file = std::fs::File::open(&cli.input)?;
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    replay(file, writer, cli.snapshot)
}

/// Replays every operation in `input` against a fresh account and writes
/// the per-operation results to `output`. Account rejections are recorded
/// and replay continues; a malformed row aborts.
pub fn replay<R: Read, W: Write>(input: R, mut output: W, snapshot: bool) -> Result<(), AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut account = Account::new();
    let mut processor = Processor::new();
    let mut reports = Vec::new();

    for (idx, event) in reader::read_events(&mut reader).enumerate() {
        let event = event.map_err(AppError::Parse)?;
        let result = processor.process(&mut account, event.clone());
        reports.push(OperationReport::new(idx + 1, &event, result));
    }
    debug!(operations = reports.len(), "replay finished");

    writer::write_results(&mut output, &reports)?;
    if snapshot {
        output.write_all(b"\n")?;
        writer::write_snapshot(&mut output, &account)?;
    }
    output.flush()?;
    Ok(())
}
