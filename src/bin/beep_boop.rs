use small_scripts::app::beep_boop::{signals, DEFAULT_RANGE};
use std::io::{BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for signal in signals(DEFAULT_RANGE) {
        writeln!(out, "{}", signal)?;
    }

    out.flush()?;
    Ok(())
}
