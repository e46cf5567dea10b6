use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::hats::Hats;

pub const HAT_CONTENTS_HEADER: &str = "Hat Number: (1's, 2's, 3's)";

pub fn format_hat_contents(hats: &Hats, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", HAT_CONTENTS_HEADER)?;
    for (sticks, [ones, twos, threes]) in hats.iter() {
        writeln!(out, "{}: ({}, {}, {})", sticks, ones, twos, threes)?;
    }
    Ok(())
}

pub fn write_hat_contents(hats: &Hats, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    format_hat_contents(hats, &mut out)?;
    out.flush()?;
    log::info!("{:<32}{:<32}", "saved hat contents", path.display());
    Ok(())
}

pub fn write_hats_json(hats: &Hats, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), hats)?;
    log::info!("{:<32}{:<32}", "saved hats json", path.display());
    Ok(())
}
