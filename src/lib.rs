#![warn(clippy::all, rust_2018_idioms)]
//! Writes a 4x7 grid of integers as the attribute `A1` of a scalar dataset `DS1`, stored on disk
//! as 64-bit big-endian integers, then reopens the file, reads the attribute back and prints it.

use std::io::Write;

use anyhow::ensure;
use h5ex_hdf5::{
    StoredAttribute,
    grid::{format_named_grid, generate},
    read_int_attribute, write_int_attribute,
};

pub use config::ExampleConfig;

pub mod config;

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the write, reopen and read sequence and prints the attribute to `out`.
///
/// Returns what was read back so callers can inspect it further.
pub fn run(cfg: &ExampleConfig, out: &mut impl Write) -> anyhow::Result<StoredAttribute> {
    let wdata = generate(cfg.layout.dims);
    write_int_attribute(&cfg.file, &cfg.layout, &wdata)?;

    let stored = read_int_attribute(&cfg.file, &cfg.layout)?;
    ensure!(
        stored.values == wdata,
        "Attribute '{}' read back from {} differs from what was written",
        stored.name,
        cfg.file.display()
    );

    out.write_all(format_named_grid(&stored.name, &stored.values).as_bytes())?;
    out.flush()?;
    Ok(stored)
}
