#![warn(clippy::all, rust_2018_idioms)]

use h5ex_intatt::{APP_NAME, APP_VERSION, ExampleConfig};

fn main() -> anyhow::Result<()> {
    // Log to stderr (if run with `RUST_LOG=debug`).
    env_logger::init();
    log::info!("{APP_NAME} v{APP_VERSION}");

    let cfg = ExampleConfig::default();
    log::debug!("Effective configuration:\n{}", cfg.to_toml()?);

    let mut stdout = std::io::stdout().lock();
    let stored = h5ex_intatt::run(&cfg, &mut stdout)?;
    log::info!(
        "Read back '{}' ({}) from {}",
        stored.name,
        stored.storage,
        cfg.file.display()
    );
    Ok(())
}
