// Dumps a generated or saved map as text.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use legacy_world::dump::{self, config::USAGE, DumpConfig};

    env_logger::init();
    let argv0 = std::env::args().next().unwrap_or_else(|| "legacy-world".to_string());
    let options = match DumpConfig::from_env_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprint!("Usage: {argv0} [ options ]\n{USAGE}");
            std::process::exit(1);
        }
    };
    if options.help {
        eprint!("Usage: {argv0} [ options ]\n{USAGE}");
        return Ok(());
    }
    log::info!(
        "dumping {}",
        options
            .save_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "generated map".to_string())
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dump::run(&options, &mut out)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The dump tool reads files and is not built for wasm.
}
