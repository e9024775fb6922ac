use color_eyre::Result;

pub fn init(verbosity: u8) -> Result<()> {
    simple_logger::init_with_level(match verbosity {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    })?;
    Ok(())
}
