use anyhow::Error;
use clear_theme::{clear_dark, save_theme};
use log::debug;

fn main() -> Result<(), Error> {
    setup_logging()?;

    let family = clear_dark();
    let file = save_theme(&family, "themes")?;
    debug!("wrote {:?}", file);

    Ok(())
}

fn setup_logging() -> Result<(), Error> {
    fern::Dispatch::new()
        .format(|out, message, _record| {
            out.finish(format_args!("{}", message)) //
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
