//! Writes the frontend's placeholder logos.
use create_icons::{cli, IconSet};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::parse_arguments();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let icons = IconSet::default();

    if cli.dump_default {
        print!("{}", toml::to_string_pretty(&icons)?);
        return Ok(());
    }

    create_icons::generate_all(&icons.icons)?;

    println!("Icons created successfully!");

    Ok(())
}
