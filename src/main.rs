use std::path::PathBuf;

use anyhow::{Result, bail};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        bail!("usage: cvparse <resume-file>");
    };

    let outcome = cvparse::parse_file(PathBuf::from(path));
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
