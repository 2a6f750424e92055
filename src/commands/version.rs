use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("brpcli version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
