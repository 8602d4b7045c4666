use colored::*;
use eyre::Result;

pub fn run() -> Result<()> {
    println!("{}", "Available actions:".bold());
    println!();

    for name in reamaze::registry::names() {
        println!("  {}", name.cyan());
    }

    Ok(())
}
