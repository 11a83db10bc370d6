//! Interactive terminal prompts.
//!
//! All prompts block on stdin; commands run them through `spawn_blocking`
//! so the interrupt handler stays responsive.

use std::io::{self, Write};

use bambu_link_core::types::Device;

use crate::error::{CliError, Result};

/// Read one trimmed line from stdin. EOF is a cancellation.
fn read_line() -> Result<String> {
    let mut line = String::new();
    let n = io::stdin()
        .read_line(&mut line)
        .map_err(|_| CliError::Cancelled)?;

    if n == 0 {
        return Err(CliError::Cancelled);
    }

    Ok(line.trim().to_string())
}

/// Prompt for the cloud account email. Empty input cancels.
pub fn account() -> Result<String> {
    print!("Enter your Bambu Lab email: ");
    io::stdout().flush().ok();

    let account = read_line()?;
    if account.is_empty() {
        return Err(CliError::Cancelled);
    }

    Ok(account)
}

/// Prompt for the account password, masked.
pub fn password() -> Result<String> {
    rpassword::prompt_password("Enter your password: ").map_err(|_| CliError::Cancelled)
}

/// Numbered device picker. Caller guarantees a non-empty list; a single
/// device short-circuits the prompt.
pub fn pick_device(devices: &[Device]) -> Result<usize> {
    println!();
    println!("Available printers:");

    for (idx, device) in devices.iter().enumerate() {
        let status = if device.online { "Online" } else { "Offline" };
        println!(
            "{}. {} ({}) - {}",
            idx + 1,
            device.name,
            device.dev_product_name,
            status
        );
        println!("   Serial: {}", device.dev_id);
    }

    if devices.len() == 1 {
        return Ok(0);
    }

    print!("\nSelect a printer (1-{}): ", devices.len());
    io::stdout().flush().ok();

    let choice: usize = read_line()
        .map_err(|_| CliError::InvalidSelection)?
        .parse()
        .map_err(|_| CliError::InvalidSelection)?;

    if choice < 1 || choice > devices.len() {
        return Err(CliError::InvalidSelection);
    }

    Ok(choice - 1)
}
