//! `pkc validate` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use pkc_attributes::{AttributeDescriptor, validate_descriptor, validate_descriptors};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file with the attribute descriptor list
    #[arg(long)]
    pub descriptors: PathBuf,
}

pub fn cmd_validate(args: &ValidateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.descriptors)
        .with_context(|| format!("read {}", args.descriptors.display()))?;
    let descriptors: Vec<AttributeDescriptor> =
        serde_json::from_str(&raw).context("parse descriptor list")?;

    let mut failures = 0usize;
    for descriptor in &descriptors {
        match validate_descriptor(descriptor) {
            Ok(()) => println!("ok   {}", descriptor.name),
            Err(err) => {
                failures += 1;
                println!("FAIL {}: {err}", descriptor.name);
            }
        }
    }

    // Per-descriptor checks passed; the set itself may still be inconsistent.
    if failures == 0
        && let Err(err) = validate_descriptors(&descriptors)
    {
        failures += 1;
        println!("FAIL {err}");
    }

    if failures > 0 {
        bail!("{failures} descriptor check(s) failed");
    }
    println!("{} descriptor(s) valid", descriptors.len());
    Ok(())
}
