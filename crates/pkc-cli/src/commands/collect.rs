//! `pkc collect` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pkc_attributes::{AttributeDescriptor, collect_form_attributes};
use serde_json::{Map, Value};

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Attribute group namespace within the form
    #[arg(long)]
    pub group: String,

    /// JSON file with the attribute descriptor list
    #[arg(long)]
    pub descriptors: PathBuf,

    /// JSON file with the raw form value bag
    #[arg(long)]
    pub values: PathBuf,

    /// Output canonical JSON without formatting
    #[arg(long)]
    pub raw: bool,
}

pub fn cmd_collect(args: &CollectArgs) -> Result<()> {
    let descriptors = fs::read_to_string(&args.descriptors)
        .with_context(|| format!("read {}", args.descriptors.display()))?;
    let descriptors: Vec<AttributeDescriptor> =
        serde_json::from_str(&descriptors).context("parse descriptor list")?;

    let values = fs::read_to_string(&args.values)
        .with_context(|| format!("read {}", args.values.display()))?;
    let values: Map<String, Value> = serde_json::from_str(&values).context("parse form values")?;

    let attributes = collect_form_attributes(&args.group, Some(&descriptors), &values);

    if args.raw {
        println!("{}", serde_json::to_string(&attributes)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&attributes)?);
    }

    Ok(())
}
