// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regex_shape::{FoldedArguments, InferenceOptions, MatchShapeInferrer, Scalar};

fn regex_keys(pattern: String) -> Result<()> {
    let keys = regex_shape::get_group_keys(&pattern)
        .with_context(|| format!("Failed to extract groups of {pattern}"))?;
    println!("{:?}", keys.as_slice());
    Ok(())
}

fn regex_infer(
    pattern: Option<String>,
    flags: Option<String>,
    options: Option<String>,
    json: bool,
) -> Result<()> {
    let options = match options {
        Some(file) => {
            let contents =
                std::fs::read_to_string(&file).with_context(|| format!("Failed to read {file}"))?;
            InferenceOptions::from_json_str(&contents)?
        }
        None => InferenceOptions::default(),
    };

    // Arguments that are not given are treated as not statically known.
    let len = options.pattern_argument.max(options.flags_argument) + 1;
    let mut args: Vec<Option<Scalar>> = vec![None; len];
    args[options.pattern_argument] = pattern.map(Scalar::from);
    match flags {
        Some(flags) if flags == "?" => (),
        Some(flags) => {
            let bits: i64 = flags
                .parse()
                .with_context(|| format!("Invalid flags {flags}"))?;
            args[options.flags_argument] = Some(Scalar::Int(bits));
        }
        None if options.flags_argument > options.pattern_argument => {
            args.truncate(options.flags_argument)
        }
        None => args[options.flags_argument] = Some(Scalar::Int(0)),
    }

    let shape = MatchShapeInferrer::new(options).infer(&args, &FoldedArguments);
    if json {
        println!("{}", serde_json::to_string_pretty(&shape)?);
    } else {
        println!("{shape}");
    }
    Ok(())
}

#[derive(Subcommand)]
enum RegexShapeCommand {
    /// Print the capture group keys of a delimited pattern.
    Keys {
        /// Pattern literal, e.g. '/(a)(b)/i'.
        pattern: String,
    },

    /// Infer the type of the preg_match matches array.
    Infer {
        /// Pattern literal. Omit to model a pattern that is not statically known.
        pattern: Option<String>,

        /// Flags integer, or `?` for flags that are not statically known.
        #[arg(long, short)]
        flags: Option<String>,

        /// JSON file with inference options.
        #[arg(long, short, value_name = "options.json")]
        options: Option<String>,

        /// Print the shape as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: RegexShapeCommand,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        RegexShapeCommand::Keys { pattern } => regex_keys(pattern),
        RegexShapeCommand::Infer {
            pattern,
            flags,
            options,
            json,
        } => regex_infer(pattern, flags, options, json),
    }
}
