// crates/idfix-cli/src/cmd/check.rs

use clap::Args;
use idfix_core::{AnnotationStyle, Config, Outcome, Policy};

use crate::io::{config_file, text_file};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input JSON path ("-" or omitted reads stdin)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Write the corrected JSON here instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Write the annotated original text here instead of stdout
    #[arg(long)]
    pub annotated: Option<String>,

    /// Allowed id characters: permissive (a-z 0-9 _) or strict (a-z _)
    #[arg(long)]
    pub policy: Option<Policy>,

    /// Annotation marker: html or plain
    #[arg(long)]
    pub style: Option<AnnotationStyle>,

    /// TOML config (policy / style / fail_on_issues); flags win over file values
    #[arg(long)]
    pub config: Option<String>,

    /// Exit non-zero when any id was flagged
    #[arg(long, default_value_t = false)]
    pub fail_on_issues: bool,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let raw = text_file::read_input(args.r#in.as_deref())?;

    let outcome = idfix_core::run(&raw, &config)?;

    print_report(&outcome);

    if let Some(annotated) = &outcome.annotated {
        match &args.annotated {
            Some(path) => {
                text_file::write_output(path, annotated)?;
                eprintln!("annotated ok: out={path}");
            }
            None => {
                println!();
                println!("--- annotated ---");
                println!("{annotated}");
            }
        }
    }

    match &args.out {
        Some(path) => {
            text_file::write_output(path, &outcome.corrected_json)?;
            eprintln!("corrected ok: out={path}");
        }
        None => {
            println!();
            println!("--- corrected ---");
            println!("{}", outcome.corrected_json);
        }
    }

    if config.fail_on_issues && !outcome.is_clean() {
        anyhow::bail!("{} id(s) with issues", outcome.reasons.len());
    }
    Ok(())
}

fn resolve_config(args: &CheckArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => config_file::load_toml(path)?,
        None => Config::default(),
    };
    if let Some(p) = args.policy {
        config.policy = p;
    }
    if let Some(s) = args.style {
        config.style = s;
    }
    if args.fail_on_issues {
        config.fail_on_issues = true;
    }
    Ok(config)
}

fn print_report(o: &Outcome) {
    println!("--- check ---");
    println!("entries   = {}", o.entries);
    println!("ids       = {}", o.checked);
    println!("flagged   = {}", o.reasons.len());

    if o.is_clean() {
        println!("All IDs look good!");
        return;
    }

    println!("Invalid or Duplicate IDs Found");
    for (original, reason) in o.reasons.iter() {
        println!("  {original:?}: {reason}");
    }
}
