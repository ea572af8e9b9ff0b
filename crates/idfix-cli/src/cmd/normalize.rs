use clap::Args;
use idfix_core::{normalize, Policy};

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// permissive (a-z 0-9 _) or strict (a-z _)
    #[arg(long, default_value_t = Policy::Permissive)]
    pub policy: Policy,

    /// Ids to normalize
    #[arg(required = true)]
    pub ids: Vec<String>,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    for id in &args.ids {
        let canonical = normalize(id, args.policy);
        if canonical.is_empty() {
            tracing::warn!(%id, policy = %args.policy, "id normalizes to an empty string");
        }
        println!("{id:?} -> {canonical:?}");
    }
    Ok(())
}
