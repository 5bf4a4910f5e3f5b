use clap::Args;

use cull_rules::RuleSet;

use crate::output;

#[derive(Args)]
pub struct RulesArgs {
    /// Directory whose ignore file is consulted
    #[arg(long, default_value = ".")]
    root: String,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RulesArgs) -> anyhow::Result<()> {
    let rules = RuleSet::from_file(&args.root)?;

    if args.json {
        let entries: Vec<serde_json::Value> = rules
            .patterns()
            .iter()
            .map(|pattern| {
                serde_json::json!({
                    "text": pattern.text(),
                    "negated": pattern.negated(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "root": rules.root(),
            "rules": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", output::header("ignore rules"));
    println!("{}", output::kv("root", rules.root()));
    println!();
    for pattern in rules.patterns() {
        let flag = if pattern.negated() { "!" } else { " " };
        println!("  {flag} {}", pattern.text());
    }
    Ok(())
}
