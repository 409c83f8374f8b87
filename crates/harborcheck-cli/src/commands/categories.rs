//! Categories command - list the taxonomy.

use colored::Colorize;
use harborcheck::Taxonomy;
use serde_json::json;

pub fn run(json: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let taxonomy = Taxonomy::safe_harbor();

    if json {
        let rules: Vec<_> = taxonomy
            .rules()
            .iter()
            .map(|rule| {
                json!({
                    "category": rule.category().label(),
                    "labels": rule.labels(),
                    "pattern": rule.pattern().map(|p| p.name()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(0);
    }

    for rule in taxonomy.rules() {
        let detection = match rule.pattern() {
            Some(pattern) => format!("labels + {} values", pattern.name()),
            None => "labels only".to_string(),
        };
        println!("{}  ({})", rule.category().label().cyan().bold(), detection);

        for label in rule.labels() {
            if label.tolerance == 0 {
                println!("    {}", label.text);
            } else {
                println!("    {} (within {} edits)", label.text, label.tolerance);
            }
        }
        println!();
    }

    Ok(0)
}
