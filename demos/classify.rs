use std::env;

use idnum::registry;

fn main() {
    // Classify numbers passed on the command line, or a demo set.
    let args: Vec<String> = env::args().skip(1).collect();
    let numbers: Vec<String> = if args.is_empty() {
        [
            "83 914 571 673",
            "FR 46 443 121 975",
            "US0378331005",
            "DE89 3704 0044 0532 0130 00",
            "IMO 9319466",
            "404833048",
            "not a number",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    println!("=== Identifier Classification ===\n");

    for number in &numbers {
        let matches = registry::guess(number);
        if matches.is_empty() {
            println!("  {number:32} => no scheme matches");
            continue;
        }
        for scheme in matches {
            let canonical = (scheme.validate)(number).unwrap();
            let tag = if scheme.country.is_empty() {
                scheme.kind.to_string()
            } else {
                format!("{}:{}", scheme.country, scheme.kind)
            };
            println!(
                "  {number:32} => {tag:16} {} ({})",
                canonical, scheme.name
            );
        }
    }

    println!("\n{} schemes registered.", registry::all().count());
}
