use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("outliner")
        .about("Convert markdown text to a nested outline paste format")
        .arg(
            Arg::new("input")
                .help("Input markdown file (reads stdin if omitted)")
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Dump the parsed line model as JSON instead of the outline"),
        )
        .get_matches();

    let text = match matches.get_one::<String>("input") {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if matches.get_flag("json") {
        let outline = outliner::OutlineParser.parse(&text);
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    let input = if text.is_empty() { None } else { Some(text.as_str()) };
    print!("{}", outliner::convert(input));

    Ok(())
}
