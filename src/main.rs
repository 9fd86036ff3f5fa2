use anyhow::Result;
use clap::{Arg, Command};
use std::fs;
use std::sync::Arc;

use opdoc::model::document;
use opdoc::renderer::{OperationComposer, RenderContext, RenderPolicy, TextRenderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("opdoc")
        .about("Render an API operation description as a progressively-disclosed text view")
        .arg(
            Arg::new("input")
                .help("Operation description JSON file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .help("How many disclosure levels to expand before printing")
                .value_parser(clap::value_parser!(usize))
                .default_value("2"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let depth = *matches.get_one::<usize>("depth").unwrap();

    // Read and parse the operation document
    let json_content = fs::read_to_string(input_file)?;
    let (operation, graph) = document::from_json(&json_content)?;

    // Compose the view and expand it to the requested depth
    let context = RenderContext::new(Arc::new(graph), Arc::new(RenderPolicy::default()));
    let composer = OperationComposer::new();
    let mut nodes = composer.compose(&operation, &context);

    let text = TextRenderer;
    text.expand_to_depth(&mut nodes, depth);
    print!("{}", text.render(&nodes));

    Ok(())
}
