use std::{env, path::PathBuf, process};

use routegraph::{
    cli::handle_command,
    client::{CommandLineConfig, RouteClient},
    graph::RouteGraph,
    logging::init_tracing,
};

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let graph = match open_graph(&config) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let client = RouteClient::new(graph);
    match handle_command(&client, &config.command, &config.command_args) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {
            eprintln!("unknown command {}\n{}", config.command, CommandLineConfig::help());
            process::exit(2);
        }
        Err(err) => {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
    }
}

fn open_graph(config: &CommandLineConfig) -> Result<RouteGraph, String> {
    if config.database == "memory" {
        RouteGraph::open_in_memory().map_err(|e| e.to_string())
    } else {
        RouteGraph::open(PathBuf::from(&config.database)).map_err(|e| e.to_string())
    }
}
