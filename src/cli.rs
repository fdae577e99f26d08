use serde_json::{Map, Value, json};

use crate::{
    RouteGraphError,
    client::RouteClient,
    graph::{Airport, Position, Route, RouteGraph},
    seed::seed_demo,
};

const ERR_PREFIX: &str = "cli";

/// Runs one command and returns its JSON output, or `None` for an unknown
/// command name.
pub fn handle_command(
    client: &RouteClient<RouteGraph>,
    command: &str,
    args: &[String],
) -> Result<Option<String>, RouteGraphError> {
    match command {
        "status" => run_status(client).map(Some),
        "seed" => run_seed(client).map(Some),
        "list" => run_list(client).map(Some),
        "check" => run_check(client).map(Some),
        "add-airport" => run_add_airport(client, args).map(Some),
        "add-route" => run_add_route(client, args).map(Some),
        "nth-node" => run_nth_node(client, args).map(Some),
        "longest-node" => run_longest_node(client, args).map(Some),
        "shortest-path" => run_shortest_path(client, args).map(Some),
        _ => Ok(None),
    }
}

fn run_status(client: &RouteClient<RouteGraph>) -> Result<String, RouteGraphError> {
    let graph = client.store();
    let mut object = command_object("status");
    object.insert("airports".into(), json!(graph.airport_count()?));
    object.insert("routes".into(), json!(graph.route_count()?));
    encode(object)
}

fn run_seed(client: &RouteClient<RouteGraph>) -> Result<String, RouteGraphError> {
    let stats = seed_demo(client.store())?;
    let mut object = command_object("seed");
    object.insert("airports_created".into(), json!(stats.airports_created));
    object.insert("routes_written".into(), json!(stats.routes_written));
    object.insert(
        "message".into(),
        Value::String("Seeded airports and routes".into()),
    );
    encode(object)
}

fn run_list(client: &RouteClient<RouteGraph>) -> Result<String, RouteGraphError> {
    let graph = client.store();
    let mut object = command_object("list");
    object.insert("airports".into(), to_value(&graph.airports()?)?);
    object.insert("routes".into(), to_value(&graph.routes()?)?);
    encode(object)
}

fn run_check(client: &RouteClient<RouteGraph>) -> Result<String, RouteGraphError> {
    let report = client.integrity()?;
    let mut object = command_object("check");
    object.insert("has_issues".into(), Value::Bool(report.has_issues()));
    object.insert("report".into(), to_value(&report)?);
    encode(object)
}

fn run_add_airport(
    client: &RouteClient<RouteGraph>,
    args: &[String],
) -> Result<String, RouteGraphError> {
    let airport = Airport::new(required_value(args, "--code")?, required_value(args, "--name")?);
    client.store().insert_airport(&airport)?;
    let mut object = command_object("add-airport");
    object.insert("airport".into(), to_value(&airport)?);
    encode(object)
}

fn run_add_route(
    client: &RouteClient<RouteGraph>,
    args: &[String],
) -> Result<String, RouteGraphError> {
    let route = Route::new(
        required_value(args, "--from")?,
        required_value(args, "--to")?,
        parse_position(args)?,
        parse_required_u32(args, "--duration")?,
    );
    client.store().insert_route(&route)?;
    let mut object = command_object("add-route");
    object.insert("route".into(), to_value(&route)?);
    object.insert(
        "message".into(),
        Value::String("Route added successfully.".into()),
    );
    encode(object)
}

fn run_nth_node(
    client: &RouteClient<RouteGraph>,
    args: &[String],
) -> Result<String, RouteGraphError> {
    let code = required_value(args, "--code")?;
    let position = parse_position(args)?;
    let steps = parse_required_u32(args, "--n")?;
    if steps == 0 {
        return Err(invalid("--n must be at least 1"));
    }
    let found = client.nth_node(&code, position, steps)?;
    let message = match &found {
        Some(airport) => format!("The {steps}th {position} node from {code} is {airport}."),
        None => "Node not found (path ended early or airport missing).".to_string(),
    };
    let mut object = command_object("nth-node");
    object.insert("code".into(), Value::String(code));
    object.insert("position".into(), Value::String(position.to_string()));
    object.insert("n".into(), json!(steps));
    object.insert("result".into(), to_value(&found)?);
    object.insert("message".into(), Value::String(message));
    encode(object)
}

fn run_longest_node(
    client: &RouteClient<RouteGraph>,
    args: &[String],
) -> Result<String, RouteGraphError> {
    let code = required_value(args, "--code")?;
    let found = client.longest_node(&code)?;
    let message = match &found {
        Some(airport) => format!("The longest node from {code} is {airport}."),
        None => "No outgoing routes found or airport missing.".to_string(),
    };
    let mut object = command_object("longest-node");
    object.insert("code".into(), Value::String(code));
    object.insert("result".into(), to_value(&found)?);
    object.insert("message".into(), Value::String(message));
    encode(object)
}

fn run_shortest_path(
    client: &RouteClient<RouteGraph>,
    args: &[String],
) -> Result<String, RouteGraphError> {
    let from = required_value(args, "--from")?;
    let to = required_value(args, "--to")?;
    let found = client.shortest_path(&from, &to)?;
    let message = match &found {
        Some(path) => format!(
            "Shortest distance: {} km. Path: {}",
            path.distance,
            path.path.join(" -> ")
        ),
        None => "No path found between the given airports.".to_string(),
    };
    let mut object = command_object("shortest-path");
    object.insert("from".into(), Value::String(from));
    object.insert("to".into(), Value::String(to));
    object.insert("result".into(), to_value(&found)?);
    object.insert("message".into(), Value::String(message));
    encode(object)
}

fn parse_position(args: &[String]) -> Result<Position, RouteGraphError> {
    required_value(args, "--position")?.parse()
}

fn parse_required_u32(args: &[String], flag: &str) -> Result<u32, RouteGraphError> {
    let value = required_value(args, flag)?;
    value
        .parse::<u32>()
        .map_err(|_| invalid(format!("{flag} expects a non-negative integer")))
}

fn required_value(args: &[String], flag: &str) -> Result<String, RouteGraphError> {
    value(args, flag).ok_or_else(|| invalid(format!("missing {flag}")))
}

fn value(args: &[String], flag: &str) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().cloned();
        }
    }
    None
}

fn command_object(command: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("command".into(), Value::String(command.into()));
    object
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, RouteGraphError> {
    serde_json::to_value(value)
        .map_err(|e| invalid(format!("{ERR_PREFIX} serialization failed: {e}")))
}

fn encode(object: Map<String, Value>) -> Result<String, RouteGraphError> {
    serde_json::to_string(&Value::Object(object))
        .map_err(|e| invalid(format!("{ERR_PREFIX} serialization failed: {e}")))
}

fn invalid<T: Into<String>>(message: T) -> RouteGraphError {
    RouteGraphError::invalid_input(message.into())
}
