use crate::{
    errors::RouteGraphError,
    graph::{Airport, Position, RoutePath},
    query::RouteQuery,
    safety::{IntegrityReport, check_integrity},
    store::RouteStore,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub database: String,
    pub command: String,
    pub command_args: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut database = String::from("memory");
        let mut command = String::from("status");
        let mut command_args = Vec::new();
        let mut command_set = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if command_set {
                command_args.push(arg.to_string());
                continue;
            }
            match *arg {
                "--db" | "--database" => {
                    database = iter
                        .next()
                        .ok_or_else(|| "--db requires a value".to_string())?
                        .to_string();
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                    command_set = true;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                    command_set = true;
                }
            }
        }
        Ok(Self {
            database,
            command,
            command_args,
        })
    }

    pub fn help() -> &'static str {
        "Usage: routegraph [--db memory|PATH] [--command] COMMAND [ARGS]\n\
         \n\
         Commands:\n\
         \x20 status\n\
         \x20 seed\n\
         \x20 list\n\
         \x20 check\n\
         \x20 add-airport --code CODE --name NAME\n\
         \x20 add-route --from CODE --to CODE --position left|right --duration N\n\
         \x20 nth-node --code CODE --position left|right --n N\n\
         \x20 longest-node --code CODE\n\
         \x20 shortest-path --from CODE --to CODE\n\
         \n\
         Set ROUTEGRAPH_LOG (e.g. routegraph=debug) for diagnostics on stderr.\n"
    }
}

/// Owns a store and exposes the query surface over it.
pub struct RouteClient<S> {
    store: S,
}

impl<S> RouteClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> RouteClient<S>
where
    S: RouteStore,
{
    pub fn nth_node(
        &self,
        start: &str,
        position: Position,
        steps: u32,
    ) -> Result<Option<Airport>, RouteGraphError> {
        RouteQuery::new(&self.store).nth_node(start, position, steps)
    }

    pub fn longest_node(&self, start: &str) -> Result<Option<Airport>, RouteGraphError> {
        RouteQuery::new(&self.store).longest_node(start)
    }

    pub fn shortest_path(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<RoutePath>, RouteGraphError> {
        RouteQuery::new(&self.store).shortest_path(from, to)
    }

    pub fn integrity(&self) -> Result<IntegrityReport, RouteGraphError> {
        check_integrity(&self.store)
    }
}
