//! Reusable filter configuration through `Melter`.

use anyhow::{Result, ensure};
use melting::filter::{by_name, from_fn};
use melting::{ExcludeFields, FieldDescriptor, FieldFilter, FieldFilterExt, Melt, Melter, OnlyFields};
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq, Melt)]
struct Server {
    host: String,
    port: u16,
}

#[derive(Debug, Clone, PartialEq, Melt)]
struct Database {
    host: String,
    pool: u32,
}

#[derive(Debug, Clone, PartialEq, Melt)]
struct Settings {
    name: String,
    server: Server,
    database: Database,
}

#[fixture]
fn update() -> Settings {
    Settings {
        name: "edge".into(),
        server: Server {
            host: "example.org".into(),
            port: 8443,
        },
        database: Database {
            host: "db.example.org".into(),
            pool: 32,
        },
    }
}

#[fixture]
fn live() -> Settings {
    Settings {
        name: "core".into(),
        server: Server {
            host: "localhost".into(),
            port: 8080,
        },
        database: Database {
            host: "localhost".into(),
            pool: 4,
        },
    }
}

#[rstest]
fn empty_melter_merges_everything(update: Settings, mut live: Settings) -> Result<()> {
    Melter::new().melt(&update, &mut live)?;
    ensure!(live == update, "all fields must be merged");
    Ok(())
}

#[rstest]
fn exclude_skips_name_everywhere(update: Settings, mut live: Settings) -> Result<()> {
    Melter::new().exclude(["host"]).melt(&update, &mut live)?;
    ensure!(live.server.host == "localhost", "server.host excluded");
    ensure!(live.database.host == "localhost", "database.host excluded");
    ensure!(live.server.port == 8443, "server.port merged");
    ensure!(live.database.pool == 32, "database.pool merged");
    Ok(())
}

#[rstest]
fn exclude_paths_skips_one_location(update: Settings, mut live: Settings) -> Result<()> {
    Melter::new()
        .exclude_paths(["server.host", "database"])
        .melt(&update, &mut live)?;
    ensure!(live.name == "edge", "name merged");
    ensure!(live.server.host == "localhost", "server.host excluded");
    ensure!(live.server.port == 8443, "server.port merged");
    ensure!(live.database.host == "localhost", "database subtree excluded");
    ensure!(live.database.pool == 4, "database subtree excluded");
    Ok(())
}

#[rstest]
fn every_filter_must_approve(update: Settings, mut live: Settings) -> Result<()> {
    // `only` must admit the records on the way down as well as the leaves.
    Melter::new()
        .only(["server", "port", "host"])
        .exclude_paths(["server.host"])
        .melt(&update, &mut live)?;
    ensure!(live.name == "core", "name not in allow list");
    ensure!(live.server.host == "localhost", "excluded by path");
    ensure!(live.server.port == 8443, "approved by both filters");
    ensure!(live.database.host == "localhost", "database not in allow list");
    Ok(())
}

fn leaves_only(
    source: &FieldDescriptor<'_>,
    _destination: &FieldDescriptor<'_>,
    _source_value: &dyn Melt,
    _destination_value: &dyn Melt,
) -> bool {
    !source.is_record()
}

#[rstest]
fn custom_filters_compose(update: Settings, mut live: Settings) -> Result<()> {
    let melter = Melter::new()
        .filter(OnlyFields::new(["name"]).or(by_name(|name| name == "server")))
        .filter(by_name(|name| name != "port"));
    melter.melt(&update, &mut live)?;
    ensure!(live.name == "edge", "name allowed");
    ensure!(live.server.host == "localhost", "host not allowed below server");
    ensure!(live.server.port == 8080, "port excluded");

    let mut fresh = live.clone();
    Melter::new().filter(from_fn(leaves_only)).melt(&update, &mut fresh)?;
    ensure!(fresh.name == "edge", "top-level leaf merged");
    ensure!(fresh.server == live.server, "record fields rejected");
    Ok(())
}

#[rstest]
fn borrowed_filters_are_shared(update: Settings, mut live: Settings) -> Result<()> {
    let no_hosts = ExcludeFields::new(["host"]);
    let melter = Melter::new()
        .filter(&no_hosts)
        .filter(ExcludeFields::new(["pool"]).and(&no_hosts));
    melter.melt(&update, &mut live)?;
    ensure!(live.server.host == "localhost", "host excluded by the lent filter");
    ensure!(live.database.pool == 4, "pool excluded by the combined filter");
    ensure!(live.server.port == 8443, "port merged");

    let boxed: Box<dyn FieldFilter + Send + Sync> = Box::new(ExcludeFields::new(["host"]));
    let mut fresh = update.clone();
    fresh.name = "fresh".into();
    Melter::new().filter(boxed).melt(&update, &mut fresh)?;
    ensure!(fresh == update, "boxed filter only rejects host fields");
    Ok(())
}

#[rstest]
fn melter_is_reusable(update: Settings, mut live: Settings) -> Result<()> {
    let melter = Melter::new().exclude(["pool"]);
    let mut other = live.clone();
    melter.melt(&update, &mut live)?;
    melter.melt(&update, &mut other)?;
    ensure!(live == other, "same configuration, same result");
    ensure!(live.database.pool == 4, "pool excluded");
    Ok(())
}
