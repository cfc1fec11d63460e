// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Project automation for apda-tab.
//!
//! `cargo test` only ever touches in-memory `SQLite`. Everything that needs a
//! real `MariaDB` server is opt-in and lives here:
//!
//! - `cargo xtask test-mariadb` runs the ignored backend validation tests in
//!   `apda-tab-persistence` against a throwaway `MariaDB` 11 container.
//! - `cargo xtask verify-migrations` applies both migration trees and fails
//!   if the resulting schemas differ in tables, columns, keys, views or
//!   triggers.
//!
//! Containers are removed when the command finishes, whether it passed or
//! not.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::collections::{BTreeMap, BTreeSet};
use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context, eyre::eyre};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const SQLITE_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("../crates/persistence/migrations");
const MYSQL_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("../crates/persistence/migrations_mysql");

/// Stored procedures that only the `MySQL` migrations define.
const MYSQL_PROCEDURES: [&str; 2] = ["AddTournament", "AssignJudgeToTournament"];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, schema parity)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependencies
    #[command(visible_alias = "cd")]
    Deny,

    /// Check unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos in the project
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Run `MariaDB` backend validation tests
    #[command(visible_alias = "tm")]
    TestMariadb,

    /// Verify schema parity between `SQLite` and `MySQL` migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Coverage => coverage(),
            Self::Deny => deny(),
            Self::Machete => machete(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::TestMariadb => test_mariadb(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, schema parity)
fn ci() -> Result<()> {
    lint()?;
    deny()?;
    machete()?;
    build()?;
    test()?;
    test_mariadb()?;
    verify_migrations()?;
    Ok(())
}

fn deny() -> Result<()> {
    run_cargo(vec!["deny", "check"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Generate code coverage report
fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint clippy, docs, formatting and typos
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Check for typos using [typos-cli](https://github.com/crate-ci/typos/)
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Run lib tests, then doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?;
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// A `MariaDB` 11 container started for one xtask command.
///
/// The container is stopped and removed on drop, so every exit path of the
/// owning command cleans up after itself.
struct MariadbContainer {
    name: &'static str,
    database: &'static str,
    user: &'static str,
    password: &'static str,
    port: u16,
}

impl MariadbContainer {
    const READY_ATTEMPTS: u32 = 30;

    /// Starts the container and waits until it accepts queries.
    fn start(
        name: &'static str,
        database: &'static str,
        password: &'static str,
        port: u16,
    ) -> Result<Self> {
        use std::thread::sleep;
        use std::time::Duration;

        tracing::info!("Checking Docker availability");
        cmd!("docker", "--version")
            .run_with_trace()
            .wrap_err("Docker is not available. Please install Docker.")?;

        Self::remove(name);

        tracing::info!("Starting MariaDB container: {}", name);
        let container = Self {
            name,
            database,
            user: "apda",
            password,
            port,
        };

        cmd!(
            "docker",
            "run",
            "--name",
            container.name,
            "-e",
            format!("MARIADB_DATABASE={}", container.database),
            "-e",
            format!("MARIADB_USER={}", container.user),
            "-e",
            format!("MARIADB_PASSWORD={}", container.password),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{}:3306", container.port),
            "-d",
            "mariadb:11"
        )
        .run_with_trace()
        .wrap_err("Failed to start MariaDB container")?;

        tracing::info!("Waiting for MariaDB to be ready...");
        for attempt in 1..=Self::READY_ATTEMPTS {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {}/{}", attempt, Self::READY_ATTEMPTS);

            let probe = cmd!(
                "docker",
                "exec",
                container.name,
                "mariadb",
                "-u",
                container.user,
                format!("-p{}", container.password),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();

            if probe.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(container);
            }
        }

        // `container` drops here and removes itself.
        Err(eyre!("MariaDB did not become ready within timeout"))
    }

    fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.port, self.database
        )
    }

    fn remove(name: &str) {
        let _ = cmd!("docker", "stop", name)
            .stdout_null()
            .stderr_null()
            .run();
        let _ = cmd!("docker", "rm", name).stdout_null().stderr_null().run();
    }
}

impl Drop for MariadbContainer {
    fn drop(&mut self) {
        tracing::info!("Removing MariaDB container: {}", self.name);
        Self::remove(self.name);
    }
}

/// Run `MariaDB` backend validation tests
///
/// Starts a `MariaDB` 11 container on port 3307 and runs the ignored
/// `backend_validation_tests` of `apda-tab-persistence` against it, with
/// `DATABASE_URL` pointing at the container and `APDA_TEST_BACKEND=mariadb`.
///
/// These tests cover what only a real server can show: the migrations
/// applying cleanly, the `AddTournament` and `AssignJudgeToTournament`
/// procedures, the duplicate-assignment trigger, `ENUM` rejection, cascades,
/// the views, and rollback.
///
/// ## Requirements
///
/// - Docker must be installed and running
/// - Port 3307 must be free
/// - `MySQL` client libraries must be available for compilation
fn test_mariadb() -> Result<()> {
    tracing::info!("Starting MariaDB backend validation");

    let container =
        MariadbContainer::start("apda-tab-test-mariadb", "apda_test", "test_password", 3307)?;

    // Filter to the backend module so only the ignored MariaDB tests run
    tracing::info!("Running MariaDB backend validation tests");
    cmd!(
        "cargo",
        "test",
        "--package",
        "apda-tab-persistence",
        "backend_validation_tests",
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", container.database_url())
    .env("APDA_TEST_BACKEND", "mariadb")
    .run_with_trace()
    .wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation completed successfully");
    Ok(())
}

/// Verify schema parity between `SQLite` and `MySQL` migrations
///
/// Applies `migrations/` to an in-memory `SQLite` database and
/// `migrations_mysql/` to a `MariaDB` container on port 3308, introspects
/// both, and compares:
///
/// - tables, columns, normalized column types and nullability
/// - primary keys, foreign keys, unique constraints and indexes
/// - view and trigger names
///
/// `MySQL` is additionally required to define the stored procedures, which
/// have no `SQLite` equivalent.
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting schema parity verification");

    let container = MariadbContainer::start(
        "apda-tab-verify-migrations",
        "apda_verify",
        "verify_password",
        3308,
    )?;

    tracing::info!("Applying SQLite migrations");
    let mut sqlite_conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut sqlite_conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;
    sqlite_conn
        .run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply SQLite migrations: {}", e))?;

    tracing::info!("Applying MySQL migrations");
    let mut mysql_conn = MysqlConnection::establish(&container.database_url())
        .wrap_err("Failed to connect to MariaDB")?;
    mysql_conn
        .run_pending_migrations(MYSQL_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply MySQL migrations: {}", e))?;

    tracing::info!("Introspecting SQLite schema");
    let sqlite_schema = introspect_sqlite_schema(&mut sqlite_conn)?;

    tracing::info!("Introspecting MySQL schema");
    let mysql_schema = introspect_mysql_schema(&mut mysql_conn, container.database)?;

    tracing::info!("Comparing schemas");
    compare_schemas(&sqlite_schema, &mysql_schema)?;
    check_mysql_procedures(&mut mysql_conn, container.database)?;

    tracing::info!("✓ Schema parity verification passed");
    Ok(())
}

/// Normalized schema representation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
    views: BTreeSet<String>,
    triggers: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Table {
    columns: BTreeMap<String, Column>,
    primary_keys: BTreeSet<String>,
    foreign_keys: BTreeSet<ForeignKey>,
    unique_constraints: BTreeSet<Vec<String>>,
    /// Column lists of non-unique indexes. Names differ between backends.
    indexes: BTreeSet<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    normalized_type: &'static str,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ForeignKey {
    from_column: String,
    to_table: String,
    to_column: String,
}

#[derive(QueryableByName)]
struct ObjectName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    let objects_of_type = |conn: &mut SqliteConnection, kind: &str| -> Result<Vec<String>> {
        let rows: Vec<ObjectName> = diesel::sql_query(
            "SELECT name FROM sqlite_master \
             WHERE type = ? AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' \
             ORDER BY name",
        )
        .bind::<Text, _>(kind)
        .load(conn)
        .wrap_err_with(|| format!("Failed to list SQLite {kind} objects"))?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    };

    let mut schema = Schema {
        views: objects_of_type(conn, "view")?.into_iter().collect(),
        triggers: objects_of_type(conn, "trigger")?.into_iter().collect(),
        ..Schema::default()
    };

    for table_name in objects_of_type(conn, "table")? {
        let mut table = Table::default();

        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info(\"{table_name}\")"))
                .load(conn)
                .wrap_err_with(|| format!("Failed to get columns for table {table_name}"))?;

        for col in columns {
            if col.pk > 0 {
                table.primary_keys.insert(col.name.clone());
            }
            table.columns.insert(
                col.name,
                Column {
                    normalized_type: normalize_sqlite_type(&col.r#type),
                    nullable: col.notnull == 0 && col.pk == 0,
                },
            );
        }

        let fks: Vec<ForeignKeyInfo> =
            diesel::sql_query(format!("PRAGMA foreign_key_list(\"{table_name}\")"))
                .load(conn)
                .wrap_err_with(|| format!("Failed to get foreign keys for table {table_name}"))?;

        table
            .foreign_keys
            .extend(fks.into_iter().map(|fk| ForeignKey {
                from_column: fk.from,
                to_table: fk.table,
                to_column: fk.to,
            }));

        let indexes: Vec<IndexInfo> =
            diesel::sql_query(format!("PRAGMA index_list(\"{table_name}\")"))
                .load(conn)
                .wrap_err_with(|| format!("Failed to get indexes for table {table_name}"))?;

        for idx in indexes {
            // Primary key autoindexes are covered by `primary_keys`
            if idx.origin == "pk" {
                continue;
            }

            let index_columns: Vec<ObjectName> =
                diesel::sql_query(format!("PRAGMA index_info(\"{}\")", idx.name))
                    .load(conn)
                    .wrap_err_with(|| format!("Failed to get index columns for {}", idx.name))?;
            let column_names: Vec<String> = index_columns.into_iter().map(|c| c.name).collect();

            if idx.origin == "u" {
                table.unique_constraints.insert(column_names);
            } else {
                table.indexes.insert(column_names);
            }
        }

        schema.tables.insert(table_name, table);
    }

    Ok(schema)
}

/// Introspect `MySQL` schema
#[allow(clippy::too_many_lines)]
fn introspect_mysql_schema(conn: &mut MysqlConnection, db_name: &str) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        data_type: String,
        #[diesel(sql_type = Text)]
        is_nullable: String,
        #[diesel(sql_type = Text)]
        column_key: String,
    }

    #[derive(QueryableByName)]
    #[allow(clippy::struct_field_names)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        referenced_table_name: String,
        #[diesel(sql_type = Text)]
        referenced_column_name: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        index_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Integer)]
        non_unique: i32,
    }

    let names = |conn: &mut MysqlConnection, query: &str, what: &str| -> Result<Vec<String>> {
        let rows: Vec<ObjectName> = diesel::sql_query(query)
            .bind::<Text, _>(db_name)
            .load(conn)
            .wrap_err_with(|| format!("Failed to query MySQL {what}"))?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    };

    // Views also appear in information_schema.tables
    let table_names: Vec<String> = names(
        conn,
        "SELECT table_name AS name FROM information_schema.tables \
         WHERE table_schema = ? AND table_type = 'BASE TABLE' \
           AND table_name != '__diesel_schema_migrations' \
         ORDER BY table_name",
        "tables",
    )?;

    let mut schema = Schema {
        views: names(
            conn,
            "SELECT table_name AS name FROM information_schema.views WHERE table_schema = ?",
            "views",
        )?
        .into_iter()
        .collect(),
        triggers: names(
            conn,
            "SELECT trigger_name AS name FROM information_schema.triggers WHERE trigger_schema = ?",
            "triggers",
        )?
        .into_iter()
        .collect(),
        ..Schema::default()
    };

    for table_name in table_names {
        let mut table = Table::default();

        let columns: Vec<ColumnInfo> = diesel::sql_query(
            "SELECT column_name, data_type, is_nullable, column_key FROM information_schema.columns \
             WHERE table_schema = ? AND table_name = ? ORDER BY ordinal_position",
        )
        .bind::<Text, _>(db_name)
        .bind::<Text, _>(&table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to get columns for table {table_name}"))?;

        for col in columns {
            if col.column_key == "PRI" {
                table.primary_keys.insert(col.column_name.clone());
            }
            table.columns.insert(
                col.column_name,
                Column {
                    normalized_type: normalize_mysql_type(&col.data_type),
                    nullable: col.is_nullable == "YES",
                },
            );
        }

        let fks: Vec<ForeignKeyInfo> = diesel::sql_query(
            "SELECT column_name, referenced_table_name, referenced_column_name \
             FROM information_schema.key_column_usage \
             WHERE table_schema = ? AND table_name = ? AND referenced_table_name IS NOT NULL \
             ORDER BY column_name",
        )
        .bind::<Text, _>(db_name)
        .bind::<Text, _>(&table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to get foreign keys for table {table_name}"))?;

        table
            .foreign_keys
            .extend(fks.into_iter().map(|fk| ForeignKey {
                from_column: fk.column_name,
                to_table: fk.referenced_table_name,
                to_column: fk.referenced_column_name,
            }));

        let indexes: Vec<IndexInfo> = diesel::sql_query(
            "SELECT index_name, column_name, non_unique FROM information_schema.statistics \
             WHERE table_schema = ? AND table_name = ? AND index_name != 'PRIMARY' \
             ORDER BY index_name, seq_in_index",
        )
        .bind::<Text, _>(db_name)
        .bind::<Text, _>(&table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to get indexes for table {table_name}"))?;

        // (unique, columns) grouped by index name
        let mut index_map: BTreeMap<String, (bool, Vec<String>)> = BTreeMap::new();
        for idx in indexes {
            index_map
                .entry(idx.index_name)
                .or_insert_with(|| (idx.non_unique == 0, Vec::new()))
                .1
                .push(idx.column_name);
        }

        for (unique, columns) in index_map.into_values() {
            if unique {
                table.unique_constraints.insert(columns);
            } else {
                table.indexes.insert(columns);
            }
        }

        schema.tables.insert(table_name, table);
    }

    Ok(schema)
}

/// Normalize `SQLite` declared type to a common representation
fn normalize_sqlite_type(sqlite_type: &str) -> &'static str {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer"
    } else if normalized.contains("TEXT")
        || normalized.contains("CHAR")
        || normalized.contains("CLOB")
    {
        "text"
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
        || normalized.starts_with("DEC")
        || normalized.starts_with("NUMERIC")
    {
        "real"
    } else if normalized == "DATE" {
        "date"
    } else if normalized.contains("BLOB") {
        "blob"
    } else {
        "text"
    }
}

/// Normalize `MySQL` `data_type` to a common representation
#[allow(clippy::match_same_arms)]
fn normalize_mysql_type(mysql_type: &str) -> &'static str {
    match mysql_type.to_uppercase().as_str() {
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => "integer",
        "DECIMAL" | "NUMERIC" | "FLOAT" | "DOUBLE" | "REAL" => "real",
        "DATE" => "date",
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" => "text",
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => "blob",
        _ => "text",
    }
}

/// Formats the two-way difference of a name set for an error message.
fn set_difference<T: Ord + Debug>(
    what: &str,
    sqlite: &BTreeSet<T>,
    mysql: &BTreeSet<T>,
) -> String {
    let mut errors = Vec::new();
    for item in sqlite.difference(mysql) {
        errors.push(format!("  - {what} {item:?} exists in SQLite but not in MySQL"));
    }
    for item in mysql.difference(sqlite) {
        errors.push(format!("  - {what} {item:?} exists in MySQL but not in SQLite"));
    }
    errors.join("\n")
}

/// Compare schemas and fail on mismatch
fn compare_schemas(sqlite_schema: &Schema, mysql_schema: &Schema) -> Result<()> {
    let sqlite_tables: BTreeSet<&String> = sqlite_schema.tables.keys().collect();
    let mysql_tables: BTreeSet<&String> = mysql_schema.tables.keys().collect();

    if sqlite_tables != mysql_tables {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Table mismatch\n{}",
            set_difference("Table", &sqlite_tables, &mysql_tables)
        ));
    }

    if sqlite_schema.views != mysql_schema.views {
        return Err(eyre!(
            "❌ Schema parity check FAILED: View mismatch\n{}",
            set_difference("View", &sqlite_schema.views, &mysql_schema.views)
        ));
    }

    if sqlite_schema.triggers != mysql_schema.triggers {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Trigger mismatch\n{}",
            set_difference("Trigger", &sqlite_schema.triggers, &mysql_schema.triggers)
        ));
    }

    for table_name in sqlite_tables {
        compare_tables(
            table_name,
            &sqlite_schema.tables[table_name],
            &mysql_schema.tables[table_name],
        )?;
    }

    Ok(())
}

fn compare_tables(table_name: &str, sqlite_table: &Table, mysql_table: &Table) -> Result<()> {
    let sqlite_columns: BTreeSet<&String> = sqlite_table.columns.keys().collect();
    let mysql_columns: BTreeSet<&String> = mysql_table.columns.keys().collect();

    if sqlite_columns != mysql_columns {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Column mismatch in table '{}'\n{}",
            table_name,
            set_difference("Column", &sqlite_columns, &mysql_columns)
        ));
    }

    for col_name in sqlite_columns {
        let sqlite_col = &sqlite_table.columns[col_name];
        let mysql_col = &mysql_table.columns[col_name];

        if sqlite_col != mysql_col {
            return Err(eyre!(
                "❌ Schema parity check FAILED: Column '{}.{}' differs\n  SQLite: {:?}\n  MySQL: {:?}",
                table_name,
                col_name,
                sqlite_col,
                mysql_col
            ));
        }
    }

    if sqlite_table.primary_keys != mysql_table.primary_keys {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Primary key mismatch in table '{}'\n  SQLite: {:?}\n  MySQL: {:?}",
            table_name,
            sqlite_table.primary_keys,
            mysql_table.primary_keys
        ));
    }

    if sqlite_table.foreign_keys != mysql_table.foreign_keys {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Foreign key mismatch in table '{}'\n  SQLite: {:?}\n  MySQL: {:?}",
            table_name,
            sqlite_table.foreign_keys,
            mysql_table.foreign_keys
        ));
    }

    if sqlite_table.unique_constraints != mysql_table.unique_constraints {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Unique constraint mismatch in table '{}'\n  SQLite: {:?}\n  MySQL: {:?}",
            table_name,
            sqlite_table.unique_constraints,
            mysql_table.unique_constraints
        ));
    }

    // InnoDB creates an index for every FK column that lacks one, so MySQL
    // may carry extra single-column indexes on FK columns.
    let fk_columns: BTreeSet<&String> = mysql_table
        .foreign_keys
        .iter()
        .map(|fk| &fk.from_column)
        .collect();

    if let Some(missing) = sqlite_table
        .indexes
        .iter()
        .find(|cols| !mysql_table.indexes.contains(*cols))
    {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Index missing in MySQL for table '{}'\n  Missing index columns: {:?}",
            table_name,
            missing
        ));
    }

    if let Some(extra) = mysql_table.indexes.iter().find(|cols| {
        !sqlite_table.indexes.contains(*cols)
            && !(cols.len() == 1 && fk_columns.contains(&cols[0]))
    }) {
        return Err(eyre!(
            "❌ Schema parity check FAILED: Unexpected index in MySQL for table '{}'\n  Extra index columns: {:?}\n  (Only single-column FK indexes are allowed as MySQL-specific)",
            table_name,
            extra
        ));
    }

    Ok(())
}

/// Fails unless every stored procedure the `MySQL` migrations promise exists.
fn check_mysql_procedures(conn: &mut MysqlConnection, db_name: &str) -> Result<()> {
    let rows: Vec<ObjectName> = diesel::sql_query(
        "SELECT routine_name AS name FROM information_schema.routines \
         WHERE routine_schema = ? AND routine_type = 'PROCEDURE'",
    )
    .bind::<Text, _>(db_name)
    .load(conn)
    .wrap_err("Failed to query MySQL procedures")?;

    let present: BTreeSet<String> = rows.into_iter().map(|row| row.name).collect();
    let missing: Vec<&str> = MYSQL_PROCEDURES
        .into_iter()
        .filter(|name| !present.contains(*name))
        .collect();

    if !missing.is_empty() {
        return Err(eyre!(
            "❌ Schema parity check FAILED: MySQL is missing stored procedures: {}",
            missing.join(", ")
        ));
    }

    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
