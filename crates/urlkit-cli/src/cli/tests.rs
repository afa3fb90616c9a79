use super::*;
use urlkit_core::ParsedUrl;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_parse_plain() {
    match parse(&["urlkit", "parse", "/a/b.html?x=1"]) {
        CliCommand::Parse {
            url,
            defaults,
            json,
        } => {
            assert_eq!(url, "/a/b.html?x=1");
            assert!(defaults.default_scheme.is_none());
            assert!(!defaults.no_fragments);
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_with_defaults() {
    match parse(&[
        "urlkit",
        "parse",
        "1.jpg",
        "--default-scheme",
        "http",
        "--default-netloc",
        "ex.org",
        "--default-filepath",
        "/mdb",
        "--json",
    ]) {
        CliCommand::Parse {
            url,
            defaults,
            json,
        } => {
            assert_eq!(url, "1.jpg");
            assert!(json);
            let opts = defaults.apply(&ParseOptions::default());
            let parsed = ParsedUrl::with_options(&url, &opts).unwrap();
            assert_eq!(parsed.url(), "http://ex.org/mdb/1.jpg");
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn default_args_layer_over_config() {
    let config = ParseOptions::default()
        .default_scheme("https")
        .default_netloc("ex.org");
    let args = DefaultArgs {
        default_netloc: Some("localhost:8000".into()),
        no_fragments: true,
        ..Default::default()
    };
    let opts = args.apply(&config);
    assert_eq!(opts.default_scheme.as_deref(), Some("https"));
    assert_eq!(opts.default_netloc.as_deref(), Some("localhost:8000"));
    assert!(!opts.allow_fragments);
    assert!(!opts.symlinks);
}

#[test]
fn cli_parse_get() {
    match parse(&["urlkit", "get", "//ex.org:8000/", "port"]) {
        CliCommand::Get { url, attr, .. } => {
            assert_eq!(url, "//ex.org:8000/");
            assert_eq!(attr, "port");
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_param_set() {
    match parse(&["urlkit", "param", "set", "/x?a=1", "b", "2"]) {
        CliCommand::Param {
            action: ParamAction::Set { url, key, value },
        } => {
            assert_eq!(url, "/x?a=1");
            assert_eq!(key, "b");
            assert_eq!(value, "2");
        }
        _ => panic!("expected Param Set"),
    }
}

#[test]
fn cli_parse_param_del() {
    match parse(&["urlkit", "param", "del", "/x?a=1", "a"]) {
        CliCommand::Param {
            action: ParamAction::Del { key, .. },
        } => assert_eq!(key, "a"),
        _ => panic!("expected Param Del"),
    }
}

#[test]
fn cli_parse_db_without_packed() {
    match parse(&["urlkit", "db"]) {
        CliCommand::Db {
            packed,
            json,
            show_password,
        } => {
            assert!(packed.is_none());
            assert!(!json);
            assert!(!show_password);
        }
        _ => panic!("expected Db"),
    }
}

#[test]
fn cli_parse_db_show_password_requires_json() {
    assert!(Cli::try_parse_from(["urlkit", "db", ":pw", "--show-password"]).is_err());
    match parse(&["urlkit", "db", ":pw", "--json", "--show-password"]) {
        CliCommand::Db {
            packed,
            show_password,
            ..
        } => {
            assert_eq!(packed.as_deref(), Some(":pw"));
            assert!(show_password);
        }
        _ => panic!("expected Db"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["urlkit", "db", "--config", "/tmp/urlkit.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/urlkit.toml")));
}

#[test]
fn components_list_every_attribute() {
    let parsed = ParsedUrl::parse("https://www.ex.org:8080/a/b.txt?q=1#f").unwrap();
    let components = commands::components(&parsed).unwrap();
    assert_eq!(components.len(), urlkit_core::url_model::ATTRIBUTES.len());
    assert!(components.contains(&("root_domain", Some("ex.org".to_string()))));
}
