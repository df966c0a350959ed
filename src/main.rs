use std::ffi::OsString;
use std::path::PathBuf;

use crsl::app::App;
use crsl::config::Config;
use crsl::deck::Deck;
use crsl::error::{AppError, AppResult};
use crsl::logging;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    if let Err(err) = logging::init_from_env() {
        return Err(AppError::unsupported(format!(
            "failed to initialize logging: {err}"
        )));
    }

    let deck_path = parse_cli_path(std::env::args_os())?;
    let config = Config::load()?;
    let deck = resolve_deck(deck_path, &config)?;

    let mut app = App::new_with_config(deck, config);
    app.run().await
}

fn parse_cli_path<I>(mut args: I) -> AppResult<Option<OsString>>
where
    I: Iterator<Item = OsString>,
{
    let _program = args.next();
    let path = args.next();

    if args.next().is_some() {
        return Err(AppError::invalid_argument(
            "usage: crsl [deck.toml] (at most one deck file)",
        ));
    }

    Ok(path)
}

fn resolve_deck(path: Option<OsString>, config: &Config) -> AppResult<Deck> {
    if let Some(path) = path {
        return Deck::load_from_path(PathBuf::from(path));
    }
    if !config.deck.cards.is_empty() {
        return Ok(Deck::from_specs(&config.deck.cards)?);
    }
    Ok(Deck::builtin())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use crsl::config::Config;
    use crsl::deck::CardSpec;

    use super::{parse_cli_path, resolve_deck};

    #[test]
    fn parse_cli_path_accepts_zero_or_one_arg() {
        let none = vec![OsString::from("crsl")];
        assert_eq!(parse_cli_path(none.into_iter()).expect("no arg is fine"), None);

        let one = vec![OsString::from("crsl"), OsString::from("deck.toml")];
        let path = parse_cli_path(one.into_iter()).expect("single arg should parse");
        assert_eq!(path, Some(OsString::from("deck.toml")));
    }

    #[test]
    fn parse_cli_path_rejects_extra_args() {
        let extra = vec![
            OsString::from("crsl"),
            OsString::from("a.toml"),
            OsString::from("b.toml"),
        ];
        assert!(parse_cli_path(extra.into_iter()).is_err());
    }

    #[test]
    fn resolve_deck_prefers_config_cards_over_builtin() {
        let mut config = Config::default();
        config.deck.cards = vec![CardSpec {
            id: None,
            title: "Solo".to_string(),
            color: "cyan".to_string(),
        }];

        let deck = resolve_deck(None, &config).expect("deck should build");
        assert_eq!(deck.len(), 1);

        let builtin = resolve_deck(None, &Config::default()).expect("builtin should build");
        assert_eq!(builtin.len(), 6);
    }
}
