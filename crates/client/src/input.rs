//! Line-oriented user input for the `shelf` binary.

use crate::state::CatalogMsg;
use crate::types::CatalogSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Filter(String),
    ToggleInStock,
    Url(String),
    Static,
    Reload,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command: {0:?}")]
    Unknown(String),
    #[error("`url` needs an address")]
    MissingUrl,
}

impl Input {
    /// Parse one line. `filter` with no argument clears the filter text.
    ///
    /// The command ends at the first whitespace character; for `filter`,
    /// everything after that one separator is kept verbatim.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (cmd, rest) = match line.find(char::is_whitespace) {
            Some(at) => {
                let sep = line[at..].chars().next().map_or(1, char::len_utf8);
                (&line[..at], &line[at + sep..])
            }
            None => (line, ""),
        };
        match cmd {
            "filter" => Ok(Input::Filter(rest.to_string())),
            "stock" => Ok(Input::ToggleInStock),
            "url" if rest.trim().is_empty() => Err(InputError::MissingUrl),
            "url" => Ok(Input::Url(rest.trim().to_string())),
            "static" => Ok(Input::Static),
            "reload" => Ok(Input::Reload),
            "quit" | "exit" => Ok(Input::Quit),
            other => Err(InputError::Unknown(other.to_string())),
        }
    }

    /// The message this input sends; `None` for `Quit`.
    pub fn into_msg(self) -> Option<CatalogMsg> {
        match self {
            Input::Filter(text) => Some(CatalogMsg::FilterTextChanged(text)),
            Input::ToggleInStock => Some(CatalogMsg::InStockOnlyToggled),
            Input::Url(url) => Some(CatalogMsg::SourceChanged(CatalogSource::url(url))),
            Input::Static => Some(CatalogMsg::SourceChanged(CatalogSource::sample())),
            Input::Reload => Some(CatalogMsg::Reload),
            Input::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Input::parse("filter ball"), Ok(Input::Filter("ball".to_string())));
        assert_eq!(Input::parse("filter"), Ok(Input::Filter(String::new())));
        assert_eq!(Input::parse("stock"), Ok(Input::ToggleInStock));
        assert_eq!(
            Input::parse("url http://localhost:3000/products.json"),
            Ok(Input::Url("http://localhost:3000/products.json".to_string()))
        );
        assert_eq!(Input::parse("static"), Ok(Input::Static));
        assert_eq!(Input::parse("reload"), Ok(Input::Reload));
        assert_eq!(Input::parse("quit"), Ok(Input::Quit));
    }

    #[test]
    fn filter_text_is_kept_verbatim() {
        assert_eq!(Input::parse("filter  5"), Ok(Input::Filter(" 5".to_string())));
        assert_eq!(Input::parse("filter 5 "), Ok(Input::Filter("5 ".to_string())));
        assert_eq!(Input::parse("filter\tball"), Ok(Input::Filter("ball".to_string())));
        assert_eq!(Input::parse("filter ball\r"), Ok(Input::Filter("ball".to_string())));
    }

    #[test]
    fn any_whitespace_separates_the_command() {
        assert_eq!(
            Input::parse("url\thttp://localhost:3000/products.json "),
            Ok(Input::Url("http://localhost:3000/products.json".to_string()))
        );
        assert_eq!(Input::parse("  stock"), Ok(Input::ToggleInStock));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Input::parse("url"), Err(InputError::MissingUrl));
        assert_eq!(
            Input::parse("dance"),
            Err(InputError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn maps_to_messages() {
        assert_eq!(
            Input::Filter("ball".to_string()).into_msg(),
            Some(CatalogMsg::FilterTextChanged("ball".to_string()))
        );
        assert_eq!(
            Input::Static.into_msg(),
            Some(CatalogMsg::SourceChanged(CatalogSource::sample()))
        );
        assert_eq!(Input::Quit.into_msg(), None);
    }
}
