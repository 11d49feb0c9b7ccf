pub(crate) const EXPORT_FILENAME: &str = "cartela-bingo.png";
pub(crate) const NOTICE_DURATION_MS: u32 = 4_000;
pub(crate) const MOUNT_ID: &str = "app";

const DEFAULT_WORDS_URL: &str = "words.json";
const DEFAULT_FREE_LABEL: &str = "Geek|Girls";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppConfig {
    pub(crate) words_url: String,
    pub(crate) free_label: Vec<String>,
}

pub(crate) fn load_app_config() -> AppConfig {
    let words_url = env_value(
        option_env!("CARTELA_WORDS_URL").or(option_env!("TRUNK_PUBLIC_CARTELA_WORDS_URL")),
    )
    .unwrap_or(DEFAULT_WORDS_URL);
    let free_label = env_value(option_env!("CARTELA_FREE_LABEL")).unwrap_or(DEFAULT_FREE_LABEL);
    AppConfig {
        words_url: words_url.to_string(),
        free_label: parse_free_label(free_label),
    }
}

fn env_value(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn parse_free_label(raw: &str) -> Vec<String> {
    let lines: Vec<String> = raw
        .split('|')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if lines.is_empty() {
        return parse_free_label(DEFAULT_FREE_LABEL);
    }
    lines
}
