use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles used by the components, e.g. `"title": "bold green"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn get_or_default(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parses `"<modifiers> <fg> on <bg>"`; every part is optional.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None if lower.starts_with("on ") => ("", Some(&lower[3..])),
        None => (lower.as_str(), None),
    };

    let mut style = Style::default();
    let mut fg_words = Vec::new();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => fg_words.push(word),
        }
    }

    if !fg_words.is_empty() {
        style = style.fg(parse_color(&fg_words.join(" "))?);
    }
    if let Some(bg) = background {
        style = style.bg(parse_color(bg.trim())?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" | "underline" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed_out" => Some(Modifier::CROSSED_OUT),
        "slow_blink" | "blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

fn parse_color(raw: &str) -> Result<Color, String> {
    Color::from_str(raw).map_err(|_| format!("Unknown color `{raw}`"))
}
