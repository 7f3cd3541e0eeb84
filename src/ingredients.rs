//! Parsing of free-text ingredient lines into count, unit and name.

use crate::model::Ingredient;

/// Long unit spellings and the short form they normalise to
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// Units recognised after normalisation
const UNITS: &[&str] = &["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 1.0 / 2.0),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 1.0 / 4.0),
    ('¾', 3.0 / 4.0),
    ('⅕', 1.0 / 5.0),
    ('⅖', 2.0 / 5.0),
    ('⅗', 3.0 / 5.0),
    ('⅘', 4.0 / 5.0),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 1.0 / 8.0),
    ('⅜', 3.0 / 8.0),
    ('⅝', 5.0 / 8.0),
    ('⅞', 7.0 / 8.0),
];

const MAX_DENOMINATOR: u32 = 16;

/// Parse one raw ingredient line.
///
/// ```
/// use recipe_browser::ingredients::parse_ingredient;
///
/// let ing = parse_ingredient("4 1/2 Cups (1 lb) all-purpose flour");
/// assert_eq!(ing.count, 4.5);
/// assert_eq!(ing.unit, "cup");
/// assert_eq!(ing.ingredient, "all-purpose flour");
/// ```
pub fn parse_ingredient(line: &str) -> Ingredient {
    let lowered = strip_parenthesised(&line.to_lowercase());
    let tokens: Vec<String> = lowered.split_whitespace().map(normalise_unit).collect();

    if let Some(unit_index) = tokens.iter().position(|t| UNITS.contains(&t.as_str())) {
        let count_terms = &tokens[..unit_index];
        let count = if count_terms.is_empty() {
            Some(1.0)
        } else {
            count_terms
                .iter()
                .map(|t| parse_count_term(t))
                .sum::<Option<f64>>()
        };

        if let Some(count) = count {
            return Ingredient {
                count,
                unit: tokens[unit_index].clone(),
                ingredient: tokens[unit_index + 1..].join(" "),
            };
        }
    } else if let Some(count) = tokens.first().and_then(|t| leading_count(t)) {
        return Ingredient {
            count,
            unit: String::new(),
            ingredient: tokens[1..].join(" "),
        };
    }

    Ingredient {
        count: 1.0,
        unit: String::new(),
        ingredient: tokens.join(" "),
    }
}

fn strip_parenthesised(text: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

fn normalise_unit(token: &str) -> String {
    let bare = token.trim_end_matches([',', '.']);
    UNIT_ALIASES
        .iter()
        .find(|(long, _)| *long == bare)
        .map(|(_, short)| short.to_string())
        .unwrap_or_else(|| {
            if UNITS.contains(&bare) {
                bare.to_string()
            } else {
                token.to_string()
            }
        })
}

/// Parse a single count token: `2`, `0.5`, `1/2`, `1-1/2`, `½` or `1½`.
///
/// Only finite counts are returned.
pub fn parse_count_term(term: &str) -> Option<f64> {
    parse_term(term).filter(|n| n.is_finite())
}

fn parse_term(term: &str) -> Option<f64> {
    if term.is_empty() {
        return None;
    }

    if let Some((whole, rest)) = term.split_once('-') {
        // "1-1/2" is a mixed number; "2-3" is a range and counts as its low end
        return if rest.contains('/') {
            Some(parse_term(whole)? + parse_term(rest)?)
        } else {
            parse_term(whole)
        };
    }

    if let Some((numerator, denominator)) = term.split_once('/') {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        return (denominator != 0.0).then(|| numerator / denominator);
    }

    if let Some(last) = term.chars().last() {
        if let Some((_, fraction)) = VULGAR_FRACTIONS.iter().find(|(c, _)| *c == last) {
            let whole = &term[..term.len() - last.len_utf8()];
            let whole = if whole.is_empty() { 0.0 } else { whole.parse().ok()? };
            return Some(whole + fraction);
        }
    }

    term.parse::<f64>().ok()
}

/// Count at the start of a line without a unit; falls back to the leading digits.
fn leading_count(token: &str) -> Option<f64> {
    parse_count_term(token).or_else(|| {
        let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse::<f64>().ok().filter(|n| n.is_finite())
    })
}

/// Estimated cooking time in minutes: 15 minutes for every 3 ingredients.
pub fn estimate_time(ingredient_count: usize) -> u32 {
    (ingredient_count.div_ceil(3) * 15) as u32
}

/// Render a count as a whole number or mixed fraction, `?` when unknown.
pub fn format_count(count: f64) -> String {
    if !count.is_finite() || count == 0.0 {
        return "?".to_string();
    }

    let rounded = (count * 10_000.0).round() / 10_000.0;
    let whole = rounded.trunc();
    let fraction = rounded - whole;

    if fraction.abs() < 1e-9 {
        return format!("{}", whole as i64);
    }

    match approximate_fraction(fraction) {
        Some((n, d)) if whole == 0.0 => format!("{}/{}", n, d),
        Some((n, d)) => format!("{} {}/{}", whole as i64, n, d),
        None => {
            let decimal = format!("{:.2}", rounded);
            decimal.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn approximate_fraction(fraction: f64) -> Option<(u32, u32)> {
    (2..=MAX_DENOMINATOR).find_map(|d| {
        let n = (fraction * d as f64).round();
        let close = (fraction - n / d as f64).abs() < 1e-3;
        (close && n >= 1.0 && n < d as f64).then_some((n as u32, d))
    })
}
