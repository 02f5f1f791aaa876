//! snake_case identifiers to PascalCase entity names and camelCase field names

/// Entity name for an unqualified table name: PascalCase with the last word
/// singularized.
///
/// `user_profiles` -> `UserProfile`, `products` -> `Product`,
/// `category` -> `Category`. Callers strip any schema qualifier first
/// (see [`TableName::unqualified`](sf_core::TableName::unqualified)).
pub fn entity_name(table: &str) -> String {
    let mut words: Vec<String> = split_words(table)
        .into_iter()
        .map(str::to_string)
        .collect();
    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }

    let name: String = words.iter().map(|w| capitalize(w)).collect();
    if name.is_empty() {
        table.to_string()
    } else {
        name
    }
}

/// Field name for a column: lower camelCase (`first_name` -> `firstName`).
pub fn field_name(column: &str) -> String {
    let words = split_words(column);
    let mut name = String::with_capacity(column.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            name.push_str(&decapitalize(word));
        } else {
            name.push_str(&capitalize(word));
        }
    }

    if name.is_empty() {
        column.to_string()
    } else {
        name
    }
}

/// Strip one trailing plain `s` (`orders` -> `order`).
///
/// Words ending in `ss` (`address`) and a lone `s` are left unchanged.
/// Irregular plurals are not handled: `categories` -> `categorie`.
pub fn singularize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if word.len() > 1 && lower.ends_with('s') && !lower.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

fn split_words(ident: &str) -> Vec<&str> {
    ident
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Uppercase the first letter; an all-uppercase word is lowercased first so
/// `USERS` reads as `Users`, while `UserProfile` keeps its inner capitals.
fn capitalize(word: &str) -> String {
    let word = fold_shouting(word);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(word: &str) -> String {
    let word = fold_shouting(word);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fold_shouting(word: &str) -> String {
    let has_lower = word.chars().any(char::is_lowercase);
    if has_lower {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
