//! Identifier normalization for the C# naming convention.
//!
//! Every transform here is pure and deterministic. Token boundaries are the
//! fixed delimiter set `_`, `-`, space, and `.`; characters after the first
//! of each token are copied verbatim, so an all-caps token stays all-caps.

const DELIMITERS: [char; 4] = ['_', '-', ' ', '.'];

/// C# reserved words that cannot appear as bare identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class",
    "const", "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event",
    "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if",
    "implicit", "in", "int", "interface", "internal", "is", "lock", "long", "namespace", "new",
    "null", "object", "operator", "out", "override", "params", "private", "protected", "public",
    "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc", "static",
    "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

/// PascalCase conversion: each delimiter is dropped and upper-cases the next
/// character; all other characters are copied unchanged.
pub fn to_token_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for ch in input.chars() {
        if DELIMITERS.contains(&ch) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// camelCase conversion: token-case, then lower only the first character.
pub fn to_lower_first(input: &str) -> String {
    let pascal = to_token_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn type_like(input: &str, fallback: &str) -> String {
    let name = to_token_case(&sanitize(input));
    if name.is_empty() {
        return fallback.to_string();
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        return format!("_{name}");
    }
    name
}

/// Type name: sanitized PascalCase, never empty, never digit-leading.
pub fn to_type_name(input: &str) -> String {
    type_like(input, "Unknown")
}

/// Property name: same rules as type names.
pub fn to_member_name(input: &str) -> String {
    type_like(input, "Unknown")
}

/// Enum member name: same rules as type names.
pub fn to_enum_member_name(input: &str) -> String {
    type_like(input, "Unknown")
}

/// Parameter name: sanitized camelCase, with reserved words escaped by the
/// verbatim-identifier prefix rather than renamed.
pub fn to_param_name(input: &str) -> String {
    let mut name = to_lower_first(&sanitize(input));
    if name.is_empty() {
        return "value".to_string();
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if KEYWORDS.contains(&name.as_str()) {
        name.insert(0, '@');
    }
    name
}

/// Grouping tag → API client class name with a fixed `Api` suffix.
pub fn to_api_group_name(tag: &str) -> String {
    let name = to_token_case(tag);
    if name.ends_with("Api") {
        name
    } else {
        format!("{name}Api")
    }
}

/// Strip characters that are not legal in file names, keeping word
/// characters, `-`, and `.`.
pub fn to_file_safe(input: &str) -> String {
    input
        .chars()
        .filter(|ch| ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.'))
        .collect()
}

/// Solution name derived from a document title.
pub fn to_solution_name(title: &str) -> String {
    to_file_safe(&to_token_case(title))
}

/// Flatten text onto one line and escape it for XML doc comments.
pub fn to_doc_safe(input: &str) -> String {
    let mut flat = String::with_capacity(input.len());
    let mut prev_space = true; // leading spaces are dropped
    for ch in input.chars() {
        let ch = if ch == '\r' || ch == '\n' { ' ' } else { ch };
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        flat.push(ch);
    }
    let flat = flat.trim_end();

    flat.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
