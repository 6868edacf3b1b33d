//! Farewell lines shown when a language is lost

/// Flavor text for losing `language`
///
/// Catalog languages each have their own line; any other name gets the
/// generic "Farewell" line.
///
/// # Examples
/// ```
/// use assembly_endgame::catalog::farewell_text;
///
/// assert_eq!(farewell_text("CSS"), "Adios, CSS");
/// assert_eq!(farewell_text("COBOL"), "Farewell, COBOL");
/// ```
#[must_use]
pub fn farewell_text(language: &str) -> String {
    match language {
        "HTML" => "Farewell, HTML".to_string(),
        "CSS" => "Adios, CSS".to_string(),
        "JavaScript" => "R.I.P., JavaScript".to_string(),
        "React" => "We'll miss you, React".to_string(),
        "TypeScript" => "Oh no, not TypeScript!".to_string(),
        "Node.js" => "Node.js bites the dust".to_string(),
        "Python" => "Gone but not forgotten, Python".to_string(),
        "Ruby" => "Ruby has left the building".to_string(),
        "Assembly" => "The end of Assembly as we know it".to_string(),
        other => format!("Farewell, {other}"),
    }
}
