/// Compute the output path for one language.
///
/// When `lang_place` is given and occurs in `template`, every occurrence is
/// replaced by the language. Otherwise the language goes right before the
/// last extension, or at the end when there is none.
///
/// # Examples
///
/// ```
/// use i18n_compile::core::language_destination;
///
/// assert_eq!(
///     language_destination("i18n-[lang]-file.json", "en", Some("[lang]")),
///     "i18n-en-file.json"
/// );
/// assert_eq!(
///     language_destination("translations_.json", "pt", None),
///     "translations_pt.json"
/// );
/// assert_eq!(language_destination("out/strings_", "es", None), "out/strings_es");
/// ```
pub fn language_destination(template: &str, language: &str, lang_place: Option<&str>) -> String {
    if let Some(token) = lang_place.filter(|token| !token.is_empty())
        && template.contains(token)
    {
        return template.replace(token, language);
    }

    match extension_start(template) {
        Some(dot) => format!("{}{}{}", &template[..dot], language, &template[dot..]),
        None => format!("{}{}", template, language),
    }
}

/// Byte offset of the last extension's dot.
///
/// The extension must be non-empty and contain no dot or path separator.
fn extension_start(template: &str) -> Option<usize> {
    let dot = template.rfind('.')?;
    let extension = &template[dot + 1..];
    if extension.is_empty() || extension.contains(['/', '\\']) {
        return None;
    }
    Some(dot)
}
