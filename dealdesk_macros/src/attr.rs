use syn::{Attribute, Ident, LitStr};

/// Value of `#[<outer>(<key> = "...")]` among `attrs`, the last one winning.
/// Any other key under `outer` is an error.
pub(crate) fn string_arg(
    attrs: &[Attribute],
    outer: &str,
    key: &str,
) -> syn::Result<Option<String>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(outer)) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident(key) {
                return Err(meta.error(format!("expected `{key} = \"...\"`")));
            }
            let value: LitStr = meta.value()?.parse()?;
            found = Some(value.value());
            Ok(())
        })?;
    }
    Ok(found)
}

/// `AccountManager` becomes `account_managers`.
pub(crate) fn default_collection(ident: &Ident) -> String {
    let name = ident.to_string();
    let mut collection = String::with_capacity(name.len() + 4);
    for (i, ch) in name.char_indices() {
        if ch.is_uppercase() && i > 0 {
            collection.push('_');
        }
        collection.extend(ch.to_lowercase());
    }
    collection.push('s');
    collection
}
