/// Filters that can be sent as an `application/x-www-form-urlencoded` query.
///
/// Pairs are emitted in a fixed order and list values repeat their key once
/// per element, so the same filter always encodes to the same string.
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&str, String)>;

    fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.query_pairs());
        serializer.finish()
    }
}

impl<K: AsRef<str>, V: ToString> QueryParams for [(K, V)] {
    fn query_pairs(&self) -> Vec<(&str, String)> {
        self.iter()
            .map(|(k, v)| (k.as_ref(), v.to_string()))
            .collect()
    }
}

impl<K: AsRef<str>, V: ToString> QueryParams for Vec<(K, V)> {
    fn query_pairs(&self) -> Vec<(&str, String)> {
        self.as_slice().query_pairs()
    }
}

/// Appends `params` to `path`, leaving the path bare when there is nothing to
/// encode.
pub fn path_with_query<P: QueryParams + ?Sized>(path: &str, params: Option<&P>) -> String {
    match params.map(|p| p.to_query_string()) {
        Some(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path.to_owned(),
    }
}

pub(crate) fn push_opt<'a, T: ToString>(
    pairs: &mut Vec<(&'a str, String)>,
    key: &'a str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}
